//! Demo fixtures loaded into an empty store.

use chrono::{Duration, NaiveDate, NaiveTime};
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::params;
use crate::records::{self, SqlParam};
use crate::StoreResult;

/// Days of flights generated from the base date on.
pub const FLIGHT_DAYS: i64 = 30;

const TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Loads the fixtures unless the store already holds airlines. Returns
/// whether anything was written.
pub async fn seed_if_empty(pool: &SqlitePool, base_date: NaiveDate) -> StoreResult<bool> {
    let rows = records::query(pool, "SELECT COUNT(*) AS n FROM airlines", &[]).await?;
    let existing = rows
        .first()
        .and_then(|r| r.get("n"))
        .and_then(|v| v.as_i64())
        .unwrap_or(0);
    if existing > 0 {
        return Ok(false);
    }

    info!("Seeding empty store, flights from {}", base_date);
    let mut tx = pool.begin().await?;
    insert_rows(&mut tx, AIRLINES_SQL, &airlines()).await?;
    insert_rows(&mut tx, AIRPORTS_SQL, &airports()).await?;
    insert_rows(&mut tx, FLIGHTS_SQL, &flights(base_date)).await?;
    insert_rows(&mut tx, HOTELS_SQL, &hotels()).await?;
    insert_rows(&mut tx, ROOM_TYPES_SQL, &room_types()).await?;
    insert_rows(&mut tx, COMPANIES_SQL, &companies()).await?;
    insert_rows(&mut tx, LOCATIONS_SQL, &locations()).await?;
    insert_rows(&mut tx, CATEGORIES_SQL, &categories()).await?;
    insert_rows(&mut tx, VEHICLES_SQL, &vehicles()).await?;
    insert_rows(&mut tx, DESTINATIONS_SQL, &destinations()).await?;
    insert_rows(&mut tx, ATTRACTIONS_SQL, &attractions()).await?;
    insert_rows(&mut tx, ADVISORIES_SQL, &advisories()).await?;
    insert_rows(&mut tx, USERS_SQL, &users()).await?;
    tx.commit().await?;
    info!("Seed data inserted");

    Ok(true)
}

async fn insert_rows(conn: &mut SqliteConnection, sql: &str, rows: &[Vec<SqlParam>]) -> StoreResult<()> {
    for row in rows {
        records::insert(&mut *conn, sql, row).await?;
    }
    Ok(())
}

const AIRLINES_SQL: &str = "INSERT INTO airlines (airline_code, airline_name, country) VALUES (?, ?, ?)";

fn airlines() -> Vec<Vec<SqlParam>> {
    vec![
        params!["AA", "American Airlines", "United States"],
        params!["DL", "Delta Air Lines", "United States"],
        params!["UA", "United Airlines", "United States"],
        params!["BA", "British Airways", "United Kingdom"],
        params!["LH", "Lufthansa", "Germany"],
        params!["AF", "Air France", "France"],
        params!["KL", "KLM Royal Dutch Airlines", "Netherlands"],
        params!["EK", "Emirates", "United Arab Emirates"],
        params!["QR", "Qatar Airways", "Qatar"],
        params!["SQ", "Singapore Airlines", "Singapore"],
    ]
}

const AIRPORTS_SQL: &str = "INSERT INTO airports (airport_code, airport_name, city, country, timezone, latitude, longitude) VALUES (?, ?, ?, ?, ?, ?, ?)";

fn airports() -> Vec<Vec<SqlParam>> {
    vec![
        params!["JFK", "John F. Kennedy International Airport", "New York", "United States", "America/New_York", 40.6413, -73.7781],
        params!["LAX", "Los Angeles International Airport", "Los Angeles", "United States", "America/Los_Angeles", 33.9425, -118.4081],
        params!["LHR", "London Heathrow Airport", "London", "United Kingdom", "Europe/London", 51.4700, -0.4543],
        params!["CDG", "Charles de Gaulle Airport", "Paris", "France", "Europe/Paris", 49.0097, 2.5479],
        params!["FRA", "Frankfurt Airport", "Frankfurt", "Germany", "Europe/Berlin", 50.0379, 8.5622],
        params!["AMS", "Amsterdam Airport Schiphol", "Amsterdam", "Netherlands", "Europe/Amsterdam", 52.3105, 4.7683],
        params!["DXB", "Dubai International Airport", "Dubai", "United Arab Emirates", "Asia/Dubai", 25.2532, 55.3657],
        params!["DOH", "Hamad International Airport", "Doha", "Qatar", "Asia/Qatar", 25.2731, 51.6080],
        params!["SIN", "Singapore Changi Airport", "Singapore", "Singapore", "Asia/Singapore", 1.3644, 103.9915],
        params!["NRT", "Narita International Airport", "Tokyo", "Japan", "Asia/Tokyo", 35.7720, 140.3929],
    ]
}

const FLIGHTS_SQL: &str = "INSERT INTO flights (flight_number, airline_id, origin_airport_id, destination_airport_id, departure_time, arrival_time, aircraft_type, total_seats, available_seats, base_price) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

struct Schedule {
    prefix: &'static str,
    number_base: i64,
    airline_id: i64,
    origin: i64,
    destination: i64,
    departs: (u32, u32),
    arrives: (u32, u32),
    // Arrival day relative to departure.
    overnight: bool,
    aircraft: &'static str,
    total_seats: i64,
    available_seats: i64,
    price: f64,
}

const SCHEDULES: &[Schedule] = &[
    // JFK -> LAX
    Schedule { prefix: "AA", number_base: 100, airline_id: 1, origin: 1, destination: 2, departs: (8, 0), arrives: (11, 30), overnight: false, aircraft: "Boeing 737", total_seats: 180, available_seats: 150, price: 299.99 },
    Schedule { prefix: "DL", number_base: 200, airline_id: 2, origin: 1, destination: 2, departs: (14, 0), arrives: (17, 30), overnight: false, aircraft: "Airbus A320", total_seats: 160, available_seats: 120, price: 349.99 },
    Schedule { prefix: "UA", number_base: 300, airline_id: 3, origin: 1, destination: 2, departs: (20, 0), arrives: (23, 30), overnight: false, aircraft: "Boeing 757", total_seats: 200, available_seats: 180, price: 279.99 },
    // JFK -> LHR
    Schedule { prefix: "BA", number_base: 400, airline_id: 4, origin: 1, destination: 3, departs: (22, 0), arrives: (10, 0), overnight: true, aircraft: "Boeing 777", total_seats: 300, available_seats: 250, price: 599.99 },
    Schedule { prefix: "AA", number_base: 500, airline_id: 1, origin: 1, destination: 3, departs: (18, 0), arrives: (6, 0), overnight: true, aircraft: "Boeing 787", total_seats: 280, available_seats: 220, price: 649.99 },
    // LAX -> JFK
    Schedule { prefix: "AA", number_base: 600, airline_id: 1, origin: 2, destination: 1, departs: (9, 0), arrives: (17, 30), overnight: false, aircraft: "Boeing 737", total_seats: 180, available_seats: 160, price: 319.99 },
    Schedule { prefix: "DL", number_base: 700, airline_id: 2, origin: 2, destination: 1, departs: (22, 30), arrives: (6, 45), overnight: true, aircraft: "Airbus A321", total_seats: 190, available_seats: 150, price: 289.99 },
];

fn flights(base_date: NaiveDate) -> Vec<Vec<SqlParam>> {
    let mut rows = Vec::new();
    for day in 0..FLIGHT_DAYS {
        let date = base_date + Duration::days(day);
        for s in SCHEDULES {
            let departs = date.and_time(at(s.departs));
            let arrival_date = if s.overnight { date + Duration::days(1) } else { date };
            let arrives = arrival_date.and_time(at(s.arrives));
            rows.push(params![
                format!("{}{}", s.prefix, s.number_base + day),
                s.airline_id,
                s.origin,
                s.destination,
                departs.format(TIMESTAMP).to_string(),
                arrives.format(TIMESTAMP).to_string(),
                s.aircraft,
                s.total_seats,
                s.available_seats,
                s.price,
            ]);
        }
    }
    rows
}

fn at((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

const HOTELS_SQL: &str = "INSERT INTO hotels (hotel_name, hotel_chain, address, city, country, postal_code, phone, email, website, star_rating, guest_rating, total_rooms, amenities, latitude, longitude) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn hotels() -> Vec<Vec<SqlParam>> {
    vec![
        params!["The Plaza Hotel", "Luxury Collection", "768 5th Ave", "New York", "United States", "10019", "+1-212-759-3000", "reservations@plaza.com", "www.theplaza.com", 5_i64, 8.5, 282_i64, r#"["WiFi", "Spa", "Fitness Center", "Restaurant", "Room Service", "Concierge"]"#, 40.7648, -73.9754],
        params!["The Beverly Hills Hotel", "Dorchester Collection", "9641 Sunset Blvd", "Los Angeles", "United States", "90210", "+1-310-276-2251", "info@beverlyhillshotel.com", "www.beverlyhillshotel.com", 5_i64, 9.0, 210_i64, r#"["WiFi", "Pool", "Spa", "Fitness Center", "Restaurant", "Valet Parking"]"#, 34.0901, -118.4065],
        params!["The Savoy", "Fairmont Hotels", "Strand", "London", "United Kingdom", "WC2R 0EU", "+44-20-7836-4343", "info@savoy.com", "www.savoy.com", 5_i64, 9.2, 267_i64, r#"["WiFi", "Spa", "Fitness Center", "Restaurant", "Bar", "Concierge"]"#, 51.5104, -0.1201],
        params!["Hotel Plaza Athénée", "Dorchester Collection", "25 Avenue Montaigne", "Paris", "France", "75008", "+33-1-53-67-66-65", "info@plaza-athenee-paris.com", "www.plaza-athenee-paris.com", 5_i64, 8.8, 154_i64, r#"["WiFi", "Spa", "Fitness Center", "Restaurant", "Bar", "Room Service"]"#, 48.8656, 2.3047],
        params!["Hotel Adlon Kempinski", "Kempinski Hotels", "Unter den Linden 77", "Berlin", "Germany", "10117", "+49-30-2261-0", "hotel.adlon@kempinski.com", "www.kempinski.com", 5_i64, 8.7, 382_i64, r#"["WiFi", "Spa", "Pool", "Fitness Center", "Restaurant", "Bar"]"#, 52.5163, 13.3777],
        params!["Budget Inn Downtown", "Independent", "123 Main St", "New York", "United States", "10001", "+1-212-555-0123", "info@budgetinn.com", "www.budgetinn.com", 2_i64, 6.5, 120_i64, r#"["WiFi", "24h Front Desk"]"#, 40.7505, -73.9934],
        params!["City Center Hotel", "Independent", "456 Hollywood Blvd", "Los Angeles", "United States", "90028", "+1-323-555-0456", "reservations@citycenter.com", "www.citycenterhotel.com", 3_i64, 7.2, 85_i64, r#"["WiFi", "Parking", "Restaurant"]"#, 34.1016, -118.3295],
        params!["London Bridge Hotel", "Independent", "8-18 London Bridge St", "London", "United Kingdom", "SE1 9SG", "+44-20-7855-2200", "info@londonbridgehotel.com", "www.londonbridgehotel.com", 4_i64, 8.1, 138_i64, r#"["WiFi", "Restaurant", "Bar", "Fitness Center"]"#, 51.5045, -0.0865],
    ]
}

const ROOM_TYPES_SQL: &str = "INSERT INTO room_types (hotel_id, room_type_name, room_description, max_occupancy, bed_type, room_size_sqm, amenities, base_price_per_night, currency, total_rooms) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn room_types() -> Vec<Vec<SqlParam>> {
    vec![
        params![1_i64, "Standard King Room", "Elegant room with king bed and city view", 2_i64, "King", 35.0, r#"["WiFi", "TV", "Mini Bar", "Safe"]"#, 450.00, "USD", 50_i64],
        params![1_i64, "Plaza Suite", "Luxurious suite with separate living area", 4_i64, "King + Sofa Bed", 65.0, r#"["WiFi", "TV", "Mini Bar", "Safe", "Living Area", "Butler Service"]"#, 850.00, "USD", 25_i64],
        params![2_i64, "Deluxe Room", "Spacious room with garden view", 2_i64, "King", 40.0, r#"["WiFi", "TV", "Mini Bar", "Balcony"]"#, 380.00, "USD", 80_i64],
        params![2_i64, "Bungalow Suite", "Private bungalow with pool access", 2_i64, "King", 55.0, r#"["WiFi", "TV", "Mini Bar", "Private Pool", "Patio"]"#, 750.00, "USD", 30_i64],
        params![3_i64, "Superior Room", "Classic room with Thames view", 2_i64, "Queen", 30.0, r#"["WiFi", "TV", "Tea/Coffee", "River View"]"#, 320.00, "GBP", 120_i64],
        params![3_i64, "Royal Suite", "Opulent suite with panoramic views", 4_i64, "King + Sofa Bed", 80.0, r#"["WiFi", "TV", "Mini Bar", "Butler Service", "Panoramic View"]"#, 1200.00, "GBP", 15_i64],
        params![6_i64, "Economy Room", "Basic comfortable room", 2_i64, "Double", 20.0, r#"["WiFi", "TV"]"#, 89.00, "USD", 80_i64],
        params![7_i64, "Standard Room", "Comfortable room in city center", 2_i64, "Queen", 25.0, r#"["WiFi", "TV", "AC"]"#, 125.00, "USD", 60_i64],
        params![8_i64, "Business Room", "Modern room with work desk", 2_i64, "King", 28.0, r#"["WiFi", "TV", "Work Desk", "Coffee Machine"]"#, 180.00, "GBP", 90_i64],
    ]
}

const COMPANIES_SQL: &str = "INSERT INTO car_rental_companies (company_name, company_code, website, phone, email) VALUES (?, ?, ?, ?, ?)";

fn companies() -> Vec<Vec<SqlParam>> {
    vec![
        params!["Hertz", "HTZ", "www.hertz.com", "+1-800-654-3131", "reservations@hertz.com"],
        params!["Avis", "AVS", "www.avis.com", "+1-800-331-1212", "reservations@avis.com"],
        params!["Enterprise", "ENT", "www.enterprise.com", "+1-800-261-7331", "reservations@enterprise.com"],
        params!["Budget", "BDG", "www.budget.com", "+1-800-527-0700", "reservations@budget.com"],
        params!["Alamo", "ALM", "www.alamo.com", "+1-844-357-5138", "reservations@alamo.com"],
    ]
}

const LOCATIONS_SQL: &str = "INSERT INTO car_rental_locations (company_id, location_name, location_type, address, city, country, airport_code, phone, operating_hours, latitude, longitude) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn locations() -> Vec<Vec<SqlParam>> {
    vec![
        params![1_i64, "JFK Airport", "AIRPORT", "JFK International Airport Terminal 1", "New York", "United States", Some("JFK"), "+1-718-244-9500", "24/7", 40.6413, -73.7781],
        params![1_i64, "Manhattan Downtown", "CITY_CENTER", "350 W 31st St", "New York", "United States", None::<&str>, "+1-212-563-3500", "7:00-19:00", 40.7505, -73.9934],
        params![2_i64, "LAX Airport", "AIRPORT", "Los Angeles International Airport", "Los Angeles", "United States", Some("LAX"), "+1-310-568-5000", "24/7", 33.9425, -118.4081],
        params![2_i64, "Hollywood", "CITY_CENTER", "6801 Hollywood Blvd", "Los Angeles", "United States", None::<&str>, "+1-323-467-8900", "8:00-18:00", 34.1016, -118.3295],
        params![3_i64, "LHR Airport", "AIRPORT", "Heathrow Airport Terminal 2", "London", "United Kingdom", Some("LHR"), "+44-20-8897-2100", "24/7", 51.4700, -0.4543],
        params![3_i64, "London City", "CITY_CENTER", "207 Vauxhall Bridge Rd", "London", "United Kingdom", None::<&str>, "+44-20-7834-6777", "8:00-18:00", 51.4893, -0.1334],
    ]
}

const CATEGORIES_SQL: &str = "INSERT INTO vehicle_categories (category_name, category_description, typical_models, passenger_capacity, luggage_capacity, transmission_type, fuel_type) VALUES (?, ?, ?, ?, ?, ?, ?)";

fn categories() -> Vec<Vec<SqlParam>> {
    vec![
        params!["Economy", "Small, fuel-efficient cars perfect for city driving", "Nissan Versa, Chevrolet Spark, Mitsubishi Mirage", 4_i64, 2_i64, "Both", "Gasoline"],
        params!["Compact", "Comfortable cars with good fuel economy", "Nissan Sentra, Ford Focus, Volkswagen Jetta", 5_i64, 3_i64, "Both", "Gasoline"],
        params!["Mid-size", "Spacious cars ideal for longer trips", "Toyota Camry, Nissan Altima, Ford Fusion", 5_i64, 4_i64, "Automatic", "Gasoline"],
        params!["Full-size", "Large, comfortable cars with ample space", "Chevrolet Impala, Ford Taurus, Nissan Maxima", 5_i64, 4_i64, "Automatic", "Gasoline"],
        params!["SUV", "Sport utility vehicles for versatile driving", "Ford Escape, Jeep Cherokee, Toyota RAV4", 7_i64, 6_i64, "Automatic", "Gasoline"],
        params!["Luxury", "Premium vehicles with high-end features", "BMW 3 Series, Mercedes C-Class, Audi A4", 5_i64, 3_i64, "Automatic", "Gasoline"],
    ]
}

const VEHICLES_SQL: &str = "INSERT INTO available_vehicles (company_id, location_id, category_id, make, model, year, license_plate, color, mileage, fuel_type, transmission, features, daily_rate, currency) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn vehicles() -> Vec<Vec<SqlParam>> {
    vec![
        params![1_i64, 1_i64, 1_i64, "Nissan", "Versa", 2023_i64, "NY123ABC", "White", 15000_i64, "Gasoline", "Automatic", r#"["AC", "Radio", "USB Port"]"#, 35.99, "USD"],
        params![1_i64, 1_i64, 2_i64, "Ford", "Focus", 2023_i64, "NY456DEF", "Blue", 12000_i64, "Gasoline", "Automatic", r#"["AC", "Radio", "Bluetooth", "USB Port"]"#, 42.99, "USD"],
        params![1_i64, 1_i64, 3_i64, "Toyota", "Camry", 2023_i64, "NY789GHI", "Silver", 8000_i64, "Gasoline", "Automatic", r#"["AC", "Radio", "Bluetooth", "USB Port", "Backup Camera"]"#, 55.99, "USD"],
        params![1_i64, 1_i64, 5_i64, "Ford", "Escape", 2023_i64, "NY012JKL", "Black", 10000_i64, "Gasoline", "Automatic", r#"["AC", "Radio", "Bluetooth", "USB Port", "AWD", "Backup Camera"]"#, 75.99, "USD"],
        params![2_i64, 3_i64, 1_i64, "Chevrolet", "Spark", 2023_i64, "CA123MNO", "Red", 18000_i64, "Gasoline", "Manual", r#"["AC", "Radio"]"#, 32.99, "USD"],
        params![2_i64, 3_i64, 2_i64, "Volkswagen", "Jetta", 2023_i64, "CA456PQR", "Gray", 14000_i64, "Gasoline", "Automatic", r#"["AC", "Radio", "Bluetooth", "USB Port"]"#, 45.99, "USD"],
        params![3_i64, 5_i64, 2_i64, "Ford", "Focus", 2023_i64, "UK123STU", "White", 16000_i64, "Gasoline", "Manual", r#"["AC", "Radio", "Bluetooth"]"#, 38.99, "GBP"],
        params![3_i64, 5_i64, 6_i64, "BMW", "3 Series", 2023_i64, "UK456VWX", "Black", 5000_i64, "Gasoline", "Automatic", r#"["AC", "Radio", "Bluetooth", "GPS", "Leather Seats", "Sunroof"]"#, 125.99, "GBP"],
    ]
}

const DESTINATIONS_SQL: &str = "INSERT INTO destinations (destination_name, country, region, destination_type, description, best_time_to_visit, average_temperature_celsius, currency, language, timezone, visa_required, safety_rating, cost_level, latitude, longitude) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn destinations() -> Vec<Vec<SqlParam>> {
    vec![
        params!["New York City", "United States", "Northeast", "City", "The city that never sleeps, famous for its skyline, Broadway shows, and cultural diversity", "Year-round, best in spring and fall", 12.5, "USD", "English", "America/New_York", false, 4_i64, "Expensive", 40.7128, -74.0060],
        params!["Los Angeles", "United States", "West Coast", "City", "Entertainment capital with Hollywood, beaches, and perfect weather", "Year-round, best in spring and fall", 18.3, "USD", "English", "America/Los_Angeles", false, 4_i64, "Expensive", 34.0522, -118.2437],
        params!["London", "United Kingdom", "Europe", "City", "Historic city with royal palaces, museums, and rich cultural heritage", "May to September", 10.5, "GBP", "English", "Europe/London", false, 4_i64, "Expensive", 51.5074, -0.1278],
        params!["Paris", "France", "Europe", "City", "City of Light known for art, fashion, gastronomy, and romance", "April to October", 11.2, "EUR", "French", "Europe/Paris", false, 4_i64, "Expensive", 48.8566, 2.3522],
        params!["Tokyo", "Japan", "Asia", "City", "Modern metropolis blending traditional culture with cutting-edge technology", "March to May, September to November", 15.4, "JPY", "Japanese", "Asia/Tokyo", false, 5_i64, "Expensive", 35.6762, 139.6503],
        params!["Bali", "Indonesia", "Southeast Asia", "Beach", "Tropical paradise with beautiful beaches, temples, and rich culture", "April to October", 26.1, "IDR", "Indonesian", "Asia/Makassar", false, 4_i64, "Moderate", -8.3405, 115.0920],
        params!["Dubai", "United Arab Emirates", "Middle East", "City", "Luxury destination with modern architecture, shopping, and desert adventures", "November to March", 27.1, "AED", "Arabic", "Asia/Dubai", true, 4_i64, "Luxury", 25.2048, 55.2708],
    ]
}

const ATTRACTIONS_SQL: &str = "INSERT INTO attractions (destination_id, attraction_name, attraction_type, description, address, opening_hours, admission_price, currency, rating, visit_duration_hours, best_time_to_visit, website, phone, latitude, longitude) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn attractions() -> Vec<Vec<SqlParam>> {
    vec![
        params![1_i64, "Statue of Liberty", "Monument", "Iconic symbol of freedom and democracy", "Liberty Island", "9:30 AM - 5:00 PM", 25.00, "USD", 4.5, 3.0, "Year-round", "www.nps.gov/stli", Some("+1-212-363-3200"), 40.6892, -74.0445],
        params![1_i64, "Central Park", "Park", "Large public park in Manhattan", "59th to 110th Street", "6:00 AM - 1:00 AM", 0.00, "USD", 4.7, 2.0, "Year-round", "www.centralparknyc.org", Some("+1-212-310-6600"), 40.7829, -73.9654],
        params![1_i64, "Empire State Building", "Building", "Art Deco skyscraper with observation decks", "350 5th Ave", "8:00 AM - 2:00 AM", 42.00, "USD", 4.3, 1.5, "Year-round", "www.esbnyc.com", Some("+1-212-736-3100"), 40.7484, -73.9857],
        params![2_i64, "Hollywood Walk of Fame", "Attraction", "Sidewalk with stars honoring entertainment celebrities", "Hollywood Blvd", "24/7", 0.00, "USD", 4.0, 1.0, "Year-round", "www.walkoffame.com", None::<&str>, 34.1016, -118.3295],
        params![2_i64, "Santa Monica Pier", "Pier", "Amusement park on a pier with rides and games", "200 Santa Monica Pier", "11:00 AM - 11:00 PM", 15.00, "USD", 4.2, 3.0, "Year-round", "www.santamonicapier.org", Some("+1-310-458-8900"), 34.0082, -118.4987],
        params![3_i64, "Tower of London", "Castle", "Historic castle and home to the Crown Jewels", "St Katharine's & Wapping", "9:00 AM - 5:30 PM", 29.90, "GBP", 4.4, 3.0, "Year-round", "www.hrp.org.uk", Some("+44-20-3166-6000"), 51.5081, -0.0759],
        params![3_i64, "British Museum", "Museum", "World-famous museum with artifacts from around the globe", "Great Russell St", "10:00 AM - 5:00 PM", 0.00, "GBP", 4.6, 2.5, "Year-round", "www.britishmuseum.org", Some("+44-20-7323-8299"), 51.5194, -0.1270],
        params![4_i64, "Eiffel Tower", "Monument", "Iconic iron lattice tower and symbol of Paris", "Champ de Mars", "9:30 AM - 11:45 PM", 29.40, "EUR", 4.5, 2.0, "Year-round", "www.toureiffel.paris", Some("+33-8-92-70-12-39"), 48.8584, 2.2945],
        params![4_i64, "Louvre Museum", "Museum", "World's largest art museum", "Rue de Rivoli", "9:00 AM - 6:00 PM", 17.00, "EUR", 4.7, 4.0, "Year-round", "www.louvre.fr", Some("+33-1-40-20-50-50"), 48.8606, 2.3376],
    ]
}

const ADVISORIES_SQL: &str = "INSERT INTO travel_advisories (destination_id, advisory_type, advisory_level, title, description, source, effective_date, expiry_date, last_updated) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";

fn advisories() -> Vec<Vec<SqlParam>> {
    vec![
        params![1_i64, "HEALTH", "LOW", "Health Guidelines", "Follow local health guidelines on public transportation", "CDC", "2024-01-01", None::<&str>, "2024-01-01 00:00:00"],
        params![3_i64, "SAFETY", "LOW", "General Safety", "London is generally safe for tourists. Be aware of pickpockets in tourist areas", "UK Government", "2024-01-01", None::<&str>, "2024-01-01 00:00:00"],
        params![6_i64, "HEALTH", "MEDIUM", "Tropical Disease Prevention", "Consider vaccination for hepatitis A and typhoid. Use mosquito repellent", "WHO", "2024-01-01", Some("2024-12-31"), "2024-01-01 00:00:00"],
        params![6_i64, "WEATHER", "MEDIUM", "Rainy Season", "Heavy rain between November and March can disrupt ferries and mountain roads", "BMKG", "2024-01-01", None::<&str>, "2024-03-01 00:00:00"],
        params![7_i64, "VISA", "HIGH", "Visa Requirements", "Some nationalities require a visa for the UAE. Apply at least 2 weeks in advance", "UAE Embassy", "2024-01-01", None::<&str>, "2024-01-15 00:00:00"],
        params![7_i64, "WEATHER", "HIGH", "Extreme Heat", "Daytime temperatures above 45°C in summer. Avoid outdoor activity at midday", "NCM", "2024-06-01", None::<&str>, "2024-06-01 00:00:00"],
    ]
}

const USERS_SQL: &str = "INSERT INTO users (first_name, last_name, email, phone, date_of_birth, passport_number, nationality) VALUES (?, ?, ?, ?, ?, ?, ?)";

fn users() -> Vec<Vec<SqlParam>> {
    vec![
        params!["John", "Doe", "john.doe@email.com", "+1-555-0123", "1985-06-15", "US123456789", "United States"],
        params!["Jane", "Smith", "jane.smith@email.com", "+1-555-0456", "1990-03-22", "US987654321", "United States"],
        params!["Robert", "Johnson", "robert.johnson@email.com", "+44-20-7946-0958", "1978-11-08", "UK123456789", "United Kingdom"],
        params!["Maria", "Garcia", "maria.garcia@email.com", "+33-1-42-86-83-26", "1992-09-14", "FR123456789", "France"],
    ]
}
