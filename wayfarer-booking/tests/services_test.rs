use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use wayfarer_booking::{CarRentalService, FlightService, HotelService, TravelPlannerService};
use wayfarer_core::car_rental::{CarRentalRequest, CarSearch, DriverDetails};
use wayfarer_core::clock::{Clock, FixedClock};
use wayfarer_core::flight::{FlightSearch, PassengerDetails};
use wayfarer_core::hotel::{GuestDetails, HotelBookingRequest};
use wayfarer_core::planner::ItineraryRequest;
use wayfarer_core::repository::FlightRepository;
use wayfarer_core::CoreError;
use wayfarer_store::{
    Database, SqliteCarRentalRepository, SqliteFlightRepository, SqliteHotelRepository,
    SqlitePlannerRepository,
};

struct Fixture {
    db: Arc<Database>,
    clock: Arc<dyn Clock>,
}

fn seed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 3, 1).unwrap()
}

async fn fixture() -> Fixture {
    let db = Arc::new(Database::in_memory(seed_date()).await.unwrap());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2030, 2, 20, 9, 0, 0).unwrap()));
    Fixture { db, clock }
}

fn passengers(n: usize) -> PassengerDetails {
    let list: Vec<_> = (0..n).map(|i| json!({ "name": format!("Passenger {}", i + 1) })).collect();
    serde_json::from_value(json!({ "passengers": list, "special_requests": ["Vegetarian meal"] })).unwrap()
}

#[tokio::test]
async fn test_flight_search_with_return_leg() {
    let f = fixture().await;
    let service = FlightService::new(Arc::new(SqliteFlightRepository::new(f.db.clone())), f.clock.clone());

    let result = service
        .search(&FlightSearch {
            origin: "JFK".into(),
            destination: "LAX".into(),
            departure_date: seed_date(),
            return_date: NaiveDate::from_ymd_opt(2030, 3, 5),
            passengers: 2,
        })
        .await
        .unwrap();

    assert_eq!(result.outbound_flights.len(), 3);
    let returns: Vec<&str> = result.return_flights.iter().map(|f| f.flight_number.as_str()).collect();
    assert_eq!(returns, vec!["AA604", "DL704"]);
    assert!(result.return_flights.iter().all(|f| f.origin_code == "LAX"));
}

#[tokio::test]
async fn test_flight_search_unknown_airport_is_empty() {
    let f = fixture().await;
    let service = FlightService::new(Arc::new(SqliteFlightRepository::new(f.db.clone())), f.clock.clone());

    let result = service
        .search(&FlightSearch {
            origin: "Atlantis".into(),
            destination: "LAX".into(),
            departure_date: seed_date(),
            return_date: None,
            passengers: 1,
        })
        .await
        .unwrap();
    assert!(result.outbound_flights.is_empty());
    assert!(result.return_flights.is_empty());
}

#[tokio::test]
async fn test_flight_book_and_cancel_round_trip() {
    let f = fixture().await;
    let repo = Arc::new(SqliteFlightRepository::new(f.db.clone()));
    let service = FlightService::new(repo.clone(), f.clock.clone());
    let before = repo.get_flight(2).await.unwrap().unwrap();

    let confirmation = service.book(1, 2, &passengers(2)).await.unwrap();
    assert!(confirmation.booking_reference.starts_with("FL20300220090000-"));
    assert!((confirmation.total_price - before.base_price * 2.0).abs() < 1e-9);
    assert_eq!(confirmation.currency, "USD");
    assert_eq!(repo.get_flight(2).await.unwrap().unwrap().available_seats, before.available_seats - 2);

    let cancellation = service.cancel(&confirmation.booking_reference).await.unwrap();
    assert!((cancellation.refund_amount - confirmation.total_price).abs() < 1e-9);
    assert_eq!(repo.get_flight(2).await.unwrap().unwrap().available_seats, before.available_seats);

    let err = service.cancel(&confirmation.booking_reference).await.unwrap_err();
    assert!(matches!(err, CoreError::AlreadyCancelledError(_)));
    assert_eq!(err.to_string(), "Booking already cancelled");
    assert_eq!(repo.get_flight(2).await.unwrap().unwrap().available_seats, before.available_seats);
}

#[tokio::test]
async fn test_flight_booking_errors() {
    let f = fixture().await;
    let service = FlightService::new(Arc::new(SqliteFlightRepository::new(f.db.clone())), f.clock.clone());

    let err = service.book(1, 99_999, &passengers(1)).await.unwrap_err();
    assert_eq!(err.error_type(), "not_found");
    assert_eq!(err.to_string(), "Flight not found");

    // DL200 on the first day has 120 seats left.
    let err = service.book(1, 2, &passengers(121)).await.unwrap_err();
    assert_eq!(err.error_type(), "capacity_error");
    assert_eq!(err.to_string(), "Insufficient seats available");

    let err = service.book(1, 2, &passengers(0)).await.unwrap_err();
    assert_eq!(err.error_type(), "validation_error");

    let err = service.cancel("FL-NOPE").await.unwrap_err();
    assert_eq!(err.to_string(), "Booking not found");
}

#[tokio::test]
async fn test_hotel_booking_total_is_nights_times_rooms_times_rate() {
    let f = fixture().await;
    let service = HotelService::new(Arc::new(SqliteHotelRepository::new(f.db.clone())), f.clock.clone());

    let details: GuestDetails = serde_json::from_value(json!({
        "guests": [{ "name": "John Doe" }, { "name": "Jane Doe" }],
        "room_count": 2,
    }))
    .unwrap();
    let request = HotelBookingRequest {
        user_id: 1,
        hotel_id: 1,
        room_type_id: 1,
        check_in: NaiveDate::from_ymd_opt(2030, 3, 10).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2030, 3, 13).unwrap(),
        guest_details: details,
    };

    let confirmation = service.book(&request).await.unwrap();
    assert_eq!(confirmation.nights, 3);
    assert_eq!(confirmation.total_price, 450.0 * 3.0 * 2.0);
    assert_eq!(confirmation.currency, "USD");
    assert!(confirmation.booking_reference.starts_with("HT"));

    // Room type 5 belongs to The Savoy, not The Plaza.
    let mismatched = HotelBookingRequest { room_type_id: 5, ..request };
    let err = service.book(&mismatched).await.unwrap_err();
    assert_eq!(err.to_string(), "Room type not found");
}

#[tokio::test]
async fn test_car_rental_days_and_second_booking_fails() {
    let f = fixture().await;
    let service = CarRentalService::new(Arc::new(SqliteCarRentalRepository::new(f.db.clone())), f.clock.clone());
    let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();

    let offers = service
        .search(&CarSearch {
            pickup_location: "LAX".into(),
            dropoff_location: "Hollywood".into(),
            pickup_at: at("2024-02-15 10:00:00"),
            dropoff_at: at("2024-02-18 10:00:00"),
            car_type: Some("economy".into()),
        })
        .await
        .unwrap();
    assert_eq!(offers.len(), 1);
    let spark = &offers[0];
    assert_eq!(spark.model, "Spark");

    let request = CarRentalRequest {
        user_id: 1,
        vehicle_id: spark.vehicle_id,
        pickup_location_id: spark.location_id,
        dropoff_location_id: 4,
        pickup_at: at("2024-02-15 10:00:00"),
        dropoff_at: at("2024-02-18 10:00:00"),
        driver: DriverDetails { user_id: None, license_number: Some("CA-D123".into()), name: None },
    };
    let confirmation = service.book(&request).await.unwrap();
    assert_eq!(confirmation.rental_days, 3);
    assert!((confirmation.total_price - 3.0 * 32.99).abs() < 1e-9);

    let err = service.book(&request).await.unwrap_err();
    assert!(matches!(err, CoreError::CapacityError(_)));

    let missing = CarRentalRequest { vehicle_id: 4242, ..request };
    assert_eq!(service.book(&missing).await.unwrap_err().to_string(), "Vehicle not found");
}

#[tokio::test]
async fn test_itinerary_starts_thirty_days_out() {
    let f = fixture().await;
    let service = TravelPlannerService::new(Arc::new(SqlitePlannerRepository::new(f.db.clone())), f.clock.clone());

    let created = service
        .create_itinerary(&ItineraryRequest {
            user_id: 1,
            destination: "Paris".into(),
            duration_days: 3,
            interests: vec!["culture".into()],
            budget: Some("$3,000".into()),
        })
        .await
        .unwrap();

    assert_eq!(created.itinerary_name, "Paris 3-Day Trip");
    assert_eq!(created.start_date, NaiveDate::from_ymd_opt(2030, 3, 22).unwrap());
    assert_eq!(created.end_date, NaiveDate::from_ymd_opt(2030, 3, 24).unwrap());
    assert_eq!(created.itinerary.days.len(), 3);
    assert_eq!(created.itinerary.days[0].activities[1].activity, "Visit Louvre Museum");
    assert_eq!(created.itinerary.days[0].activities[3].activity, "Explore Eiffel Tower");
    assert_eq!(created.itinerary.days[1].activities[1].activity, "Free time");

    let err = service
        .create_itinerary(&ItineraryRequest {
            user_id: 1,
            destination: "Atlantis".into(),
            duration_days: 2,
            interests: vec![],
            budget: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Destination not found");
}

#[tokio::test]
async fn test_advisories_use_clock_for_expiry() {
    let f = fixture().await;
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
    let service = TravelPlannerService::new(Arc::new(SqlitePlannerRepository::new(f.db.clone())), clock.clone());

    // Before its expiry the tropical disease advisory is still listed.
    let titles: Vec<String> = service.travel_advisories("Bali").await.unwrap().into_iter().map(|a| a.title).collect();
    assert_eq!(titles, vec!["Rainy Season", "Tropical Disease Prevention"]);

    clock.set(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    let titles: Vec<String> = service.travel_advisories("Bali").await.unwrap().into_iter().map(|a| a.title).collect();
    assert_eq!(titles, vec!["Rainy Season"]);
}
