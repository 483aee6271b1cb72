use serde::Serialize;
use serde_json::{Map, Value};

use crate::coordination::succeeded;

#[derive(Debug, Clone, Serialize)]
pub struct PackageSummary {
    pub destination: Value,
    pub duration: Value,
    pub travelers: Value,
    pub services_included: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingOption {
    pub package_name: &'static str,
    pub includes: Vec<&'static str>,
    pub estimated_total: &'static str,
    pub booking_method: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingSummary {
    pub flight_range: &'static str,
    pub hotel_range: &'static str,
    pub car_rental_range: &'static str,
    pub total_estimate: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PackageTimeline {
    pub booking_deadline: &'static str,
    pub travel_dates: Value,
    pub confirmation_time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Consolidation {
    pub package_summary: PackageSummary,
    pub recommendations: Vec<String>,
    pub booking_options: Vec<BookingOption>,
    pub pricing_summary: PricingSummary,
    pub timeline: PackageTimeline,
    pub alternatives: Vec<&'static str>,
    pub important_notes: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
    pub booking_instructions: Vec<&'static str>,
}

#[derive(Default)]
struct Collected {
    flights: Vec<Value>,
    hotels: Vec<Value>,
    cars: Vec<Value>,
    itinerary: Option<Value>,
}

impl Collected {
    /// Picks options out of successful responses. An agent is recognised
    /// by the first of `flight`, `hotel`, `car` or `planner` in its name.
    fn from_responses(responses: &Map<String, Value>) -> Self {
        let mut collected = Self::default();
        for (agent, response) in responses {
            if !succeeded(response) {
                continue;
            }
            if agent.contains("flight") {
                collected.flights.extend(list(response, "outbound_flights"));
            } else if agent.contains("hotel") {
                collected.hotels.extend(list(response, "hotels"));
            } else if agent.contains("car") {
                collected.cars.extend(list(response, "rental_cars"));
            } else if agent.contains("planner") {
                collected.itinerary = response.get("detailed_itinerary").cloned();
            }
        }
        collected
    }

    fn has_itinerary(&self) -> bool {
        match &self.itinerary {
            Some(Value::Object(map)) => !map.is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        }
    }
}

fn list(response: &Value, key: &str) -> Vec<Value> {
    response
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn context_or(user_context: &Value, key: &str, default: Value) -> Value {
    user_context.get(key).cloned().unwrap_or(default)
}

/// Folds the specialists' search results into one package overview.
pub fn consolidate_response(agent_responses: &Map<String, Value>, user_context: &Value) -> Consolidation {
    let collected = Collected::from_responses(agent_responses);

    let mut services_included = Vec::new();
    let mut recommendations = Vec::new();
    if !collected.flights.is_empty() {
        services_included.push("Flights");
        recommendations.push(format!("Found {} flight options", collected.flights.len()));
    }
    if !collected.hotels.is_empty() {
        services_included.push("Accommodation");
        recommendations.push(format!("Found {} accommodation options", collected.hotels.len()));
    }
    if !collected.cars.is_empty() {
        services_included.push("Car Rental");
        recommendations.push(format!("Found {} car rental options", collected.cars.len()));
    }
    if collected.has_itinerary() {
        services_included.push("Itinerary Planning");
    }

    let package_summary = PackageSummary {
        destination: context_or(user_context, "destination", Value::from("Multiple destinations")),
        duration: context_or(user_context, "duration", Value::from("Flexible")),
        travelers: context_or(user_context, "travelers", Value::from(1)),
        services_included: services_included.clone(),
    };

    Consolidation {
        package_summary,
        recommendations,
        booking_options: vec![BookingOption {
            package_name: "Complete Travel Package",
            includes: services_included,
            estimated_total: "Pricing available upon selection",
            booking_method: "Coordinate through travel supervisor",
        }],
        pricing_summary: PricingSummary {
            flight_range: "Varies by selection",
            hotel_range: "Varies by selection",
            car_rental_range: "Varies by selection",
            total_estimate: "Contact for detailed pricing",
        },
        timeline: PackageTimeline {
            booking_deadline: "Recommend booking within 24 hours for best rates",
            travel_dates: context_or(user_context, "travel_dates", Value::from("To be determined")),
            confirmation_time: "1-2 hours after booking",
        },
        alternatives: vec![
            "Book services individually for more flexibility",
            "Consider alternative dates for better pricing",
            "Explore different service levels (economy vs premium)",
        ],
        important_notes: vec![
            "Prices subject to availability and change",
            "Cancellation policies vary by service provider",
            "Travel insurance recommended for international trips",
            "Check visa and documentation requirements",
        ],
        next_steps: vec![
            "Review all options and select preferences",
            "Confirm travel dates and passenger details",
            "Proceed with booking selected services",
            "Receive confirmations and travel documents",
        ],
        booking_instructions: vec![
            "Select preferred options from each category",
            "Provide passenger and payment information",
            "Review terms and conditions",
            "Confirm booking and receive confirmations",
        ],
    }
}
