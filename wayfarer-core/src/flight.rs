use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::BookingStatus;

#[derive(Debug, Clone)]
pub struct FlightSearch {
    /// Airport code or (part of a) city name.
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
}

/// A flight row joined with its airline and airports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightOffer {
    pub flight_id: i64,
    pub flight_number: String,
    pub airline_code: String,
    pub airline_name: String,
    pub origin_code: String,
    pub origin_city: String,
    pub destination_code: String,
    pub destination_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub aircraft_type: Option<String>,
    pub total_seats: i64,
    pub available_seats: i64,
    pub base_price: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FlightSearchResult {
    pub outbound_flights: Vec<FlightOffer>,
    pub return_flights: Vec<FlightOffer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    pub flight_id: i64,
    pub flight_number: String,
    pub total_seats: i64,
    pub available_seats: i64,
    pub base_price: f64,
    pub currency: String,
}

/// Caller supplied passenger payload; only the list length matters for pricing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PassengerDetails {
    pub user_id: Option<i64>,
    #[serde(default)]
    pub passengers: Vec<Value>,
    #[serde(default)]
    pub special_requests: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct NewFlightBooking {
    pub user_id: i64,
    pub flight_id: i64,
    pub booking_reference: String,
    pub passenger_count: i64,
    pub total_price: f64,
    pub special_requests: Value,
}

/// Stored booking plus the currency of the booked flight.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightBooking {
    pub booking_id: i64,
    pub user_id: i64,
    pub flight_id: i64,
    pub booking_reference: String,
    pub passenger_count: i64,
    pub total_price: f64,
    pub booking_status: BookingStatus,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightBookingConfirmation {
    pub booking_id: i64,
    pub booking_reference: String,
    pub total_price: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightCancellation {
    pub booking_reference: String,
    pub refund_amount: f64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passenger_details_defaults() {
        let details: PassengerDetails =
            serde_json::from_str(r#"{"passengers": [{"name": "Ada"}, {"name": "Alan"}]}"#).unwrap();
        assert_eq!(details.passengers.len(), 2);
        assert!(details.user_id.is_none());
        assert!(details.special_requests.is_empty());
    }
}
