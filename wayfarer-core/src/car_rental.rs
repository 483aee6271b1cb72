use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Wire and storage format of pickup/dropoff timestamps.
pub const RENTAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct CarSearch {
    pub pickup_location: String,
    // Accepted but not used for filtering.
    pub dropoff_location: String,
    pub pickup_at: NaiveDateTime,
    pub dropoff_at: NaiveDateTime,
    pub car_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

/// Available vehicle joined with category, company and location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarOffer {
    pub vehicle_id: i64,
    pub location_id: i64,
    pub make: String,
    pub model: String,
    pub year: Option<i64>,
    pub color: Option<String>,
    pub license_plate: Option<String>,
    pub mileage: Option<i64>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub features: Option<String>,
    pub daily_rate: f64,
    pub currency: String,
    pub category_name: String,
    pub category_description: Option<String>,
    pub passenger_capacity: Option<i64>,
    pub luggage_capacity: Option<i64>,
    pub company_name: String,
    pub location_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: i64,
    pub location_id: i64,
    pub make: String,
    pub model: String,
    pub daily_rate: f64,
    pub currency: String,
    pub availability_status: VehicleStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverDetails {
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "license_text")]
    pub license_number: Option<String>,
    pub name: Option<String>,
}

/// Licence numbers arrive as strings or bare numbers; either is kept as text.
fn license_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone)]
pub struct CarRentalRequest {
    pub user_id: i64,
    pub vehicle_id: i64,
    pub pickup_location_id: i64,
    pub dropoff_location_id: i64,
    pub pickup_at: NaiveDateTime,
    pub dropoff_at: NaiveDateTime,
    pub driver: DriverDetails,
}

#[derive(Debug, Clone)]
pub struct NewCarRentalBooking {
    pub user_id: i64,
    pub vehicle_id: i64,
    pub pickup_location_id: i64,
    pub dropoff_location_id: i64,
    pub booking_reference: String,
    pub pickup_at: NaiveDateTime,
    pub dropoff_at: NaiveDateTime,
    pub rental_days: i64,
    pub daily_rate: f64,
    pub total_price: f64,
    pub driver_license_number: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarRentalConfirmation {
    pub booking_id: i64,
    pub booking_reference: String,
    pub total_price: f64,
    pub currency: String,
    pub rental_days: i64,
}

/// Billable days: whole elapsed days, never less than one.
pub fn rental_days(pickup_at: NaiveDateTime, dropoff_at: NaiveDateTime) -> i64 {
    // num_days truncates toward zero while the day count must floor.
    let elapsed = dropoff_at - pickup_at;
    let days = elapsed.num_seconds().div_euclid(86_400);
    days.max(1)
}
