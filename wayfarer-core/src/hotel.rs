use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HotelSearch {
    pub location: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub room_type: Option<String>,
}

/// One bookable room type together with its hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelOffer {
    pub hotel_id: i64,
    pub room_type_id: i64,
    pub hotel_name: String,
    pub hotel_chain: Option<String>,
    pub star_rating: Option<i64>,
    pub guest_rating: Option<f64>,
    pub address: Option<String>,
    pub city: String,
    pub country: String,
    pub amenities: Option<String>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub room_type_name: String,
    pub room_description: Option<String>,
    pub max_occupancy: i64,
    pub bed_type: Option<String>,
    pub room_size_sqm: Option<f64>,
    pub base_price_per_night: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    pub room_type_id: i64,
    pub hotel_id: i64,
    pub room_type_name: String,
    pub max_occupancy: i64,
    pub base_price_per_night: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuestDetails {
    pub user_id: Option<i64>,
    #[serde(default)]
    pub guests: Vec<Value>,
    pub room_count: Option<i64>,
    #[serde(default)]
    pub special_requests: Vec<Value>,
}

#[derive(Debug, Clone)]
pub struct HotelBookingRequest {
    pub user_id: i64,
    pub hotel_id: i64,
    pub room_type_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_details: GuestDetails,
}

#[derive(Debug, Clone)]
pub struct NewHotelBooking {
    pub user_id: i64,
    pub hotel_id: i64,
    pub room_type_id: i64,
    pub booking_reference: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: i64,
    pub room_count: i64,
    pub total_nights: i64,
    pub price_per_night: f64,
    pub total_price: f64,
    pub special_requests: Value,
    pub guest_names: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct HotelBookingConfirmation {
    pub booking_id: i64,
    pub booking_reference: String,
    pub total_price: f64,
    pub currency: String,
    pub nights: i64,
}

/// Whole nights between check-in and check-out. Reversed dates yield a
/// non-positive count; callers validate ordering.
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

pub fn stay_total(price_per_night: f64, nights: i64, room_count: i64) -> f64 {
    price_per_night * nights as f64 * room_count as f64
}
