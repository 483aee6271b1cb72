use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub destination_id: i64,
    pub destination_name: String,
    pub country: String,
    pub region: Option<String>,
    pub destination_type: Option<String>,
    pub description: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub average_temperature_celsius: Option<f64>,
    pub currency: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "crate::flag::deserialize")]
    pub visa_required: bool,
    pub safety_rating: Option<i64>,
    pub cost_level: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub attraction_id: i64,
    pub destination_id: i64,
    pub attraction_name: String,
    pub attraction_type: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub admission_price: Option<f64>,
    pub currency: Option<String>,
    pub rating: Option<f64>,
    pub visit_duration_hours: Option<f64>,
    pub best_time_to_visit: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationInfo {
    pub destination: Destination,
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvisoryLevel {
    Low,
    #[serde(alias = "MODERATE")]
    Medium,
    High,
    Critical,
}

impl AdvisoryLevel {
    pub fn is_high_priority(&self) -> bool {
        matches!(self, AdvisoryLevel::High | AdvisoryLevel::Critical)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelAdvisory {
    pub advisory_id: i64,
    pub destination_id: i64,
    pub advisory_type: String,
    pub advisory_level: AdvisoryLevel,
    pub title: String,
    pub description: Option<String>,
    pub source: Option<String>,
    pub effective_date: Option<String>,
    pub expiry_date: Option<String>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ItineraryRequest {
    pub user_id: i64,
    pub destination: String,
    pub duration_days: u32,
    pub interests: Vec<String>,
    pub budget: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub date: NaiveDate,
    pub attractions: Vec<Attraction>,
    pub activities: Vec<Activity>,
}

/// The day-by-day plan stored as the itinerary's JSON blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryPlan {
    pub destination: String,
    pub duration: u32,
    pub budget: Option<String>,
    pub interests: Vec<String>,
    pub days: Vec<ItineraryDay>,
}

#[derive(Debug, Clone)]
pub struct NewItinerary {
    pub user_id: i64,
    pub destination_id: i64,
    pub itinerary_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,
    pub budget_amount: Option<f64>,
    pub plan: ItineraryPlan,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedItinerary {
    pub itinerary_id: i64,
    pub itinerary_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub itinerary: ItineraryPlan,
}
