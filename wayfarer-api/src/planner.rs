use serde_json::{json, Value};
use wayfarer_booking::guide::{self, CategorizedAdvisories};
use wayfarer_core::planner::{Attraction, ItineraryRequest};

use crate::envelope::{unknown_function, HandlerError, HandlerResult};
use crate::params::Params;
use crate::state::AppState;
use crate::timestamp;

/// Attractions listed in a destination overview.
const TOP_ATTRACTIONS: usize = 10;

pub async fn handle(state: &AppState, function: &str, params: &Params) -> Value {
    match function {
        "create_itinerary" => create_itinerary(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Itinerary creation failed")),
        "get_destination_info" => destination_info(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Destination information retrieval failed")),
        "get_travel_advisories" => travel_advisories(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Travel advisories retrieval failed")),
        other => unknown_function(other),
    }
}

async fn create_itinerary(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["destination", "duration"])?;

    let destination = params.text("destination")?;
    let duration = params.int("duration")?;
    let max = state.rules.max_itinerary_days;
    if duration < 1 || duration > i64::from(max) {
        return Err(HandlerError::validation(format!("Duration must be between 1 and {} days", max)));
    }
    let interests: Vec<String> = params
        .optional_text("interests")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let budget = params.optional_text("budget");

    let created = state
        .planner
        .create_itinerary(&ItineraryRequest {
            user_id: state.rules.default_user_id,
            destination: destination.clone(),
            duration_days: duration as u32,
            interests: interests.clone(),
            budget: budget.clone(),
        })
        .await?;

    Ok(json!({
        "success": true,
        "detailed_itinerary": {
            "itinerary_id": created.itinerary_id,
            "itinerary_name": created.itinerary_name,
            "destination": destination,
            "duration": duration,
            "interests": interests,
            "budget": budget,
            "start_date": created.start_date.to_string(),
            "end_date": created.end_date.to_string(),
            "itinerary_data": created.itinerary,
            "created_date": timestamp(state),
        },
        "recommendations": guide::recommendations(&interests),
        "message": format!("Complete {}-day itinerary created for {}", duration, destination),
    }))
}

async fn destination_info(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["destination"])?;
    let term = params.text("destination")?;

    let info = state.planner.destination_info(&term).await?;
    let dest = &info.destination;

    Ok(json!({
        "success": true,
        "destination_details": {
            "basic_info": {
                "name": dest.destination_name,
                "country": dest.country,
                "region": dest.region,
                "type": dest.destination_type,
                "description": dest.description,
            },
            "travel_info": {
                "best_time_to_visit": dest.best_time_to_visit,
                "average_temperature": guide::temperature(dest.average_temperature_celsius),
                "currency": dest.currency,
                "language": dest.language,
                "timezone": dest.timezone,
                "visa_required": dest.visa_required,
                "safety_rating": dest
                    .safety_rating
                    .map(|r| format!("{}/5", r))
                    .unwrap_or_else(|| "unknown".to_string()),
                "cost_level": dest.cost_level,
            },
            "location": {
                "latitude": dest.latitude,
                "longitude": dest.longitude,
            },
            "top_attractions": info
                .attractions
                .iter()
                .take(TOP_ATTRACTIONS)
                .map(format_attraction)
                .collect::<Vec<_>>(),
            "local_info": guide::local_info(dest),
            "travel_tips": guide::travel_tips(dest),
        },
        "message": format!("Comprehensive information for {} retrieved successfully", term),
    }))
}

async fn travel_advisories(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["destination"])?;
    let term = params.text("destination")?;

    let advisories = state.planner.travel_advisories(&term).await?;
    let categorized = CategorizedAdvisories::from_advisories(&advisories);

    Ok(json!({
        "success": true,
        "travel_advisories": {
            "destination": term,
            "last_updated": timestamp(state),
            "health_recommendations": categorized.health_recommendations,
            "safety_info": categorized.safety_info,
            "visa_requirements": categorized.visa_requirements,
            "weather_alerts": categorized.weather_alerts,
            "general_advisories": categorized.general_advisories,
            "summary": categorized.summary(),
        },
        "message": format!("Current travel advisories for {} retrieved successfully", term),
    }))
}

fn format_attraction(a: &Attraction) -> Value {
    json!({
        "name": a.attraction_name,
        "type": a.attraction_type,
        "description": a.description,
        "address": a.address.as_deref().unwrap_or("Address not available"),
        "opening_hours": a.opening_hours.as_deref().unwrap_or("Hours not available"),
        "admission_price": {
            "amount": a.admission_price.unwrap_or(0.0),
            "currency": a.currency.as_deref().unwrap_or("USD"),
        },
        "rating": a.rating.unwrap_or(0.0),
        "visit_duration": format!("{} hours", a.visit_duration_hours.unwrap_or(1.0)),
        "best_time_to_visit": a.best_time_to_visit.as_deref().unwrap_or("Year-round"),
        "contact": {
            "website": a.website,
            "phone": a.phone,
        },
    })
}
