use serde_json::{json, Value};
use wayfarer_core::car_rental::{
    rental_days, CarOffer, CarRentalRequest, CarSearch, DriverDetails, RENTAL_TIMESTAMP_FORMAT,
};

use crate::envelope::{unknown_function, HandlerError, HandlerResult};
use crate::params::Params;
use crate::state::AppState;
use crate::{json_list, timestamp};

pub async fn handle(state: &AppState, function: &str, params: &Params) -> Value {
    match function {
        "search_cars" => search_cars(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Car rental search failed")),
        "book_car" => book_car(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Car rental booking failed")),
        "cancel_rental" => cancel_rental(state, params)
            .unwrap_or_else(|e| e.into_body("Car rental cancellation failed")),
        other => unknown_function(other),
    }
}

async fn search_cars(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["pickup_location", "dropoff_location", "pickup_date", "dropoff_date"])?;

    let pickup_location = params.text("pickup_location")?;
    let dropoff_location = params.text("dropoff_location")?;
    let car_type = params.optional_text("car_type");

    let pickup_at = params.timestamp("pickup_date")?;
    let dropoff_at = params.timestamp("dropoff_date")?;
    if pickup_at >= dropoff_at {
        return Err(HandlerError::validation("Drop-off date must be after pickup date"));
    }
    if pickup_at < state.clock.now().naive_utc() {
        return Err(HandlerError::validation("Pickup date cannot be in the past"));
    }

    let offers = state
        .cars
        .search(&CarSearch {
            pickup_location: pickup_location.clone(),
            dropoff_location: dropoff_location.clone(),
            pickup_at,
            dropoff_at,
            car_type: car_type.clone(),
        })
        .await?;

    if offers.is_empty() {
        return Err(HandlerError::NoResults(
            "No rental cars found for the specified criteria".into(),
        ));
    }

    let days = rental_days(pickup_at, dropoff_at);
    Ok(json!({
        "success": true,
        "search_criteria": {
            "pickup_location": pickup_location,
            "dropoff_location": dropoff_location,
            "pickup_date": pickup_at.format(RENTAL_TIMESTAMP_FORMAT).to_string(),
            "dropoff_date": dropoff_at.format(RENTAL_TIMESTAMP_FORMAT).to_string(),
            "rental_days": days,
            "car_type": car_type,
        },
        "rental_cars": offers.iter().map(|c| format_car(c, days)).collect::<Vec<_>>(),
    }))
}

async fn book_car(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&[
        "car_id",
        "pickup_location_id",
        "dropoff_location_id",
        "pickup_date",
        "dropoff_date",
        "driver_details",
    ])?;

    let vehicle_id = params.int("car_id")?;
    let pickup_location_id = params.int("pickup_location_id")?;
    let dropoff_location_id = params.int("dropoff_location_id")?;
    let pickup_at = params.timestamp("pickup_date")?;
    let dropoff_at = params.timestamp("dropoff_date")?;

    let driver: DriverDetails = params.json_as("driver_details")?;
    if driver.license_number.is_none() {
        return Err(HandlerError::validation("Driver license number is required"));
    }

    let request = CarRentalRequest {
        user_id: driver.user_id.unwrap_or(state.rules.default_user_id),
        vehicle_id,
        pickup_location_id,
        dropoff_location_id,
        pickup_at,
        dropoff_at,
        driver,
    };
    let confirmation = state.cars.book(&request).await?;

    Ok(json!({
        "success": true,
        "rental_confirmation": {
            "booking_id": confirmation.booking_id,
            "booking_reference": confirmation.booking_reference,
            "total_price": confirmation.total_price,
            "currency": confirmation.currency,
            "rental_days": confirmation.rental_days,
            "pickup_date": pickup_at.format(RENTAL_TIMESTAMP_FORMAT).to_string(),
            "dropoff_date": dropoff_at.format(RENTAL_TIMESTAMP_FORMAT).to_string(),
            "status": "CONFIRMED",
            "booking_date": timestamp(state),
        },
        "pickup_instructions": {
            "location": "Pickup location details will be provided",
            "requirements": [
                "Valid driver's license",
                "Credit card in driver's name",
                "Proof of insurance (if applicable)",
            ],
            "contact": "Rental location phone number will be provided",
        },
        "message": format!(
            "Car rental successfully booked! Your booking reference is {}",
            confirmation.booking_reference
        ),
    }))
}

/// Acknowledges the cancellation without releasing the vehicle.
// TODO: flip the booking to CANCELLED and the vehicle back to AVAILABLE in one transaction.
fn cancel_rental(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["booking_id"])?;
    let booking_id = params.text("booking_id")?;

    Ok(json!({
        "success": true,
        "cancellation_status": {
            "booking_id": booking_id,
            "status": "CANCELLED",
            "refund_amount": 0.0,
            "cancellation_fees": 0.0,
            "currency": "USD",
            "cancellation_date": timestamp(state),
            "refund_timeline": "5-7 business days",
        },
        "message": format!("Car rental booking {} has been successfully cancelled", booking_id),
    }))
}

fn format_car(car: &CarOffer, days: i64) -> Value {
    json!({
        "vehicle_id": car.vehicle_id,
        "location_id": car.location_id,
        "vehicle": {
            "make": car.make,
            "model": car.model,
            "year": car.year,
            "color": car.color.as_deref().unwrap_or("Not specified"),
            "license_plate": car.license_plate.as_deref().unwrap_or("TBD"),
        },
        "category": {
            "name": car.category_name,
            "description": car.category_description,
            "passenger_capacity": car.passenger_capacity,
            "luggage_capacity": car.luggage_capacity,
        },
        "specifications": {
            "fuel_type": car.fuel_type,
            "transmission": car.transmission,
            "mileage": car.mileage.unwrap_or(0),
            "features": json_list(car.features.as_deref()),
        },
        "rental_company": {
            "name": car.company_name,
            "location": car.location_name,
            "address": car.address,
            "phone": car.phone,
        },
        "pricing": {
            "daily_rate": car.daily_rate,
            "total_price": car.daily_rate * days as f64,
            "currency": car.currency,
        },
        "rental_terms": {
            "mileage_policy": "Unlimited mileage included",
            "fuel_policy": "Return with same fuel level",
            "age_requirement": "Minimum age 21",
            "insurance_required": true,
        },
    })
}
