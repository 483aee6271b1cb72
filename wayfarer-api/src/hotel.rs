use serde_json::{json, Value};
use wayfarer_core::hotel::{stay_nights, GuestDetails, HotelBookingRequest, HotelOffer, HotelSearch};

use crate::envelope::{unknown_function, HandlerError, HandlerResult};
use crate::params::Params;
use crate::state::AppState;
use crate::{json_list, timestamp};

const DEFAULT_CHECK_IN: &str = "15:00";
const DEFAULT_CHECK_OUT: &str = "11:00";

pub async fn handle(state: &AppState, function: &str, params: &Params) -> Value {
    match function {
        "search_hotels" => search_hotels(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Hotel search failed")),
        "book_hotel" => book_hotel(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Hotel booking failed")),
        "modify_reservation" => modify_reservation(state, params)
            .unwrap_or_else(|e| e.into_body("Reservation modification failed")),
        other => unknown_function(other),
    }
}

async fn search_hotels(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["location", "check_in_date", "check_out_date", "guests"])?;

    let location = params.text("location")?;
    let guests = params.int("guests")?;
    let max = state.rules.max_guests;
    if guests < 1 || guests > i64::from(max) {
        return Err(HandlerError::validation(format!("Guest count must be between 1 and {}", max)));
    }
    let room_type = params.optional_text("room_type");

    let check_in = params.date("check_in_date")?;
    let check_out = params.date("check_out_date")?;
    if check_in >= check_out {
        return Err(HandlerError::validation("Check-out date must be after check-in date"));
    }
    if check_in < state.clock.today() {
        return Err(HandlerError::validation("Check-in date cannot be in the past"));
    }

    let offers = state
        .hotels
        .search(&HotelSearch {
            location: location.clone(),
            check_in,
            check_out,
            guests: guests as u32,
            room_type: room_type.clone(),
        })
        .await?;

    if offers.is_empty() {
        return Err(HandlerError::NoResults("No hotels found for the specified criteria".into()));
    }

    let nights = stay_nights(check_in, check_out);
    Ok(json!({
        "success": true,
        "search_criteria": {
            "location": location,
            "check_in_date": check_in.to_string(),
            "check_out_date": check_out.to_string(),
            "guests": guests,
            "nights": nights,
            "room_type": room_type,
        },
        "hotels": offers.iter().map(|h| format_hotel(h, nights)).collect::<Vec<_>>(),
    }))
}

async fn book_hotel(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["hotel_id", "room_type_id", "check_in_date", "check_out_date", "guest_details"])?;

    let hotel_id = params.int("hotel_id")?;
    let room_type_id = params.int("room_type_id")?;
    let check_in = params.date("check_in_date")?;
    let check_out = params.date("check_out_date")?;
    if check_in >= check_out {
        return Err(HandlerError::validation("Check-out date must be after check-in date"));
    }
    let guest_details: GuestDetails = params.json_as("guest_details")?;

    let request = HotelBookingRequest {
        user_id: guest_details.user_id.unwrap_or(state.rules.default_user_id),
        hotel_id,
        room_type_id,
        check_in,
        check_out,
        guest_details,
    };
    let confirmation = state.hotels.book(&request).await?;

    Ok(json!({
        "success": true,
        "reservation_confirmation": {
            "booking_id": confirmation.booking_id,
            "booking_reference": confirmation.booking_reference,
            "total_price": confirmation.total_price,
            "currency": confirmation.currency,
            "nights": confirmation.nights,
            "check_in_date": check_in.to_string(),
            "check_out_date": check_out.to_string(),
            "status": "CONFIRMED",
            "booking_date": timestamp(state),
        },
        "check_in_instructions": {
            "check_in_time": DEFAULT_CHECK_IN,
            "check_out_time": DEFAULT_CHECK_OUT,
            "instructions": "Please bring a valid ID and credit card for check-in",
        },
        "message": format!(
            "Hotel successfully booked! Your booking reference is {}",
            confirmation.booking_reference
        ),
    }))
}

/// Acknowledges the change without touching the stored booking.
// TODO: persist date and room changes once hotel bookings track inventory per night.
fn modify_reservation(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["reservation_id", "modifications"])?;
    let reservation_id = params.text("reservation_id")?;
    let modifications = params.json("modifications")?;

    let new_total = modifications
        .get("new_total")
        .cloned()
        .unwrap_or_else(|| Value::from("unchanged"));

    Ok(json!({
        "success": true,
        "updated_reservation": {
            "reservation_id": reservation_id,
            "modifications_applied": modifications,
            "change_fees": 0.0,
            "new_total": new_total,
            "status": "MODIFIED",
            "modification_date": timestamp(state),
        },
        "message": format!("Reservation {} has been successfully modified", reservation_id),
    }))
}

fn format_hotel(hotel: &HotelOffer, nights: i64) -> Value {
    json!({
        "hotel_id": hotel.hotel_id,
        "room_type_id": hotel.room_type_id,
        "property": {
            "name": hotel.hotel_name,
            "chain": hotel.hotel_chain.as_deref().unwrap_or("Independent"),
            "star_rating": hotel.star_rating,
            "guest_rating": hotel.guest_rating,
        },
        "location": {
            "address": hotel.address,
            "city": hotel.city,
            "country": hotel.country,
        },
        "room": {
            "type": hotel.room_type_name,
            "description": hotel.room_description,
            "max_occupancy": hotel.max_occupancy,
            "bed_type": hotel.bed_type,
            "size_sqm": hotel.room_size_sqm,
        },
        "pricing": {
            "price_per_night": hotel.base_price_per_night,
            "total_price": hotel.base_price_per_night * nights as f64,
            "currency": hotel.currency,
        },
        "amenities": json_list(hotel.amenities.as_deref()),
        "policies": {
            "check_in_time": hotel.check_in_time.as_deref().unwrap_or(DEFAULT_CHECK_IN),
            "check_out_time": hotel.check_out_time.as_deref().unwrap_or(DEFAULT_CHECK_OUT),
        },
    })
}
