use serde_json::{json, Value};
use wayfarer_core::flight::{FlightOffer, FlightSearch, PassengerDetails};

use crate::envelope::{unknown_function, HandlerError, HandlerResult};
use crate::params::Params;
use crate::state::AppState;
use crate::timestamp;

pub async fn handle(state: &AppState, function: &str, params: &Params) -> Value {
    match function {
        "search_flights" => search_flights(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Flight search failed")),
        "book_flight" => book_flight(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Flight booking failed")),
        "cancel_flight" => cancel_flight(state, params)
            .await
            .unwrap_or_else(|e| e.into_body("Flight cancellation failed")),
        other => unknown_function(other),
    }
}

async fn search_flights(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["origin", "destination", "departure_date", "passengers"])?;

    let origin = params.text("origin")?;
    let destination = params.text("destination")?;
    let passengers = params.int("passengers")?;
    let max = state.rules.max_passengers;
    if passengers < 1 || passengers > i64::from(max) {
        return Err(HandlerError::validation(format!(
            "Passenger count must be between 1 and {}",
            max
        )));
    }
    let departure_date = params.date("departure_date")?;
    let return_date = params.optional_date("return_date")?;

    let result = state
        .flights
        .search(&FlightSearch {
            origin: origin.clone(),
            destination: destination.clone(),
            departure_date,
            return_date,
            passengers: passengers as u32,
        })
        .await?;

    if result.outbound_flights.is_empty() {
        return Err(HandlerError::NoResults(
            "No flights found for the specified criteria".into(),
        ));
    }

    let return_flights = if return_date.is_some() {
        format_flights(&result.return_flights)
    } else {
        Vec::new()
    };

    Ok(json!({
        "success": true,
        "search_criteria": {
            "origin": origin,
            "destination": destination,
            "departure_date": departure_date.to_string(),
            "return_date": return_date.map(|d| d.to_string()),
            "passengers": passengers,
        },
        "outbound_flights": format_flights(&result.outbound_flights),
        "return_flights": return_flights,
    }))
}

async fn book_flight(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["flight_id", "passenger_details"])?;

    let flight_id = params.int("flight_id")?;
    let details: PassengerDetails = params.json_as("passenger_details")?;
    let user_id = details.user_id.unwrap_or(state.rules.default_user_id);

    let confirmation = state.flights.book(user_id, flight_id, &details).await?;

    Ok(json!({
        "success": true,
        "booking_confirmation": {
            "booking_id": confirmation.booking_id,
            "booking_reference": confirmation.booking_reference,
            "total_price": confirmation.total_price,
            "currency": confirmation.currency,
            "status": "CONFIRMED",
            "booking_date": timestamp(state),
        },
        "message": format!(
            "Flight successfully booked! Your booking reference is {}",
            confirmation.booking_reference
        ),
    }))
}

async fn cancel_flight(state: &AppState, params: &Params) -> HandlerResult {
    params.require(&["booking_reference"])?;
    let booking_reference = params.text("booking_reference")?;

    let cancellation = state.flights.cancel(&booking_reference).await?;

    Ok(json!({
        "success": true,
        "cancellation_status": {
            "booking_reference": booking_reference,
            "status": "CANCELLED",
            "refund_amount": cancellation.refund_amount,
            "currency": cancellation.currency,
            "cancellation_date": timestamp(state),
        },
        "message": format!(
            "Flight booking {} has been successfully cancelled. Refund of {} {} will be processed.",
            booking_reference, cancellation.currency, cancellation.refund_amount
        ),
    }))
}

fn format_flights(flights: &[FlightOffer]) -> Vec<Value> {
    flights
        .iter()
        .map(|f| {
            json!({
                "flight_id": f.flight_id,
                "flight_number": f.flight_number,
                "airline": {
                    "code": f.airline_code,
                    "name": f.airline_name,
                },
                "route": {
                    "origin": { "code": f.origin_code, "city": f.origin_city },
                    "destination": { "code": f.destination_code, "city": f.destination_city },
                },
                "schedule": {
                    "departure_time": f.departure_time,
                    "arrival_time": f.arrival_time,
                },
                "aircraft": f.aircraft_type,
                "pricing": {
                    "base_price": f.base_price,
                    "currency": f.currency,
                },
                "availability": {
                    "total_seats": f.total_seats,
                    "available_seats": f.available_seats,
                },
            })
        })
        .collect()
}
