use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use wayfarer_core::clock::Clock;
use wayfarer_core::flight::{
    FlightBookingConfirmation, FlightCancellation, FlightSearch, FlightSearchResult, NewFlightBooking,
    PassengerDetails,
};
use wayfarer_core::reference::{self, ReferenceKind};
use wayfarer_core::repository::FlightRepository;
use wayfarer_core::{BookingStatus, CoreError, CoreResult};

pub struct FlightService {
    repo: Arc<dyn FlightRepository>,
    clock: Arc<dyn Clock>,
}

impl FlightService {
    pub fn new(repo: Arc<dyn FlightRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Outbound flights, plus return flights when a return date is given.
    /// Unknown airports produce an empty result rather than an error.
    pub async fn search(&self, search: &FlightSearch) -> CoreResult<FlightSearchResult> {
        let origin = self.repo.resolve_airport(&search.origin).await?;
        let destination = self.repo.resolve_airport(&search.destination).await?;
        let (Some(origin_id), Some(destination_id)) = (origin, destination) else {
            debug!("Unresolved route {} -> {}", search.origin, search.destination);
            return Ok(FlightSearchResult::default());
        };

        let outbound_flights = self
            .repo
            .search_flights(origin_id, destination_id, search.departure_date, search.passengers)
            .await?;

        let return_flights = match search.return_date {
            Some(date) => {
                self.repo
                    .search_flights(destination_id, origin_id, date, search.passengers)
                    .await?
            }
            None => Vec::new(),
        };

        Ok(FlightSearchResult { outbound_flights, return_flights })
    }

    pub async fn book(
        &self,
        user_id: i64,
        flight_id: i64,
        details: &PassengerDetails,
    ) -> CoreResult<FlightBookingConfirmation> {
        let passenger_count = details.passengers.len() as i64;
        if passenger_count == 0 {
            return Err(CoreError::ValidationError("At least one passenger is required".into()));
        }

        let flight = self
            .repo
            .get_flight(flight_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Flight not found"))?;

        if flight.available_seats < passenger_count {
            return Err(CoreError::capacity("Insufficient seats available"));
        }

        let total_price = flight.base_price * passenger_count as f64;
        let booking = NewFlightBooking {
            user_id,
            flight_id,
            booking_reference: reference::generate(ReferenceKind::Flight, self.clock.now()),
            passenger_count,
            total_price,
            special_requests: Value::Array(details.special_requests.clone()),
        };

        // The repository re-checks seats atomically; a lost race is a CapacityError.
        let booking_id = self.repo.create_booking(&booking).await?;
        info!(
            "Booked flight {} for {} passenger(s): {}",
            flight.flight_number, passenger_count, booking.booking_reference
        );

        Ok(FlightBookingConfirmation {
            booking_id,
            booking_reference: booking.booking_reference,
            total_price,
            currency: flight.currency,
        })
    }

    pub async fn cancel(&self, booking_reference: &str) -> CoreResult<FlightCancellation> {
        let booking = self
            .repo
            .get_booking(booking_reference)
            .await?
            .ok_or_else(|| CoreError::not_found("Booking not found"))?;

        if booking.booking_status == BookingStatus::Cancelled {
            return Err(CoreError::AlreadyCancelledError("Booking already cancelled".into()));
        }

        self.repo.cancel_booking(&booking).await?;
        info!(
            "Cancelled flight booking {}, {} seat(s) released",
            booking.booking_reference, booking.passenger_count
        );

        Ok(FlightCancellation {
            booking_reference: booking.booking_reference,
            refund_amount: booking.total_price,
            currency: booking.currency,
        })
    }
}
