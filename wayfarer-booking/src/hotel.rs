use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use wayfarer_core::clock::Clock;
use wayfarer_core::hotel::{
    stay_nights, stay_total, HotelBookingConfirmation, HotelBookingRequest, HotelOffer, HotelSearch,
    NewHotelBooking,
};
use wayfarer_core::reference::{self, ReferenceKind};
use wayfarer_core::repository::HotelRepository;
use wayfarer_core::{CoreError, CoreResult};

pub struct HotelService {
    repo: Arc<dyn HotelRepository>,
    clock: Arc<dyn Clock>,
}

impl HotelService {
    pub fn new(repo: Arc<dyn HotelRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn search(&self, search: &HotelSearch) -> CoreResult<Vec<HotelOffer>> {
        self.repo.search_hotels(search).await
    }

    /// Books `room_count` rooms of one type. Date ordering is the caller's
    /// concern; no room inventory is taken.
    pub async fn book(&self, request: &HotelBookingRequest) -> CoreResult<HotelBookingConfirmation> {
        let nights = stay_nights(request.check_in, request.check_out);

        let room = self
            .repo
            .get_room_type(request.room_type_id)
            .await?
            .filter(|room| room.hotel_id == request.hotel_id)
            .ok_or_else(|| CoreError::not_found("Room type not found"))?;

        let details = &request.guest_details;
        let room_count = details.room_count.unwrap_or(1);
        let total_price = stay_total(room.base_price_per_night, nights, room_count);

        let booking = NewHotelBooking {
            user_id: request.user_id,
            hotel_id: request.hotel_id,
            room_type_id: room.room_type_id,
            booking_reference: reference::generate(ReferenceKind::Hotel, self.clock.now()),
            check_in: request.check_in,
            check_out: request.check_out,
            guest_count: details.guests.len() as i64,
            room_count,
            total_nights: nights,
            price_per_night: room.base_price_per_night,
            total_price,
            special_requests: Value::Array(details.special_requests.clone()),
            guest_names: Value::Array(details.guests.clone()),
        };

        let booking_id = self.repo.create_booking(&booking).await?;
        info!(
            "Booked {} x {} for {} night(s): {}",
            room_count, room.room_type_name, nights, booking.booking_reference
        );

        Ok(HotelBookingConfirmation {
            booking_id,
            booking_reference: booking.booking_reference,
            total_price,
            currency: room.currency,
            nights,
        })
    }
}
