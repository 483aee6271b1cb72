use std::sync::Arc;
use tracing::info;
use wayfarer_core::car_rental::{
    rental_days, CarOffer, CarRentalConfirmation, CarRentalRequest, CarSearch, NewCarRentalBooking,
};
use wayfarer_core::clock::Clock;
use wayfarer_core::reference::{self, ReferenceKind};
use wayfarer_core::repository::CarRentalRepository;
use wayfarer_core::{CoreError, CoreResult};

pub struct CarRentalService {
    repo: Arc<dyn CarRentalRepository>,
    clock: Arc<dyn Clock>,
}

impl CarRentalService {
    pub fn new(repo: Arc<dyn CarRentalRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Vehicles available at the pickup location, cheapest first. The
    /// dropoff location and the dates do not narrow the result.
    pub async fn search(&self, search: &CarSearch) -> CoreResult<Vec<CarOffer>> {
        self.repo.search_vehicles(search).await
    }

    pub async fn book(&self, request: &CarRentalRequest) -> CoreResult<CarRentalConfirmation> {
        let days = rental_days(request.pickup_at, request.dropoff_at);

        let vehicle = self
            .repo
            .get_vehicle(request.vehicle_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Vehicle not found"))?;

        let total_price = vehicle.daily_rate * days as f64;
        let booking = NewCarRentalBooking {
            user_id: request.user_id,
            vehicle_id: vehicle.vehicle_id,
            pickup_location_id: request.pickup_location_id,
            dropoff_location_id: request.dropoff_location_id,
            booking_reference: reference::generate(ReferenceKind::CarRental, self.clock.now()),
            pickup_at: request.pickup_at,
            dropoff_at: request.dropoff_at,
            rental_days: days,
            daily_rate: vehicle.daily_rate,
            total_price,
            driver_license_number: request.driver.license_number.clone(),
        };

        let booking_id = self.repo.create_booking(&booking).await?;
        info!(
            "Rented {} {} for {} day(s): {}",
            vehicle.make, vehicle.model, days, booking.booking_reference
        );

        Ok(CarRentalConfirmation {
            booking_id,
            booking_reference: booking.booking_reference,
            total_price,
            currency: vehicle.currency,
            rental_days: days,
        })
    }
}
