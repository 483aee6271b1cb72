use async_trait::async_trait;
use chrono::NaiveDate;

use crate::car_rental::{CarOffer, CarSearch, NewCarRentalBooking, Vehicle};
use crate::flight::{Flight, FlightBooking, FlightOffer, NewFlightBooking};
use crate::hotel::{HotelOffer, HotelSearch, NewHotelBooking, RoomType};
use crate::planner::{Attraction, Destination, NewItinerary, TravelAdvisory};
use crate::CoreResult;

/// Repository trait for flight data access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Airport id for a code or city fragment; the first match wins.
    async fn resolve_airport(&self, term: &str) -> CoreResult<Option<i64>>;

    async fn search_flights(
        &self,
        origin_airport_id: i64,
        destination_airport_id: i64,
        date: NaiveDate,
        min_seats: u32,
    ) -> CoreResult<Vec<FlightOffer>>;

    async fn get_flight(&self, flight_id: i64) -> CoreResult<Option<Flight>>;

    /// Inserts the booking and takes its seats in one step. Fails with
    /// `CapacityError` when the flight no longer has enough seats.
    async fn create_booking(&self, booking: &NewFlightBooking) -> CoreResult<i64>;

    async fn get_booking(&self, booking_reference: &str) -> CoreResult<Option<FlightBooking>>;

    /// Marks the booking cancelled and gives its seats back. Fails with
    /// `AlreadyCancelledError` if another caller cancelled it first.
    async fn cancel_booking(&self, booking: &FlightBooking) -> CoreResult<()>;
}

/// Repository trait for hotel data access
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn search_hotels(&self, search: &HotelSearch) -> CoreResult<Vec<HotelOffer>>;

    async fn get_room_type(&self, room_type_id: i64) -> CoreResult<Option<RoomType>>;

    async fn create_booking(&self, booking: &NewHotelBooking) -> CoreResult<i64>;
}

/// Repository trait for rental car data access
#[async_trait]
pub trait CarRentalRepository: Send + Sync {
    async fn search_vehicles(&self, search: &CarSearch) -> CoreResult<Vec<CarOffer>>;

    async fn get_vehicle(&self, vehicle_id: i64) -> CoreResult<Option<Vehicle>>;

    /// Inserts the booking and marks the vehicle rented in one step. Fails
    /// with `CapacityError` when the vehicle is no longer available.
    async fn create_booking(&self, booking: &NewCarRentalBooking) -> CoreResult<i64>;
}

/// Repository trait for destination guides and itineraries
#[async_trait]
pub trait PlannerRepository: Send + Sync {
    async fn find_destination(&self, term: &str) -> CoreResult<Option<Destination>>;

    async fn list_attractions(&self, destination_id: i64) -> CoreResult<Vec<Attraction>>;

    async fn list_active_advisories(
        &self,
        destination_id: i64,
        today: NaiveDate,
    ) -> CoreResult<Vec<TravelAdvisory>>;

    async fn save_itinerary(&self, itinerary: &NewItinerary) -> CoreResult<i64>;
}
