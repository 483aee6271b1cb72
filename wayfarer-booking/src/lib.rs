//! Domain services for flights, hotels, car rentals and trip planning.

pub mod car_rental;
pub mod flight;
pub mod guide;
pub mod hotel;
pub mod itinerary;
pub mod planner;

pub use car_rental::CarRentalService;
pub use flight::FlightService;
pub use hotel::HotelService;
pub use planner::TravelPlannerService;
