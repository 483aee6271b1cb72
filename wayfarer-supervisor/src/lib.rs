//! Request triage and multi-agent bookkeeping for the travel supervisor.
//!
//! Nothing here touches the store; every operation is a pure function of
//! the request text or of the specialist payloads passed in.

pub mod analysis;
pub mod consolidation;
pub mod coordination;
pub mod rules;

pub use analysis::{analyze_request, Priority, RequestAnalysis};
pub use consolidation::{consolidate_response, Consolidation};
pub use coordination::{coordinate_specialists, Coordination, TaskAssignment};
pub use rules::{RequestType, ServiceDomain};

/// Agent names as routed by the API.
pub const FLIGHT_AGENT: &str = "flight-booking-agent";
pub const HOTEL_AGENT: &str = "hotel-booking-agent";
pub const CAR_RENTAL_AGENT: &str = "car-rental-agent";
pub const PLANNER_AGENT: &str = "travel-planner-agent";
pub const SUPERVISOR_AGENT: &str = "travel-supervisor-agent";
