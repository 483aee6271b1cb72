use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use futures_util::FutureExt;
use serde_json::Value;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::{error, info_span, Instrument};
use uuid::Uuid;

use crate::envelope::{outcome, system_error, ActionResponse, InvocationRequest};
use crate::error::AppError;
use crate::params::Params;
use crate::state::AppState;
use crate::{car_rental, flight, hotel, planner, supervisor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agent {
    Flight,
    Hotel,
    CarRental,
    Planner,
    Supervisor,
}

impl Agent {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flight-booking-agent" => Some(Agent::Flight),
            "hotel-booking-agent" => Some(Agent::Hotel),
            "car-rental-agent" => Some(Agent::CarRental),
            "travel-planner-agent" => Some(Agent::Planner),
            "travel-supervisor-agent" => Some(Agent::Supervisor),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Agent::Flight => "flight-booking-agent",
            Agent::Hotel => "hotel-booking-agent",
            Agent::CarRental => "car-rental-agent",
            Agent::Planner => "travel-planner-agent",
            Agent::Supervisor => "travel-supervisor-agent",
        }
    }

    /// Action group reported when the request does not name one.
    pub fn default_action_group(&self) -> &'static str {
        match self {
            Agent::Flight => "flight-operations",
            Agent::Hotel => "hotel-operations",
            Agent::CarRental => "car-rental-operations",
            Agent::Planner => "travel-planning-operations",
            Agent::Supervisor => "supervisor-operations",
        }
    }

    /// Functions the agent's handler routes.
    pub fn functions(&self) -> &'static [&'static str] {
        match self {
            Agent::Flight => &["search_flights", "book_flight", "cancel_flight"],
            Agent::Hotel => &["search_hotels", "book_hotel", "modify_reservation"],
            Agent::CarRental => &["search_cars", "book_car", "cancel_rental"],
            Agent::Planner => &["create_itinerary", "get_destination_info", "get_travel_advisories"],
            Agent::Supervisor => &["analyze_request", "coordinate_specialists", "consolidate_response"],
        }
    }

    /// Metric label for a requested function. Names outside the routed set
    /// collapse to `unknown` so callers cannot grow the series count.
    pub fn function_label<'a>(&self, function: &'a str) -> &'a str {
        if self.functions().contains(&function) {
            function
        } else {
            "unknown"
        }
    }

    fn uses_store(&self) -> bool {
        !matches!(self, Agent::Supervisor)
    }
}

/// `POST /v1/agents/{agent}/invoke`
pub async fn invoke(
    State(state): State<AppState>,
    Path(agent_name): Path<String>,
    payload: Result<Json<InvocationRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, AppError> {
    let agent = Agent::from_name(&agent_name)
        .ok_or_else(|| AppError::NotFoundError(format!("Unknown agent: {}", agent_name)))?;
    let Json(request) = payload.map_err(|e| AppError::ValidationError(e.body_text()))?;

    let span = info_span!(
        "invoke",
        agent = agent.name(),
        function = %request.function,
        invocation_id = %Uuid::new_v4(),
    );

    let started = Instant::now();
    let body = run(&state, agent, &request).instrument(span).await;
    state
        .metrics
        .observe(
            agent.name(),
            agent.function_label(&request.function),
            outcome(&body),
            started.elapsed(),
        );

    Ok(Json(ActionResponse::new(request, agent.default_action_group(), &body)))
}

async fn run(state: &AppState, agent: Agent, request: &InvocationRequest) -> Value {
    if agent.uses_store() {
        if let Err(e) = state.db.refresh().await {
            error!("Database refresh failed: {}", e);
            return system_error(&e.to_string());
        }
    }

    let params = Params::from_parameters(&request.parameters);
    let function = request.function.as_str();

    let call = async {
        match agent {
            Agent::Flight => flight::handle(state, function, &params).await,
            Agent::Hotel => hotel::handle(state, function, &params).await,
            Agent::CarRental => car_rental::handle(state, function, &params).await,
            Agent::Planner => planner::handle(state, function, &params).await,
            Agent::Supervisor => supervisor::handle(function, &params),
        }
    };

    contain_panics(function, call).await
}

/// Runs a handler future, turning a panic into a `system_error` body.
async fn contain_panics<F>(function: &str, call: F) -> Value
where
    F: Future<Output = Value>,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(body) => body,
        Err(panic) => {
            let reason = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "handler panicked".to_string());
            error!("Handler for {} panicked: {}", function, reason);
            system_error(&reason)
        }
    }
}
