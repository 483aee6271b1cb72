pub mod car_rental;
pub mod clock;
pub mod flight;
pub mod hotel;
pub mod planner;
pub mod reference;
pub mod repository;

mod flag;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    NotFoundError(String),
    #[error("{0}")]
    CapacityError(String),
    #[error("{0}")]
    AlreadyCancelledError(String),
    #[error("Internal service error: {0}")]
    ServiceError(String),
}

impl CoreError {
    /// Category reported to callers in the `error_type` field.
    pub fn error_type(&self) -> &'static str {
        match self {
            CoreError::ValidationError(_) => "validation_error",
            CoreError::NotFoundError(_) => "not_found",
            CoreError::CapacityError(_) => "capacity_error",
            CoreError::AlreadyCancelledError(_) => "already_cancelled",
            CoreError::ServiceError(_) => "service_error",
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        CoreError::NotFoundError(msg.into())
    }

    pub fn capacity(msg: impl Into<String>) -> Self {
        CoreError::CapacityError(msg.into())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

/// Lifecycle of a flight, hotel or car booking row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}
