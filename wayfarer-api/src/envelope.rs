//! Agent invocation request and response shapes.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use wayfarer_core::CoreError;

pub const MESSAGE_VERSION: &str = "1.0";

fn empty_object() -> Value {
    Value::Object(Map::new())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    pub agent: Option<String>,
    pub action_group: Option<String>,
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default = "empty_object")]
    pub session_attributes: Value,
    #[serde(default = "empty_object")]
    pub prompt_session_attributes: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub message_version: &'static str,
    pub response: FunctionResponse,
    pub session_attributes: Value,
    pub prompt_session_attributes: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub action_group: String,
    pub function: String,
    pub function_response: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub response_body: TextBody,
}

#[derive(Debug, Serialize)]
pub struct TextBody {
    #[serde(rename = "TEXT")]
    pub text: Text,
}

#[derive(Debug, Serialize)]
pub struct Text {
    /// Pretty printed JSON result.
    pub body: String,
}

impl ActionResponse {
    /// Wraps a result body, echoing the caller's session maps untouched.
    pub fn new(request: InvocationRequest, default_action_group: &str, body: &Value) -> Self {
        let body = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
        Self {
            message_version: MESSAGE_VERSION,
            response: FunctionResponse {
                action_group: request
                    .action_group
                    .unwrap_or_else(|| default_action_group.to_string()),
                function: request.function,
                function_response: ResponseBody {
                    response_body: TextBody { text: Text { body } },
                },
            },
            session_attributes: request.session_attributes,
            prompt_session_attributes: request.prompt_session_attributes,
        }
    }
}

/// Handler failure, rendered as a `success: false` body.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NoResults(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type HandlerResult = Result<Value, HandlerError>;

impl HandlerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        HandlerError::Validation(msg.into())
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            HandlerError::Validation(_) => "validation_error",
            HandlerError::NoResults(_) => "no_results",
            HandlerError::Core(err) => err.error_type(),
        }
    }

    /// Failure body. Service faults are prefixed with `context`, e.g.
    /// "Flight booking failed"; domain outcomes keep their own message.
    pub fn into_body(self, context: &str) -> Value {
        let message = match &self {
            HandlerError::Core(CoreError::ServiceError(_)) => {
                tracing::warn!("{}: {}", context, self);
                format!("{}: {}", context, self)
            }
            _ => {
                tracing::debug!("{} ({})", self, self.error_type());
                self.to_string()
            }
        };
        failure(&message, self.error_type())
    }
}

pub fn failure(message: &str, error_type: &str) -> Value {
    json!({
        "success": false,
        "error": message,
        "error_type": error_type,
    })
}

pub fn unknown_function(function: &str) -> Value {
    failure(&format!("Unknown function: {}", function), "validation_error")
}

pub fn system_error(message: &str) -> Value {
    failure(message, "system_error")
}

/// Outcome label used for metrics: `success` or the body's error type.
pub fn outcome(body: &Value) -> &str {
    if body["success"].as_bool().unwrap_or(false) {
        "success"
    } else {
        body["error_type"].as_str().unwrap_or("unknown")
    }
}
