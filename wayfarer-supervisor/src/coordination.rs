use serde::Serialize;
use serde_json::{Map, Value};

use crate::SUPERVISOR_AGENT;

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TaskAssignment {
    Ready {
        estimated_time: &'static str,
        dependencies: Vec<String>,
        outputs: Value,
    },
    Failed {
        error: String,
        retry_required: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelinePhase {
    pub phase: &'static str,
    pub duration: &'static str,
    pub agents: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceAllocation {
    pub priority: &'static str,
    pub resources_needed: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Coordination {
    pub task_assignments: Map<String, Value>,
    pub dependencies: Map<String, Value>,
    pub timeline: Vec<TimelinePhase>,
    pub resource_allocation: Map<String, Value>,
    pub risk_assessment: Vec<String>,
    pub contingency_plans: Vec<&'static str>,
    pub next_steps: Vec<&'static str>,
}

/// Turns the per-agent responses into a coordination plan. Agents are
/// kept in the order the caller listed them.
///
/// `_request_context` is accepted so callers can pass it through; the plan
/// does not depend on it yet.
pub fn coordinate_specialists(
    specialist_responses: &Map<String, Value>,
    _request_context: &Value,
) -> Coordination {
    let mut task_assignments = Map::new();
    let mut resource_allocation = Map::new();
    let mut risk_assessment = Vec::new();

    for (agent, response) in specialist_responses {
        let assignment = if succeeded(response) {
            TaskAssignment::Ready {
                estimated_time: "5-10 minutes",
                dependencies: Vec::new(),
                outputs: response.get("outputs").cloned().unwrap_or_else(|| Value::Array(Vec::new())),
            }
        } else {
            let error = response
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_ERROR)
                .to_string();
            risk_assessment.push(format!("{}: {}", agent, error));
            TaskAssignment::Failed { error, retry_required: true }
        };
        task_assignments.insert(agent.clone(), to_value(&assignment));

        let allocation = ResourceAllocation {
            priority: if is_booking_agent(agent) { "high" } else { "medium" },
            resources_needed: vec!["database_access", "external_api_access"],
        };
        resource_allocation.insert(agent.clone(), to_value(&allocation));
    }

    let agents: Vec<String> = specialist_responses.keys().cloned().collect();
    let timeline = vec![
        TimelinePhase {
            phase: "Information Gathering",
            duration: "2-5 minutes",
            agents: agents.clone(),
        },
        TimelinePhase {
            phase: "Option Presentation",
            duration: "1-2 minutes",
            agents: vec![SUPERVISOR_AGENT.to_string()],
        },
        TimelinePhase {
            phase: "Booking Execution",
            duration: "5-10 minutes",
            agents: agents.into_iter().filter(|a| is_booking_agent(a)).collect(),
        },
    ];

    let contingency_plans = if risk_assessment.is_empty() {
        Vec::new()
    } else {
        vec![
            "Retry failed operations with alternative parameters",
            "Provide manual booking instructions if automated booking fails",
        ]
    };

    Coordination {
        task_assignments,
        dependencies: Map::new(),
        timeline,
        resource_allocation,
        risk_assessment,
        contingency_plans,
        next_steps: vec![
            "Review specialist recommendations",
            "Present consolidated options to user",
            "Execute approved bookings",
            "Provide confirmation and documentation",
        ],
    }
}

pub(crate) fn succeeded(response: &Value) -> bool {
    response.get("success").and_then(Value::as_bool).unwrap_or(false)
}

fn is_booking_agent(agent: &str) -> bool {
    agent.contains("booking")
}

// Serializing these plain structs cannot fail.
fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
