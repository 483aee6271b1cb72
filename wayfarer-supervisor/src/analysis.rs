use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::rules::{
    contains_any, RequestType, ServiceDomain, DOMAIN_RULES, HIGH_PRIORITY_KEYWORDS,
    LOW_PRIORITY_KEYWORDS, REQUIREMENT_RULES,
};
use crate::PLANNER_AGENT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestAnalysis {
    pub request_type: RequestType,
    pub complexity_score: u32,
    pub priority: Priority,
    pub required_agents: Vec<&'static str>,
    pub estimated_duration: String,
    pub key_requirements: Vec<&'static str>,
    pub potential_challenges: Vec<&'static str>,
    pub recommended_approach: String,
    pub agent_sequence: Vec<&'static str>,
    pub parallel_tasks: Vec<Vec<&'static str>>,
    /// Agent -> agents it waits on, planner first.
    pub dependencies: Map<String, Value>,
}

/// Classifies a free-text request into the specialists it needs.
///
/// Requests that match no domain fall back to the planner. The caller's
/// `request_type` hint is accepted for logging only.
pub fn analyze_request(user_request: &str, request_type_hint: Option<&str>) -> RequestAnalysis {
    let lowered = user_request.to_lowercase();

    let matched: Vec<ServiceDomain> = DOMAIN_RULES
        .iter()
        .filter(|rule| rule.matches(&lowered))
        .map(|rule| rule.domain)
        .collect();

    let complexity_score = 1 + matched.len() as u32;
    let (request_type, domains) = match matched.as_slice() {
        [] => (RequestType::Planning, vec![ServiceDomain::Planning]),
        [only] => (only.request_type(), matched.clone()),
        _ => (RequestType::MultiService, matched.clone()),
    };
    let required_agents: Vec<&'static str> = domains.iter().map(|d| d.agent()).collect();

    let priority = if contains_any(&lowered, HIGH_PRIORITY_KEYWORDS) {
        Priority::High
    } else if contains_any(&lowered, LOW_PRIORITY_KEYWORDS) {
        Priority::Low
    } else {
        Priority::Medium
    };

    let key_requirements = REQUIREMENT_RULES
        .iter()
        .filter(|(keywords, _)| contains_any(&lowered, keywords))
        .map(|(_, requirement)| *requirement)
        .collect();

    let mut potential_challenges = Vec::new();
    if complexity_score > 3 {
        potential_challenges.push("Multi-service coordination complexity");
    }
    if lowered.contains("international") {
        potential_challenges.push("International travel requirements");
    }
    if priority == Priority::High {
        potential_challenges.push("Time-sensitive booking requirements");
    }

    let needs_planner = required_agents.contains(&PLANNER_AGENT);
    let mut agent_sequence = Vec::new();
    let mut dependencies = Map::new();
    if needs_planner {
        agent_sequence.push(PLANNER_AGENT);
        dependencies.insert(PLANNER_AGENT.to_string(), Value::Array(Vec::new()));
    }

    let parallel: Vec<&'static str> = required_agents
        .iter()
        .copied()
        .filter(|agent| *agent != PLANNER_AGENT)
        .collect();
    for agent in &parallel {
        let waits_on = if needs_planner { vec![Value::from(PLANNER_AGENT)] } else { Vec::new() };
        dependencies.insert(agent.to_string(), Value::Array(waits_on));
    }
    let parallel_tasks = if parallel.is_empty() { Vec::new() } else { vec![parallel] };

    let execution = if agent_sequence.len() > 1 { "sequential" } else { "parallel" };
    let recommended_approach = format!(
        "Coordinate {} specialist agents with {} execution",
        required_agents.len(),
        execution
    );

    debug!(
        "Classified request as {:?} (hint {:?}), agents {:?}",
        request_type, request_type_hint, required_agents
    );

    RequestAnalysis {
        request_type,
        complexity_score,
        priority,
        required_agents,
        estimated_duration: format!("{}-{} minutes", complexity_score * 5, complexity_score * 10),
        key_requirements,
        potential_challenges,
        recommended_approach,
        agent_sequence,
        parallel_tasks,
        dependencies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CAR_RENTAL_AGENT, FLIGHT_AGENT, HOTEL_AGENT};

    #[test]
    fn test_hotel_only_request() {
        let analysis = analyze_request("Find me a hotel for a 3 night stay", None);
        assert_eq!(analysis.request_type, RequestType::Hotel);
        assert_eq!(analysis.required_agents, vec![HOTEL_AGENT]);
        assert_eq!(analysis.complexity_score, 2);
        assert_eq!(analysis.estimated_duration, "10-20 minutes");
        assert_eq!(analysis.priority, Priority::Medium);
        assert!(analysis.agent_sequence.is_empty());
        assert_eq!(analysis.parallel_tasks, vec![vec![HOTEL_AGENT]]);
        assert_eq!(analysis.dependencies[HOTEL_AGENT], serde_json::json!([]));
    }

    #[test]
    fn test_multi_service_request_waits_on_planner() {
        let analysis = analyze_request(
            "URGENT: flight to Paris, a hotel, a rental car and an itinerary for my family",
            Some("leisure"),
        );
        assert_eq!(analysis.request_type, RequestType::MultiService);
        assert_eq!(
            analysis.required_agents,
            vec![FLIGHT_AGENT, HOTEL_AGENT, CAR_RENTAL_AGENT, PLANNER_AGENT]
        );
        assert_eq!(analysis.complexity_score, 5);
        assert_eq!(analysis.priority, Priority::High);
        assert_eq!(analysis.agent_sequence, vec![PLANNER_AGENT]);
        assert_eq!(
            analysis.potential_challenges,
            vec!["Multi-service coordination complexity", "Time-sensitive booking requirements"]
        );
        assert_eq!(analysis.key_requirements, vec!["Group travel coordination"]);

        let keys: Vec<&str> = analysis.dependencies.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![PLANNER_AGENT, FLIGHT_AGENT, HOTEL_AGENT, CAR_RENTAL_AGENT]);
        assert_eq!(analysis.dependencies[FLIGHT_AGENT], serde_json::json!([PLANNER_AGENT]));
        assert_eq!(
            analysis.recommended_approach,
            "Coordinate 4 specialist agents with parallel execution"
        );
    }

    #[test]
    fn test_unmatched_request_defaults_to_planner() {
        let analysis = analyze_request("Somewhere warm, no rush", None);
        assert_eq!(analysis.request_type, RequestType::Planning);
        assert_eq!(analysis.required_agents, vec![PLANNER_AGENT]);
        assert_eq!(analysis.complexity_score, 1);
        assert_eq!(analysis.priority, Priority::Low);
        assert!(analysis.parallel_tasks.is_empty());
    }
}
