use serde_json::{json, Map, Value};
use wayfarer_supervisor::{analyze_request, consolidate_response, coordinate_specialists};

use crate::envelope::{unknown_function, HandlerError, HandlerResult};
use crate::params::Params;

/// Supervisor functions are pure; they never touch the store.
pub fn handle(function: &str, params: &Params) -> Value {
    match function {
        "analyze_request" => analyze(params).unwrap_or_else(|e| e.into_body("Request analysis failed")),
        "coordinate_specialists" => {
            coordinate(params).unwrap_or_else(|e| e.into_body("Specialist coordination failed"))
        }
        "consolidate_response" => {
            consolidate(params).unwrap_or_else(|e| e.into_body("Response consolidation failed"))
        }
        other => unknown_function(other),
    }
}

fn analyze(params: &Params) -> HandlerResult {
    params.require(&["user_request"])?;
    let user_request = params.text("user_request")?;
    let hint = params.optional_text("request_type");

    let analysis = analyze_request(&user_request, hint.as_deref());

    Ok(json!({
        "success": true,
        "analysis_result": {
            "request_summary": user_request,
            "request_type": analysis.request_type,
            "complexity_score": analysis.complexity_score,
            "priority": analysis.priority,
            "required_agents": analysis.required_agents,
            "estimated_duration": analysis.estimated_duration,
            "key_requirements": analysis.key_requirements,
            "potential_challenges": analysis.potential_challenges,
            "recommended_approach": analysis.recommended_approach,
        },
        "coordination_plan": {
            "agent_sequence": analysis.agent_sequence,
            "parallel_tasks": analysis.parallel_tasks,
            "dependencies": analysis.dependencies,
        },
        "message": format!(
            "Travel request analyzed. {} specialist agents required.",
            analysis.required_agents.len()
        ),
    }))
}

fn coordinate(params: &Params) -> HandlerResult {
    params.require(&["specialist_responses", "request_context"])?;
    let responses = object(params, "specialist_responses")?;
    let context = params.json("request_context")?;

    let plan = coordinate_specialists(&responses, &context);

    Ok(json!({
        "success": true,
        "coordination_plan": {
            "task_assignments": plan.task_assignments,
            "dependencies": plan.dependencies,
            "timeline": plan.timeline,
            "resource_allocation": plan.resource_allocation,
            "risk_assessment": plan.risk_assessment,
            "contingency_plans": plan.contingency_plans,
        },
        "next_steps": plan.next_steps,
        "message": format!("Coordination plan created for {} specialist responses", responses.len()),
    }))
}

fn consolidate(params: &Params) -> HandlerResult {
    params.require(&["multiple_agent_responses", "user_context"])?;
    let responses = object(params, "multiple_agent_responses")?;
    let context = params.json("user_context")?;

    let package = consolidate_response(&responses, &context);

    Ok(json!({
        "success": true,
        "unified_response": {
            "travel_package_summary": package.package_summary,
            "recommendations": package.recommendations,
            "booking_options": package.booking_options,
            "pricing_summary": package.pricing_summary,
            "timeline": package.timeline,
            "alternatives": package.alternatives,
            "important_notes": package.important_notes,
        },
        "next_steps": package.next_steps,
        "booking_instructions": package.booking_instructions,
        "message": format!(
            "Consolidated travel package created with {} booking options",
            package.booking_options.len()
        ),
    }))
}

/// A JSON parameter that must decode to an object keyed by agent name.
fn object(params: &Params, name: &str) -> Result<Map<String, Value>, HandlerError> {
    match params.json(name)? {
        Value::Object(map) => Ok(map),
        _ => Err(HandlerError::validation(format!("Invalid {} format. Must be valid JSON.", name))),
    }
}
