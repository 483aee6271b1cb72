use serde::Serialize;

use crate::{CAR_RENTAL_AGENT, FLIGHT_AGENT, HOTEL_AGENT, PLANNER_AGENT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceDomain {
    Flight,
    Hotel,
    CarRental,
    Planning,
}

impl ServiceDomain {
    pub fn agent(&self) -> &'static str {
        match self {
            ServiceDomain::Flight => FLIGHT_AGENT,
            ServiceDomain::Hotel => HOTEL_AGENT,
            ServiceDomain::CarRental => CAR_RENTAL_AGENT,
            ServiceDomain::Planning => PLANNER_AGENT,
        }
    }

    pub fn request_type(&self) -> RequestType {
        match self {
            ServiceDomain::Flight => RequestType::Flight,
            ServiceDomain::Hotel => RequestType::Hotel,
            ServiceDomain::CarRental => RequestType::CarRental,
            ServiceDomain::Planning => RequestType::Planning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestType {
    Flight,
    Hotel,
    CarRental,
    Planning,
    MultiService,
}

pub struct DomainRule {
    pub domain: ServiceDomain,
    pub keywords: &'static [&'static str],
}

impl DomainRule {
    /// Substring match against already lowercased text, so `"plan"` also
    /// hits `"planning"`.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Evaluated in order; the first hit decides a single-service request type.
pub const DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        domain: ServiceDomain::Flight,
        keywords: &["flight", "fly", "airline", "airport", "departure", "arrival"],
    },
    DomainRule {
        domain: ServiceDomain::Hotel,
        keywords: &["hotel", "accommodation", "stay", "room", "resort", "lodge"],
    },
    DomainRule {
        domain: ServiceDomain::CarRental,
        keywords: &["car", "rental", "drive", "vehicle", "auto"],
    },
    DomainRule {
        domain: ServiceDomain::Planning,
        keywords: &["itinerary", "plan", "destination", "attractions", "activities", "sightseeing"],
    },
];

pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &["urgent", "asap", "immediately", "emergency"];
pub const LOW_PRIORITY_KEYWORDS: &[&str] = &["flexible", "whenever", "no rush"];

/// (keywords, requirement) pairs reported as key requirements.
pub const REQUIREMENT_RULES: &[(&[&str], &str)] = &[
    (&["budget", "cheap", "expensive"], "Budget considerations"),
    (&["date", "time"], "Specific timing requirements"),
    (&["group", "family"], "Group travel coordination"),
];

pub fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}
