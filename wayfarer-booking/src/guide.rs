//! Static travel guidance attached to planner responses.

use serde::Serialize;
use wayfarer_core::planner::{AdvisoryLevel, Destination, TravelAdvisory};

#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub packing_suggestions: Vec<&'static str>,
    pub budget_tips: Vec<&'static str>,
    pub activity_suggestions: Vec<&'static str>,
}

const PACKING: &[&str] = &[
    "Comfortable walking shoes",
    "Weather-appropriate clothing",
    "Portable charger and adapters",
    "First aid kit basics",
    "Camera or smartphone for photos",
];

const BUDGET_TIPS: &[&str] = &[
    "Book flights and hotels in advance for better rates",
    "Consider traveling during shoulder season",
    "Look for package deals combining multiple services",
    "Use public transportation when possible",
    "Try local restaurants for authentic and affordable meals",
];

// Interest keyword -> suggestions, applied in this order.
const INTEREST_ACTIVITIES: &[(&str, &[&str])] = &[
    (
        "culture",
        &[
            "Visit local museums and cultural sites",
            "Attend traditional performances or festivals",
            "Take a guided historical walking tour",
        ],
    ),
    (
        "food",
        &[
            "Try local specialties and street food",
            "Take a cooking class",
            "Visit local markets and food halls",
        ],
    ),
    (
        "nature",
        &[
            "Explore parks and natural areas",
            "Consider day trips to scenic locations",
            "Look for hiking or outdoor activity opportunities",
        ],
    ),
];

const DEFAULT_ACTIVITIES: &[&str] = &[
    "Visit top-rated attractions and landmarks",
    "Explore different neighborhoods",
    "Try local cuisine and dining experiences",
    "Take photos at scenic viewpoints",
    "Shop for local souvenirs and crafts",
];

pub fn recommendations(interests: &[String]) -> Recommendations {
    let lowered: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();

    let mut activity_suggestions: Vec<&'static str> = INTEREST_ACTIVITIES
        .iter()
        .filter(|(interest, _)| lowered.iter().any(|i| i == interest))
        .flat_map(|(_, activities)| activities.iter().copied())
        .collect();
    if activity_suggestions.is_empty() {
        activity_suggestions = DEFAULT_ACTIVITIES.to_vec();
    }

    Recommendations {
        packing_suggestions: PACKING.to_vec(),
        budget_tips: BUDGET_TIPS.to_vec(),
        activity_suggestions,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalInfo {
    pub currency_info: CurrencyInfo,
    pub language_info: LanguageInfo,
    pub transportation: Transportation,
    pub cultural_notes: CulturalNotes,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyInfo {
    pub currency: Option<String>,
    pub exchange_tips: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub primary_language: Option<String>,
    pub english_spoken: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transportation {
    pub getting_around: &'static str,
    pub airport_transfer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CulturalNotes {
    pub tipping: &'static str,
    pub dress_code: &'static str,
    pub business_hours: &'static str,
}

pub fn local_info(destination: &Destination) -> LocalInfo {
    let english_spoken = if destination.language.as_deref() == Some("English") {
        "English is the primary language"
    } else {
        "English is widely spoken in tourist areas"
    };

    LocalInfo {
        currency_info: CurrencyInfo {
            currency: destination.currency.clone(),
            exchange_tips: "Exchange money at banks or authorized dealers for best rates",
        },
        language_info: LanguageInfo {
            primary_language: destination.language.clone(),
            english_spoken,
        },
        transportation: Transportation {
            getting_around: "Public transportation, taxis, and ride-sharing services available",
            airport_transfer: "Multiple options available including buses, trains, and taxis",
        },
        cultural_notes: CulturalNotes {
            tipping: "Tipping customs vary by location and service type",
            dress_code: "Dress modestly when visiting religious sites",
            business_hours: "Most businesses open 9 AM - 6 PM, restaurants until late",
        },
    }
}

pub fn travel_tips(destination: &Destination) -> Vec<String> {
    let mut tips = vec![
        format!("Best time to visit: {}", text_or_unknown(destination.best_time_to_visit.as_deref())),
        format!("Average temperature: {}", temperature(destination.average_temperature_celsius)),
        format!("Budget level: {} - plan accordingly", text_or_unknown(destination.cost_level.as_deref())),
        "Book accommodations in advance during peak season".to_string(),
        "Keep copies of important documents in separate locations".to_string(),
        "Check visa requirements well in advance of travel".to_string(),
        "Consider travel insurance for international trips".to_string(),
        "Research local customs and etiquette before arrival".to_string(),
    ];
    if destination.visa_required {
        tips.push("Visa required - apply at least 2-4 weeks before travel".to_string());
    }
    tips
}

/// `26.1°C`, or `unknown` when the destination has no reading.
pub fn temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(c) => format!("{}°C", c),
        None => "unknown".to_string(),
    }
}

fn text_or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or("unknown")
}

/// Advisories grouped the way travellers read them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategorizedAdvisories {
    pub health_recommendations: Vec<AdvisoryEntry>,
    pub safety_info: Vec<AdvisoryEntry>,
    pub visa_requirements: Vec<AdvisoryEntry>,
    pub weather_alerts: Vec<AdvisoryEntry>,
    pub general_advisories: Vec<AdvisoryEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryEntry {
    /// Original type, only kept for advisories filed under general.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub advisory_type: Option<String>,
    pub level: AdvisoryLevel,
    pub title: String,
    pub description: Option<String>,
    pub source: Option<String>,
    pub effective_date: Option<String>,
    pub expiry_date: Option<String>,
    pub last_updated: Option<String>,
}

impl CategorizedAdvisories {
    pub fn from_advisories(advisories: &[TravelAdvisory]) -> Self {
        let mut out = Self::default();
        for advisory in advisories {
            let category = advisory.advisory_type.to_lowercase();
            let mut entry = AdvisoryEntry {
                advisory_type: None,
                level: advisory.advisory_level,
                title: advisory.title.clone(),
                description: advisory.description.clone(),
                source: advisory.source.clone(),
                effective_date: advisory.effective_date.clone(),
                expiry_date: advisory.expiry_date.clone(),
                last_updated: advisory.last_updated.clone(),
            };
            match category.as_str() {
                "health" => out.health_recommendations.push(entry),
                "safety" => out.safety_info.push(entry),
                "visa" => out.visa_requirements.push(entry),
                "weather" => out.weather_alerts.push(entry),
                "general" => out.general_advisories.push(entry),
                _ => {
                    entry.advisory_type = Some(advisory.advisory_type.clone());
                    out.general_advisories.push(entry);
                }
            }
        }
        out
    }

    fn categories(&self) -> [(&'static str, &[AdvisoryEntry]); 5] {
        [
            ("Health", self.health_recommendations.as_slice()),
            ("Safety", self.safety_info.as_slice()),
            ("Visa", self.visa_requirements.as_slice()),
            ("Weather", self.weather_alerts.as_slice()),
            ("General", self.general_advisories.as_slice()),
        ]
    }

    pub fn total(&self) -> usize {
        self.categories().iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn summary(&self) -> String {
        let total = self.total();
        if total == 0 {
            return "No current travel advisories. Standard travel precautions recommended.".to_string();
        }

        let high_priority: Vec<String> = self
            .categories()
            .iter()
            .flat_map(|(label, entries)| {
                entries
                    .iter()
                    .filter(|e| e.level.is_high_priority())
                    .map(move |e| format!("{}: {}", label, e.title))
            })
            .collect();

        if high_priority.is_empty() {
            format!("{} travel advisories found. Review for important travel information.", total)
        } else {
            format!(
                "High priority advisories: {}. Review all advisories before travel.",
                high_priority.join("; ")
            )
        }
    }
}
