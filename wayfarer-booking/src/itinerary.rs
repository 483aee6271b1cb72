//! Day-by-day plan composition.

use chrono::{Duration, NaiveDate};
use wayfarer_core::planner::{Activity, Attraction, ItineraryDay, ItineraryPlan};

/// Attractions scheduled per day.
pub const ATTRACTIONS_PER_DAY: usize = 2;

/// Lays out `duration` days starting at `start`. Day `d` gets the next two
/// attractions in rating order; days past the end of the list get free time.
pub fn build_plan(
    destination_name: &str,
    attractions: &[Attraction],
    duration: u32,
    interests: &[String],
    budget: Option<&str>,
    start: NaiveDate,
) -> ItineraryPlan {
    let selected = &attractions[..attractions.len().min(duration as usize * ATTRACTIONS_PER_DAY)];

    let days = (0..duration)
        .map(|day| {
            let from = (day as usize * ATTRACTIONS_PER_DAY).min(selected.len());
            let to = (from + ATTRACTIONS_PER_DAY).min(selected.len());
            let day_attractions = selected[from..to].to_vec();

            ItineraryDay {
                day: day + 1,
                date: start + Duration::days(i64::from(day)),
                activities: daily_schedule(&day_attractions),
                attractions: day_attractions,
            }
        })
        .collect();

    ItineraryPlan {
        destination: destination_name.to_string(),
        duration,
        budget: budget.map(str::to_string),
        interests: interests.to_vec(),
        days,
    }
}

fn daily_schedule(attractions: &[Attraction]) -> Vec<Activity> {
    let morning = attractions
        .first()
        .map(|a| format!("Visit {}", a.attraction_name))
        .unwrap_or_else(|| "Free time".to_string());
    let afternoon = attractions
        .get(1)
        .map(|a| format!("Explore {}", a.attraction_name))
        .unwrap_or_else(|| "Shopping/leisure".to_string());

    vec![
        slot("09:00", "Breakfast", Some("Hotel")),
        slot("10:00", &morning, None),
        slot("14:00", "Lunch", Some("Local restaurant")),
        slot("15:30", &afternoon, None),
        slot("19:00", "Dinner", Some("Recommended restaurant")),
    ]
}

fn slot(time: &str, activity: &str, location: Option<&str>) -> Activity {
    Activity {
        time: time.to_string(),
        activity: activity.to_string(),
        location: location.map(str::to_string),
    }
}

/// Budget amount from text like `$1,500`. Anything but digits after
/// stripping `$` and `,` yields `None`.
pub fn parse_budget(budget: &str) -> Option<f64> {
    let digits: String = budget.chars().filter(|c| *c != '$' && *c != ',').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attraction(id: i64, name: &str) -> Attraction {
        Attraction {
            attraction_id: id,
            destination_id: 1,
            attraction_name: name.to_string(),
            attraction_type: None,
            description: None,
            address: None,
            opening_hours: None,
            admission_price: None,
            currency: None,
            rating: None,
            visit_duration_hours: None,
            best_time_to_visit: None,
            website: None,
            phone: None,
        }
    }

    #[test]
    fn test_two_attractions_per_day_then_free_time() {
        let attractions = vec![
            attraction(1, "Central Park"),
            attraction(2, "Statue of Liberty"),
            attraction(3, "Empire State Building"),
        ];
        let start = NaiveDate::from_ymd_opt(2030, 3, 22).unwrap();
        let plan = build_plan("New York City", &attractions, 3, &[], None, start);

        assert_eq!(plan.days.len(), 3);
        assert_eq!(plan.days[0].attractions.len(), 2);
        assert_eq!(plan.days[0].activities[1].activity, "Visit Central Park");
        assert_eq!(plan.days[0].activities[3].activity, "Explore Statue of Liberty");

        assert_eq!(plan.days[1].attractions.len(), 1);
        assert_eq!(plan.days[1].activities[1].activity, "Visit Empire State Building");
        assert_eq!(plan.days[1].activities[3].activity, "Shopping/leisure");

        assert!(plan.days[2].attractions.is_empty());
        assert_eq!(plan.days[2].activities[1].activity, "Free time");
        assert_eq!(plan.days[2].date, NaiveDate::from_ymd_opt(2030, 3, 24).unwrap());
        assert_eq!(plan.days[2].activities[4].location.as_deref(), Some("Recommended restaurant"));
    }

    #[test]
    fn test_selection_is_capped_by_duration() {
        let attractions: Vec<Attraction> = (1..=9).map(|i| attraction(i, &format!("Spot {}", i))).collect();
        let start = NaiveDate::from_ymd_opt(2030, 3, 22).unwrap();
        let plan = build_plan("Paris", &attractions, 2, &["art".into()], Some("$2,000"), start);

        let scheduled: usize = plan.days.iter().map(|d| d.attractions.len()).sum();
        assert_eq!(scheduled, 4);
        assert_eq!(plan.interests, vec!["art".to_string()]);
        assert_eq!(plan.budget.as_deref(), Some("$2,000"));
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("$1,500"), Some(1500.0));
        assert_eq!(parse_budget("2000"), Some(2000.0));
        assert_eq!(parse_budget("moderate"), None);
        assert_eq!(parse_budget("$1,500.50"), None);
        assert_eq!(parse_budget("$"), None);
    }
}
