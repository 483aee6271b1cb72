use chrono::Duration;
use std::sync::Arc;
use tracing::info;
use wayfarer_core::clock::Clock;
use wayfarer_core::planner::{
    CreatedItinerary, Destination, DestinationInfo, ItineraryRequest, NewItinerary, TravelAdvisory,
};
use wayfarer_core::repository::PlannerRepository;
use wayfarer_core::{CoreError, CoreResult};

use crate::itinerary;

/// Itineraries start this many days after the day they are drafted.
pub const ITINERARY_LEAD_DAYS: i64 = 30;

pub struct TravelPlannerService {
    repo: Arc<dyn PlannerRepository>,
    clock: Arc<dyn Clock>,
}

impl TravelPlannerService {
    pub fn new(repo: Arc<dyn PlannerRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    async fn find_destination(&self, term: &str) -> CoreResult<Destination> {
        self.repo
            .find_destination(term)
            .await?
            .ok_or_else(|| CoreError::not_found("Destination not found"))
    }

    pub async fn destination_info(&self, term: &str) -> CoreResult<DestinationInfo> {
        let destination = self.find_destination(term).await?;
        let attractions = self.repo.list_attractions(destination.destination_id).await?;
        Ok(DestinationInfo { destination, attractions })
    }

    /// Drafts and stores a plan. The duration range is checked by the
    /// caller; interests are recorded but do not filter attractions.
    pub async fn create_itinerary(&self, request: &ItineraryRequest) -> CoreResult<CreatedItinerary> {
        let DestinationInfo { destination, attractions } = self.destination_info(&request.destination).await?;

        let itinerary_name = format!("{} {}-Day Trip", request.destination, request.duration_days);
        let start_date = self.clock.today() + Duration::days(ITINERARY_LEAD_DAYS);
        let end_date = start_date + Duration::days(i64::from(request.duration_days) - 1);

        let plan = itinerary::build_plan(
            &destination.destination_name,
            &attractions,
            request.duration_days,
            &request.interests,
            request.budget.as_deref(),
            start_date,
        );

        let new = NewItinerary {
            user_id: request.user_id,
            destination_id: destination.destination_id,
            itinerary_name: itinerary_name.clone(),
            start_date,
            end_date,
            duration_days: request.duration_days,
            budget_amount: request.budget.as_deref().and_then(itinerary::parse_budget),
            plan,
        };

        let itinerary_id = self.repo.save_itinerary(&new).await?;
        info!("Drafted itinerary {} ({})", itinerary_id, itinerary_name);

        Ok(CreatedItinerary {
            itinerary_id,
            itinerary_name,
            start_date,
            end_date,
            itinerary: new.plan,
        })
    }

    /// Active advisories that have not expired as of today, most severe first.
    pub async fn travel_advisories(&self, term: &str) -> CoreResult<Vec<TravelAdvisory>> {
        let destination = self.find_destination(term).await?;
        self.repo
            .list_active_advisories(destination.destination_id, self.clock.today())
            .await
    }
}
