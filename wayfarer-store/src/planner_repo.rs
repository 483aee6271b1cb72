use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use wayfarer_core::planner::{Attraction, Destination, NewItinerary, TravelAdvisory};
use wayfarer_core::repository::PlannerRepository;
use wayfarer_core::CoreResult;

use crate::database::Database;
use crate::params;
use crate::records;
use crate::StoreError;

// Ties on severity go to the most recently updated advisory.
const ACTIVE_ADVISORIES_SQL: &str = r#"
    SELECT * FROM travel_advisories
    WHERE destination_id = ? AND active = 1
      AND (expiry_date IS NULL OR expiry_date > ?)
    ORDER BY CASE advisory_level
                 WHEN 'CRITICAL' THEN 4
                 WHEN 'HIGH' THEN 3
                 WHEN 'MEDIUM' THEN 2
                 WHEN 'LOW' THEN 1
                 ELSE 0
             END DESC,
             last_updated DESC
"#;

pub struct SqlitePlannerRepository {
    db: Arc<Database>,
}

impl SqlitePlannerRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PlannerRepository for SqlitePlannerRepository {
    async fn find_destination(&self, term: &str) -> CoreResult<Option<Destination>> {
        let pattern = format!("%{}%", term);
        let pool = self.db.pool().await;
        let rows = records::query(
            &pool,
            "SELECT * FROM destinations WHERE destination_name LIKE ? OR country LIKE ? ORDER BY destination_id",
            &params![pattern.as_str(), pattern.as_str()],
        )
        .await?;
        Ok(rows.into_iter().next().map(records::decode).transpose()?)
    }

    async fn list_attractions(&self, destination_id: i64) -> CoreResult<Vec<Attraction>> {
        let pool = self.db.pool().await;
        let rows = records::query(
            &pool,
            "SELECT * FROM attractions WHERE destination_id = ? AND active = 1 ORDER BY rating DESC",
            &params![destination_id],
        )
        .await?;
        Ok(records::decode_all(rows)?)
    }

    async fn list_active_advisories(
        &self,
        destination_id: i64,
        today: NaiveDate,
    ) -> CoreResult<Vec<TravelAdvisory>> {
        let pool = self.db.pool().await;
        let rows = records::query(
            &pool,
            ACTIVE_ADVISORIES_SQL,
            &params![destination_id, today.to_string()],
        )
        .await?;
        Ok(records::decode_all(rows)?)
    }

    async fn save_itinerary(&self, itinerary: &NewItinerary) -> CoreResult<i64> {
        let plan = serde_json::to_string(&itinerary.plan).map_err(StoreError::from)?;
        let pool = self.db.pool().await;
        let itinerary_id = records::insert(
            &pool,
            r#"INSERT INTO travel_itineraries
               (user_id, destination_id, itinerary_name, start_date, end_date,
                duration_days, budget_amount, itinerary_data, status)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, 'DRAFT')"#,
            &params![
                itinerary.user_id,
                itinerary.destination_id,
                itinerary.itinerary_name.as_str(),
                itinerary.start_date.to_string(),
                itinerary.end_date.to_string(),
                itinerary.duration_days,
                itinerary.budget_amount,
                plan,
            ],
        )
        .await?;
        Ok(itinerary_id)
    }
}
