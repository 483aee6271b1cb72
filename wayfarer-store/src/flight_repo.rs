use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;
use wayfarer_core::flight::{Flight, FlightBooking, FlightOffer, NewFlightBooking};
use wayfarer_core::repository::FlightRepository;
use wayfarer_core::{CoreError, CoreResult};

use crate::database::Database;
use crate::params;
use crate::records;
use crate::StoreError;

const FLIGHT_OFFER_SQL: &str = r#"
    SELECT f.*, a.airline_name, a.airline_code,
           orig.airport_code AS origin_code, orig.city AS origin_city,
           dest.airport_code AS destination_code, dest.city AS destination_city
    FROM flights f
    JOIN airlines a ON f.airline_id = a.airline_id
    JOIN airports orig ON f.origin_airport_id = orig.airport_id
    JOIN airports dest ON f.destination_airport_id = dest.airport_id
    WHERE f.origin_airport_id = ? AND f.destination_airport_id = ?
      AND DATE(f.departure_time) = DATE(?)
      AND f.available_seats >= ?
    ORDER BY f.departure_time
"#;

pub struct SqliteFlightRepository {
    db: Arc<Database>,
}

impl SqliteFlightRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FlightRepository for SqliteFlightRepository {
    async fn resolve_airport(&self, term: &str) -> CoreResult<Option<i64>> {
        let pool = self.db.pool().await;
        let rows = records::query(
            &pool,
            "SELECT airport_id FROM airports WHERE airport_code = ? OR city LIKE ? ORDER BY airport_id",
            &params![term.to_uppercase(), format!("%{}%", term)],
        )
        .await?;

        let id = rows.first().and_then(|r| r.get("airport_id")).and_then(|v| v.as_i64());
        if id.is_none() {
            debug!("No airport matches {:?}", term);
        }
        Ok(id)
    }

    async fn search_flights(
        &self,
        origin_airport_id: i64,
        destination_airport_id: i64,
        date: NaiveDate,
        min_seats: u32,
    ) -> CoreResult<Vec<FlightOffer>> {
        let pool = self.db.pool().await;
        let rows = records::query(
            &pool,
            FLIGHT_OFFER_SQL,
            &params![origin_airport_id, destination_airport_id, date.to_string(), min_seats],
        )
        .await?;
        Ok(records::decode_all(rows)?)
    }

    async fn get_flight(&self, flight_id: i64) -> CoreResult<Option<Flight>> {
        let pool = self.db.pool().await;
        let rows = records::query(&pool, "SELECT * FROM flights WHERE flight_id = ?", &params![flight_id]).await?;
        Ok(rows.into_iter().next().map(records::decode).transpose()?)
    }

    async fn create_booking(&self, booking: &NewFlightBooking) -> CoreResult<i64> {
        let pool = self.db.pool().await;
        let mut tx = pool.begin().await.map_err(StoreError::from)?;

        let taken = records::update(
            &mut *tx,
            "UPDATE flights SET available_seats = available_seats - ? WHERE flight_id = ? AND available_seats >= ?",
            &params![booking.passenger_count, booking.flight_id, booking.passenger_count],
        )
        .await?;
        if taken == 0 {
            // Dropping the transaction rolls it back.
            return Err(CoreError::capacity("Insufficient seats available"));
        }

        let booking_id = records::insert(
            &mut *tx,
            r#"INSERT INTO flight_bookings
               (user_id, flight_id, booking_reference, passenger_count, total_price,
                currency, special_requests, booking_status)
               VALUES (?, ?, ?, ?, ?, (SELECT currency FROM flights WHERE flight_id = ?), ?, 'CONFIRMED')"#,
            &params![
                booking.user_id,
                booking.flight_id,
                booking.booking_reference.as_str(),
                booking.passenger_count,
                booking.total_price,
                booking.flight_id,
                booking.special_requests.to_string(),
            ],
        )
        .await?;

        tx.commit().await.map_err(StoreError::from)?;
        Ok(booking_id)
    }

    async fn get_booking(&self, booking_reference: &str) -> CoreResult<Option<FlightBooking>> {
        let pool = self.db.pool().await;
        let rows = records::query(
            &pool,
            r#"SELECT fb.booking_id, fb.user_id, fb.flight_id, fb.booking_reference,
                      fb.passenger_count, fb.total_price, fb.booking_status, f.currency
               FROM flight_bookings fb
               JOIN flights f ON fb.flight_id = f.flight_id
               WHERE fb.booking_reference = ?"#,
            &params![booking_reference],
        )
        .await?;
        Ok(rows.into_iter().next().map(records::decode).transpose()?)
    }

    async fn cancel_booking(&self, booking: &FlightBooking) -> CoreResult<()> {
        let pool = self.db.pool().await;
        let mut tx = pool.begin().await.map_err(StoreError::from)?;

        let flipped = records::update(
            &mut *tx,
            "UPDATE flight_bookings SET booking_status = 'CANCELLED' WHERE booking_reference = ? AND booking_status <> 'CANCELLED'",
            &params![booking.booking_reference.as_str()],
        )
        .await?;
        if flipped == 0 {
            return Err(CoreError::AlreadyCancelledError("Booking already cancelled".into()));
        }

        records::update(
            &mut *tx,
            "UPDATE flights SET available_seats = available_seats + ? WHERE flight_id = ?",
            &params![booking.passenger_count, booking.flight_id],
        )
        .await?;

        tx.commit().await.map_err(StoreError::from)?;
        Ok(())
    }
}
