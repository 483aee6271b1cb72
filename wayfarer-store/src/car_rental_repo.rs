use async_trait::async_trait;
use std::sync::Arc;
use wayfarer_core::car_rental::{CarOffer, CarSearch, NewCarRentalBooking, Vehicle, RENTAL_TIMESTAMP_FORMAT};
use wayfarer_core::repository::CarRentalRepository;
use wayfarer_core::{CoreError, CoreResult};

use crate::database::Database;
use crate::params;
use crate::records;
use crate::StoreError;

pub struct SqliteCarRentalRepository {
    db: Arc<Database>,
}

impl SqliteCarRentalRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CarRentalRepository for SqliteCarRentalRepository {
    async fn search_vehicles(&self, search: &CarSearch) -> CoreResult<Vec<CarOffer>> {
        let pickup = format!("%{}%", search.pickup_location);
        let mut sql = String::from(
            r#"SELECT av.*, vc.category_name, vc.category_description, vc.passenger_capacity,
                      vc.luggage_capacity, crc.company_name, crl.location_name,
                      crl.address, crl.phone
               FROM available_vehicles av
               JOIN vehicle_categories vc ON av.category_id = vc.category_id
               JOIN car_rental_companies crc ON av.company_id = crc.company_id
               JOIN car_rental_locations crl ON av.location_id = crl.location_id
               WHERE (crl.city LIKE ? OR crl.location_name LIKE ?)
                 AND av.availability_status = 'AVAILABLE'"#,
        );
        let mut args = params![pickup.as_str(), pickup.as_str()];

        if let Some(car_type) = &search.car_type {
            sql.push_str(" AND vc.category_name LIKE ?");
            args.push(format!("%{}%", car_type).into());
        }
        sql.push_str(" ORDER BY av.daily_rate ASC");

        let pool = self.db.pool().await;
        let rows = records::query(&pool, &sql, &args).await?;
        Ok(records::decode_all(rows)?)
    }

    async fn get_vehicle(&self, vehicle_id: i64) -> CoreResult<Option<Vehicle>> {
        let pool = self.db.pool().await;
        let rows = records::query(
            &pool,
            "SELECT * FROM available_vehicles WHERE vehicle_id = ?",
            &params![vehicle_id],
        )
        .await?;
        Ok(rows.into_iter().next().map(records::decode).transpose()?)
    }

    async fn create_booking(&self, booking: &NewCarRentalBooking) -> CoreResult<i64> {
        let pool = self.db.pool().await;
        let mut tx = pool.begin().await.map_err(StoreError::from)?;

        let claimed = records::update(
            &mut *tx,
            "UPDATE available_vehicles SET availability_status = 'RENTED' WHERE vehicle_id = ? AND availability_status = 'AVAILABLE'",
            &params![booking.vehicle_id],
        )
        .await?;
        if claimed == 0 {
            return Err(CoreError::capacity("Vehicle is not available"));
        }

        let booking_id = records::insert(
            &mut *tx,
            r#"INSERT INTO car_rental_bookings
               (user_id, vehicle_id, pickup_location_id, dropoff_location_id,
                booking_reference, pickup_date, dropoff_date, rental_days,
                daily_rate, total_price, currency, driver_license_number, booking_status)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                       (SELECT currency FROM available_vehicles WHERE vehicle_id = ?), ?, 'CONFIRMED')"#,
            &params![
                booking.user_id,
                booking.vehicle_id,
                booking.pickup_location_id,
                booking.dropoff_location_id,
                booking.booking_reference.as_str(),
                booking.pickup_at.format(RENTAL_TIMESTAMP_FORMAT).to_string(),
                booking.dropoff_at.format(RENTAL_TIMESTAMP_FORMAT).to_string(),
                booking.rental_days,
                booking.daily_rate,
                booking.total_price,
                booking.vehicle_id,
                booking.driver_license_number.clone(),
            ],
        )
        .await?;

        tx.commit().await.map_err(StoreError::from)?;
        Ok(booking_id)
    }
}
