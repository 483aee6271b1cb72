use async_trait::async_trait;
use std::sync::Arc;
use wayfarer_core::hotel::{HotelOffer, HotelSearch, NewHotelBooking, RoomType};
use wayfarer_core::repository::HotelRepository;
use wayfarer_core::CoreResult;

use crate::database::Database;
use crate::params;
use crate::records;

pub struct SqliteHotelRepository {
    db: Arc<Database>,
}

impl SqliteHotelRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for SqliteHotelRepository {
    async fn search_hotels(&self, search: &HotelSearch) -> CoreResult<Vec<HotelOffer>> {
        let location = format!("%{}%", search.location);
        let mut sql = String::from(
            r#"SELECT h.*, rt.room_type_id, rt.room_type_name, rt.room_description, rt.max_occupancy,
                      rt.base_price_per_night, rt.bed_type, rt.room_size_sqm, rt.currency
               FROM hotels h
               JOIN room_types rt ON h.hotel_id = rt.hotel_id
               WHERE (h.city LIKE ? OR h.country LIKE ?)
                 AND rt.max_occupancy >= ?
                 AND rt.active = 1
                 AND h.active = 1"#,
        );
        let mut args = params![location.as_str(), location.as_str(), search.guests];

        if let Some(room_type) = &search.room_type {
            sql.push_str(" AND rt.room_type_name LIKE ?");
            args.push(format!("%{}%", room_type).into());
        }
        sql.push_str(" ORDER BY h.guest_rating DESC, rt.base_price_per_night ASC");

        let pool = self.db.pool().await;
        let rows = records::query(&pool, &sql, &args).await?;
        Ok(records::decode_all(rows)?)
    }

    async fn get_room_type(&self, room_type_id: i64) -> CoreResult<Option<RoomType>> {
        let pool = self.db.pool().await;
        let rows = records::query(&pool, "SELECT * FROM room_types WHERE room_type_id = ?", &params![room_type_id]).await?;
        Ok(rows.into_iter().next().map(records::decode).transpose()?)
    }

    async fn create_booking(&self, booking: &NewHotelBooking) -> CoreResult<i64> {
        let pool = self.db.pool().await;
        let booking_id = records::insert(
            &pool,
            r#"INSERT INTO hotel_bookings
               (user_id, hotel_id, room_type_id, booking_reference, check_in_date,
                check_out_date, guest_count, room_count, total_nights, price_per_night,
                total_price, currency, special_requests, guest_names, booking_status)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
                       (SELECT currency FROM room_types WHERE room_type_id = ?), ?, ?, 'CONFIRMED')"#,
            &params![
                booking.user_id,
                booking.hotel_id,
                booking.room_type_id,
                booking.booking_reference.as_str(),
                booking.check_in.to_string(),
                booking.check_out.to_string(),
                booking.guest_count,
                booking.room_count,
                booking.total_nights,
                booking.price_per_night,
                booking.total_price,
                booking.room_type_id,
                booking.special_requests.to_string(),
                booking.guest_names.to_string(),
            ],
        )
        .await?;
        Ok(booking_id)
    }
}
