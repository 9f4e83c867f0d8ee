use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::models::{BookingRecord, BookingStatus};

pub fn insert_train_booking(conn: &Connection, record: &BookingRecord) -> anyhow::Result<String> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string();
    conn.execute(
        "INSERT INTO train_bookings (id, travel_date, phone, origin, destination, travel_class, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            id,
            record.date,
            record.phone,
            record.origin,
            record.destination,
            record.travel_class,
            record.status.as_str(),
            now,
        ],
    )?;
    Ok(id)
}

/// Rows in insertion order.
pub fn list_train_bookings(conn: &Connection) -> anyhow::Result<Vec<BookingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT travel_date, phone, origin, destination, travel_class, status
         FROM train_bookings ORDER BY rowid",
    )?;

    let rows = stmt
        .query_map([], |row| {
            let status: String = row.get(5)?;
            let status = BookingStatus::parse(&status)
                .ok_or_else(|| {
                    rusqlite::Error::InvalidColumnType(5, "status".to_string(), Type::Text)
                })?;

            Ok(BookingRecord {
                date: row.get(0)?,
                phone: row.get(1)?,
                origin: row.get(2)?,
                destination: row.get(3)?,
                travel_class: row.get(4)?,
                status,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows)
}
