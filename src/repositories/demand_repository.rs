// src/repositories/demand_repository.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rusqlite::params;

use crate::db::ConnectionPool;
use crate::domain::ForecastWindow;
use crate::error::AppResult;

/// Shows with fewer bookings than this are flagged
pub const LOW_SALES_THRESHOLD: i64 = 10;

/// Booking volume over time and per category
pub trait DemandRepository: Send + Sync {
    /// Bookings per day inside the window
    fn ticket_sales_trends(
        &self,
        event_id: &str,
        window: ForecastWindow,
    ) -> AppResult<BTreeMap<NaiveDate, i64>>;

    /// Days whose booking count beats the event's daily average, oldest first
    fn high_traffic_dates(&self, event_id: &str) -> AppResult<Vec<NaiveDate>>;

    /// Bookings of one ticket type made before the show date
    fn pre_sale_trends(&self, event_id: &str, ticket_type: &str) -> AppResult<i64>;

    /// Bookings per ticket type
    fn ticket_categories(&self, event_id: &str) -> AppResult<BTreeMap<String, i64>>;

    /// Show titles with fewer than `LOW_SALES_THRESHOLD` bookings
    fn low_sales_alerts(&self) -> AppResult<Vec<String>>;

    /// Show titles booked less than the average booked show
    fn events_needing_promotion(&self) -> AppResult<Vec<String>>;
}

pub struct SqliteDemandRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteDemandRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn titles(&self, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<String>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(sql)?;

        let titles = stmt
            .query_map(args, |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(titles)
    }
}

fn parse_day(raw: &str) -> AppResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")?)
}

impl DemandRepository for SqliteDemandRepository {
    fn ticket_sales_trends(
        &self,
        event_id: &str,
        window: ForecastWindow,
    ) -> AppResult<BTreeMap<NaiveDate, i64>> {
        let conn = self.pool.get()?;
        let since = window.start_date(Utc::now().date_naive());

        let mut stmt = conn.prepare(
            "SELECT DATE(booking_date) AS sale_date, COUNT(*) FROM bookings
             WHERE event_id = ?1 AND DATE(booking_date) >= ?2
             GROUP BY sale_date",
        )?;

        let rows = stmt
            .query_map(params![event_id, since.to_string()], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(day, sales)| parse_day(&day).map(|day| (day, sales)))
            .collect()
    }

    fn high_traffic_dates(&self, event_id: &str) -> AppResult<Vec<NaiveDate>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT DATE(booking_date) AS day FROM bookings
             WHERE event_id = ?1
             GROUP BY day
             HAVING COUNT(*) > (
                 SELECT AVG(daily) FROM (
                     SELECT COUNT(*) AS daily FROM bookings
                     WHERE event_id = ?1
                     GROUP BY DATE(booking_date)
                 )
             )
             ORDER BY day",
        )?;

        let days = stmt
            .query_map(params![event_id], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        days.iter().map(|day| parse_day(day)).collect()
    }

    fn pre_sale_trends(&self, event_id: &str, ticket_type: &str) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM bookings b
             JOIN shows s ON b.show_id = s.show_id
             WHERE b.event_id = ?1 AND b.ticket_type = ?2
               AND DATE(b.booking_date) < DATE(s.event_date)",
            params![event_id, ticket_type],
            |row| row.get(0),
        )?;

        Ok(count)
    }

    fn ticket_categories(&self, event_id: &str) -> AppResult<BTreeMap<String, i64>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT ticket_type, COUNT(*) FROM bookings
             WHERE event_id = ?1
             GROUP BY ticket_type",
        )?;

        let categories: BTreeMap<String, i64> = stmt
            .query_map(params![event_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;

        Ok(categories)
    }

    fn low_sales_alerts(&self) -> AppResult<Vec<String>> {
        self.titles(
            "SELECT s.show_title FROM shows s
             LEFT JOIN bookings b ON s.show_id = b.show_id
             GROUP BY s.show_id, s.show_title
             HAVING COUNT(b.booking_id) < ?1
             ORDER BY s.show_id",
            params![LOW_SALES_THRESHOLD],
        )
    }

    fn events_needing_promotion(&self) -> AppResult<Vec<String>> {
        self.titles(
            "SELECT s.show_title FROM shows s
             LEFT JOIN bookings b ON s.show_id = b.show_id
             GROUP BY s.show_id, s.show_title
             HAVING COUNT(b.booking_id) < (
                 SELECT AVG(booked) FROM (
                     SELECT COUNT(*) AS booked FROM bookings GROUP BY show_id
                 )
             )
             ORDER BY s.show_id",
            params![],
        )
    }
}
