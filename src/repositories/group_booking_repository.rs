// src/repositories/group_booking_repository.rs

use std::sync::Arc;

use rusqlite::{params, OptionalExtension, Row};

use crate::db::ConnectionPool;
use crate::domain::GroupBookingDetails;
use crate::error::AppResult;

/// Company group bookings recorded against shows
pub trait GroupBookingRepository: Send + Sync {
    fn group_booking_details(
        &self,
        event_name: &str,
        group_id: &str,
    ) -> AppResult<Option<GroupBookingDetails>>;

    /// Distinct company names, alphabetical
    fn companies_booked_for_event(&self, event_name: &str) -> AppResult<Vec<String>>;
}

pub struct SqliteGroupBookingRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteGroupBookingRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_details(row: &Row) -> Result<GroupBookingDetails, rusqlite::Error> {
        Ok(GroupBookingDetails {
            group_size: row.get("group_size")?,
            company_name: row.get("company_name")?,
            contact_name: row.get("contact_name")?,
            contact_email: row.get("contact_email")?,
        })
    }
}

impl GroupBookingRepository for SqliteGroupBookingRepository {
    fn group_booking_details(
        &self,
        event_name: &str,
        group_id: &str,
    ) -> AppResult<Option<GroupBookingDetails>> {
        let conn = self.pool.get()?;

        let details = conn
            .query_row(
                "SELECT gb.group_size, c.company_name, c.contact_name, c.contact_email
                 FROM group_bookings gb
                 JOIN bookings b ON gb.booking_id = b.booking_id
                 JOIN companies c ON gb.company_id = c.company_id
                 JOIN shows s ON b.show_id = s.show_id
                 WHERE s.show_title = ?1 AND gb.group_id = ?2
                 LIMIT 1",
                params![event_name, group_id],
                Self::row_to_details,
            )
            .optional()?;

        Ok(details)
    }

    fn companies_booked_for_event(&self, event_name: &str) -> AppResult<Vec<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT DISTINCT c.company_name
             FROM group_bookings gb
             JOIN bookings b ON gb.booking_id = b.booking_id
             JOIN companies c ON gb.company_id = c.company_id
             JOIN shows s ON b.show_id = s.show_id
             WHERE s.show_title = ?1
             ORDER BY c.company_name",
        )?;

        let companies = stmt
            .query_map(params![event_name], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(companies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_fixtures::seeded_pool;

    #[test]
    fn test_group_booking_details() {
        let repo = SqliteGroupBookingRepository::new(seeded_pool());

        let details = repo
            .group_booking_details("The Great Show", "G1")
            .unwrap()
            .unwrap();
        assert_eq!(details.group_size, 12);
        assert_eq!(details.company_name, "Acme Ltd");
        assert_eq!(details.contact_email, "wile@acme.test");

        assert!(repo
            .group_booking_details("Movie Night", "G1")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_companies_booked_for_event() {
        let repo = SqliteGroupBookingRepository::new(seeded_pool());

        assert_eq!(
            repo.companies_booked_for_event("The Great Show").unwrap(),
            vec!["Acme Ltd", "Globex"]
        );
        assert_eq!(
            repo.companies_booked_for_event("Movie Night").unwrap(),
            vec!["Acme Ltd"]
        );
    }
}
