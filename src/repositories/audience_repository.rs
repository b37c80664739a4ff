// src/repositories/audience_repository.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use rusqlite::params;

use crate::db::ConnectionPool;
use crate::error::AppResult;

/// Who came, whether they came back, and what they thought
pub trait AudienceRepository: Send + Sync {
    /// Attendees per age group
    fn audience_demographics(&self, event_instance_id: &str) -> AppResult<BTreeMap<String, i64>>;

    /// Patrons of this event who also booked other events more than once
    fn past_visit_information(&self, event_id: &str) -> AppResult<i64>;

    /// Feedback entries per sentiment, optionally restricted to one sentiment
    fn post_event_feedback(
        &self,
        event_instance_id: &str,
        sentiment: Option<&str>,
    ) -> AppResult<BTreeMap<String, i64>>;

    /// Average score for one aspect, 0.0 when nobody rated it
    fn customer_satisfaction(&self, event_instance_id: &str, aspect: &str) -> AppResult<f64>;

    /// Negative comments about one aspect, oldest first
    fn common_complaints(&self, event_instance_id: &str, aspect: &str) -> AppResult<Vec<String>>;
}

pub struct SqliteAudienceRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteAudienceRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl AudienceRepository for SqliteAudienceRepository {
    fn audience_demographics(&self, event_instance_id: &str) -> AppResult<BTreeMap<String, i64>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT age_group, COUNT(*) FROM attendees
             WHERE event_instance_id = ?1
             GROUP BY age_group",
        )?;

        let groups: BTreeMap<String, i64> = stmt
            .query_map(params![event_instance_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;

        Ok(groups)
    }

    fn past_visit_information(&self, event_id: &str) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let repeat: i64 = conn.query_row(
            "SELECT COUNT(DISTINCT patron_id) FROM bookings
             WHERE event_id = ?1 AND patron_id IN (
                 SELECT patron_id FROM bookings
                 WHERE event_id != ?1
                 GROUP BY patron_id
                 HAVING COUNT(*) > 1
             )",
            params![event_id],
            |row| row.get(0),
        )?;

        Ok(repeat)
    }

    fn post_event_feedback(
        &self,
        event_instance_id: &str,
        sentiment: Option<&str>,
    ) -> AppResult<BTreeMap<String, i64>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT sentiment, COUNT(*) FROM feedback
             WHERE event_instance_id = ?1 AND (?2 IS NULL OR sentiment = ?2)
             GROUP BY sentiment",
        )?;

        let counts: BTreeMap<String, i64> = stmt
            .query_map(params![event_instance_id, sentiment], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<_, _>>()?;

        Ok(counts)
    }

    fn customer_satisfaction(&self, event_instance_id: &str, aspect: &str) -> AppResult<f64> {
        let conn = self.pool.get()?;

        let score: Option<f64> = conn.query_row(
            "SELECT AVG(satisfaction_score) FROM feedback
             WHERE event_instance_id = ?1 AND aspect = ?2",
            params![event_instance_id, aspect],
            |row| row.get(0),
        )?;

        Ok(score.unwrap_or(0.0))
    }

    fn common_complaints(&self, event_instance_id: &str, aspect: &str) -> AppResult<Vec<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT comment FROM feedback
             WHERE event_instance_id = ?1 AND aspect = ?2 AND sentiment = 'Negative'
             ORDER BY feedback_id",
        )?;

        let comments = stmt
            .query_map(params![event_instance_id, aspect], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(comments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_fixtures::seeded_pool;

    #[test]
    fn test_audience_demographics() {
        let repo = SqliteAudienceRepository::new(seeded_pool());

        let groups = repo.audience_demographics("E1-1").unwrap();
        assert_eq!(groups.get("18-25"), Some(&2));
        assert_eq!(groups.get("65+"), Some(&1));
        assert!(repo.audience_demographics("E9-9").unwrap().is_empty());
    }

    #[test]
    fn test_past_visit_information() {
        let repo = SqliteAudienceRepository::new(seeded_pool());

        // patron 100 booked E2 and E3 as well
        assert_eq!(repo.past_visit_information("E1").unwrap(), 1);
    }

    #[test]
    fn test_post_event_feedback_filter() {
        let repo = SqliteAudienceRepository::new(seeded_pool());

        let all = repo.post_event_feedback("E1-1", None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.get("Negative"), Some(&2));

        let negative = repo.post_event_feedback("E1-1", Some("Negative")).unwrap();
        assert_eq!(negative.len(), 1);
        assert_eq!(negative.get("Negative"), Some(&2));
    }

    #[test]
    fn test_customer_satisfaction() {
        let repo = SqliteAudienceRepository::new(seeded_pool());

        assert!((repo.customer_satisfaction("E1-1", "Seating").unwrap() - 1.5).abs() < 1e-9);
        assert_eq!(repo.customer_satisfaction("E1-1", "Lighting").unwrap(), 0.0);
    }

    #[test]
    fn test_common_complaints() {
        let repo = SqliteAudienceRepository::new(seeded_pool());

        assert_eq!(
            repo.common_complaints("E1-1", "Seating").unwrap(),
            vec!["Seats too narrow".to_string(), "No legroom".to_string()]
        );
        assert!(repo.common_complaints("E1-1", "Sound").unwrap().is_empty());
    }
}
