// src/repositories/promotion_repository.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rusqlite::params;

use crate::db::ConnectionPool;
use crate::domain::ForecastWindow;
use crate::error::AppResult;

/// Discounts, price changes and their effect on bookings
pub trait PromotionRepository: Send + Sync {
    /// Discount id -> percentage for one discount type
    fn promotional_discounts(
        &self,
        event_id: &str,
        discount_type: &str,
    ) -> AppResult<BTreeMap<String, f64>>;

    /// Adjustment date -> new price, inside the window
    fn price_adjustments(
        &self,
        event_id: &str,
        window: ForecastWindow,
    ) -> AppResult<BTreeMap<String, f64>>;

    /// Bookings for the named show that came through a campaign
    fn promotion_impact_report(&self, event_name: &str) -> AppResult<i64>;

    /// Bookings for the named show sold at a discount
    fn used_discounted_tickets(&self, event_name: &str) -> AppResult<i64>;
}

pub struct SqlitePromotionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePromotionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn count_for_show(&self, condition: &str, event_name: &str) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let sql = format!(
            "SELECT COUNT(*) FROM bookings b
             JOIN shows s ON b.show_id = s.show_id
             WHERE s.show_title = ?1 AND {}",
            condition
        );
        let count: i64 = conn.query_row(&sql, params![event_name], |row| row.get(0))?;

        Ok(count)
    }
}

impl PromotionRepository for SqlitePromotionRepository {
    fn promotional_discounts(
        &self,
        event_id: &str,
        discount_type: &str,
    ) -> AppResult<BTreeMap<String, f64>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT discount_id, discount_percentage FROM discounts
             WHERE event_id = ?1 AND discount_type = ?2",
        )?;

        let discounts: BTreeMap<String, f64> = stmt
            .query_map(params![event_id, discount_type], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<_, _>>()?;

        Ok(discounts)
    }

    fn price_adjustments(
        &self,
        event_id: &str,
        window: ForecastWindow,
    ) -> AppResult<BTreeMap<String, f64>> {
        let conn = self.pool.get()?;
        let since = window.start_date(Utc::now().date_naive());

        let mut stmt = conn.prepare(
            "SELECT adjustment_date, new_price FROM price_adjustments
             WHERE event_id = ?1 AND DATE(adjustment_date) >= ?2",
        )?;

        let adjustments: BTreeMap<String, f64> = stmt
            .query_map(params![event_id, since.to_string()], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<Result<_, _>>()?;

        Ok(adjustments)
    }

    fn promotion_impact_report(&self, event_name: &str) -> AppResult<i64> {
        self.count_for_show("b.campaign_id IS NOT NULL", event_name)
    }

    fn used_discounted_tickets(&self, event_name: &str) -> AppResult<i64> {
        self.count_for_show("b.is_discount_applied = 1", event_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_fixtures::{days_ago, seeded_pool};

    #[test]
    fn test_promotional_discounts() {
        let repo = SqlitePromotionRepository::new(seeded_pool());

        let student = repo.promotional_discounts("E1", "Student").unwrap();
        assert_eq!(student.len(), 2);
        assert_eq!(student.get("D1"), Some(&20.0));
        assert_eq!(student.get("D3"), Some(&10.0));
    }

    #[test]
    fn test_price_adjustments_window() {
        let repo = SqlitePromotionRepository::new(seeded_pool());

        let recent = repo.price_adjustments("E1", ForecastWindow::default()).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent.get(&days_ago(3)), Some(&25.0));

        let all = repo.price_adjustments("E1", ForecastWindow::days(120)).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_show_level_counts() {
        let repo = SqlitePromotionRepository::new(seeded_pool());

        assert_eq!(repo.promotion_impact_report("The Great Show").unwrap(), 2);
        assert_eq!(repo.used_discounted_tickets("The Great Show").unwrap(), 2);
        assert_eq!(repo.used_discounted_tickets("Unknown Show").unwrap(), 0);
    }
}
