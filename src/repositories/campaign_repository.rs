// src/repositories/campaign_repository.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rusqlite::params;

use crate::db::ConnectionPool;
use crate::error::AppResult;

/// Marketing campaign reach and conversion
pub trait CampaignRepository: Send + Sync {
    /// Total clicks per campaign type for campaigns running entirely inside `start..=end`
    fn marketing_efforts(
        &self,
        event_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<BTreeMap<String, i64>>;

    /// Bookings attributed to a campaign
    fn ticket_purchase_statistics(&self, campaign_id: &str) -> AppResult<i64>;

    /// Click-through rate (percent) per campaign type; 0 when nothing was shown
    fn promotional_channel_effectiveness(&self, event_id: &str) -> AppResult<BTreeMap<String, f64>>;

    /// Active campaigns: campaign id -> event id
    fn advertising_campaigns(&self) -> AppResult<BTreeMap<String, String>>;
}

pub struct SqliteCampaignRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCampaignRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl CampaignRepository for SqliteCampaignRepository {
    fn marketing_efforts(
        &self,
        event_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<BTreeMap<String, i64>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT campaign_type, SUM(clicks)
             FROM marketing_campaigns
             WHERE event_id = ?1 AND start_date >= ?2 AND end_date <= ?3
             GROUP BY campaign_type",
        )?;

        let efforts: BTreeMap<String, i64> = stmt
            .query_map(
                params![event_id, start.to_string(), end.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?
            .collect::<Result<_, _>>()?;

        Ok(efforts)
    }

    fn ticket_purchase_statistics(&self, campaign_id: &str) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let sold: i64 = conn.query_row(
            "SELECT COUNT(*) FROM bookings WHERE campaign_id = ?1",
            params![campaign_id],
            |row| row.get(0),
        )?;

        Ok(sold)
    }

    fn promotional_channel_effectiveness(
        &self,
        event_id: &str,
    ) -> AppResult<BTreeMap<String, f64>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT campaign_type,
                    CAST(SUM(clicks) AS REAL) * 100.0 / NULLIF(SUM(impressions), 0)
             FROM marketing_campaigns
             WHERE event_id = ?1
             GROUP BY campaign_type",
        )?;

        let effectiveness: BTreeMap<String, f64> = stmt
            .query_map(params![event_id], |row| {
                let rate: Option<f64> = row.get(1)?;
                Ok((row.get(0)?, rate.unwrap_or(0.0)))
            })?
            .collect::<Result<_, _>>()?;

        Ok(effectiveness)
    }

    fn advertising_campaigns(&self) -> AppResult<BTreeMap<String, String>> {
        let conn = self.pool.get()?;

        let mut stmt =
            conn.prepare("SELECT campaign_id, event_id FROM marketing_campaigns WHERE active = 1")?;

        let campaigns: BTreeMap<String, String> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;

        Ok(campaigns)
    }
}
