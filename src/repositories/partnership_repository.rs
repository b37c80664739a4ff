// src/repositories/partnership_repository.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use rusqlite::params;

use crate::db::ConnectionPool;
use crate::error::AppResult;

/// Partner and sponsor obligations for an event
pub trait PartnershipRepository: Send + Sync {
    /// Partner name -> branding requirements, for one partner type
    fn partnership_details(
        &self,
        event_id: &str,
        partner_type: &str,
    ) -> AppResult<BTreeMap<String, String>>;

    /// Partner name -> branding requirements, for one area of the venue
    fn branding_obligations(
        &self,
        event_id: &str,
        venue_section: &str,
    ) -> AppResult<BTreeMap<String, String>>;

    /// Requirement type -> value for one sponsor
    fn sponsor_area_requirements(
        &self,
        event_id: &str,
        sponsor_id: &str,
    ) -> AppResult<BTreeMap<String, String>>;
}

pub struct SqlitePartnershipRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePartnershipRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn pairs(
        &self,
        sql: &str,
        event_id: &str,
        filter: &str,
    ) -> AppResult<BTreeMap<String, String>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(sql)?;

        let pairs: BTreeMap<String, String> = stmt
            .query_map(params![event_id, filter], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<_, _>>()?;

        Ok(pairs)
    }
}

impl PartnershipRepository for SqlitePartnershipRepository {
    fn partnership_details(
        &self,
        event_id: &str,
        partner_type: &str,
    ) -> AppResult<BTreeMap<String, String>> {
        self.pairs(
            "SELECT partner_name, branding_requirements FROM partnerships
             WHERE event_id = ?1 AND partner_type = ?2",
            event_id,
            partner_type,
        )
    }

    fn branding_obligations(
        &self,
        event_id: &str,
        venue_section: &str,
    ) -> AppResult<BTreeMap<String, String>> {
        self.pairs(
            "SELECT partner_name, branding_requirements FROM partnerships
             WHERE event_id = ?1 AND venue_section = ?2",
            event_id,
            venue_section,
        )
    }

    fn sponsor_area_requirements(
        &self,
        event_id: &str,
        sponsor_id: &str,
    ) -> AppResult<BTreeMap<String, String>> {
        self.pairs(
            "SELECT requirement_type, requirement_value FROM sponsor_requirements
             WHERE event_id = ?1 AND sponsor_id = ?2",
            event_id,
            sponsor_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_fixtures::seeded_pool;

    #[test]
    fn test_partnership_details() {
        let repo = SqlitePartnershipRepository::new(seeded_pool());

        let sponsors = repo.partnership_details("E1", "Sponsor").unwrap();
        assert_eq!(sponsors.len(), 2);
        assert_eq!(sponsors["Brewery Co"], "Logo on banners");
        assert_eq!(sponsors["Bakery"], "Stand at entrance");
    }

    #[test]
    fn test_branding_obligations() {
        let repo = SqlitePartnershipRepository::new(seeded_pool());

        let stage = repo.branding_obligations("E1", "Stage").unwrap();
        assert_eq!(stage.len(), 1);
        assert_eq!(stage["Radio Lancs"], "Spoken mention");
    }

    #[test]
    fn test_sponsor_area_requirements() {
        let repo = SqlitePartnershipRepository::new(seeded_pool());

        let s1 = repo.sponsor_area_requirements("E1", "S1").unwrap();
        assert_eq!(s1["Banner"], "2 x 3m");
        assert_eq!(s1["Table"], "Near bar");
        assert!(repo.sponsor_area_requirements("E2", "S1").unwrap().is_empty());
    }
}
