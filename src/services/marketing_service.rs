// src/services/marketing_service.rs
//
// Marketing reports facade
//
// One entry point over the report repositories. Forecast windows arrive as
// user text ("30 days") and are parsed here; everything else passes through.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::db::ConnectionPool;
use crate::domain::{ForecastWindow, GroupBookingDetails};
use crate::error::AppResult;
use crate::repositories::{
    AudienceRepository, CampaignRepository, DemandRepository, GroupBookingRepository,
    PartnershipRepository, PromotionRepository, SqliteAudienceRepository,
    SqliteCampaignRepository, SqliteDemandRepository, SqliteGroupBookingRepository,
    SqlitePartnershipRepository, SqlitePromotionRepository,
};

pub struct MarketingService {
    campaigns: Arc<dyn CampaignRepository>,
    audience: Arc<dyn AudienceRepository>,
    demand: Arc<dyn DemandRepository>,
    promotions: Arc<dyn PromotionRepository>,
    partnerships: Arc<dyn PartnershipRepository>,
    group_bookings: Arc<dyn GroupBookingRepository>,
}

impl MarketingService {
    pub fn new(
        campaigns: Arc<dyn CampaignRepository>,
        audience: Arc<dyn AudienceRepository>,
        demand: Arc<dyn DemandRepository>,
        promotions: Arc<dyn PromotionRepository>,
        partnerships: Arc<dyn PartnershipRepository>,
        group_bookings: Arc<dyn GroupBookingRepository>,
    ) -> Self {
        Self {
            campaigns,
            audience,
            demand,
            promotions,
            partnerships,
            group_bookings,
        }
    }

    /// All reports backed by the same SQLite pool
    pub fn with_pool(pool: Arc<ConnectionPool>) -> Self {
        Self::new(
            Arc::new(SqliteCampaignRepository::new(Arc::clone(&pool))),
            Arc::new(SqliteAudienceRepository::new(Arc::clone(&pool))),
            Arc::new(SqliteDemandRepository::new(Arc::clone(&pool))),
            Arc::new(SqlitePromotionRepository::new(Arc::clone(&pool))),
            Arc::new(SqlitePartnershipRepository::new(Arc::clone(&pool))),
            Arc::new(SqliteGroupBookingRepository::new(pool)),
        )
    }

    // ========================================================================
    // CAMPAIGNS
    // ========================================================================

    pub fn marketing_efforts(
        &self,
        event_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<BTreeMap<String, i64>> {
        self.campaigns.marketing_efforts(event_id, start, end)
    }

    pub fn ticket_purchase_statistics(&self, campaign_id: &str) -> AppResult<i64> {
        self.campaigns.ticket_purchase_statistics(campaign_id)
    }

    pub fn promotional_channel_effectiveness(
        &self,
        event_id: &str,
    ) -> AppResult<BTreeMap<String, f64>> {
        self.campaigns.promotional_channel_effectiveness(event_id)
    }

    pub fn advertising_campaigns(&self) -> AppResult<BTreeMap<String, String>> {
        self.campaigns.advertising_campaigns()
    }

    // ========================================================================
    // AUDIENCE
    // ========================================================================

    pub fn audience_demographics(
        &self,
        event_instance_id: &str,
    ) -> AppResult<BTreeMap<String, i64>> {
        self.audience.audience_demographics(event_instance_id)
    }

    pub fn past_visit_information(&self, event_id: &str) -> AppResult<i64> {
        self.audience.past_visit_information(event_id)
    }

    pub fn post_event_feedback(
        &self,
        event_instance_id: &str,
        sentiment: Option<&str>,
    ) -> AppResult<BTreeMap<String, i64>> {
        self.audience.post_event_feedback(event_instance_id, sentiment)
    }

    pub fn customer_satisfaction(&self, event_instance_id: &str, aspect: &str) -> AppResult<f64> {
        self.audience.customer_satisfaction(event_instance_id, aspect)
    }

    pub fn common_complaints(
        &self,
        event_instance_id: &str,
        aspect: &str,
    ) -> AppResult<Vec<String>> {
        self.audience.common_complaints(event_instance_id, aspect)
    }

    // ========================================================================
    // DEMAND
    // ========================================================================

    pub fn ticket_sales_trends(
        &self,
        event_id: &str,
        forecast_window: &str,
    ) -> AppResult<BTreeMap<NaiveDate, i64>> {
        self.demand
            .ticket_sales_trends(event_id, ForecastWindow::parse(forecast_window))
    }

    pub fn high_traffic_dates(&self, event_id: &str) -> AppResult<Vec<NaiveDate>> {
        self.demand.high_traffic_dates(event_id)
    }

    pub fn pre_sale_trends(&self, event_id: &str, ticket_type: &str) -> AppResult<i64> {
        self.demand.pre_sale_trends(event_id, ticket_type)
    }

    pub fn ticket_categories(&self, event_id: &str) -> AppResult<BTreeMap<String, i64>> {
        self.demand.ticket_categories(event_id)
    }

    pub fn low_sales_alerts(&self) -> AppResult<Vec<String>> {
        self.demand.low_sales_alerts()
    }

    pub fn events_needing_promotion(&self) -> AppResult<Vec<String>> {
        self.demand.events_needing_promotion()
    }

    // ========================================================================
    // PROMOTIONS
    // ========================================================================

    pub fn promotional_discounts(
        &self,
        event_id: &str,
        discount_type: &str,
    ) -> AppResult<BTreeMap<String, f64>> {
        self.promotions.promotional_discounts(event_id, discount_type)
    }

    pub fn price_adjustments(
        &self,
        event_id: &str,
        timeframe: &str,
    ) -> AppResult<BTreeMap<String, f64>> {
        self.promotions
            .price_adjustments(event_id, ForecastWindow::parse(timeframe))
    }

    pub fn promotion_impact_report(&self, event_name: &str) -> AppResult<i64> {
        self.promotions.promotion_impact_report(event_name)
    }

    pub fn used_discounted_tickets(&self, event_name: &str) -> AppResult<i64> {
        self.promotions.used_discounted_tickets(event_name)
    }

    // ========================================================================
    // PARTNERSHIPS
    // ========================================================================

    pub fn partnership_details(
        &self,
        event_id: &str,
        partner_type: &str,
    ) -> AppResult<BTreeMap<String, String>> {
        self.partnerships.partnership_details(event_id, partner_type)
    }

    pub fn branding_obligations(
        &self,
        event_id: &str,
        venue_section: &str,
    ) -> AppResult<BTreeMap<String, String>> {
        self.partnerships.branding_obligations(event_id, venue_section)
    }

    pub fn sponsor_area_requirements(
        &self,
        event_id: &str,
        sponsor_id: &str,
    ) -> AppResult<BTreeMap<String, String>> {
        self.partnerships.sponsor_area_requirements(event_id, sponsor_id)
    }

    // ========================================================================
    // GROUP BOOKINGS
    // ========================================================================

    pub fn group_booking_details(
        &self,
        event_name: &str,
        group_id: &str,
    ) -> AppResult<Option<GroupBookingDetails>> {
        self.group_bookings.group_booking_details(event_name, group_id)
    }

    pub fn companies_booked_for_event(&self, event_name: &str) -> AppResult<Vec<String>> {
        self.group_bookings.companies_booked_for_event(event_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_fixtures::{days_ago, seeded_pool};

    #[test]
    fn test_window_text_is_parsed() {
        let service = MarketingService::with_pool(seeded_pool());

        let default_window = service.ticket_sales_trends("E1", "whenever").unwrap();
        let thirty = service.ticket_sales_trends("E1", "30 days").unwrap();
        assert_eq!(default_window, thirty);

        let sixty = service.ticket_sales_trends("E1", "60 days").unwrap();
        assert_eq!(sixty.values().sum::<i64>(), 4);

        let adjustments = service.price_adjustments("E1", "7 days").unwrap();
        assert_eq!(adjustments.keys().collect::<Vec<_>>(), vec![&days_ago(3)]);
    }

    #[test]
    fn test_oversized_window_covers_all_history() {
        let service = MarketingService::with_pool(seeded_pool());

        let everything = service.ticket_sales_trends("E1", "1000000000 days").unwrap();
        let century = service.ticket_sales_trends("E1", "36500 days").unwrap();
        assert_eq!(everything, century);

        let adjustments = service.price_adjustments("E1", "1000000000 days").unwrap();
        assert!(adjustments.contains_key(&days_ago(3)));
    }

    #[test]
    fn test_reports_share_one_database() {
        let service = MarketingService::with_pool(seeded_pool());

        assert_eq!(service.ticket_purchase_statistics("C1").unwrap(), 2);
        assert_eq!(service.past_visit_information("E1").unwrap(), 1);
        assert_eq!(service.used_discounted_tickets("The Great Show").unwrap(), 2);
        assert_eq!(
            service.companies_booked_for_event("The Great Show").unwrap(),
            vec!["Acme Ltd", "Globex"]
        );
        assert_eq!(
            service.events_needing_promotion().unwrap(),
            vec!["Movie Night", "Quiet Evening"]
        );
    }
}
