// src/repositories/mod.rs
//
// Marketing report repositories
//
// RULES:
// - Read-only: no repository writes to the marketing database
// - No business logic, no event emission
// - No cross-repository calls
// - Explicit SQL only
// - No rows is an empty result, never an error

pub mod audience_repository;
pub mod campaign_repository;
pub mod demand_repository;
pub mod group_booking_repository;
pub mod partnership_repository;
pub mod promotion_repository;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use audience_repository::{AudienceRepository, SqliteAudienceRepository};
pub use campaign_repository::{CampaignRepository, SqliteCampaignRepository};
pub use demand_repository::{DemandRepository, SqliteDemandRepository, LOW_SALES_THRESHOLD};
pub use group_booking_repository::{GroupBookingRepository, SqliteGroupBookingRepository};
pub use partnership_repository::{PartnershipRepository, SqlitePartnershipRepository};
pub use promotion_repository::{PromotionRepository, SqlitePromotionRepository};
