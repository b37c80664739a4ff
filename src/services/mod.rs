// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod booking_service;
pub mod marketing_service;
pub mod notification_service;
pub mod statistics_service;
pub mod venue_service;

#[cfg(test)]
mod booking_service_tests;

pub use booking_service::BookingService;
pub use marketing_service::MarketingService;
pub use notification_service::{LogNotifier, NotificationService, Notifier};
pub use statistics_service::StatisticsService;
pub use venue_service::VenueService;
