// src/lib.rs
// Lancaster Music Hall - back-office management core
//
// Architecture:
// - Store-centric: every back-office record lives in one checked in-memory store
// - Event-driven: services react to each other through the event bus
// - Explicit: no record is ever created or removed as a side effect
// - Reports: marketing figures are read from the SQLite marketing database
// - Application layer: the form-screen boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;
pub mod store;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    BoxOfficeSummary, Client, DomainError, DomainResult, EntityKind, Film, FilmOrder,
    ForecastWindow, FriendMember, Group, GroupBookingDetails, GroupSale, HeldSeat, Invoice,
    Meeting, RecordCounts, Screening, Show, ShowSales, TicketSale,
};

// ============================================================================
// PUBLIC API - Store
// ============================================================================

pub use store::{dependents_of, EntityStore, Record, Reference};

// ============================================================================
// PUBLIC API - Errors & Configuration
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DomainEvent, EventBus, EventLogEntry, GroupBookingCancelled,
    GroupBookingConfirmed, RecordAdded, RecordDeleted, RecordUpdated,
};

// ============================================================================
// PUBLIC API - Database & Repositories
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use repositories::{
    AudienceRepository, CampaignRepository, DemandRepository, GroupBookingRepository,
    PartnershipRepository, PromotionRepository,
};

// ============================================================================
// PUBLIC API - Services & Application
// ============================================================================

pub use services::{
    BookingService, LogNotifier, MarketingService, NotificationService, Notifier,
    StatisticsService, VenueService,
};

pub use application::{AppState, CommandResult, ErrorResponse, ErrorType};
pub use application::commands;
