// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::events::{create_event_bus, EventBus};
use crate::services::{
    BookingService, MarketingService, NotificationService, Notifier, StatisticsService,
    VenueService,
};
use crate::store::EntityStore;

/// Everything the form commands need, shared behind `Arc`s.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub venue_service: Arc<VenueService>,
    pub booking_service: Arc<BookingService>,
    pub statistics_service: Arc<StatisticsService>,
    pub marketing_service: Arc<MarketingService>,
}

impl AppState {
    /// Wire the services around `store` and register the event handlers
    pub fn build(
        store: EntityStore,
        pool: Arc<ConnectionPool>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let event_bus = Arc::new(create_event_bus());

        let venue_service = Arc::new(VenueService::new(store, Arc::clone(&event_bus)));
        let booking_service = Arc::new(BookingService::new(
            Arc::clone(&venue_service),
            Arc::clone(&event_bus),
        ));
        let statistics_service = Arc::new(StatisticsService::new(Arc::clone(&venue_service)));
        let marketing_service = Arc::new(MarketingService::with_pool(pool));

        NotificationService::new(notifier, Arc::clone(&event_bus)).register_event_handlers();

        Self {
            event_bus,
            venue_service,
            booking_service,
            statistics_service,
            marketing_service,
        }
    }
}
