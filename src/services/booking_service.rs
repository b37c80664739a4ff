// src/services/booking_service.rs
//
// Group booking workflow
//
// A confirmed group booking is a GroupSale in the store. Confirming and
// cancelling go through the venue service, so every store rule applies,
// and then announce the outcome on the event bus. Notifications hang off
// those events (see NotificationService).

use std::sync::Arc;

use log::info;

use crate::domain::{DomainResult, GroupSale, Show};
use crate::events::{EventBus, GroupBookingCancelled, GroupBookingConfirmed};
use crate::services::VenueService;

pub struct BookingService {
    venue: Arc<VenueService>,
    event_bus: Arc<EventBus>,
}

impl BookingService {
    pub fn new(venue: Arc<VenueService>, event_bus: Arc<EventBus>) -> Self {
        Self { venue, event_bus }
    }

    /// Record a group sale and announce it. Returns the new group sale id.
    pub fn confirm_group_booking(
        &self,
        group_id: u32,
        show_id: u32,
        number_of_tickets: u32,
    ) -> DomainResult<u32> {
        let sale_id = self
            .venue
            .add(GroupSale::new(group_id, show_id, number_of_tickets))?;

        let event_name = self.show_name(show_id);
        info!(
            "Group {} booked {} seats for '{}' (group sale {})",
            group_id, number_of_tickets, event_name, sale_id
        );

        self.event_bus.emit(GroupBookingConfirmed::new(
            sale_id,
            event_name,
            group_id,
            number_of_tickets,
        ));

        Ok(sale_id)
    }

    /// Remove a group sale and announce it. Returns the removed sale.
    pub fn cancel_group_booking(&self, group_sale_id: u32) -> DomainResult<GroupSale> {
        let sale = self.venue.delete::<GroupSale>(group_sale_id)?;

        let event_name = self.show_name(sale.show_id);
        info!(
            "Group {} cancelled {} seats for '{}'",
            sale.group_id, sale.number_of_tickets, event_name
        );

        self.event_bus.emit(GroupBookingCancelled::new(
            sale.id,
            event_name,
            sale.group_id,
            sale.number_of_tickets,
        ));

        Ok(sale)
    }

    /// Group sales booked for one show, in booking order
    pub fn group_sales_for_show(&self, show_id: u32) -> Vec<GroupSale> {
        self.venue
            .list::<GroupSale>()
            .into_iter()
            .filter(|sale| sale.show_id == show_id)
            .collect()
    }

    fn show_name(&self, show_id: u32) -> String {
        self.venue
            .get::<Show>(show_id)
            .map(|show| show.name)
            .unwrap_or_else(|| format!("Show {}", show_id))
    }
}
