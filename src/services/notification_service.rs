// src/services/notification_service.rs
//
// Group booking notifications
//
// Notifications are fire-and-forget: they run from event handlers after the
// booking has been stored, and nothing they do can undo or fail the booking.

use std::sync::Arc;

use log::{info, warn};

use crate::events::{EventBus, GroupBookingCancelled, GroupBookingConfirmed};

/// Delivery channel for booking notices. Returns whether anything was sent.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_group_booking_confirmation(
        &self,
        event_name: &str,
        group_id: u32,
        group_size: u32,
    ) -> bool;

    fn notify_group_booking_cancellation(
        &self,
        event_name: &str,
        group_id: u32,
        group_size: u32,
    ) -> bool;
}

/// Writes notices to the log. There is no mail or SMS channel, so nothing is
/// ever reported as sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn confirmation_notice(
        event_name: &str,
        group_id: u32,
        group_size: u32,
    ) -> (String, String) {
        (
            format!("Group Booking Confirmation for - {} by {}", event_name, group_id),
            format!(
                "A group booking has been confirmed for event '{}' with {} seats. by {}",
                event_name, group_size, group_id
            ),
        )
    }

    pub fn cancellation_notice(
        event_name: &str,
        group_id: u32,
        group_size: u32,
    ) -> (String, String) {
        (
            format!("Group Booking Cancellation for - {} by {}", event_name, group_id),
            format!(
                "A group booking has been cancelled for event '{}' that had {} seats booked. by {}",
                event_name, group_size, group_id
            ),
        )
    }
}

impl Notifier for LogNotifier {
    fn notify_group_booking_confirmation(
        &self,
        event_name: &str,
        group_id: u32,
        group_size: u32,
    ) -> bool {
        let (subject, message) = Self::confirmation_notice(event_name, group_id, group_size);
        info!("[NOTIFY] {} | {}", subject, message);
        false
    }

    fn notify_group_booking_cancellation(
        &self,
        event_name: &str,
        group_id: u32,
        group_size: u32,
    ) -> bool {
        let (subject, message) = Self::cancellation_notice(event_name, group_id, group_size);
        info!("[NOTIFY] {} | {}", subject, message);
        false
    }
}

pub struct NotificationService {
    notifier: Arc<dyn Notifier>,
    event_bus: Arc<EventBus>,
}

impl NotificationService {
    pub fn new(notifier: Arc<dyn Notifier>, event_bus: Arc<EventBus>) -> Self {
        Self { notifier, event_bus }
    }

    pub fn register_event_handlers(&self) {
        let notifier = Arc::clone(&self.notifier);
        self.event_bus.subscribe::<GroupBookingConfirmed, _>(move |event| {
            let sent = notifier.notify_group_booking_confirmation(
                &event.event_name,
                event.group_id,
                event.group_size,
            );
            if !sent {
                warn!("Confirmation for group sale {} was not delivered", event.group_sale_id);
            }
        });

        let notifier = Arc::clone(&self.notifier);
        self.event_bus.subscribe::<GroupBookingCancelled, _>(move |event| {
            let sent = notifier.notify_group_booking_cancellation(
                &event.event_name,
                event.group_id,
                event.group_size,
            );
            if !sent {
                warn!("Cancellation for group sale {} was not delivered", event.group_sale_id);
            }
        });
    }
}
