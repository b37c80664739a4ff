// src/services/booking_service_tests.rs
//
// Group booking workflow, end to end through the event bus

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{DomainError, EntityKind, Group, GroupSale};
    use crate::events::EventBus;
    use crate::services::notification_service::{MockNotifier, Notifier};
    use crate::services::{BookingService, NotificationService, VenueService};
    use crate::store::EntityStore;

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn wire(notifier: MockNotifier) -> (BookingService, Arc<VenueService>, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let venue = Arc::new(VenueService::new(
            EntityStore::with_sample_data(),
            Arc::clone(&bus),
        ));

        NotificationService::new(Arc::new(notifier), Arc::clone(&bus)).register_event_handlers();

        let booking = BookingService::new(Arc::clone(&venue), Arc::clone(&bus));
        (booking, venue, bus)
    }

    fn event_types(bus: &EventBus) -> Vec<String> {
        bus.get_event_log().into_iter().map(|e| e.event_type).collect()
    }

    // ========================================================================
    // CONFIRM
    // ========================================================================

    #[test]
    fn test_confirm_notifies_once_with_show_name() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify_group_booking_confirmation()
            .withf(|name, group, size| name == "Movie Night" && *group == 1 && *size == 12)
            .times(1)
            .return_const(false);
        notifier.expect_notify_group_booking_cancellation().never();

        let (booking, venue, bus) = wire(notifier);

        let sale_id = booking.confirm_group_booking(1, 2, 12).unwrap();

        assert_eq!(sale_id, 3);
        assert_eq!(
            venue.get::<GroupSale>(sale_id),
            Some(GroupSale::new(1, 2, 12).with_id(3))
        );
        assert_eq!(event_types(&bus), vec!["RecordAdded", "GroupBookingConfirmed"]);
    }

    #[test]
    fn test_refused_booking_sends_nothing() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify_group_booking_confirmation().never();

        let (booking, venue, bus) = wire(notifier);

        let error = booking.confirm_group_booking(999, 1, 5).unwrap_err();
        assert_eq!(error.to_string(), "Group with ID 999 does not exist.");

        assert!(matches!(
            booking.confirm_group_booking(1, 1, 0),
            Err(DomainError::Validation { rule: "number_of_tickets", .. })
        ));

        assert_eq!(venue.list::<GroupSale>().len(), 2);
        assert!(bus.get_event_log().is_empty());
    }

    struct BrokenNotifier;

    impl Notifier for BrokenNotifier {
        fn notify_group_booking_confirmation(&self, _: &str, _: u32, _: u32) -> bool {
            panic!("mail server down")
        }

        fn notify_group_booking_cancellation(&self, _: &str, _: u32, _: u32) -> bool {
            panic!("mail server down")
        }
    }

    #[test]
    fn test_panicking_notifier_does_not_fail_confirm() {
        let bus = Arc::new(EventBus::new());
        let venue = Arc::new(VenueService::new(
            EntityStore::with_sample_data(),
            Arc::clone(&bus),
        ));
        NotificationService::new(Arc::new(BrokenNotifier), Arc::clone(&bus))
            .register_event_handlers();
        let booking = BookingService::new(Arc::clone(&venue), Arc::clone(&bus));

        let sale_id = booking.confirm_group_booking(2, 1, 8).unwrap();
        assert!(venue.get::<GroupSale>(sale_id).is_some());

        let removed = booking.cancel_group_booking(sale_id).unwrap();
        assert_eq!(removed.group_id, 2);
    }

    // ========================================================================
    // CANCEL
    // ========================================================================

    #[test]
    fn test_cancel_removes_sale_and_notifies() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify_group_booking_cancellation()
            .withf(|name, group, size| name == "The Great Show" && *group == 1 && *size == 20)
            .times(1)
            .return_const(true);

        let (booking, venue, bus) = wire(notifier);

        let removed = booking.cancel_group_booking(1).unwrap();

        assert_eq!(removed.number_of_tickets, 20);
        assert!(venue.get::<GroupSale>(1).is_none());
        assert_eq!(event_types(&bus), vec!["RecordDeleted", "GroupBookingCancelled"]);
    }

    #[test]
    fn test_cancel_unknown_sale() {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify_group_booking_cancellation().never();

        let (booking, _venue, _bus) = wire(notifier);

        assert_eq!(
            booking.cancel_group_booking(42).unwrap_err(),
            DomainError::NotFound {
                kind: EntityKind::GroupSale,
                id: 42
            }
        );
    }

    #[test]
    fn test_cancelling_last_sale_unblocks_group_delete() {
        let notifier = {
            let mut mock = MockNotifier::new();
            mock.expect_notify_group_booking_cancellation()
                .return_const(false);
            mock
        };
        let (booking, venue, _bus) = wire(notifier);

        assert!(venue.delete::<Group>(2).is_err());
        booking.cancel_group_booking(2).unwrap();
        assert!(venue.delete::<Group>(2).is_ok());
        assert!(booking.group_sales_for_show(2).is_empty());
    }
}
