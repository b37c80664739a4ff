// src/store/sample_data.rs
//
// Fixture data the back office starts with on a fresh install.
// Records are written straight into the tables in dependency order;
// `store_tests` checks that every one of them passes the store's rules.

use crate::domain::{
    Client, Film, FilmOrder, FriendMember, Group, GroupSale, HeldSeat, Invoice, Meeting,
    Screening, Show, TicketSale,
};

use super::EntityStore;

impl EntityStore {
    /// Store pre-filled with two of everything
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();

        store.films = vec![
            Film::new("Action Movie", "Action").with_id(1),
            Film::new("Drama Film", "Drama").with_id(2),
        ];

        store.screenings = vec![
            Screening::new(1, "2025-04-11", "19:00", "Theater 3").with_id(1),
            Screening::new(2, "2025-04-13", "17:00", "Theater 1").with_id(2),
        ];

        store.shows = vec![
            Show::new(
                "2025-04-10",
                "18:00",
                "The Great Show",
                "Theater 1",
                "20.0/10%",
                "A great show",
            )
            .with_id(1)
            .for_film(1),
            Show::new(
                "2025-04-12",
                "20:00",
                "Movie Night",
                "Theater 2",
                "15.0/5%",
                "Movie night event",
            )
            .with_id(2)
            .for_screening(1),
        ];

        store.clients = vec![
            Client::new("John Doe", "123 Main St", "john@example.com").with_id(1),
            Client::new("Jane Smith", "456 Oak Ave", "jane@example.com").with_id(2),
        ];

        store.meetings = vec![
            Meeting::new(1, "2025-04-10", "09:00", "Room 101").with_id(1),
            Meeting::new(2, "2025-04-11", "11:00", "Room 102").with_id(2),
        ];

        store.invoices = vec![
            Invoice::new(1, 100.0).with_id(1),
            Invoice::new(2, 150.0).with_id(2),
        ];

        store.groups = vec![
            Group::new("School Group", "Alice Brown").with_id(1),
            Group::new("Corporate Team", "Bob Wilson").with_id(2),
        ];

        store.group_sales = vec![
            GroupSale::new(1, 1, 20).with_id(1),
            GroupSale::new(2, 2, 15).with_id(2),
        ];

        store.friend_members = vec![
            FriendMember::new(1, true, 15.0),
            FriendMember::new(2, false, 0.0),
        ];

        store.held_seats = vec![
            HeldSeat::new(1, "A1-A5").with_id(1),
            HeldSeat::new(2, "B1-B3").with_id(2),
        ];

        store.ticket_sales = vec![
            TicketSale::new(1, 5, 100.0).with_id(1),
            TicketSale::new(2, 3, 45.0).with_id(2),
        ];

        store.film_orders = vec![
            FilmOrder::new(1, "2025-04-01").with_id(1),
            FilmOrder::new(2, "2025-04-02").with_id(2),
        ];

        store
    }
}
