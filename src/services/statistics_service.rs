// src/services/statistics_service.rs
//
// Box-office figures derived from the store. Every figure is computed from
// one consistent view of the store and nothing is cached.

use std::sync::Arc;

use crate::domain::{
    BoxOfficeSummary, FriendMember, GroupSale, HeldSeat, Invoice, Show, ShowSales, TicketSale,
};
use crate::services::VenueService;
use crate::store::EntityStore;

pub struct StatisticsService {
    venue: Arc<VenueService>,
}

impl StatisticsService {
    pub fn new(venue: Arc<VenueService>) -> Self {
        Self { venue }
    }

    /// None if the show does not exist
    pub fn show_sales(&self, show_id: u32) -> Option<ShowSales> {
        self.venue.read(|store| {
            store
                .get::<Show>(show_id)
                .map(|show| sales_for(store, &show))
        })
    }

    pub fn box_office_summary(&self) -> BoxOfficeSummary {
        self.venue.read(|store| {
            let shows: Vec<ShowSales> = store
                .list::<Show>()
                .iter()
                .map(|show| sales_for(store, show))
                .collect();

            BoxOfficeSummary {
                total_shows: shows.len() as u32,
                total_tickets: shows.iter().map(ShowSales::tickets_sold).sum(),
                total_revenue: shows.iter().map(|s| s.revenue).sum(),
                active_members: store
                    .list::<FriendMember>()
                    .iter()
                    .filter(|member| member.is_member)
                    .count() as u32,
                total_invoiced: store.list::<Invoice>().iter().map(|i| i.amount).sum(),
                shows,
            }
        })
    }

    /// Names of shows with fewer than `threshold` tickets sold, in store order
    pub fn low_sales_shows(&self, threshold: u32) -> Vec<String> {
        self.box_office_summary()
            .shows
            .into_iter()
            .filter(|sales| sales.tickets_sold() < u64::from(threshold))
            .map(|sales| sales.show_name)
            .collect()
    }
}

fn sales_for(store: &EntityStore, show: &Show) -> ShowSales {
    let ticket_sales: Vec<TicketSale> = store
        .list::<TicketSale>()
        .into_iter()
        .filter(|sale| sale.show_id == show.id)
        .collect();

    ShowSales {
        show_id: show.id,
        show_name: show.name.clone(),
        box_office_tickets: ticket_sales
            .iter()
            .map(|s| u64::from(s.number_of_tickets))
            .sum(),
        group_tickets: store
            .list::<GroupSale>()
            .iter()
            .filter(|sale| sale.show_id == show.id)
            .map(|sale| u64::from(sale.number_of_tickets))
            .sum(),
        revenue: ticket_sales.iter().map(|s| s.total_amount).sum(),
        held_seat_blocks: store
            .list::<HeldSeat>()
            .iter()
            .filter(|held| held.show_id == show.id)
            .count() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;

    fn service() -> (StatisticsService, Arc<VenueService>) {
        let venue = Arc::new(VenueService::new(
            EntityStore::with_sample_data(),
            Arc::new(EventBus::new()),
        ));
        (StatisticsService::new(Arc::clone(&venue)), venue)
    }

    #[test]
    fn test_show_sales() {
        let (stats, _venue) = service();

        let sales = stats.show_sales(1).unwrap();
        assert_eq!(sales.show_name, "The Great Show");
        assert_eq!(sales.box_office_tickets, 5);
        assert_eq!(sales.group_tickets, 20);
        assert_eq!(sales.tickets_sold(), 25);
        assert_eq!(sales.revenue, 100.0);
        assert_eq!(sales.held_seat_blocks, 1);

        assert!(stats.show_sales(99).is_none());
    }

    #[test]
    fn test_box_office_summary() {
        let (stats, _venue) = service();

        let summary = stats.box_office_summary();
        assert_eq!(summary.total_shows, 2);
        assert_eq!(summary.total_tickets, 43);
        assert_eq!(summary.total_revenue, 145.0);
        assert_eq!(summary.active_members, 1);
        assert_eq!(summary.total_invoiced, 250.0);
    }

    #[test]
    fn test_low_sales_shows_follow_the_store() {
        let (stats, venue) = service();

        assert!(stats.low_sales_shows(10).is_empty());
        assert_eq!(stats.low_sales_shows(20), vec!["Movie Night"]);

        venue.add(TicketSale::new(2, 4, 60.0)).unwrap();
        assert!(stats.low_sales_shows(20).is_empty());
    }

    #[test]
    fn test_large_ticket_counts_do_not_wrap() {
        let (stats, venue) = service();

        venue.add(TicketSale::new(2, u32::MAX, 1.0)).unwrap();
        venue.add(TicketSale::new(2, u32::MAX, 1.0)).unwrap();

        let sales = stats.show_sales(2).unwrap();
        assert_eq!(sales.box_office_tickets, 2 * u64::from(u32::MAX) + 3);
        assert_eq!(
            stats.box_office_summary().total_tickets,
            2 * u64::from(u32::MAX) + 43
        );
        assert_eq!(stats.low_sales_shows(u32::MAX), vec!["The Great Show"]);

        // the store is still usable afterwards
        assert_eq!(venue.list::<TicketSale>().len(), 4);
    }
}
