use serde::{Deserialize, Serialize};

use crate::domain::EntityKind;

/// Sales picture of a single show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowSales {
    pub show_id: u32,
    pub show_name: String,

    /// Tickets sold over the counter
    pub box_office_tickets: u64,

    /// Tickets sold through group sales
    pub group_tickets: u64,

    /// Sum of ticket sale amounts
    pub revenue: f64,

    /// Number of held seat blocks
    pub held_seat_blocks: u32,
}

impl ShowSales {
    pub fn tickets_sold(&self) -> u64 {
        self.box_office_tickets + self.group_tickets
    }
}

/// Totals across the whole store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxOfficeSummary {
    pub total_shows: u32,
    pub total_tickets: u64,
    pub total_revenue: f64,
    pub active_members: u32,
    pub total_invoiced: f64,
    pub shows: Vec<ShowSales>,
}

/// Number of stored records per kind, in `EntityKind::ALL` order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub entries: Vec<(EntityKind, usize)>,
}

impl RecordCounts {
    pub fn get(&self, kind: EntityKind) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}
