// src/domain/held_seat.rs

use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainResult};

/// A block of seats held back for a show, e.g. "A1-A5"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeldSeat {
    pub id: u32,
    pub show_id: u32,
    pub seats: String,
}

impl HeldSeat {
    pub fn new(show_id: u32, seats: impl Into<String>) -> Self {
        Self {
            id: 0,
            show_id,
            seats: seats.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

pub fn validate_held_seat(held: &HeldSeat) -> DomainResult<()> {
    require_text(&held.seats, "seats", "Held seats")
}
