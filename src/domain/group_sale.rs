// src/domain/group_sale.rs
//
// Group Sale Entity
//
// Tickets sold to a Group for a Show. Both references are required and
// resolved by the entity store.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSale {
    pub id: u32,
    pub group_id: u32,
    pub show_id: u32,
    pub number_of_tickets: u32,
}

impl GroupSale {
    pub fn new(group_id: u32, show_id: u32, number_of_tickets: u32) -> Self {
        Self {
            id: 0,
            group_id,
            show_id,
            number_of_tickets,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

pub fn validate_group_sale(sale: &GroupSale) -> DomainResult<()> {
    if sale.number_of_tickets == 0 {
        return Err(DomainError::validation(
            "number_of_tickets",
            "Number of tickets must be greater than 0.",
        ));
    }
    Ok(())
}
