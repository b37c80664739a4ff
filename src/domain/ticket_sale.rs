// src/domain/ticket_sale.rs

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A box-office sale of one or more tickets for a show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketSale {
    pub id: u32,
    pub show_id: u32,
    pub number_of_tickets: u32,
    pub total_amount: f64,
}

impl TicketSale {
    pub fn new(show_id: u32, number_of_tickets: u32, total_amount: f64) -> Self {
        Self {
            id: 0,
            show_id,
            number_of_tickets,
            total_amount,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// Validates TicketSale invariants
pub fn validate_ticket_sale(sale: &TicketSale) -> DomainResult<()> {
    if sale.number_of_tickets == 0 {
        return Err(DomainError::validation(
            "number_of_tickets",
            "Number of tickets must be greater than 0.",
        ));
    }
    if !(sale.total_amount > 0.0) {
        return Err(DomainError::validation(
            "total_amount",
            "Total amount must be greater than 0.",
        ));
    }
    Ok(())
}
