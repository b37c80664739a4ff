// src/domain/client.rs
//
// Client Entity
//
// A business or private customer of the Hall. Meetings, invoices and
// Friends-of-Lancaster membership all hang off a client.

use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub email: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            address: address.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// Validates Client invariants: name, address and email are required
pub fn validate_client(client: &Client) -> DomainResult<()> {
    require_text(&client.name, "name", "Client name")?;
    require_text(&client.address, "address", "Client address")?;
    require_text(&client.email, "email", "Client email")?;
    Ok(())
}
