// src/domain/invoice.rs

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// An amount billed to a client (room hire, catering, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u32,
    pub client_id: u32,
    pub amount: f64,
}

impl Invoice {
    pub fn new(client_id: u32, amount: f64) -> Self {
        Self {
            id: 0,
            client_id,
            amount,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// Amount must be strictly positive (NaN is rejected)
pub fn validate_invoice(invoice: &Invoice) -> DomainResult<()> {
    if !(invoice.amount > 0.0) {
        return Err(DomainError::validation(
            "amount",
            "Invoice amount must be greater than 0.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount() {
        assert!(validate_invoice(&Invoice::new(1, 100.0)).is_ok());
    }

    #[test]
    fn test_zero_negative_and_nan_fail() {
        assert!(validate_invoice(&Invoice::new(1, 0.0)).is_err());
        assert!(validate_invoice(&Invoice::new(1, -5.0)).is_err());
        assert!(validate_invoice(&Invoice::new(1, f64::NAN)).is_err());
    }
}
