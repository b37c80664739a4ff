// src/domain/film_order.rs
//
// Film Order Entity
//
// A distributor order for a print/licence of a catalogued film.

use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmOrder {
    pub id: u32,
    pub film_id: u32,
    pub order_date: String,
}

impl FilmOrder {
    pub fn new(film_id: u32, order_date: impl Into<String>) -> Self {
        Self {
            id: 0,
            film_id,
            order_date: order_date.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

pub fn validate_film_order(order: &FilmOrder) -> DomainResult<()> {
    require_text(&order.order_date, "order_date", "Film order date")
}
