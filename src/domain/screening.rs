// src/domain/screening.rs
//
// Screening Entity
//
// One showing of a catalogued film. The film must exist before the
// screening can be stored; that check lives in the entity store.

use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screening {
    pub id: u32,

    /// Film being screened (required)
    pub film_id: u32,

    pub date: String,
    pub time: String,
    pub venue: String,
}

impl Screening {
    pub fn new(
        film_id: u32,
        date: impl Into<String>,
        time: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            film_id,
            date: date.into(),
            time: time.into(),
            venue: venue.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// Validates Screening field invariants
pub fn validate_screening(screening: &Screening) -> DomainResult<()> {
    require_text(&screening.date, "date", "Screening date")?;
    require_text(&screening.time, "time", "Screening time")?;
    require_text(&screening.venue, "venue", "Screening venue")?;
    Ok(())
}
