use serde::{Deserialize, Serialize};

/// A scheduled show in one of the Hall's venues.
/// A show may be tied to a Screening or to a Film, but never to both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Identity key (0 = let the store assign one)
    pub id: u32,

    /// Calendar date, as entered on the form (e.g. "2025-04-10")
    pub date: String,

    /// Start time, as entered on the form (e.g. "18:00")
    pub start_time: String,

    pub name: String,

    pub venue: String,

    /// Free-form price and discount text (e.g. "20.0/10%")
    pub price_discount: String,

    pub description: String,

    /// Optional link to a Screening
    pub screening_id: Option<u32>,

    /// Optional link to a Film
    pub film_id: Option<u32>,
}

impl Show {
    /// Create a show with no Screening or Film link
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        name: impl Into<String>,
        venue: impl Into<String>,
        price_discount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            date: date.into(),
            start_time: start_time.into(),
            name: name.into(),
            venue: venue.into(),
            price_discount: price_discount.into(),
            description: description.into(),
            screening_id: None,
            film_id: None,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn for_screening(mut self, screening_id: u32) -> Self {
        self.screening_id = Some(screening_id);
        self
    }

    pub fn for_film(mut self, film_id: u32) -> Self {
        self.film_id = Some(film_id);
        self
    }
}

impl std::fmt::Display for Show {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} {}, {})", self.name, self.date, self.start_time, self.venue)
    }
}
