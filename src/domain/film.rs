// src/domain/film.rs

use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainResult};

/// A film in the Hall's catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: u32,
    pub title: String,
    pub genre: String,
}

impl Film {
    pub fn new(title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            genre: genre.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

impl std::fmt::Display for Film {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validates Film invariants
pub fn validate_film(film: &Film) -> DomainResult<()> {
    require_text(&film.title, "title", "Film title")?;
    require_text(&film.genre, "genre", "Film genre")?;
    Ok(())
}
