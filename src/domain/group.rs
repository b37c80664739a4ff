// src/domain/group.rs

use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainResult};

/// A party (school, company, club) that books tickets together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
    pub contact_person: String,
}

impl Group {
    pub fn new(name: impl Into<String>, contact_person: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            contact_person: contact_person.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

pub fn validate_group(group: &Group) -> DomainResult<()> {
    require_text(&group.name, "name", "Group name")?;
    require_text(&group.contact_person, "contact_person", "Group contact person")?;
    Ok(())
}
