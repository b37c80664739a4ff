// src/domain/meeting.rs
//
// Meeting Entity
//
// A room booking made on behalf of a client.

use serde::{Deserialize, Serialize};

use crate::domain::{require_text, DomainResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: u32,

    /// Client the room is booked for (required)
    pub client_id: u32,

    pub date: String,
    pub time: String,
    pub room: String,
}

impl Meeting {
    pub fn new(
        client_id: u32,
        date: impl Into<String>,
        time: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            client_id,
            date: date.into(),
            time: time.into(),
            room: room.into(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

pub fn validate_meeting(meeting: &Meeting) -> DomainResult<()> {
    require_text(&meeting.date, "date", "Meeting date")?;
    require_text(&meeting.time, "time", "Meeting time")?;
    require_text(&meeting.room, "room", "Meeting room")?;
    Ok(())
}
