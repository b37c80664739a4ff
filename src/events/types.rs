// events/types.rs
//
// Domain events of the back office.
// Each event is a fact about a mutation that has already been applied.
//
// RULES:
// - Events are emitted only after a mutation succeeded
// - Events are immutable
// - Events carry keys and display data, never store references

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::EntityKind;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ident) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid {
                self.event_id
            }

            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }

            fn event_type(&self) -> &'static str {
                stringify!($event)
            }
        }
    };
}

// ============================================================================
// RECORD EVENTS
// ============================================================================

/// A record was inserted into the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: EntityKind,
    pub key: u32,
}

impl RecordAdded {
    pub fn new(kind: EntityKind, key: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            key,
        }
    }
}

impl_domain_event!(RecordAdded);

/// A stored record had its fields replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: EntityKind,
    pub key: u32,
}

impl RecordUpdated {
    pub fn new(kind: EntityKind, key: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            key,
        }
    }
}

impl_domain_event!(RecordUpdated);

/// A record was removed from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: EntityKind,
    pub key: u32,
}

impl RecordDeleted {
    pub fn new(kind: EntityKind, key: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            key,
        }
    }
}

impl_domain_event!(RecordDeleted);

// ============================================================================
// GROUP BOOKING EVENTS
// ============================================================================

/// A group sale was recorded for a show
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupBookingConfirmed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub group_sale_id: u32,
    /// Name of the show the group is booked for
    pub event_name: String,
    pub group_id: u32,
    pub group_size: u32,
}

impl GroupBookingConfirmed {
    pub fn new(group_sale_id: u32, event_name: String, group_id: u32, group_size: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            group_sale_id,
            event_name,
            group_id,
            group_size,
        }
    }
}

impl_domain_event!(GroupBookingConfirmed);

/// A group sale was withdrawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupBookingCancelled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub group_sale_id: u32,
    pub event_name: String,
    pub group_id: u32,
    pub group_size: u32,
}

impl GroupBookingCancelled {
    pub fn new(group_sale_id: u32, event_name: String, group_id: u32, group_size: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            group_sale_id,
            event_name,
            group_id,
            group_size,
        }
    }
}

impl_domain_event!(GroupBookingCancelled);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(RecordAdded::new(EntityKind::Show, 1).event_type(), "RecordAdded");
        assert_eq!(RecordDeleted::new(EntityKind::Film, 2).event_type(), "RecordDeleted");
        assert_eq!(
            GroupBookingConfirmed::new(3, "Movie Night".to_string(), 2, 15).event_type(),
            "GroupBookingConfirmed"
        );
    }

    #[test]
    fn test_each_event_gets_its_own_id() {
        let first = RecordUpdated::new(EntityKind::Client, 1);
        let second = RecordUpdated::new(EntityKind::Client, 1);
        assert_ne!(first.event_id(), second.event_id());
    }
}
