// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all record modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod client;
pub mod film;
pub mod film_order;
pub mod friend_member;
pub mod group;
pub mod group_sale;
pub mod held_seat;
pub mod invoice;
pub mod marketing;
pub mod meeting;
pub mod screening;
pub mod show;
pub mod statistics;
pub mod ticket_sale;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use client::{validate_client, Client};
pub use film::{validate_film, Film};
pub use film_order::{validate_film_order, FilmOrder};
pub use friend_member::{validate_friend_member, FriendMember};
pub use group::{validate_group, Group};
pub use group_sale::{validate_group_sale, GroupSale};
pub use held_seat::{validate_held_seat, HeldSeat};
pub use invoice::{validate_invoice, Invoice};
pub use meeting::{validate_meeting, Meeting};
pub use screening::{validate_screening, Screening};
pub use show::{validate_show, Show};
pub use ticket_sale::{validate_ticket_sale, TicketSale};

// Derived data
pub use marketing::{ForecastWindow, GroupBookingDetails};
pub use statistics::{BoxOfficeSummary, RecordCounts, ShowSales};

// ============================================================================
// ENTITY KINDS
// ============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every record kind held by the entity store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Show,
    Client,
    Screening,
    Film,
    Meeting,
    Invoice,
    GroupSale,
    Group,
    FriendMember,
    HeldSeat,
    TicketSale,
    FilmOrder,
}

impl EntityKind {
    pub const ALL: [EntityKind; 12] = [
        EntityKind::Show,
        EntityKind::Client,
        EntityKind::Screening,
        EntityKind::Film,
        EntityKind::Meeting,
        EntityKind::Invoice,
        EntityKind::GroupSale,
        EntityKind::Group,
        EntityKind::FriendMember,
        EntityKind::HeldSeat,
        EntityKind::TicketSale,
        EntityKind::FilmOrder,
    ];

    /// Plural name of the collection holding this kind, as shown to users
    pub fn collection_name(&self) -> &'static str {
        match self {
            EntityKind::Show => "Shows",
            EntityKind::Client => "Clients",
            EntityKind::Screening => "Screenings",
            EntityKind::Film => "Films",
            EntityKind::Meeting => "Meetings",
            EntityKind::Invoice => "Invoices",
            EntityKind::GroupSale => "Group Sales",
            EntityKind::Group => "Groups",
            EntityKind::FriendMember => "FoL Members",
            EntityKind::HeldSeat => "Held Seats",
            EntityKind::TicketSale => "Ticket Sales",
            EntityKind::FilmOrder => "Film Orders",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Show => "Show",
            EntityKind::Client => "Client",
            EntityKind::Screening => "Screening",
            EntityKind::Film => "Film",
            EntityKind::Meeting => "Meeting",
            EntityKind::Invoice => "Invoice",
            EntityKind::GroupSale => "Group Sale",
            EntityKind::Group => "Group",
            EntityKind::FriendMember => "FoL Member",
            EntityKind::HeldSeat => "Held Seat",
            EntityKind::TicketSale => "Ticket Sale",
            EntityKind::FilmOrder => "Film Order",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

/// Domain-level errors
/// These represent refused mutations of the entity store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A required field is empty, a reference does not resolve,
    /// or a Show points at both a Screening and a Film
    #[error("{message}")]
    Validation { rule: &'static str, message: String },

    #[error("{kind} with ID {id} not found.")]
    NotFound { kind: EntityKind, id: u32 },

    #[error(
        "Cannot delete {kind} with ID {id} because it has associated {}.",
        join_collections(.dependents)
    )]
    Dependency {
        kind: EntityKind,
        id: u32,
        dependents: Vec<EntityKind>,
    },
}

impl DomainError {
    pub fn validation(rule: &'static str, message: impl Into<String>) -> Self {
        DomainError::Validation {
            rule,
            message: message.into(),
        }
    }

    /// A referenced record of `target` kind does not exist
    pub fn missing_reference(rule: &'static str, target: EntityKind, id: u32) -> Self {
        DomainError::validation(rule, format!("{} with ID {} does not exist.", target, id))
    }

    /// Name of the violated rule, for validation failures only
    pub fn rule(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation { rule, .. } => Some(*rule),
            _ => None,
        }
    }
}

fn join_collections(kinds: &[EntityKind]) -> String {
    kinds
        .iter()
        .map(EntityKind::collection_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

// ============================================================================
// SHARED FIELD RULES
// ============================================================================

/// Text fields must carry something other than whitespace
pub(crate) fn require_text(
    value: &str,
    rule: &'static str,
    subject: &str,
) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(
            rule,
            format!("{} cannot be empty.", subject),
        ));
    }
    Ok(())
}
