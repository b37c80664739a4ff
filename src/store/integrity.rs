// src/store/integrity.rs
//
// Referential integrity
//
// Insert/update: every foreign key on the incoming record must resolve.
// Delete: no record in a dependent table may still point at the target.
// The dependents table below is the single declaration of who may block
// a delete.

use crate::domain::{
    Client, DomainError, DomainResult, EntityKind, Film, FilmOrder, FriendMember, Group,
    GroupSale, HeldSeat, Invoice, Meeting, Screening, Show, TicketSale,
};

use super::record::Record;
use super::EntityStore;

/// Kinds whose records must be gone before a record of the key kind can be deleted
pub const DEPENDENTS: &[(EntityKind, &[EntityKind])] = &[
    (
        EntityKind::Show,
        &[EntityKind::GroupSale, EntityKind::TicketSale, EntityKind::HeldSeat],
    ),
    (
        EntityKind::Client,
        &[EntityKind::Meeting, EntityKind::Invoice, EntityKind::FriendMember],
    ),
    (EntityKind::Screening, &[EntityKind::Show]),
    (
        EntityKind::Film,
        &[EntityKind::Screening, EntityKind::Show, EntityKind::FilmOrder],
    ),
    (EntityKind::Group, &[EntityKind::GroupSale]),
];

/// Dependent kinds declared for `kind` (empty for leaf kinds)
pub fn dependents_of(kind: EntityKind) -> &'static [EntityKind] {
    DEPENDENTS
        .iter()
        .find(|(target, _)| *target == kind)
        .map(|(_, dependents)| *dependents)
        .unwrap_or(&[])
}

/// Every foreign key on `record` must name an existing record
pub(crate) fn resolve_references<R: Record>(store: &EntityStore, record: &R) -> DomainResult<()> {
    for reference in record.references() {
        if !contains(store, reference.target, reference.id) {
            return Err(DomainError::missing_reference(
                reference.field,
                reference.target,
                reference.id,
            ));
        }
    }
    Ok(())
}

/// Dependent kinds that still hold a reference to `kind`/`id`, in declaration order
pub(crate) fn blocking_dependents(
    store: &EntityStore,
    kind: EntityKind,
    id: u32,
) -> Vec<EntityKind> {
    dependents_of(kind)
        .iter()
        .copied()
        .filter(|dependent| references_any(store, *dependent, kind, id))
        .collect()
}

/// Whether a record of `kind` with key `id` exists
pub(crate) fn contains(store: &EntityStore, kind: EntityKind, id: u32) -> bool {
    match kind {
        EntityKind::Show => has_key::<Show>(store, id),
        EntityKind::Client => has_key::<Client>(store, id),
        EntityKind::Screening => has_key::<Screening>(store, id),
        EntityKind::Film => has_key::<Film>(store, id),
        EntityKind::Meeting => has_key::<Meeting>(store, id),
        EntityKind::Invoice => has_key::<Invoice>(store, id),
        EntityKind::GroupSale => has_key::<GroupSale>(store, id),
        EntityKind::Group => has_key::<Group>(store, id),
        EntityKind::FriendMember => has_key::<FriendMember>(store, id),
        EntityKind::HeldSeat => has_key::<HeldSeat>(store, id),
        EntityKind::TicketSale => has_key::<TicketSale>(store, id),
        EntityKind::FilmOrder => has_key::<FilmOrder>(store, id),
    }
}

/// Whether any record of `dependent` kind references `target`/`id`
fn references_any(store: &EntityStore, dependent: EntityKind, target: EntityKind, id: u32) -> bool {
    match dependent {
        EntityKind::Show => points_at::<Show>(store, target, id),
        EntityKind::Client => points_at::<Client>(store, target, id),
        EntityKind::Screening => points_at::<Screening>(store, target, id),
        EntityKind::Film => points_at::<Film>(store, target, id),
        EntityKind::Meeting => points_at::<Meeting>(store, target, id),
        EntityKind::Invoice => points_at::<Invoice>(store, target, id),
        EntityKind::GroupSale => points_at::<GroupSale>(store, target, id),
        EntityKind::Group => points_at::<Group>(store, target, id),
        EntityKind::FriendMember => points_at::<FriendMember>(store, target, id),
        EntityKind::HeldSeat => points_at::<HeldSeat>(store, target, id),
        EntityKind::TicketSale => points_at::<TicketSale>(store, target, id),
        EntityKind::FilmOrder => points_at::<FilmOrder>(store, target, id),
    }
}

fn has_key<R: Record>(store: &EntityStore, id: u32) -> bool {
    R::table(store).iter().any(|record| record.key() == id)
}

fn points_at<R: Record>(store: &EntityStore, target: EntityKind, id: u32) -> bool {
    R::table(store).iter().any(|record| {
        record
            .references()
            .iter()
            .any(|reference| reference.target == target && reference.id == id)
    })
}
