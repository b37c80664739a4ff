// src/store/mod.rs
//
// EntityStore - in-memory back-office tables with integrity checks
//
// RULES:
// - Tables are insertion-ordered (the UI renders them in this order)
// - Reads hand out copies, never references into the tables
// - Every mutation is fully checked before anything changes
// - A refused mutation leaves the store exactly as it was
// - No record is ever created as a side effect of another mutation

pub mod integrity;
pub mod operations;
pub mod record;
pub mod sample_data;


pub use integrity::{dependents_of, DEPENDENTS};
pub use record::{Record, Reference};

use log::{debug, warn};

use crate::domain::{
    Client, DomainError, DomainResult, EntityKind, Film, FilmOrder, FriendMember, Group,
    GroupSale, HeldSeat, Invoice, Meeting, RecordCounts, Screening, Show, TicketSale,
};

/// The twelve back-office tables.
///
/// Not synchronized: callers sharing one store across threads must hold a
/// single lock for the duration of each operation (see `VenueService`).
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    shows: Vec<Show>,
    clients: Vec<Client>,
    screenings: Vec<Screening>,
    films: Vec<Film>,
    meetings: Vec<Meeting>,
    invoices: Vec<Invoice>,
    group_sales: Vec<GroupSale>,
    groups: Vec<Group>,
    friend_members: Vec<FriendMember>,
    held_seats: Vec<HeldSeat>,
    ticket_sales: Vec<TicketSale>,
    film_orders: Vec<FilmOrder>,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// Snapshot of a whole table, in insertion order
    pub fn list<R: Record>(&self) -> Vec<R> {
        R::table(self).clone()
    }

    /// First record with the given key
    pub fn get<R: Record>(&self, key: u32) -> Option<R> {
        R::table(self).iter().find(|record| record.key() == key).cloned()
    }

    pub fn count<R: Record>(&self) -> usize {
        R::table(self).len()
    }

    /// Number of records per kind
    pub fn counts(&self) -> RecordCounts {
        let entries = EntityKind::ALL
            .iter()
            .map(|kind| (*kind, self.count_kind(*kind)))
            .collect();
        RecordCounts { entries }
    }

    fn count_kind(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Show => self.shows.len(),
            EntityKind::Client => self.clients.len(),
            EntityKind::Screening => self.screenings.len(),
            EntityKind::Film => self.films.len(),
            EntityKind::Meeting => self.meetings.len(),
            EntityKind::Invoice => self.invoices.len(),
            EntityKind::GroupSale => self.group_sales.len(),
            EntityKind::Group => self.groups.len(),
            EntityKind::FriendMember => self.friend_members.len(),
            EntityKind::HeldSeat => self.held_seats.len(),
            EntityKind::TicketSale => self.ticket_sales.len(),
            EntityKind::FilmOrder => self.film_orders.len(),
        }
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Validate and append a record.
    ///
    /// A zero key is replaced by the next free key of the kind (except for
    /// kinds keyed by another record). Returns the stored key.
    pub fn add<R: Record>(&mut self, mut record: R) -> DomainResult<u32> {
        if let Err(error) = self.check(&record) {
            warn!("Refused to add {}: {}", R::KIND, error);
            return Err(error);
        }

        if R::ASSIGNS_KEYS && record.key() == 0 {
            record.set_key(self.next_key::<R>());
        }

        let key = record.key();
        R::table_mut(self).push(record);
        debug!("Added {} {}", R::KIND, key);

        Ok(key)
    }

    /// Replace every field of the record stored under `key`.
    ///
    /// The incoming values are validated, the stored record is overwritten,
    /// then the stored record is validated again. If the second check fails
    /// the previous record is put back.
    pub fn update<R: Record>(&mut self, key: u32, values: R) -> DomainResult<()> {
        if let Err(error) = self.check(&values) {
            warn!("Refused to update {} {}: {}", R::KIND, key, error);
            return Err(error);
        }

        let position = self.position::<R>(key).ok_or(DomainError::NotFound {
            kind: R::KIND,
            id: key,
        })?;

        let mut replacement = values;
        replacement.set_key(key);
        let previous = std::mem::replace(&mut R::table_mut(self)[position], replacement);

        if let Err(error) = self.check(&R::table(self)[position]) {
            R::table_mut(self)[position] = previous;
            warn!("Rolled back update of {} {}: {}", R::KIND, key, error);
            return Err(error);
        }

        debug!("Updated {} {}", R::KIND, key);
        Ok(())
    }

    /// Remove the record stored under `key` unless other records still point at it.
    /// Returns the removed record.
    pub fn delete<R: Record>(&mut self, key: u32) -> DomainResult<R> {
        let position = self.position::<R>(key).ok_or(DomainError::NotFound {
            kind: R::KIND,
            id: key,
        })?;

        let dependents = integrity::blocking_dependents(self, R::KIND, key);
        if !dependents.is_empty() {
            let error = DomainError::Dependency {
                kind: R::KIND,
                id: key,
                dependents,
            };
            warn!("Refused to delete: {}", error);
            return Err(error);
        }

        let removed = R::table_mut(self).remove(position);
        debug!("Deleted {} {}", R::KIND, key);
        Ok(removed)
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    /// Field rules first, then foreign keys
    fn check<R: Record>(&self, record: &R) -> DomainResult<()> {
        record.validate_fields()?;
        integrity::resolve_references(self, record)
    }

    fn position<R: Record>(&self, key: u32) -> Option<usize> {
        R::table(self).iter().position(|record| record.key() == key)
    }

    fn next_key<R: Record>(&self) -> u32 {
        R::table(self)
            .iter()
            .map(Record::key)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}
