// src/store/record.rs
//
// Record trait - what the generic store operations need to know about a kind
//
// Each kind supplies:
// - its identity key
// - its field validator (from the domain module)
// - the foreign keys it holds
// - where its table lives inside the store

use crate::domain::{
    validate_client, validate_film, validate_film_order, validate_friend_member,
    validate_group, validate_group_sale, validate_held_seat, validate_invoice,
    validate_meeting, validate_screening, validate_show, validate_ticket_sale, Client,
    DomainResult, EntityKind, Film, FilmOrder, FriendMember, Group, GroupSale, HeldSeat,
    Invoice, Meeting, Screening, Show, TicketSale,
};

use super::EntityStore;

/// A foreign key held by a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// Field holding the key, used as the validation rule name
    pub field: &'static str,
    pub target: EntityKind,
    pub id: u32,
}

impl Reference {
    pub fn new(field: &'static str, target: EntityKind, id: u32) -> Self {
        Self { field, target, id }
    }
}

pub trait Record: Clone + std::fmt::Debug + Send + 'static {
    const KIND: EntityKind;

    /// Whether a zero key is replaced by the next free key on insert
    const ASSIGNS_KEYS: bool = true;

    fn key(&self) -> u32;
    fn set_key(&mut self, key: u32);

    /// Field-presence and value rules that need no other table
    fn validate_fields(&self) -> DomainResult<()>;

    /// Foreign keys carried by this record, in checking order
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }

    fn table(store: &EntityStore) -> &Vec<Self>;
    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self>;
}

impl Record for Show {
    const KIND: EntityKind = EntityKind::Show;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_show(self)
    }

    fn references(&self) -> Vec<Reference> {
        let screening = self
            .screening_id
            .map(|id| Reference::new("screening_id", EntityKind::Screening, id));
        let film = self
            .film_id
            .map(|id| Reference::new("film_id", EntityKind::Film, id));
        screening.into_iter().chain(film).collect()
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.shows
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.shows
    }
}

impl Record for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_client(self)
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.clients
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.clients
    }
}

impl Record for Screening {
    const KIND: EntityKind = EntityKind::Screening;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_screening(self)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new("film_id", EntityKind::Film, self.film_id)]
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.screenings
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.screenings
    }
}

impl Record for Film {
    const KIND: EntityKind = EntityKind::Film;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_film(self)
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.films
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.films
    }
}

impl Record for Meeting {
    const KIND: EntityKind = EntityKind::Meeting;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_meeting(self)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new("client_id", EntityKind::Client, self.client_id)]
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.meetings
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.meetings
    }
}

impl Record for Invoice {
    const KIND: EntityKind = EntityKind::Invoice;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_invoice(self)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new("client_id", EntityKind::Client, self.client_id)]
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.invoices
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.invoices
    }
}

impl Record for GroupSale {
    const KIND: EntityKind = EntityKind::GroupSale;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_group_sale(self)
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new("group_id", EntityKind::Group, self.group_id),
            Reference::new("show_id", EntityKind::Show, self.show_id),
        ]
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.group_sales
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.group_sales
    }
}

impl Record for Group {
    const KIND: EntityKind = EntityKind::Group;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_group(self)
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.groups
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.groups
    }
}

impl Record for FriendMember {
    const KIND: EntityKind = EntityKind::FriendMember;

    // Keyed by a real client id
    const ASSIGNS_KEYS: bool = false;

    fn key(&self) -> u32 {
        self.client_id
    }

    fn set_key(&mut self, key: u32) {
        self.client_id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_friend_member(self)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new("client_id", EntityKind::Client, self.client_id)]
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.friend_members
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.friend_members
    }
}

impl Record for HeldSeat {
    const KIND: EntityKind = EntityKind::HeldSeat;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_held_seat(self)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new("show_id", EntityKind::Show, self.show_id)]
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.held_seats
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.held_seats
    }
}

impl Record for TicketSale {
    const KIND: EntityKind = EntityKind::TicketSale;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_ticket_sale(self)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new("show_id", EntityKind::Show, self.show_id)]
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.ticket_sales
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.ticket_sales
    }
}

impl Record for FilmOrder {
    const KIND: EntityKind = EntityKind::FilmOrder;

    fn key(&self) -> u32 {
        self.id
    }

    fn set_key(&mut self, key: u32) {
        self.id = key;
    }

    fn validate_fields(&self) -> DomainResult<()> {
        validate_film_order(self)
    }

    fn references(&self) -> Vec<Reference> {
        vec![Reference::new("film_id", EntityKind::Film, self.film_id)]
    }

    fn table(store: &EntityStore) -> &Vec<Self> {
        &store.film_orders
    }

    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
        &mut store.film_orders
    }
}
