// src/store/operations.rs
//
// Named per-kind operations over the generic store API.
// These are what the form screens call; each one is a thin alias.

use crate::domain::{
    Client, DomainResult, Film, FilmOrder, FriendMember, Group, GroupSale, HeldSeat, Invoice,
    Meeting, Screening, Show, TicketSale,
};

use super::EntityStore;

macro_rules! record_operations {
    ($(
        $ty:ty => {
            list: $list:ident,
            get: $get:ident,
            add: $add:ident,
            update: $update:ident,
            delete: $delete:ident $(,)?
        }
    ),+ $(,)?) => {
        impl EntityStore {
            $(
                pub fn $list(&self) -> Vec<$ty> {
                    self.list::<$ty>()
                }

                pub fn $get(&self, key: u32) -> Option<$ty> {
                    self.get::<$ty>(key)
                }

                pub fn $add(&mut self, record: $ty) -> DomainResult<u32> {
                    self.add(record)
                }

                pub fn $update(&mut self, key: u32, values: $ty) -> DomainResult<()> {
                    self.update(key, values)
                }

                pub fn $delete(&mut self, key: u32) -> DomainResult<$ty> {
                    self.delete::<$ty>(key)
                }
            )+
        }
    };
}

record_operations! {
    Show => {
        list: list_shows,
        get: get_show_by_id,
        add: add_show,
        update: update_show,
        delete: delete_show,
    },
    Client => {
        list: list_clients,
        get: get_client_by_id,
        add: add_client,
        update: update_client,
        delete: delete_client,
    },
    Screening => {
        list: list_screenings,
        get: get_screening_by_id,
        add: add_screening,
        update: update_screening,
        delete: delete_screening,
    },
    Film => {
        list: list_films,
        get: get_film_by_id,
        add: add_film,
        update: update_film,
        delete: delete_film,
    },
    Meeting => {
        list: list_meetings,
        get: get_meeting_by_id,
        add: add_meeting,
        update: update_meeting,
        delete: delete_meeting,
    },
    Invoice => {
        list: list_invoices,
        get: get_invoice_by_id,
        add: add_invoice,
        update: update_invoice,
        delete: delete_invoice,
    },
    GroupSale => {
        list: list_group_sales,
        get: get_group_sale_by_id,
        add: add_group_sale,
        update: update_group_sale,
        delete: delete_group_sale,
    },
    Group => {
        list: list_groups,
        get: get_group_by_id,
        add: add_group,
        update: update_group,
        delete: delete_group,
    },
    // keyed by client id
    FriendMember => {
        list: list_friend_members,
        get: get_friend_member_by_client_id,
        add: add_friend_member,
        update: update_friend_member,
        delete: delete_friend_member,
    },
    HeldSeat => {
        list: list_held_seats,
        get: get_held_seat_by_id,
        add: add_held_seat,
        update: update_held_seat,
        delete: delete_held_seat,
    },
    TicketSale => {
        list: list_ticket_sales,
        get: get_ticket_sale_by_id,
        add: add_ticket_sale,
        update: update_ticket_sale,
        delete: delete_ticket_sale,
    },
    FilmOrder => {
        list: list_film_orders,
        get: get_film_order_by_id,
        add: add_film_order,
        update: update_film_order,
        delete: delete_film_order,
    },
}
