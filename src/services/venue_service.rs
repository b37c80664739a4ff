// src/services/venue_service.rs
//
// Shared handle to the back-office store
//
// - One mutex around the whole store, held for exactly one operation
// - Events go out after the lock is released, and only on success
// - A poisoned lock is taken over as-is: store operations never leave a
//   half-applied mutation behind, so the data is still consistent

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;

use crate::domain::{DomainResult, RecordCounts};
use crate::events::{EventBus, RecordAdded, RecordDeleted, RecordUpdated};
use crate::store::{EntityStore, Record};

pub struct VenueService {
    store: Mutex<EntityStore>,
    event_bus: Arc<EventBus>,
}

impl VenueService {
    pub fn new(store: EntityStore, event_bus: Arc<EventBus>) -> Self {
        Self {
            store: Mutex::new(store),
            event_bus,
        }
    }

    fn lock(&self) -> MutexGuard<'_, EntityStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run a read-only closure against a consistent view of the store
    pub fn read<T>(&self, f: impl FnOnce(&EntityStore) -> T) -> T {
        f(&self.lock())
    }

    pub fn list<R: Record>(&self) -> Vec<R> {
        self.lock().list::<R>()
    }

    pub fn get<R: Record>(&self, key: u32) -> Option<R> {
        self.lock().get::<R>(key)
    }

    pub fn counts(&self) -> RecordCounts {
        self.lock().counts()
    }

    pub fn add<R: Record>(&self, record: R) -> DomainResult<u32> {
        let key = self.lock().add(record)?;

        self.event_bus.emit(RecordAdded::new(R::KIND, key));
        Ok(key)
    }

    pub fn update<R: Record>(&self, key: u32, values: R) -> DomainResult<()> {
        self.lock().update(key, values)?;

        self.event_bus.emit(RecordUpdated::new(R::KIND, key));
        Ok(())
    }

    pub fn delete<R: Record>(&self, key: u32) -> DomainResult<R> {
        let removed = self.lock().delete::<R>(key)?;

        self.event_bus.emit(RecordDeleted::new(R::KIND, key));
        Ok(removed)
    }

    /// Replace the whole store, e.g. with the fixture data
    pub fn reset(&self, store: EntityStore) {
        let counts = store.counts();
        *self.lock() = store;
        info!("Store reset with {} records", counts.total());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityKind, Film, Group, GroupSale, Show};
    use std::thread;

    fn service() -> (Arc<VenueService>, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let venue = Arc::new(VenueService::new(
            EntityStore::with_sample_data(),
            Arc::clone(&bus),
        ));
        (venue, bus)
    }

    #[test]
    fn test_events_only_on_success() {
        let (venue, bus) = service();

        assert!(venue.add(GroupSale::new(999, 1, 5)).is_err());
        assert!(bus.get_event_log().is_empty());

        let id = venue.add(Group::new("Book Club", "Carol")).unwrap();
        venue.update(id, Group::new("Book Club", "Dave")).unwrap();
        venue.delete::<Group>(id).unwrap();
        assert!(venue.delete::<Show>(1).is_err());

        let types: Vec<String> = bus
            .get_event_log()
            .into_iter()
            .map(|entry| entry.event_type)
            .collect();
        assert_eq!(types, vec!["RecordAdded", "RecordUpdated", "RecordDeleted"]);
    }

    #[test]
    fn test_handlers_can_read_the_store() {
        let (venue, bus) = service();
        let observer = Arc::clone(&venue);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        bus.subscribe::<RecordAdded, _>(move |event| {
            if event.kind == EntityKind::Film {
                let title = observer.get::<Film>(event.key).map(|film| film.title);
                sink.lock().unwrap().push(title);
            }
        });

        let id = venue.add(Film::new("Night Train", "Thriller")).unwrap();

        assert_eq!(id, 3);
        assert_eq!(*seen.lock().unwrap(), vec![Some("Night Train".to_string())]);
    }

    #[test]
    fn test_concurrent_adds_get_distinct_keys() {
        let (venue, _bus) = service();

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let venue = Arc::clone(&venue);
                thread::spawn(move || {
                    venue
                        .add(Group::new(format!("Group {}", n), "Organiser"))
                        .unwrap()
                })
            })
            .collect();

        let mut keys: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        keys.sort_unstable();

        assert_eq!(keys, (3..=10).collect::<Vec<u32>>());
        assert_eq!(venue.list::<Group>().len(), 10);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let (venue, _bus) = service();

        let poisoner = Arc::clone(&venue);
        let _ = thread::spawn(move || {
            poisoner.read(|_| panic!("reader crashed"));
        })
        .join();

        assert_eq!(venue.counts().total(), 24);
        assert!(venue.add(Film::new("After", "Drama")).is_ok());
    }

    #[test]
    fn test_reset() {
        let (venue, _bus) = service();

        venue.reset(EntityStore::new());
        assert_eq!(venue.counts().total(), 0);
    }
}
