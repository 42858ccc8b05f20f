//! Booking store: the single owner of the booking list.
//!
//! Every mutation runs synchronously, then re-persists the whole list and
//! notifies the registered listeners. A failed write is logged and kept in
//! `last_persist_error`; the in-memory change stays.

use super::aggregate::{Booking, BookingId, BookingList, BookingStatus};
use super::persistence::{BookingPersistence, SnapshotError};
use crate::shared::storage::KeyValueStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&BookingList)>;

pub struct BookingStore<S> {
    bookings: BookingList,
    persistence: BookingPersistence<S>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    last_persist_error: Option<SnapshotError>,
}

impl<S: KeyValueStorage> BookingStore<S> {
    /// Build the store from the last persisted snapshot.
    ///
    /// A missing snapshot and an unreadable one both start from an empty list.
    pub fn hydrate(persistence: BookingPersistence<S>) -> Self {
        let bookings = match persistence.load() {
            Ok(Some(bookings)) => {
                log::debug!(
                    "hydrated {} booking(s) from '{}'",
                    bookings.len(),
                    persistence.key()
                );
                bookings
            }
            Ok(None) => {
                log::debug!("no snapshot under '{}', starting empty", persistence.key());
                BookingList::new()
            }
            Err(e) => {
                log::warn!("failed to load bookings, starting empty: {}", e);
                BookingList::new()
            }
        };

        Self {
            bookings,
            persistence,
            listeners: Vec::new(),
            next_listener_id: 0,
            last_persist_error: None,
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Insert at the head. The id is trusted to be unique.
    pub fn add(&mut self, booking: Booking) {
        self.bookings.push_front(booking);
        self.commit();
    }

    /// Remove the booking with `id`; absent ids are a no-op
    pub fn delete(&mut self, id: &BookingId) {
        if let Some(index) = self.position(id) {
            self.bookings.remove(index);
        }
        self.commit();
    }

    /// Replace only the status of the booking with `id`; absent ids are a no-op
    pub fn update_status(&mut self, id: &BookingId, status: BookingStatus) {
        if let Some(index) = self.position(id) {
            self.bookings[index].status = status;
        }
        self.commit();
    }

    pub fn reset(&mut self) {
        self.bookings.clear();
        self.commit();
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Ordered copy of the list, newest first
    pub fn list(&self) -> Vec<Booking> {
        self.bookings.iter().cloned().collect()
    }

    pub fn bookings(&self) -> &BookingList {
        &self.bookings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn get(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Outcome of the most recent write; `None` when it succeeded
    pub fn last_persist_error(&self) -> Option<&SnapshotError> {
        self.last_persist_error.as_ref()
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register a callback invoked after every mutation
    pub fn subscribe(&mut self, listener: impl Fn(&BookingList) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the listener was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn position(&self, id: &BookingId) -> Option<usize> {
        self.bookings.iter().position(|b| &b.id == id)
    }

    fn commit(&mut self) {
        self.last_persist_error = match self.persistence.save(&self.bookings) {
            Ok(()) => None,
            Err(e) => {
                log::error!("failed to persist {} booking(s): {}", self.bookings.len(), e);
                Some(e)
            }
        };

        for (_, listener) in &self.listeners {
            listener(&self.bookings);
        }
    }
}
