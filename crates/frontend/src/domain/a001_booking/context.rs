use contracts::domain::a001_booking::{
    Booking, BookingId, BookingPersistence, BookingStatus, BookingStore,
};
use leptos::prelude::*;

use crate::shared::config::AppConfig;
use crate::shared::local_storage::BrowserStorage;

/// Reactive handle to the booking store, provided once at the app root.
///
/// The store itself is not `Send`, so it lives in a local `StoredValue`;
/// a store listener mirrors the list into `bookings` for the views.
#[derive(Clone, Copy)]
pub struct BookingStoreContext {
    store: StoredValue<BookingStore<BrowserStorage>, LocalStorage>,
    bookings: RwSignal<Vec<Booking>>,
    persist_error: RwSignal<Option<String>>,
}

impl BookingStoreContext {
    pub fn new(config: &AppConfig) -> Self {
        let persistence = BookingPersistence::new(BrowserStorage, config.storage.key.clone());
        let mut store = BookingStore::hydrate(persistence);

        let bookings = RwSignal::new(store.list());
        store.subscribe(move |list| bookings.set(list.iter().cloned().collect()));

        Self {
            store: StoredValue::new_local(store),
            bookings,
            persist_error: RwSignal::new(None),
        }
    }

    /// Newest first
    pub fn bookings(&self) -> Signal<Vec<Booking>> {
        self.bookings.into()
    }

    /// Message of the last failed write, cleared by the next successful one
    pub fn persist_error(&self) -> Signal<Option<String>> {
        self.persist_error.into()
    }

    /// Linear lookup; reactive when called inside a tracking scope
    pub fn find(&self, id: &BookingId) -> Option<Booking> {
        self.bookings
            .with(|list| list.iter().find(|b| &b.id == id).cloned())
    }

    pub fn add(&self, booking: Booking) {
        log::info!("add booking {}", booking.id);
        self.mutate(|store| store.add(booking));
    }

    pub fn delete(&self, id: &BookingId) {
        log::info!("delete booking {}", id);
        self.mutate(|store| store.delete(id));
    }

    pub fn update_status(&self, id: &BookingId, status: BookingStatus) {
        log::info!("booking {} -> {}", id, status);
        self.mutate(|store| store.update_status(id, status));
    }

    pub fn reset(&self) {
        log::info!("reset bookings");
        self.mutate(|store| store.reset());
    }

    fn mutate(&self, command: impl FnOnce(&mut BookingStore<BrowserStorage>)) {
        let mut error = None;
        self.store.update_value(|store| {
            command(store);
            error = store.last_persist_error().map(ToString::to_string);
        });
        self.persist_error.set(error);
    }
}

/// Hook to access the booking store
pub fn use_booking_store() -> BookingStoreContext {
    use_context::<BookingStoreContext>().expect("BookingStoreContext not found in component tree")
}
