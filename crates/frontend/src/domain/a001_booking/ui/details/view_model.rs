use crate::domain::a001_booking::context::{use_booking_store, BookingStoreContext};
use contracts::domain::a001_booking::{Booking, BookingId, BookingStatus};
use leptos::prelude::*;

/// What the details page shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    /// Deleted from this page; navigation away is in flight
    Removed,
    NotFound,
    Found(Booking),
}

impl DetailsState {
    pub fn resolve(removed: bool, booking: Option<Booking>) -> Self {
        match (removed, booking) {
            (true, _) => DetailsState::Removed,
            (false, None) => DetailsState::NotFound,
            (false, Some(booking)) => DetailsState::Found(booking),
        }
    }
}

/// ViewModel for the booking details page
#[derive(Clone)]
pub struct BookingDetailsViewModel {
    pub id: BookingId,
    pub removed: RwSignal<bool>,
    store: BookingStoreContext,
}

impl BookingDetailsViewModel {
    pub fn new(id: BookingId) -> Self {
        Self {
            id,
            removed: RwSignal::new(false),
            store: use_booking_store(),
        }
    }

    /// Current booking, or `None` when the id is unknown (reactive)
    pub fn booking(&self) -> Option<Booking> {
        self.store.find(&self.id)
    }

    pub fn state(&self) -> DetailsState {
        DetailsState::resolve(self.removed.get(), self.booking())
    }

    pub fn status_options() -> Vec<(String, String)> {
        BookingStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), capitalize(s.as_str())))
            .collect()
    }

    /// Apply a status picked from the selector; unknown values are ignored
    pub fn change_status_command(&self, value: &str) {
        match BookingStatus::from_str_opt(value) {
            Some(status) => self.store.update_status(&self.id, status),
            None => log::warn!("ignoring unknown booking status '{}'", value),
        }
    }

    /// Ask for confirmation and delete. Returns `true` if the booking was removed.
    pub fn delete_command(&self) -> bool {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message("Are you sure you want to cancel this booking?")
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            // set before the list changes so the page never renders "not found"
            self.removed.set(true);
            self.store.delete(&self.id);
        }
        confirmed
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
