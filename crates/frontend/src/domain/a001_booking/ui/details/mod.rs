//! Booking Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands over the booking store
//! - view.rs: Leptos components (pure UI)

mod view;
mod view_model;

pub use view::{BookingDetails, BookingDetailsPage};
pub use view_model::{BookingDetailsViewModel, DetailsState};
