//! Create Booking UI Module
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: form and live summary components

mod view;
mod view_model;

pub use view::CreateBookingPage;
pub use view_model::CreateBookingViewModel;
