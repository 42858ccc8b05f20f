//! a001 Booking
//!
//! - aggregate.rs: Booking, ids and enums
//! - pricing.rs: night count and price calculation
//! - form.rs: creation form DTO and validation
//! - persistence.rs: snapshot adapter over a key-value storage
//! - store.rs: the booking store (authoritative list + mutations)

pub mod aggregate;
pub mod form;
pub mod persistence;
pub mod pricing;
pub mod store;

pub use aggregate::{Booking, BookingId, BookingList, BookingStatus, RoomType};
pub use form::{BookingDto, BookingField, BookingFormErrors};
pub use persistence::{BookingPersistence, SnapshotError, BOOKING_STORAGE_KEY, SNAPSHOT_VERSION};
pub use store::{BookingStore, ListenerId};
