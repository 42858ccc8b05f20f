//! Snapshot persistence for the booking list.
//!
//! The whole list is written as one JSON blob under a fixed key:
//!
//! ```text
//! {"state":{"bookings":[...]},"version":0}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::BookingList;
use crate::shared::storage::{KeyValueStorage, StorageError};

pub const BOOKING_STORAGE_KEY: &str = "booking-storage";
pub const SNAPSHOT_VERSION: u32 = 0;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("snapshot under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("snapshot version {found} is not supported (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a> {
    bookings: &'a BookingList,
}

#[derive(Deserialize)]
struct Snapshot {
    state: State,
    version: u32,
}

#[derive(Deserialize)]
struct State {
    #[serde(default)]
    bookings: BookingList,
}

/// Reads and writes booking snapshots through a `KeyValueStorage`
#[derive(Debug, Clone)]
pub struct BookingPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> BookingPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, BOOKING_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite the stored snapshot with `bookings`
    pub fn save(&self, bookings: &BookingList) -> Result<(), SnapshotError> {
        let snapshot = SnapshotRef {
            state: StateRef { bookings },
            version: SNAPSHOT_VERSION,
        };
        let raw = serde_json::to_string(&snapshot).map_err(SnapshotError::Serialize)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }

    /// `Ok(None)` when nothing has been stored under the key yet
    pub fn load(&self) -> Result<Option<BookingList>, SnapshotError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };

        let snapshot: Snapshot =
            serde_json::from_str(&raw).map_err(|source| SnapshotError::Corrupt {
                key: self.key.clone(),
                source,
            })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        Ok(Some(snapshot.state.bookings))
    }

    /// Remove the stored snapshot entirely
    pub fn clear(&self) -> Result<(), SnapshotError> {
        self.storage.remove_item(&self.key)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::a001_booking::aggregate::{Booking, BookingId, BookingStatus, RoomType};
    use crate::shared::storage::MemoryStorage;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Storage whose reads or writes can be made to fail, e.g. quota exceeded.
    /// Clones share the failure switches and the backing map.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FailingStorage {
        pub inner: MemoryStorage,
        pub fail_reads: Rc<Cell<bool>>,
        pub fail_writes: Rc<Cell<bool>>,
    }

    impl FailingStorage {
        pub(crate) fn failing_writes() -> Self {
            let storage = Self::default();
            storage.fail_writes.set(true);
            storage
        }

        pub(crate) fn failing_reads(inner: MemoryStorage) -> Self {
            let storage = Self {
                inner,
                ..Self::default()
            };
            storage.fail_reads.set(true);
            storage
        }
    }

    impl KeyValueStorage for FailingStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads.get() {
                return Err(StorageError::Read {
                    key: key.to_string(),
                    reason: "SecurityError".to_string(),
                });
            }
            self.inner.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "QuotaExceededError".to_string(),
                });
            }
            self.inner.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove_item(key)
        }
    }

    pub(crate) fn booking(id: &str, room_type: RoomType, nights: u32) -> Booking {
        let check_in = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let check_out = check_in + chrono::Duration::days(i64::from(nights));
        Booking {
            id: BookingId::from(id),
            guest_name: format!("Guest {id}"),
            email: format!("{id}@example.com"),
            check_in,
            check_out,
            room_type,
            guests: 2,
            total_price: u64::from(nights) * room_type.nightly_rate(),
            status: BookingStatus::Confirmed,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_load_absent_key() {
        let persistence = BookingPersistence::with_default_key(MemoryStorage::new());
        assert!(persistence.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let persistence = BookingPersistence::with_default_key(MemoryStorage::new());
        let mut list = BookingList::new();
        list.push_back(booking("c", RoomType::Suite, 1));
        list.push_back(booking("b", RoomType::Single, 4));
        list.push_back(booking("a", RoomType::Penthouse, 2));
        list[1].status = BookingStatus::Pending;

        persistence.save(&list).unwrap();
        assert_eq!(persistence.load().unwrap(), Some(list));
    }

    #[test]
    fn test_empty_list_round_trip() {
        let persistence = BookingPersistence::with_default_key(MemoryStorage::new());
        persistence.save(&BookingList::new()).unwrap();
        assert_eq!(persistence.load().unwrap(), Some(BookingList::new()));
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let storage = MemoryStorage::new();
        let persistence = BookingPersistence::with_default_key(storage.clone());
        let mut list = BookingList::new();
        list.push_back(booking("a", RoomType::Double, 1));
        persistence.save(&list).unwrap();

        list.clear();
        persistence.save(&list).unwrap();

        assert_eq!(storage.len(), 1);
        assert_eq!(persistence.load().unwrap(), Some(BookingList::new()));
    }

    #[test]
    fn test_envelope_shape() {
        let storage = MemoryStorage::new();
        let persistence = BookingPersistence::with_default_key(storage.clone());
        let mut list = BookingList::new();
        list.push_back(booking("a", RoomType::Double, 3));
        persistence.save(&list).unwrap();

        let raw = storage.get_item(BOOKING_STORAGE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["bookings"][0]["id"], "a");
        assert_eq!(value["state"]["bookings"][0]["totalPrice"], 450);
    }

    #[test]
    fn test_reads_snapshot_written_by_the_web_app() {
        let raw = r#"{"state":{"bookings":[{"id":"0f8b","guestName":"Ada","email":"ada@example.com","checkIn":"2024-01-01T00:00:00.000Z","checkOut":"2024-01-04T00:00:00.000Z","roomType":"double","guests":2,"totalPrice":450,"status":"cancelled","createdAt":"2023-12-20T10:15:30.123Z"}]},"version":0}"#;
        let persistence =
            BookingPersistence::with_default_key(MemoryStorage::with_item(BOOKING_STORAGE_KEY, raw));

        let list = persistence.load().unwrap().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id.as_str(), "0f8b");
        assert_eq!(list[0].status, BookingStatus::Cancelled);
    }

    #[test]
    fn test_corrupt_blob_is_reported() {
        let persistence = BookingPersistence::with_default_key(MemoryStorage::with_item(
            BOOKING_STORAGE_KEY,
            "{not json",
        ));
        assert!(matches!(persistence.load(), Err(SnapshotError::Corrupt { .. })));
    }

    #[test]
    fn test_unknown_version_is_reported() {
        let persistence = BookingPersistence::with_default_key(MemoryStorage::with_item(
            BOOKING_STORAGE_KEY,
            r#"{"state":{"bookings":[]},"version":3}"#,
        ));
        assert!(matches!(
            persistence.load(),
            Err(SnapshotError::UnsupportedVersion { found: 3, expected: 0 })
        ));
    }

    #[test]
    fn test_write_failure_surfaces_storage_error() {
        let persistence = BookingPersistence::with_default_key(FailingStorage::failing_writes());
        let err = persistence.save(&BookingList::new()).unwrap_err();
        assert!(matches!(err, SnapshotError::Storage(StorageError::Write { .. })));
    }

    #[test]
    fn test_clear_removes_key() {
        let storage = MemoryStorage::new();
        let persistence = BookingPersistence::new(storage.clone(), "custom-key");
        persistence.save(&BookingList::new()).unwrap();
        assert!(storage.get_item("custom-key").unwrap().is_some());

        persistence.clear().unwrap();
        assert!(storage.is_empty());
        assert!(persistence.load().unwrap().is_none());
    }
}
