use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pricing;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор бронирования.
///
/// Opaque text: the app generates UUID v4 strings, but any string read back
/// from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub String);

impl BookingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Тип номера. Determines the nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Single,
    Double,
    Suite,
    Penthouse,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Double,
        RoomType::Suite,
        RoomType::Penthouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Suite => "suite",
            RoomType::Penthouse => "penthouse",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "Single Room",
            RoomType::Double => "Double Room",
            RoomType::Suite => "Suite",
            RoomType::Penthouse => "Penthouse",
        }
    }

    pub fn nightly_rate(&self) -> u64 {
        pricing::rate(*self)
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Статус бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Confirmed,
        BookingStatus::Pending,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Бронирование номера.
///
/// Only `status` changes after creation; `total_price` is fixed when the
/// booking is created and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub guest_name: String,
    pub email: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub room_type: RoomType,
    pub guests: u32,
    pub total_price: u64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Ordered booking list, newest first
pub type BookingList = VecDeque<Booking>;

impl Booking {
    /// Night count derived from the stored dates (display only)
    pub fn nights(&self) -> u64 {
        pricing::nights(self.check_in, self.check_out)
    }

    pub fn guests_label(&self) -> String {
        if self.guests > 1 {
            format!("{} guests", self.guests)
        } else {
            format!("{} guest", self.guests)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORED: &str = r#"{
        "id": "7d0b2b7e-4a53-4a9a-9d3e-0f1f2a3b4c5d",
        "guestName": "Ada Lovelace",
        "email": "ada@example.com",
        "checkIn": "2024-01-01T00:00:00.000Z",
        "checkOut": "2024-01-04T00:00:00.000Z",
        "roomType": "double",
        "guests": 2,
        "totalPrice": 450,
        "status": "confirmed",
        "createdAt": "2023-12-20T10:15:30.123Z"
    }"#;

    #[test]
    fn test_reads_camel_case_json() {
        let booking: Booking = serde_json::from_str(STORED).unwrap();
        assert_eq!(booking.id.as_str(), "7d0b2b7e-4a53-4a9a-9d3e-0f1f2a3b4c5d");
        assert_eq!(booking.guest_name, "Ada Lovelace");
        assert_eq!(booking.room_type, RoomType::Double);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.total_price, 450);
        assert_eq!(booking.nights(), 3);
    }

    #[test]
    fn test_writes_camel_case_json() {
        let booking: Booking = serde_json::from_str(STORED).unwrap();
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["guestName"], "Ada Lovelace");
        assert_eq!(value["roomType"], "double");
        assert_eq!(value["totalPrice"], 450);
        assert!(value.get("guest_name").is_none());
    }

    #[test]
    fn test_rejects_unknown_room_type() {
        let broken = STORED.replace("\"double\"", "\"villa\"");
        assert!(serde_json::from_str::<Booking>(&broken).is_err());
    }

    #[test]
    fn test_enum_string_round_trip() {
        for room in RoomType::ALL {
            assert_eq!(RoomType::from_str_opt(room.as_str()), Some(room));
        }
        for status in BookingStatus::ALL {
            assert_eq!(BookingStatus::from_str_opt(status.as_str()), Some(status));
        }
        assert_eq!(RoomType::from_str_opt("villa"), None);
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(BookingId::new_v4(), BookingId::new_v4());
    }

    #[test]
    fn test_guests_label() {
        let mut booking: Booking = serde_json::from_str(STORED).unwrap();
        assert_eq!(booking.guests_label(), "2 guests");
        booking.guests = 1;
        assert_eq!(booking.guests_label(), "1 guest");
    }
}
