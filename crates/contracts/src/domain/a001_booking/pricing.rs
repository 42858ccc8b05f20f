//! Night count and price calculation.
//!
//! Pure functions: the result depends only on the arguments.

use chrono::{DateTime, Utc};

use super::aggregate::RoomType;

const MS_PER_DAY: u64 = 86_400_000;

/// Whole nights between two instants, rounded up.
///
/// Uses the absolute difference, so the argument order does not matter.
/// Rejecting a check-out before check-in is the form's job.
pub fn nights(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> u64 {
    let diff_ms = (check_out - check_in).num_milliseconds().unsigned_abs();
    diff_ms.div_ceil(MS_PER_DAY)
}

/// Nightly rate per room type, in whole currency units
pub fn rate(room_type: RoomType) -> u64 {
    match room_type {
        RoomType::Single => 100,
        RoomType::Double => 150,
        RoomType::Suite => 300,
        RoomType::Penthouse => 800,
    }
}

/// `nights × rate`, or 0 while either date is unset
pub fn total_price(
    check_in: Option<DateTime<Utc>>,
    check_out: Option<DateTime<Utc>>,
    room_type: RoomType,
) -> u64 {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) => nights(check_in, check_out) * rate(room_type),
        _ => 0,
    }
}
