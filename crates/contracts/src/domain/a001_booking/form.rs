use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{Booking, BookingId, BookingStatus, RoomType};
use super::pricing;

pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 10;

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы создания бронирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub guest_name: String,
    pub email: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub room_type: RoomType,
    pub guests: u32,
}

impl Default for BookingDto {
    fn default() -> Self {
        Self {
            guest_name: String::new(),
            email: String::new(),
            check_in: None,
            check_out: None,
            room_type: RoomType::Single,
            guests: MIN_GUESTS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    GuestName,
    Email,
    CheckIn,
    CheckOut,
    Guests,
}

/// Field-level validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormErrors {
    errors: BTreeMap<BookingField, String>,
}

impl BookingFormErrors {
    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn insert(&mut self, field: BookingField, message: &str) {
        // first failing rule wins
        self.errors
            .entry(field)
            .or_insert_with(|| message.to_string());
    }
}

impl BookingDto {
    /// Check-in as midnight UTC of the chosen day
    pub fn check_in_at(&self) -> Option<DateTime<Utc>> {
        self.check_in.map(start_of_day)
    }

    /// Check-out as midnight UTC of the chosen day
    pub fn check_out_at(&self) -> Option<DateTime<Utc>> {
        self.check_out.map(start_of_day)
    }

    /// Live night count for the summary; 0 until both dates are set
    pub fn nights(&self) -> u64 {
        match (self.check_in_at(), self.check_out_at()) {
            (Some(check_in), Some(check_out)) => pricing::nights(check_in, check_out),
            _ => 0,
        }
    }

    /// Live total for the summary; 0 until both dates are set
    pub fn total_price(&self) -> u64 {
        pricing::total_price(self.check_in_at(), self.check_out_at(), self.room_type)
    }

    /// Валидация данных формы
    pub fn validate(&self) -> Result<(), BookingFormErrors> {
        let mut errors = BookingFormErrors::default();

        if self.guest_name.trim().is_empty() {
            errors.insert(BookingField::GuestName, "Guest name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(BookingField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.insert(BookingField::Email, "Invalid email address");
        }

        if self.check_in.is_none() {
            errors.insert(BookingField::CheckIn, "Check-in date is required");
        }
        match (self.check_in, self.check_out) {
            (_, None) => errors.insert(BookingField::CheckOut, "Check-out date is required"),
            (Some(check_in), Some(check_out)) if check_out < check_in => {
                errors.insert(BookingField::CheckOut, "Check-out must be after check-in")
            }
            _ => {}
        }

        if self.guests < MIN_GUESTS {
            errors.insert(BookingField::Guests, "At least 1 guest required");
        } else if self.guests > MAX_GUESTS {
            errors.insert(BookingField::Guests, "Max 10 guests");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Booking {
    /// Создать новое бронирование из формы.
    ///
    /// Generates a fresh id, fixes the total price and starts as `confirmed`.
    pub fn new_for_insert(
        dto: &BookingDto,
        created_at: DateTime<Utc>,
    ) -> Result<Self, BookingFormErrors> {
        dto.validate()?;

        let (Some(check_in), Some(check_out)) = (dto.check_in_at(), dto.check_out_at()) else {
            return Err(BookingFormErrors::default());
        };

        Ok(Self {
            id: BookingId::new_v4(),
            guest_name: dto.guest_name.trim().to_string(),
            email: dto.email.trim().to_string(),
            check_in,
            check_out,
            room_type: dto.room_type,
            guests: dto.guests,
            total_price: pricing::total_price(Some(check_in), Some(check_out), dto.room_type),
            status: BookingStatus::Confirmed,
            created_at,
        })
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Syntactic check only: `local@domain.tld`, no whitespace
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty() && !name.starts_with('.') && !name.ends_with('.') && tld.len() >= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_dto() -> BookingDto {
        BookingDto {
            guest_name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            check_in: Some(date(2024, 1, 1)),
            check_out: Some(date(2024, 1, 4)),
            room_type: RoomType::Double,
            guests: 2,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_dto().validate(), Ok(()));
    }

    #[test]
    fn test_empty_form_reports_required_fields() {
        let errors = BookingDto::default().validate().unwrap_err();
        assert_eq!(errors.get(BookingField::GuestName), Some("Guest name is required"));
        assert_eq!(errors.get(BookingField::Email), Some("Email is required"));
        assert_eq!(errors.get(BookingField::CheckIn), Some("Check-in date is required"));
        assert_eq!(errors.get(BookingField::CheckOut), Some("Check-out date is required"));
        assert_eq!(errors.get(BookingField::Guests), None);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_invalid_email() {
        for email in ["plain", "a@b", "@example.com", "a b@example.com", "a@@example.com", "a@.com"] {
            let dto = BookingDto {
                email: email.to_string(),
                ..valid_dto()
            };
            let errors = dto.validate().unwrap_err();
            assert_eq!(errors.get(BookingField::Email), Some("Invalid email address"), "{email}");
        }
    }

    #[test]
    fn test_check_out_before_check_in() {
        let dto = BookingDto {
            check_in: Some(date(2024, 1, 4)),
            check_out: Some(date(2024, 1, 1)),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            errors.get(BookingField::CheckOut),
            Some("Check-out must be after check-in")
        );
    }

    #[test]
    fn test_same_day_stay_is_allowed() {
        let dto = BookingDto {
            check_out: Some(date(2024, 1, 1)),
            ..valid_dto()
        };
        assert!(dto.validate().is_ok());
        assert_eq!(dto.nights(), 0);
    }

    #[test]
    fn test_guest_bounds() {
        let too_few = BookingDto { guests: 0, ..valid_dto() };
        assert_eq!(
            too_few.validate().unwrap_err().get(BookingField::Guests),
            Some("At least 1 guest required")
        );

        let too_many = BookingDto { guests: 11, ..valid_dto() };
        assert_eq!(
            too_many.validate().unwrap_err().get(BookingField::Guests),
            Some("Max 10 guests")
        );

        let max = BookingDto { guests: 10, ..valid_dto() };
        assert!(max.validate().is_ok());
    }

    #[test]
    fn test_summary_tracks_dates() {
        let mut dto = BookingDto::default();
        assert_eq!(dto.total_price(), 0);

        dto.check_in = Some(date(2024, 1, 1));
        assert_eq!(dto.nights(), 0);
        assert_eq!(dto.total_price(), 0);

        dto.check_out = Some(date(2024, 1, 3));
        dto.room_type = RoomType::Penthouse;
        assert_eq!(dto.nights(), 2);
        assert_eq!(dto.total_price(), 1600);
    }

    #[test]
    fn test_new_for_insert_fixes_price_and_status() {
        let created_at = Utc.with_ymd_and_hms(2023, 12, 20, 9, 30, 0).unwrap();
        let booking = Booking::new_for_insert(&valid_dto(), created_at).unwrap();

        assert_eq!(booking.total_price, 450);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.created_at, created_at);
        assert_eq!(booking.check_in, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(booking.check_out, Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap());
        assert!(uuid::Uuid::parse_str(booking.id.as_str()).is_ok());
    }

    #[test]
    fn test_new_for_insert_trims_text() {
        let dto = BookingDto {
            guest_name: "  Grace Hopper ".to_string(),
            email: " grace@example.com ".to_string(),
            ..valid_dto()
        };
        let booking = Booking::new_for_insert(&dto, Utc::now()).unwrap();
        assert_eq!(booking.guest_name, "Grace Hopper");
        assert_eq!(booking.email, "grace@example.com");
    }

    #[test]
    fn test_new_for_insert_rejects_invalid_form() {
        let errors = Booking::new_for_insert(&BookingDto::default(), Utc::now()).unwrap_err();
        assert!(!errors.is_empty());
    }
}
