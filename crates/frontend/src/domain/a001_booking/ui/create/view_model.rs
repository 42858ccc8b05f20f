use crate::domain::a001_booking::context::{use_booking_store, BookingStoreContext};
use chrono::Utc;
use contracts::domain::a001_booking::{Booking, BookingDto, BookingField, BookingFormErrors};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::collections::HashSet;
use std::rc::Rc;

const ALL_FIELDS: [BookingField; 5] = [
    BookingField::GuestName,
    BookingField::Email,
    BookingField::CheckIn,
    BookingField::CheckOut,
    BookingField::Guests,
];

/// ViewModel for the booking creation form
#[derive(Clone, Copy)]
pub struct CreateBookingViewModel {
    pub form: RwSignal<BookingDto>,
    pub touched: RwSignal<HashSet<BookingField>>,
    pub is_submitting: RwSignal<bool>,
    store: BookingStoreContext,
    submit_delay_ms: u32,
}

impl CreateBookingViewModel {
    pub fn new(submit_delay_ms: u32) -> Self {
        Self {
            form: RwSignal::new(BookingDto::default()),
            touched: RwSignal::new(HashSet::new()),
            is_submitting: RwSignal::new(false),
            store: use_booking_store(),
            submit_delay_ms,
        }
    }

    pub fn errors(&self) -> BookingFormErrors {
        self.form.with(|f| f.validate().err().unwrap_or_default())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.validate().is_ok())
    }

    /// Error for a field, shown only once the field has been touched
    pub fn field_error(&self, field: BookingField) -> Option<String> {
        if !self.touched.with(|t| t.contains(&field)) {
            return None;
        }
        self.errors().get(field).map(ToString::to_string)
    }

    pub fn touch(&self, field: BookingField) {
        if !self.touched.with_untracked(|t| t.contains(&field)) {
            self.touched.update(|t| {
                t.insert(field);
            });
        }
    }

    /// Validate, wait the simulated round trip, then store the booking
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        if self.is_submitting.get_untracked() {
            return;
        }
        self.touched.set(ALL_FIELDS.into_iter().collect());

        let current = self.form.get_untracked();
        if let Err(errors) = current.validate() {
            log::debug!("booking form has {} invalid field(s)", errors.len());
            return;
        }

        let vm = *self;
        vm.is_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(vm.submit_delay_ms).await;

            match Booking::new_for_insert(&current, Utc::now()) {
                Ok(booking) => {
                    vm.store.add(booking);
                    vm.is_submitting.set(false);
                    (on_saved)(());
                }
                Err(errors) => {
                    log::warn!("booking rejected: {} invalid field(s)", errors.len());
                    vm.is_submitting.set(false);
                }
            }
        });
    }
}
