use super::view_model::CreateBookingViewModel;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_date_input, parse_date_input, today};
use crate::shared::icons::icon;
use contracts::domain::a001_booking::{BookingField, RoomType};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

fn room_options() -> Vec<(String, String)> {
    RoomType::ALL
        .iter()
        .map(|r| {
            (
                r.as_str().to_string(),
                format!("{} (${})", r.label(), r.nightly_rate()),
            )
        })
        .collect()
}

#[component]
pub fn CreateBookingPage() -> impl IntoView {
    let submit_delay_ms = use_context::<AppConfig>()
        .unwrap_or_default()
        .booking
        .submit_delay_ms;
    let vm = CreateBookingViewModel::new(submit_delay_ms);
    let navigate = StoredValue::new_local(use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(Rc::new(move |_| {
            navigate.with_value(|navigate| navigate("/", Default::default()))
        }));
    };

    let min_check_in = format_date_input(Some(today()));
    let min_check_out = move || {
        format_date_input(Some(
            vm.form.with(|f| f.check_in).unwrap_or_else(today),
        ))
    };

    view! {
        <div class="page page--narrow">
            <div class="page-header page-header--center">
                <h1 class="page-header__title">{"Create Reservation"}</h1>
                <p class="page-header__subtitle">{"Fill in the details below to secure your stay."}</p>
            </div>

            <div class="create-grid">
                <div class="card">
                    <form class="form" on:submit=on_submit>
                        <div class="form__row">
                            <Input
                                label="Guest Name"
                                id="guestName"
                                value=Signal::derive(move || vm.form.with(|f| f.guest_name.clone()))
                                on_input=Callback::new(move |v: String| vm.form.update(|f| f.guest_name = v))
                                on_blur=Callback::new(move |_| vm.touch(BookingField::GuestName))
                                error=Signal::derive(move || vm.field_error(BookingField::GuestName))
                            />
                            <Input
                                label="Email Address"
                                id="email"
                                input_type="email"
                                value=Signal::derive(move || vm.form.with(|f| f.email.clone()))
                                on_input=Callback::new(move |v: String| vm.form.update(|f| f.email = v))
                                on_blur=Callback::new(move |_| vm.touch(BookingField::Email))
                                error=Signal::derive(move || vm.field_error(BookingField::Email))
                            />
                        </div>

                        <div class="form__row">
                            <Input
                                label="Check-in"
                                id="checkIn"
                                input_type="date"
                                min=min_check_in
                                value=Signal::derive(move || format_date_input(vm.form.with(|f| f.check_in)))
                                on_input=Callback::new(move |v: String| {
                                    vm.form.update(|f| f.check_in = parse_date_input(&v));
                                    vm.touch(BookingField::CheckIn);
                                })
                                error=Signal::derive(move || vm.field_error(BookingField::CheckIn))
                            />
                            <Input
                                label="Check-out"
                                id="checkOut"
                                input_type="date"
                                min=Signal::derive(min_check_out)
                                value=Signal::derive(move || format_date_input(vm.form.with(|f| f.check_out)))
                                on_input=Callback::new(move |v: String| {
                                    vm.form.update(|f| f.check_out = parse_date_input(&v));
                                    vm.touch(BookingField::CheckOut);
                                })
                                error=Signal::derive(move || vm.field_error(BookingField::CheckOut))
                            />
                        </div>

                        <div class="form__row">
                            <Select
                                label="Room Type"
                                id="roomType"
                                value=Signal::derive(move || vm.form.with(|f| f.room_type.as_str().to_string()))
                                options=Signal::derive(room_options)
                                on_change=Callback::new(move |v: String| {
                                    if let Some(room_type) = RoomType::from_str_opt(&v) {
                                        vm.form.update(|f| f.room_type = room_type);
                                    }
                                })
                            />
                            <Input
                                label="Number of Guests"
                                id="guests"
                                input_type="number"
                                min="1"
                                max="10"
                                value=Signal::derive(move || vm.form.with(|f| f.guests.to_string()))
                                on_input=Callback::new(move |v: String| {
                                    // empty or non-numeric input counts as zero guests
                                    let guests = v.trim().parse::<u32>().unwrap_or(0);
                                    vm.form.update(|f| f.guests = guests);
                                })
                                on_blur=Callback::new(move |_| vm.touch(BookingField::Guests))
                                error=Signal::derive(move || vm.field_error(BookingField::Guests))
                            />
                        </div>

                        <Button
                            button_type="submit"
                            class="button--block"
                            disabled=Signal::derive(move || !vm.is_form_valid())
                            loading=Signal::derive(move || vm.is_submitting.get())
                        >
                            {"Confirm Booking"}
                        </Button>
                    </form>
                </div>

                <BookingSummary vm=vm />
            </div>
        </div>
    }
}

#[component]
fn BookingSummary(vm: CreateBookingViewModel) -> impl IntoView {
    view! {
        <div class="card summary">
            <h3 class="summary__title">
                {icon("credit-card")}
                {"Booking Summary"}
            </h3>
            <div class="summary__row">
                <span>{"Room"}</span>
                <span class="capitalize">{move || vm.form.with(|f| f.room_type.as_str())}</span>
            </div>
            <div class="summary__row">
                <span>{"Nights"}</span>
                <span>{move || vm.form.with(|f| f.nights())}</span>
            </div>
            <div class="summary__row">
                <span>{"Guests"}</span>
                <span>{move || vm.form.with(|f| f.guests)}</span>
            </div>
            <div class="summary__row summary__row--total">
                <span>{"Total"}</span>
                <span class="summary__total">{move || format!("${}", vm.form.with(|f| f.total_price()))}</span>
            </div>
        </div>
    }
}
