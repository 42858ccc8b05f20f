use super::view_model::{BookingDetailsViewModel, DetailsState};
use crate::shared::components::ui::{Button, Select, StatusBadge};
use crate::shared::date_utils::format_long_date;
use crate::shared::icons::icon;
use contracts::domain::a001_booking::{Booking, BookingId};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Route entry for `/booking/:id`
#[component]
pub fn BookingDetailsPage() -> impl IntoView {
    let params = use_params_map();

    move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        view! { <BookingDetails id=id /> }
    }
}

#[component]
pub fn BookingDetails(id: String) -> impl IntoView {
    let vm = BookingDetailsViewModel::new(BookingId::new(id));
    let navigate = StoredValue::new_local(use_navigate());

    move || match vm.state() {
        DetailsState::Removed => ().into_any(),
        DetailsState::NotFound => view! { <NotFound /> }.into_any(),
        DetailsState::Found(booking) => {
            let vm_delete = vm.clone();
            let on_delete = Callback::new(move |_: leptos::ev::MouseEvent| {
                if vm_delete.delete_command() {
                    navigate.with_value(|navigate| navigate("/", Default::default()));
                }
            });
            view! { <BookingCardDetails booking=booking vm=vm.clone() on_delete=on_delete /> }
                .into_any()
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state__title">{"Booking not found"}</h2>
            <p class="empty-state__text">{"The booking you are looking for does not exist."}</p>
            <a href="/" class="button button--secondary">{"Back to Dashboard"}</a>
        </div>
    }
}

#[component]
fn BookingCardDetails(
    booking: Booking,
    vm: BookingDetailsViewModel,
    on_delete: Callback<leptos::ev::MouseEvent>,
) -> impl IntoView {
    let status = booking.status;
    let nights = booking.nights();

    view! {
        <div class="page page--narrow">
            <div class="details-back">
                <a href="/" class="button button--ghost button--small">
                    {icon("chevron-left")}
                    {"Back"}
                </a>
            </div>

            <div class="details-header">
                <div>
                    <h1 class="page-header__title">{"Booking Details"}</h1>
                    <p class="page-header__subtitle">
                        {"ID: "}<span class="mono">{booking.id.to_string()}</span>
                    </p>
                </div>
                <Button variant="danger" size="sm" on_click=on_delete>
                    {icon("trash")}
                    {"Cancel Booking"}
                </Button>
            </div>

            <div class="details-grid">
                <div class="card details-main">
                    <div class="details-main__guest">
                        <div>
                            <h3>{"Guest Information"}</h3>
                            <div class="details-main__contacts">
                                <span>{icon("user")} {booking.guest_name.clone()}</span>
                                <span>{icon("mail")} {booking.email.clone()}</span>
                            </div>
                        </div>
                        <StatusBadge status=Signal::derive(move || status) />
                    </div>

                    <div class="details-main__dates">
                        <div>
                            <p class="details-main__caption">{icon("calendar")} {"Check-in"}</p>
                            <p class="details-main__date">{format_long_date(booking.check_in)}</p>
                        </div>
                        <div class="text-right">
                            <p class="details-main__caption">{icon("calendar")} {"Check-out"}</p>
                            <p class="details-main__date">{format_long_date(booking.check_out)}</p>
                        </div>
                    </div>

                    <div class="details-main__total">
                        <div>
                            <p class="details-main__caption">{"Total Stay"}</p>
                            <p class="details-main__price">{format!("${}", booking.total_price)}</p>
                        </div>
                        <div class="text-right">
                            <p class="details-main__caption">{"Room Type"}</p>
                            <p class="capitalize">{booking.room_type.as_str()}</p>
                        </div>
                    </div>
                </div>

                <div class="card details-summary">
                    <h3>{"Reservation Summary"}</h3>
                    <ul>
                        <li><span>{"Guests"}</span><span>{booking.guests}</span></li>
                        <li><span>{"Nights"}</span><span>{nights}</span></li>
                    </ul>
                    <Select
                        label="Status"
                        id="status"
                        value=Signal::derive(move || status.as_str().to_string())
                        options=Signal::derive(BookingDetailsViewModel::status_options)
                        on_change=Callback::new(move |value: String| vm.change_status_command(&value))
                    />
                </div>
            </div>
        </div>
    }
}
