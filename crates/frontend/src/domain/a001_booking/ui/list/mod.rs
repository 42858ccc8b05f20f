use crate::domain::a001_booking::context::use_booking_store;
use crate::shared::components::ui::{Badge, Button, StatusBadge};
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_short_date;
use crate::shared::icons::icon;
use contracts::domain::a001_booking::Booking;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BookingList() -> impl IntoView {
    let store = use_booking_store();
    let bookings = store.bookings();
    let persist_error = store.persist_error();

    let clear_all = move |_: leptos::ev::MouseEvent| {
        let count = bookings.with(Vec::len);
        // Simple confirm dialog via browser
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Delete all bookings? Count: {}", count))
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            store.reset();
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Bookings" subtitle="Manage your hotel reservations.">
                <Show when=move || !bookings.with(Vec::is_empty)>
                    <Button variant="ghost" on_click=Callback::new(clear_all)>
                        {icon("trash")}
                        {"Clear all"}
                    </Button>
                </Show>
                <a href="/create" class="button button--primary">
                    {icon("plus-circle")}
                    {"New Booking"}
                </a>
            </PageHeader>

            {move || persist_error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("Changes are not saved on this device: {}", e)}</span>
                </div>
            })}

            <Show
                when=move || !bookings.with(Vec::is_empty)
                fallback=|| view! { <EmptyState /> }
            >
                <div class="booking-grid">
                    <For
                        each=move || bookings.get()
                        // status is part of the key so a re-statused card re-renders
                        key=|b| (b.id.clone(), b.status)
                        children=move |booking| view! { <BookingCard booking=booking /> }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("calendar")}</div>
            <h3 class="empty-state__title">{"No bookings found"}</h3>
            <p class="empty-state__text">
                {"You haven't created any bookings yet. Get started by creating your first reservation."}
            </p>
            <a href="/create" class="button button--secondary">{"Create your first booking"}</a>
        </div>
    }
}

#[component]
fn BookingCard(booking: Booking) -> impl IntoView {
    let href = format!("/booking/{}", booking.id);
    let status = booking.status;

    view! {
        <a href=href class="booking-card">
            <div class="booking-card__header">
                <div>
                    <p class="booking-card__guest">{booking.guest_name.clone()}</p>
                    <p class="booking-card__meta">{icon("user")} {booking.guests_label()}</p>
                </div>
                <StatusBadge status=Signal::derive(move || status) />
            </div>

            <div class="booking-card__dates">
                <div>
                    <p class="booking-card__caption">{"Check In"}</p>
                    <p class="booking-card__value">{format_short_date(booking.check_in)}</p>
                </div>
                <div>
                    <p class="booking-card__caption">{"Check Out"}</p>
                    <p class="booking-card__value">{format_short_date(booking.check_out)}</p>
                </div>
            </div>

            <div class="booking-card__footer">
                <Badge variant="neutral" class="capitalize">{booking.room_type.as_str()}</Badge>
                <span class="booking-card__price">{format!("${}", booking.total_price)}</span>
            </div>
        </a>
    }
}
