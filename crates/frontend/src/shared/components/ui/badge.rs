use contracts::domain::a001_booking::BookingStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Badge variant for a booking status
pub fn status_variant(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Confirmed => "success",
        BookingStatus::Cancelled => "error",
        BookingStatus::Pending => "warning",
    }
}

/// Status badge for bookings: confirmed / pending / cancelled
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: Signal<BookingStatus>,
) -> impl IntoView {
    let status_class = move || {
        format!(
            "badge badge--status badge--{}",
            status_variant(status.get())
        )
    };

    view! {
        <span class=status_class>
            {move || status.get().as_str()}
        </span>
    }
}
