use crate::domain::a001_booking::context::BookingStoreContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Hydrate the booking store once and share it with every page.
    provide_context(BookingStoreContext::new(&config));
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
