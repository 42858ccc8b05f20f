use crate::domain::a001_booking::ui::create::CreateBookingPage;
use crate::domain::a001_booking::ui::details::BookingDetailsPage;
use crate::domain::a001_booking::ui::list::BookingList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state__title">{"Page not found"}</h2>
            <a href="/" class="button button--secondary">{"Back to Dashboard"}</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=BookingList />
                    <Route path=path!("/create") view=CreateBookingPage />
                    <Route path=path!("/booking/:id") view=BookingDetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
