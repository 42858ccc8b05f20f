pub mod header;

use header::Header;
use leptos::prelude::*;

/// Application shell: top navbar over a centered content column.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
