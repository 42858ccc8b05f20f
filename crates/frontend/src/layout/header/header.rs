use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a href="/" class="header__brand">
                    <span class="header__logo">"H"</span>
                    <span class="header__title">"Hotel task"</span>
                </a>
            </div>
        </header>
    }
}
