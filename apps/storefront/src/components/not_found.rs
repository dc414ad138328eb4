//! 404 page.

use leptos::prelude::*;
use storefront_router::{use_navigate, AppRoute};

#[component]
pub fn NotFound() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you are looking for doesn't exist or has been moved."</p>
            <button
                class="btn"
                on:click=move |_| navigate(&AppRoute::Home.href(), Default::default())
            >
                "Return to Home"
            </button>
        </div>
    }
}
