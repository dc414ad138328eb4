//! Search input.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Controlled search field.
///
/// Every input event pushes the whole current text to `on_change`, including
/// the empty string. Submitting only logs the term.
#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        tracing::info!(term = %value.get_untracked(), "search submitted");
    };

    view! {
        <form class="search-bar" role="search" on:submit=on_submit>
            <input
                type="search"
                placeholder="Search…"
                aria-label="search"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </form>
    }
}
