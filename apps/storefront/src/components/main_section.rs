//! Featured deals grid for the home page.

use leptos::prelude::*;
use storefront_catalog::catalog::Deal;
use storefront_state::DealImage;

#[component]
pub fn MainSection(deals: &'static [Deal]) -> impl IntoView {
    view! {
        <section class="main-section">
            <h2>"Featured Deals"</h2>
            <div class="deals">
                {deals.iter().map(|deal| view! { <DealCard deal=deal/> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn DealCard(deal: &'static Deal) -> impl IntoView {
    let image = RwSignal::new(DealImage::new(deal));

    view! {
        <article class="deal-card" on:click=move |_| on_deal_click(deal)>
            <img
                src=move || image.with(|img| img.src().to_string())
                alt=deal.title.clone()
                on:error=move |_| {
                    image.update(|img| {
                        if img.on_error() {
                            tracing::debug!(deal = %deal.id, fallback = %img.src(), "deal image replaced");
                        }
                    })
                }
            />
            <div class="deal-info">
                <h3>{deal.title.clone()}</h3>
                <p>{deal.description.clone()}</p>
            </div>
        </article>
    }
}

/// Deal clicks are only recorded for now.
fn on_deal_click(deal: &Deal) {
    tracing::info!(title = %deal.title, category = %deal.category, "deal clicked");
}
