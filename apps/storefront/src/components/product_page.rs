//! Product detail page.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_catalog::Catalog;
use storefront_router::{paths, use_params_map};
use storefront_state::presentation::{AlertView, ContentView, TabBody};
use storefront_state::{present, PageView, ProductPageState, Resolution};

use crate::source::DelayedSource;

/// Single product page.
///
/// Every change of the `productId` parameter issues a lookup; a completion for
/// a superseded identifier is dropped by [`ProductPageState::resolve`].
#[component]
pub fn ProductPage(catalog: &'static Catalog, lookup_delay: Duration) -> impl IntoView {
    let params = use_params_map();
    let page = RwSignal::new(ProductPageState::new());
    let source = Rc::new(DelayedSource::new(catalog, lookup_delay));

    Effect::new(move |_| {
        let id = params.with(|p| p.get(paths::PRODUCT_PARAM));
        let Some(ticket) = page.try_update(|state| state.request(id.as_deref())).flatten() else {
            return;
        };

        let source = Rc::clone(&source);
        spawn_local(async move {
            let outcome = ticket.run(source.as_ref()).await;
            let resolution = page.try_update(|state| state.resolve(outcome));
            if resolution.is_none() {
                tracing::debug!("product page closed before lookup completed");
            } else if resolution == Some(Resolution::Discarded) {
                tracing::trace!("superseded lookup ignored");
            }
        });
    });

    view! {
        <div class="product-page">
            {move || match page.with(present) {
                PageView::Busy => view! { <ProductDetailSkeleton/> }.into_any(),
                PageView::Alert(alert) => view! { <ProductAlert alert=alert/> }.into_any(),
                PageView::Content(content) => view! {
                    <ProductDetail content=content page=page/>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductDetailSkeleton() -> impl IntoView {
    view! {
        <div class="product-loading" role="progressbar" aria-label="Loading product">
            <div class="spinner"></div>
        </div>
    }
}

#[component]
fn ProductAlert(alert: AlertView) -> impl IntoView {
    view! {
        <div class="alert alert-error" role="alert">
            <h2 class="alert-title">{alert.title}</h2>
            <p>{alert.message}</p>
            <p class="alert-detail">{alert.product_line}</p>
            <button class="btn" on:click=move |_| reload_page()>
                {alert.retry_label}
            </button>
        </div>
    }
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        tracing::error!(error = ?e, "page reload failed");
    }
}

#[component]
fn ProductDetail(content: ContentView, page: RwSignal<ProductPageState>) -> impl IntoView {
    let ContentView {
        name,
        price,
        main_image,
        thumbnails,
        tabs,
        body,
        description,
    } = content;
    let has_thumbnails = !thumbnails.is_empty();

    view! {
        <div class="product-detail">
            <div class="gallery">
                <div class="main-image">
                    {main_image.map(|image| view! { <img src=image.src alt=image.alt/> })}
                    {has_thumbnails.then(|| view! {
                        <button
                            class="gallery-nav gallery-prev"
                            aria-label="Previous image"
                            on:click=move |_| page.update(|p| p.previous_image())
                        >
                            "‹"
                        </button>
                        <button
                            class="gallery-nav gallery-next"
                            aria-label="Next image"
                            on:click=move |_| page.update(|p| p.next_image())
                        >
                            "›"
                        </button>
                    })}
                </div>
                <div class="thumbnails">
                    {thumbnails.into_iter().map(|thumb| {
                        let index = thumb.index;
                        view! {
                            <button
                                class="thumbnail"
                                class:selected=thumb.selected
                                on:click=move |_| page.update(|p| {
                                    p.select_thumbnail(index);
                                })
                            >
                                <img src=thumb.src alt=thumb.alt/>
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="product-info">
                <h1>{name}</h1>
                <p class="price">{price}</p>

                <div class="tabs" role="tablist">
                    {tabs.into_iter().map(|tab| {
                        let selected = tab.selected;
                        let which = tab.tab;
                        view! {
                            <button
                                role="tab"
                                class="tab"
                                class:selected=selected
                                aria-selected=selected.to_string()
                                on:click=move |_| page.update(|p| p.select_tab(which))
                            >
                                {tab.label}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <div class="tab-panel" role="tabpanel">
                    {tab_body(body)}
                </div>

                <section class="description">
                    <div class="description-header">
                        <h3>"Detailed Description"</h3>
                        <button
                            class="description-toggle"
                            aria-label=description.toggle_label
                            aria-expanded=description.expanded.to_string()
                            on:click=move |_| page.update(|p| p.toggle_description())
                        >
                            {if description.expanded { "▲" } else { "▼" }}
                        </button>
                    </div>
                    <p class="description-text" class:collapsed={!description.expanded}>
                        {description.text}
                    </p>
                </section>
            </div>
        </div>
    }
}

fn tab_body(body: TabBody) -> AnyView {
    match body {
        TabBody::Overview {
            description,
            category,
            stock,
            in_stock,
        } => {
            let stock_class = if in_stock { "stock in-stock" } else { "stock out-of-stock" };
            view! {
                <p>{description}</p>
                <p class="category">{category}</p>
                <p class=stock_class>{stock}</p>
            }
            .into_any()
        }
        TabBody::Specifications(rows) => view! {
            <table class="specifications">
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            <th scope="row">{row.label}</th>
                            <td>{row.value}</td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any(),
    }
}
