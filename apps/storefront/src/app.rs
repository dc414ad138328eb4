//! Application shell.

use leptos::prelude::*;
use leptos_meta::*;
use storefront_core::StorefrontApp;
use storefront_router::{path, use_location, Route, Router, Routes};

use crate::components::{Footer, MainSection, NavBar, NotFound, ProductPage};

#[component]
pub fn App(app: StorefrontApp) -> impl IntoView {
    provide_meta_context();

    let config = app.config().clone();
    let catalog = app.catalog();
    let lookup_delay = config.lookup_delay();
    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        {config.css_path.clone().map(|href| view! { <Stylesheet id="storefront" href=href/> })}
        <Meta name="description" content=config.description.clone()/>

        <Router>
            <RouteTitle app=app/>
            <NavBar brand=config.name.clone() categories=catalog.list_categories()/>
            <main>
                <Routes fallback>
                    <Route
                        path=path!("")
                        view=move || view! { <MainSection deals=catalog.list_deals()/> }
                    />
                    <Route
                        path=path!("/product/:productId")
                        view=move || view! { <ProductPage catalog=catalog lookup_delay=lookup_delay/> }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Keeps the document title in step with the current path.
#[component]
fn RouteTitle(app: StorefrontApp) -> impl IntoView {
    let location = use_location();
    view! { <Title text=move || app.title_for(&location.pathname.get())/> }
}
