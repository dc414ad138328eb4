//! Top navigation bar: category menus, mobile drawer and search.

use leptos::ev;
use leptos::prelude::*;
use storefront_catalog::catalog::Category;
use storefront_router::{use_location, AppRoute};
use storefront_state::{MenuEvent, MenuState, Viewport};

use super::search_bar::SearchBar;

/// Navigation bar.
///
/// Desktop widths get one dropdown per category; below the breakpoint the
/// categories move into a drawer with accordion sections. All menus share one
/// [`MenuState`], and any click that reaches the window closes them.
#[component]
pub fn NavBar(#[prop(into)] brand: String, categories: &'static [Category]) -> impl IntoView {
    let menu = RwSignal::new(MenuState::Closed);
    let viewport = RwSignal::new(current_viewport());
    let search = RwSignal::new(String::new());

    let dispatch = Callback::new(move |event: MenuEvent| {
        menu.update(|state| {
            let next = state.apply(&event);
            if next != *state {
                tracing::debug!(?event, from = ?state, to = ?next, "menu transition");
                *state = next;
            }
        });
    });

    let click = window_event_listener(ev::click, move |_| dispatch.run(MenuEvent::ClickOutside));
    let resize = window_event_listener(ev::resize, move |_| {
        let next = current_viewport();
        if viewport.get_untracked() != next {
            viewport.set(next);
            dispatch.run(MenuEvent::ViewportChanged(next));
        }
    });
    on_cleanup(move || {
        click.remove();
        resize.remove();
    });

    let on_search = search_handler(search);

    let location = use_location();
    Effect::new(move |previous: Option<String>| {
        let path = location.pathname.get();
        if previous.is_some_and(|p| p != path) {
            dispatch.run(MenuEvent::RouteChanged);
        }
        path
    });

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                {move || viewport.get().is_mobile().then(|| view! {
                    <button
                        class="drawer-toggle"
                        aria-label="open drawer"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch.run(MenuEvent::ToggleDrawer);
                        }
                    >
                        "☰"
                    </button>
                })}
                <a href=AppRoute::Home.href() class="brand">{brand}</a>
                {move || if viewport.get().is_mobile() {
                    view! { <MobileDrawer categories=categories menu=menu dispatch=dispatch/> }.into_any()
                } else {
                    view! { <DesktopMenus categories=categories menu=menu dispatch=dispatch/> }.into_any()
                }}
                <SearchBar value=search on_change=on_search/>
            </div>
        </header>
    }
}

#[component]
fn DesktopMenus(
    categories: &'static [Category],
    menu: RwSignal<MenuState>,
    dispatch: Callback<MenuEvent>,
) -> impl IntoView {
    view! {
        <ul class="category-menus">
            {categories.iter().map(|category| {
                let id = category.id.clone();
                let open_id = category.id.clone();
                let is_open = Memo::new(move |_| menu.with(|m| m.is_dropdown_open(&open_id)));
                let button_id = category.button_id();
                let labelled_by = button_id.clone();

                view! {
                    <li class="category-menu">
                        <button
                            id=button_id
                            class="category-button"
                            aria-haspopup="true"
                            aria-expanded=move || is_open.get().to_string()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                let event = if is_open.get_untracked() {
                                    MenuEvent::CloseDropdown
                                } else {
                                    MenuEvent::OpenDropdown(id.clone())
                                };
                                dispatch.run(event);
                            }
                        >
                            {category.name.clone()}
                        </button>
                        <Show when=move || is_open.get()>
                            <ul class="dropdown" role="menu" aria-labelledby=labelled_by.clone()>
                                {category.subcategories.iter().map(|sub| view! {
                                    <li
                                        role="menuitem"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            dispatch.run(MenuEvent::SelectSubcategory);
                                        }
                                    >
                                        {sub.name.clone()}
                                    </li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </Show>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn MobileDrawer(
    categories: &'static [Category],
    menu: RwSignal<MenuState>,
    dispatch: Callback<MenuEvent>,
) -> impl IntoView {
    view! {
        <Show when=move || menu.with(MenuState::is_drawer_open)>
            <div
                class="drawer-backdrop"
                on:click=move |ev| {
                    ev.stop_propagation();
                    dispatch.run(MenuEvent::CloseDrawer);
                }
            ></div>
            <nav class="drawer" on:click=|ev| ev.stop_propagation()>
                <ul>
                    {categories.iter().map(|category| {
                        let open_id = category.id.clone();
                        let expanded = Memo::new(move |_| menu.with(|m| m.is_section_expanded(&open_id)));
                        let toggle_id = category.id.clone();

                        view! {
                            <li>
                                <button
                                    class="drawer-section"
                                    aria-expanded=move || expanded.get().to_string()
                                    on:click=move |_| dispatch.run(MenuEvent::ToggleSection(toggle_id.clone()))
                                >
                                    {category.name.clone()}
                                </button>
                                <Show when=move || expanded.get()>
                                    <ul class="drawer-subcategories">
                                        {category.subcategories.iter().map(|sub| view! {
                                            <li>
                                                <button on:click=move |_| dispatch.run(MenuEvent::SelectSubcategory)>
                                                    {sub.name.clone()}
                                                </button>
                                            </li>
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                </Show>
                            </li>
                        }
                    }).collect::<Vec<_>>()}
                </ul>
            </nav>
        </Show>
    }
}

/// Callback the search bar reports every keystroke through.
fn search_handler(search: RwSignal<String>) -> Callback<String> {
    Callback::new(move |term: String| {
        tracing::debug!(%term, "search term changed");
        search.set(term);
    })
}

fn current_viewport() -> Viewport {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(Viewport::from_width)
        .unwrap_or(Viewport::Desktop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_handler_stores_term() {
        let owner = Owner::new();
        owner.set();

        let search = RwSignal::new(String::new());
        let on_search = search_handler(search);

        on_search.run("laptop".to_string());
        assert_eq!(search.get_untracked(), "laptop");

        on_search.run(String::new());
        assert_eq!(search.get_untracked(), "");
    }
}
