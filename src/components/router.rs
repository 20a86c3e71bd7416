//! Application router component.
//!
//! Handles URL-based routing with hash history, using native `hashchange`
//! events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the category and search filter are
//!   read from `#/?type=..&search=..` and pushed into the [`Catalog`]
//! - **Pages only re-render on page changes**: typing in the search box
//!   changes the route but keeps the catalog page mounted
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::Catalog;
use crate::components::catalog::CatalogPage;
use crate::components::detail::DetailPage;
use crate::components::not_found::NotFound;
use crate::models::AppRoute;
use crate::utils::dom;

/// Which page a route renders. Filter changes within the catalog map to the
/// same page, so the page is not rebuilt while the user types.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Page {
    Catalog,
    Detail(String),
    NotFound,
}

impl From<&AppRoute> for Page {
    fn from(route: &AppRoute) -> Self {
        match route {
            AppRoute::Catalog { .. } => Self::Catalog,
            AppRoute::Detail { name } => Self::Detail(name.clone()),
            AppRoute::NotFound => Self::NotFound,
        }
    }
}

/// Main application router.
///
/// - `#/` → catalog, no filter
/// - `#/?type=fire&search=char` → filtered catalog
/// - `#/pokemon/{name}` → detail page
#[component]
pub fn AppRouter(catalog: Catalog) -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Push the URL filter into the session
    Effect::new(move |_| {
        if let AppRoute::Catalog { category, search } = route.get() {
            catalog.apply_filter(category, &search);
        }
    });

    let page = Memo::new(move |_| route.with(|r| Page::from(r)));

    // Detail pages open at the top
    Effect::new(move |_| {
        if matches!(page.get(), Page::Detail(_)) {
            dom::scroll_to_top();
        }
    });

    let route_memo = Memo::new(move |_| route.get());

    view! {
        {move || match page.get() {
            Page::Catalog => view! { <CatalogPage catalog=catalog route=route_memo /> }.into_any(),
            Page::Detail(name) => view! { <DetailPage catalog=catalog name=name /> }.into_any(),
            Page::NotFound => view! { <NotFound /> }.into_any(),
        }}
    }
}
