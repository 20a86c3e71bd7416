//! Root application module.
//!
//! Contains the main App component and [`Catalog`], the per-session handle
//! that the views receive as a prop.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{AppRouter, Layout};
use crate::core::{ListController, ListSession, PokeApi};
use crate::models::{AppRoute, Category, CategoryFilter};

// ============================================================================
// Catalog
// ============================================================================

/// Browsing session shared by the catalog views.
///
/// Wraps the single [`ListController`] for this page load. The controller is
/// `!Send`, so it lives in local arena storage; `revision` is bumped on every
/// controller state change so reads through [`Catalog::read`] stay reactive.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles, so it can be
/// passed by value to every component that needs it.
#[derive(Clone, Copy)]
pub struct Catalog {
    controller: StoredValue<ListController, LocalStorage>,
    api: StoredValue<Rc<PokeApi>, LocalStorage>,
    revision: RwSignal<u64>,
    /// Category list, fetched once per session.
    pub categories: RwSignal<Vec<Category>>,
}

impl Catalog {
    pub fn new() -> Self {
        let revision = RwSignal::new(0u64);
        let api = Rc::new(PokeApi::browser());
        let controller = ListController::new(Rc::clone(&api))
            .with_observer(move || revision.update(|r| *r += 1));

        Self {
            controller: StoredValue::new_local(controller),
            api: StoredValue::new_local(api),
            revision,
            categories: RwSignal::new(Vec::new()),
        }
    }

    /// Fetch the category list and the first page.
    pub fn start(&self) {
        let api = self.api();
        let categories = self.categories;
        spawn_local(async move {
            match api.list_categories().await {
                Ok(list) => categories.set(list),
                Err(e) => leptos::logging::warn!("category list unavailable: {}", e),
            }
        });
        self.load_more();
    }

    /// Reactive read of the session state.
    pub fn read<R>(&self, f: impl FnOnce(&ListSession) -> R) -> R {
        self.revision.track();
        self.controller.with_value(|c| c.read(f))
    }

    pub fn api(&self) -> Rc<PokeApi> {
        self.api.with_value(Rc::clone)
    }

    pub fn load_more(&self) {
        let controller = self.controller();
        spawn_local(async move {
            controller.load_more().await;
        });
    }

    /// Bring the session in line with the filter in the URL.
    pub fn apply_filter(&self, category: CategoryFilter, search: &str) {
        let controller = self.controller();
        if controller.read(|s| s.search_term() != search) {
            controller.set_search_term(search);
        }
        if controller.read(|s| *s.category() != category) {
            spawn_local(async move {
                controller.set_category(category).await;
            });
        }
    }

    /// Catalog route for the current filter, used by "back" links.
    pub fn current_route(&self) -> AppRoute {
        self.read(|s| AppRoute::catalog(s.category().clone(), s.search_term()))
    }

    fn controller(&self) -> ListController {
        self.controller.with_value(ListController::clone)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates the session's [`Catalog`] and starts the first load
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the layout and router
#[component]
pub fn App() -> impl IntoView {
    let catalog = Catalog::new();
    catalog.start();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    text-align: center;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">"Something went wrong"</h1>
                    <p style="color: #4b5563; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #dc2626; font-size: 0.9rem; list-style: none;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #2563eb;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 6px;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Layout>
                <AppRouter catalog=catalog />
            </Layout>
        </ErrorBoundary>
    }
}
