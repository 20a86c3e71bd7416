//! Incremental list controller.
//!
//! Drives a [`ListSession`] with pages from the [`PokeApi`] gateway. One
//! controller exists per browsing session; the root component creates it and
//! hands it to the views that need it.
//!
//! Everything runs on the browser's single thread. Session state sits in a
//! `RefCell` that is never borrowed across an `.await`, so user input can
//! change the category or search term while a page is in flight. A result
//! that arrives after its category was replaced is discarded by
//! [`ListSession::complete_load`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::error::ApiError;
use crate::core::gateway::{BrowserTransport, PokeApi, Transport};
use crate::core::session::{ListSession, LoadOutcome, LoadedPage, PageRequest};
use crate::models::CategoryFilter;

type Observer = Rc<dyn Fn()>;

/// Session-scoped list controller. Clones share the same session.
pub struct ListController<T = BrowserTransport> {
    api: Rc<PokeApi<T>>,
    session: Rc<RefCell<ListSession>>,
    observer: Option<Observer>,
}

impl<T> Clone for ListController<T> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            session: Rc::clone(&self.session),
            observer: self.observer.clone(),
        }
    }
}

impl<T: Transport> ListController<T> {
    pub fn new(api: Rc<PokeApi<T>>) -> Self {
        Self::with_session(api, ListSession::default())
    }

    pub fn with_session(api: Rc<PokeApi<T>>, session: ListSession) -> Self {
        Self {
            api,
            session: Rc::new(RefCell::new(session)),
            observer: None,
        }
    }

    /// Call `f` after every state change (used to re-render views).
    pub fn with_observer(mut self, f: impl Fn() + 'static) -> Self {
        self.observer = Some(Rc::new(f));
        self
    }

    pub fn api(&self) -> Rc<PokeApi<T>> {
        Rc::clone(&self.api)
    }

    /// Read the session state.
    pub fn read<R>(&self, f: impl FnOnce(&ListSession) -> R) -> R {
        f(&self.session.borrow())
    }

    /// Update the name filter. Never touches the network.
    pub fn set_search_term(&self, term: &str) {
        self.session.borrow_mut().set_search_term(term);
        self.notify();
    }

    /// Switch category and load its first page.
    pub async fn set_category(&self, category: CategoryFilter) -> LoadOutcome {
        let changed = self.session.borrow_mut().select_category(category);
        if !changed {
            return LoadOutcome::Unchanged;
        }
        self.notify();
        self.load_more().await
    }

    /// Load and append the next page.
    ///
    /// No-op while another page is loading or once the list is exhausted.
    pub async fn load_more(&self) -> LoadOutcome {
        let Some(request) = self.session.borrow_mut().begin_load() else {
            return LoadOutcome::Skipped;
        };
        self.notify();

        let result = self.fetch_page(&request).await;
        let outcome = self.session.borrow_mut().complete_load(&request, result);

        match &outcome {
            LoadOutcome::Failed(err) => leptos::logging::error!(
                "loading {} page at offset {} failed ({}): {}",
                request.category,
                request.offset,
                err.kind(),
                err
            ),
            LoadOutcome::Stale => leptos::logging::log!(
                "discarded {} page at offset {}: category changed",
                request.category,
                request.offset
            ),
            _ => {}
        }

        self.notify();
        outcome
    }

    async fn fetch_page(&self, request: &PageRequest) -> Result<LoadedPage, ApiError> {
        let page = self
            .api
            .list_items(&request.category, request.limit, request.offset)
            .await?;
        let items = self.api.get_item_details(&page.items).await?;
        Ok(LoadedPage {
            items,
            has_next: page.has_next,
        })
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer();
        }
    }
}
