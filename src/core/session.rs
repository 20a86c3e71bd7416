//! Browsing session state.
//!
//! [`ListSession`] is the synchronous half of the list controller: it owns
//! the category filter, the accumulated items, the pagination cursor, the
//! load status and the search term, and decides what each transition does.
//! It never performs I/O. [`ListController`](super::ListController) drives
//! it with gateway results.
//!
//! # Load protocol
//!
//! 1. [`ListSession::begin_load`] returns a [`PageRequest`] (or `None` if a
//!    load is already running or the list is exhausted) and marks the
//!    session as loading.
//! 2. The caller fetches the page described by the request.
//! 3. [`ListSession::complete_load`] applies the result, unless the request's
//!    generation is older than the session's, in which case the result
//!    belongs to a category that is no longer selected and is dropped.

use crate::config::{LOAD_ERROR_MESSAGE, PAGE_SIZE};
use crate::core::error::ApiError;
use crate::models::{CategoryFilter, ItemDetail};

/// Where the session is in its load cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    /// The last page load failed. Items and cursor are as they were before it.
    Error(ApiError),
}

/// A page load handed out by [`ListSession::begin_load`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub category: CategoryFilter,
    pub limit: usize,
    pub offset: usize,
}

/// A fetched and hydrated page, ready to append.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedPage {
    pub items: Vec<ItemDetail>,
    pub has_next: bool,
}

/// What a load or category change ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A load was already running, or there is nothing more to load.
    Skipped,
    /// The category was already selected.
    Unchanged,
    /// This many items were appended.
    Appended(usize),
    /// The page failed to load.
    Failed(ApiError),
    /// The category changed while the page was in flight; result dropped.
    Stale,
}

/// State of one browsing session.
#[derive(Clone, Debug)]
pub struct ListSession {
    category: CategoryFilter,
    search_term: String,
    search_lower: String,
    items: Vec<ItemDetail>,
    offset: usize,
    has_more: bool,
    status: LoadStatus,
    generation: u64,
    page_size: usize,
}

impl Default for ListSession {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl ListSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            category: CategoryFilter::All,
            search_term: String::new(),
            search_lower: String::new(),
            items: Vec::new(),
            offset: 0,
            has_more: true,
            status: LoadStatus::Idle,
            generation: 0,
            page_size,
        }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Every item loaded so far, in load order.
    pub fn items(&self) -> &[ItemDetail] {
        &self.items
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// User-facing message for the current error, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        matches!(self.status, LoadStatus::Error(_)).then_some(LOAD_ERROR_MESSAGE)
    }

    /// Switch category. Returns `false` if it was already selected.
    ///
    /// Clears the list and cursor and invalidates any load in flight.
    pub fn select_category(&mut self, category: CategoryFilter) -> bool {
        if category == self.category {
            return false;
        }
        self.category = category;
        self.generation += 1;
        self.items.clear();
        self.offset = 0;
        self.has_more = true;
        self.status = LoadStatus::Idle;
        true
    }

    /// Start loading the next page, if allowed.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.is_loading() || !self.has_more {
            return None;
        }
        self.status = LoadStatus::Loading;
        Some(PageRequest {
            generation: self.generation,
            category: self.category.clone(),
            limit: self.page_size,
            offset: self.offset,
        })
    }

    /// Apply the result of a load started with [`begin_load`](Self::begin_load).
    pub fn complete_load(
        &mut self,
        request: &PageRequest,
        result: Result<LoadedPage, ApiError>,
    ) -> LoadOutcome {
        if request.generation != self.generation {
            return LoadOutcome::Stale;
        }

        match result {
            Ok(page) => {
                let count = page.items.len();
                self.items.extend(page.items);
                self.offset = request.offset + request.limit;
                self.has_more = page.has_next;
                self.status = LoadStatus::Idle;
                LoadOutcome::Appended(count)
            }
            Err(err) => {
                self.status = LoadStatus::Error(err.clone());
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.search_lower = term.to_lowercase();
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }

    /// Loaded items whose name contains the search term, case-insensitively.
    pub fn visible_items(&self) -> impl Iterator<Item = &ItemDetail> + '_ {
        self.items
            .iter()
            .filter(|item| item.name_matches(&self.search_lower))
    }

    /// Whether reaching the end of the list should fetch the next page.
    ///
    /// Searching only ever covers what is already loaded, and a failed load
    /// waits for an explicit retry.
    pub fn auto_load_enabled(&self) -> bool {
        self.status == LoadStatus::Idle && self.has_more && !self.is_searching()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FetchError;
    use crate::models::{ImageVariants, Stats};

    fn item(id: u32, name: &str) -> ItemDetail {
        ItemDetail {
            id,
            name: name.to_string(),
            image_variants: ImageVariants::default(),
            categories: vec![],
            stats: Stats::default(),
            abilities: vec![],
            moves: vec![],
        }
    }

    fn page(names: &[&str], has_next: bool) -> LoadedPage {
        LoadedPage {
            items: names
                .iter()
                .enumerate()
                .map(|(i, n)| item(i as u32 + 1, n))
                .collect(),
            has_next,
        }
    }

    fn visible_names(session: &ListSession) -> Vec<&str> {
        session.visible_items().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_begin_load_guards() {
        let mut session = ListSession::new(20);
        let req = session.begin_load().unwrap();
        assert_eq!(req.offset, 0);
        assert_eq!(req.limit, 20);
        assert!(session.is_loading());

        // At most one load in flight.
        assert_eq!(session.begin_load(), None);

        session.complete_load(&req, Ok(page(&["a"], false)));
        assert!(!session.has_more());
        // Exhausted.
        assert_eq!(session.begin_load(), None);
    }

    #[test]
    fn test_complete_load_appends_and_advances() {
        let mut session = ListSession::new(2);
        let req = session.begin_load().unwrap();
        let outcome = session.complete_load(&req, Ok(page(&["a", "b"], true)));
        assert_eq!(outcome, LoadOutcome::Appended(2));

        let req = session.begin_load().unwrap();
        assert_eq!(req.offset, 2);
        session.complete_load(&req, Ok(page(&["c", "d"], true)));

        assert_eq!(visible_names(&session), vec!["a", "b", "c", "d"]);
        assert_eq!(session.offset(), 4);
        assert_eq!(session.status(), &LoadStatus::Idle);
    }

    #[test]
    fn test_failure_keeps_items_and_cursor() {
        let mut session = ListSession::new(2);
        let req = session.begin_load().unwrap();
        session.complete_load(&req, Ok(page(&["a", "b"], true)));

        let req = session.begin_load().unwrap();
        let err = ApiError::Transport(FetchError::Timeout);
        let outcome = session.complete_load(&req, Err(err.clone()));
        assert_eq!(outcome, LoadOutcome::Failed(err.clone()));
        assert_eq!(session.status(), &LoadStatus::Error(err));
        assert_eq!(session.items().len(), 2);
        assert_eq!(session.offset(), 2);
        assert!(session.has_more());
        assert_eq!(session.error_message(), Some(LOAD_ERROR_MESSAGE));
        assert!(!session.auto_load_enabled());

        // Retry picks up from the same offset.
        let retry = session.begin_load().unwrap();
        assert_eq!(retry.offset, 2);
    }

    #[test]
    fn test_select_category_resets() {
        let mut session = ListSession::new(2);
        let req = session.begin_load().unwrap();
        session.complete_load(&req, Ok(page(&["a", "b"], false)));

        assert!(!session.select_category(CategoryFilter::All));
        assert_eq!(session.items().len(), 2);

        assert!(session.select_category(CategoryFilter::Only("fire".to_string())));
        assert!(session.items().is_empty());
        assert_eq!(session.offset(), 0);
        assert!(session.has_more());
        assert_eq!(session.status(), &LoadStatus::Idle);
    }

    #[test]
    fn test_stale_result_dropped_while_new_load_runs() {
        let mut session = ListSession::new(2);
        let old = session.begin_load().unwrap();

        session.select_category(CategoryFilter::Only("water".to_string()));
        let new = session.begin_load().unwrap();
        assert_eq!(new.category, CategoryFilter::Only("water".to_string()));

        let outcome = session.complete_load(&old, Ok(page(&["bulbasaur", "ivysaur"], true)));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert!(session.items().is_empty());
        // The newer load is still the one in flight.
        assert!(session.is_loading());

        session.complete_load(&new, Ok(page(&["squirtle"], false)));
        assert_eq!(visible_names(&session), vec!["squirtle"]);
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut session = ListSession::new(2);
        let old = session.begin_load().unwrap();
        session.select_category(CategoryFilter::Only("ice".to_string()));

        let outcome = session.complete_load(&old, Err(ApiError::Decode("bad".to_string())));
        assert_eq!(outcome, LoadOutcome::Stale);
        assert_eq!(session.status(), &LoadStatus::Idle);
    }

    #[test]
    fn test_search_filters_case_insensitively() {
        let mut session = ListSession::new(3);
        let req = session.begin_load().unwrap();
        session.complete_load(
            &req,
            Ok(page(&["Charmander", "Squirtle", "Charizard"], true)),
        );

        session.set_search_term("char");
        assert_eq!(visible_names(&session), vec!["Charmander", "Charizard"]);

        session.set_search_term("CHAR");
        assert_eq!(visible_names(&session), vec!["Charmander", "Charizard"]);

        session.set_search_term("");
        assert_eq!(
            visible_names(&session),
            vec!["Charmander", "Squirtle", "Charizard"]
        );
    }

    #[test]
    fn test_search_suppresses_auto_load() {
        let mut session = ListSession::new(3);
        assert!(session.auto_load_enabled());

        session.set_search_term("pika");
        assert!(!session.auto_load_enabled());
        // Still allowed explicitly; only the automatic trigger is suppressed.
        assert!(session.has_more());

        session.set_search_term("");
        assert!(session.auto_load_enabled());
    }

    #[test]
    fn test_search_survives_category_change() {
        let mut session = ListSession::new(3);
        session.set_search_term("saur");
        session.select_category(CategoryFilter::Only("grass".to_string()));
        assert_eq!(session.search_term(), "saur");
    }
}
