//! Fetch gateway for the creature database.
//!
//! Translates catalog operations into HTTP GETs and deserializes the JSON
//! into the app's records. Holds no state between calls: no caching, no
//! deduplication, no retries. Callers decide what to do with failures.
//!
//! The HTTP layer sits behind [`Transport`], so the same gateway runs on the
//! browser fetch API in production and on canned responses in tests.

use futures::future::join_all;
use serde::de::DeserializeOwned;

use crate::config::API_BASE_URL;
use crate::core::error::{ApiError, FetchError};
use crate::models::api::{PokemonRecord, ResourceList, TypeRecord};
use crate::models::{Category, CategoryFilter, ItemDetail, ItemSummary, ListPage};
use crate::utils::fetch_text;

/// Source of response bodies for GET requests.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// GET `url` and return the body text, or why it could not be fetched.
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Transport`] backed by the browser fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        fetch_text(url).await
    }
}

/// Client for the PokéAPI endpoints the catalog uses.
#[derive(Debug, Clone)]
pub struct PokeApi<T = BrowserTransport> {
    base_url: String,
    transport: T,
}

impl PokeApi<BrowserTransport> {
    /// Gateway against the public API using browser fetch.
    pub fn browser() -> Self {
        Self::new(API_BASE_URL, BrowserTransport)
    }
}

impl<T: Transport> PokeApi<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /type`: every category.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/type", self.base_url);
        let list: ResourceList = self.get_json(&url, "type").await?;
        Ok(list.results.into_iter().map(Category::from).collect())
    }

    /// One page of item references, optionally restricted to a category.
    ///
    /// The unfiltered listing is paginated upstream. Category membership is
    /// not, so the full member list is fetched and sliced here.
    pub async fn list_items(
        &self,
        category: &CategoryFilter,
        limit: usize,
        offset: usize,
    ) -> Result<ListPage, ApiError> {
        if limit == 0 {
            return Err(ApiError::InvalidRequest(
                "page limit must be positive".to_string(),
            ));
        }

        match category {
            CategoryFilter::All => {
                let url = format!(
                    "{}/pokemon?limit={}&offset={}",
                    self.base_url, limit, offset
                );
                let list: ResourceList = self.get_json(&url, "pokemon").await?;
                Ok(ListPage {
                    has_next: list.next.is_some(),
                    total_count: list.count,
                    items: list.results.into_iter().map(ItemSummary::from).collect(),
                })
            }
            CategoryFilter::Only(id) => {
                let url = format!("{}/type/{}", self.base_url, urlencoding::encode(id));
                let record: TypeRecord = self.get_json(&url, &format!("type/{}", id)).await?;
                let members = record
                    .pokemon
                    .into_iter()
                    .map(|m| ItemSummary::from(m.pokemon))
                    .collect();
                Ok(ListPage::from_full_list(members, limit, offset))
            }
        }
    }

    /// `GET /pokemon/{nameOrId}`: one item's full record.
    pub async fn get_item_detail(&self, name_or_id: &str) -> Result<ItemDetail, ApiError> {
        let key = name_or_id.trim().to_lowercase();
        if key.is_empty() {
            return Err(ApiError::NotFound("pokemon/".to_string()));
        }

        let url = format!("{}/pokemon/{}", self.base_url, urlencoding::encode(&key));
        let record: PokemonRecord = self.get_json(&url, &format!("pokemon/{}", key)).await?;
        Ok(record.into())
    }

    /// Hydrate a batch of references, one concurrent request each.
    ///
    /// Every request settles before this returns. The result keeps the input
    /// order; any single failure fails the whole batch.
    pub async fn get_item_details(
        &self,
        summaries: &[ItemSummary],
    ) -> Result<Vec<ItemDetail>, ApiError> {
        let requests = summaries.iter().map(|s| async move {
            let record: PokemonRecord = self.get_json(&s.identifier, &s.name).await?;
            Ok::<_, ApiError>(ItemDetail::from(record))
        });

        join_all(requests).await.into_iter().collect()
    }

    async fn get_json<R: DeserializeOwned>(&self, url: &str, what: &str) -> Result<R, ApiError> {
        let body = self.transport.get_text(url).await.map_err(|e| {
            leptos::logging::warn!("GET {} failed: {}", url, e);
            ApiError::from_fetch(e, what)
        })?;
        serde_json::from_str(&body).map_err(|e| {
            leptos::logging::warn!("GET {} returned an unexpected body: {}", url, e);
            ApiError::from(e)
        })
    }
}
