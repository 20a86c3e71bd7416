//! Test doubles for the gateway and controller.
//!
//! [`MockTransport`] serves canned bodies per URL (anything unregistered is a
//! 404), records every request, and can hold a response pending until the
//! test releases it. [`Corpus`] fills a mock with a synthetic catalog.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use futures::channel::oneshot;
use serde_json::{Value, json};

use crate::core::error::FetchError;
use crate::core::gateway::Transport;
use crate::models::ItemSummary;

pub const BASE: &str = "https://api.test/v2";

#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<HashMap<String, Result<String, FetchError>>>,
    gates: RefCell<HashMap<String, VecDeque<oneshot::Receiver<()>>>>,
    calls: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_text(&self, url: &str, body: &str) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Ok(body.to_string()));
    }

    pub fn respond_json(&self, url: &str, body: Value) {
        self.respond_text(url, &body.to_string());
    }

    pub fn respond_err(&self, url: &str, err: FetchError) {
        self.responses.borrow_mut().insert(url.to_string(), Err(err));
    }

    /// Hold the next request to `url` until the returned sender fires or drops.
    pub fn gate(&self, url: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == url).count()
    }
}

impl Transport for MockTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.calls.borrow_mut().push(url.to_string());

        let gate = self
            .gates
            .borrow_mut()
            .get_mut(url)
            .and_then(VecDeque::pop_front);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        self.responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::HttpError(404)))
    }
}

/// Minimal detail record for item `id`.
pub fn pokemon_json(id: usize, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "sprites": {
            "front_default": format!("https://img.test/{}.png", id),
            "other": { "official-artwork": { "front_default": format!("https://art.test/{}.png", id) } }
        },
        "types": [{ "slot": 1, "type": { "name": "normal", "url": format!("{}/type/1/", BASE) } }],
        "stats": [{ "base_stat": 50, "effort": 0, "stat": { "name": "hp", "url": "" } }],
        "abilities": [],
        "moves": []
    })
}

/// A synthetic catalog of items named `mon-1` ..= `mon-{size}`.
pub struct Corpus {
    size: usize,
}

impl Corpus {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn name(&self, id: usize) -> String {
        format!("mon-{}", id)
    }

    pub fn summary(&self, id: usize) -> ItemSummary {
        ItemSummary::new(self.name(id), format!("{}/pokemon/{}/", BASE, id))
    }

    pub fn listing_url(limit: usize, offset: usize) -> String {
        format!("{}/pokemon?limit={}&offset={}", BASE, limit, offset)
    }

    pub fn category_url(name: &str) -> String {
        format!("{}/type/{}", BASE, name)
    }

    /// Detail records for every item.
    pub fn install_details(&self, mock: &MockTransport) {
        for id in 1..=self.size {
            mock.respond_json(&self.summary(id).identifier, pokemon_json(id, &self.name(id)));
        }
    }

    /// The paginated global listing, one response per page boundary.
    pub fn install_listing(&self, mock: &MockTransport, limit: usize) {
        for offset in (0..self.size).step_by(limit) {
            let end = (offset + limit).min(self.size);
            let results: Vec<Value> = (offset + 1..=end)
                .map(|id| {
                    let s = self.summary(id);
                    json!({ "name": s.name, "url": s.identifier })
                })
                .collect();
            let next = (end < self.size).then(|| Self::listing_url(limit, end));
            mock.respond_json(
                &Self::listing_url(limit, offset),
                json!({ "count": self.size, "next": next, "previous": null, "results": results }),
            );
        }
    }

    /// A category whose membership is the given item ids.
    pub fn install_category(
        &self,
        mock: &MockTransport,
        name: &str,
        ids: impl IntoIterator<Item = usize>,
    ) {
        let members: Vec<Value> = ids
            .into_iter()
            .map(|id| {
                let s = self.summary(id);
                json!({ "pokemon": { "name": s.name, "url": s.identifier }, "slot": 1 })
            })
            .collect();
        mock.respond_json(
            &Self::category_url(name),
            json!({ "id": 10, "name": name, "pokemon": members }),
        );
    }
}
