//! Categories (elemental types) and the category filter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ALL_CATEGORIES;

/// One of the fixed set of categories published upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name (e.g. `fire`).
    pub name: String,
    /// Value accepted by `GET /type/{identifier}`.
    pub identifier: String,
    /// Upstream locator for the category record.
    pub url: String,
}

/// Which slice of the catalog is being browsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter value; empty and `"all"` mean no filter.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Only(value.to_lowercase())
        }
    }

    /// Value used in URLs and form fields.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(id) => id,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&Category> for CategoryFilter {
    fn from(category: &Category) -> Self {
        Self::Only(category.identifier.clone())
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
