//! Hash-based routing.
//!
//! URL formats:
//! - `#/` or empty hash: catalog with no filter
//! - `#/?type=fire&search=char`: catalog filtered by category and name
//! - `#/pokemon/{name}`: detail page

use crate::models::CategoryFilter;
use crate::utils::dom;
use crate::utils::format::humanize;

const DETAIL_PREFIX: &str = "pokemon/";

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// The browsable list, with its filter.
    Catalog {
        category: CategoryFilter,
        search: String,
    },
    /// A single item's detail page.
    Detail { name: String },
    /// Anything unrecognized.
    NotFound,
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::Catalog {
            category: CategoryFilter::All,
            search: String::new(),
        }
    }
}

impl AppRoute {
    pub fn catalog(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self::Catalog {
            category,
            search: search.into(),
        }
    }

    pub fn detail(name: impl Into<String>) -> Self {
        Self::Detail { name: name.into() }
    }

    /// Parse URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let path = path.trim_end_matches('/');

        if path.is_empty() {
            let mut category = CategoryFilter::All;
            let mut search = String::new();
            for (key, value) in parse_query(query) {
                match key.as_str() {
                    "type" => category = CategoryFilter::parse(&value),
                    "search" => search = value,
                    _ => {}
                }
            }
            return Self::Catalog { category, search };
        }

        match path.strip_prefix(DETAIL_PREFIX) {
            Some(name) if !name.is_empty() && !name.contains('/') => {
                Self::Detail { name: decode(name) }
            }
            _ => Self::NotFound,
        }
    }

    /// Convert route to URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Catalog { category, search } => {
                let mut params = Vec::new();
                if !category.is_all() {
                    params.push(format!("type={}", urlencoding::encode(category.as_str())));
                }
                if !search.is_empty() {
                    params.push(format!("search={}", urlencoding::encode(search)));
                }
                if params.is_empty() {
                    "#/".to_string()
                } else {
                    format!("#/?{}", params.join("&"))
                }
            }
            Self::Detail { name } => format!("#/{}{}", DETAIL_PREFIX, urlencoding::encode(name)),
            Self::NotFound => "#/404".to_string(),
        }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route, adding a history entry.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }

    /// Navigate to this route without adding a history entry.
    pub fn replace(&self) {
        dom::replace_hash(&self.to_hash());
    }

    /// Navigation trail for this route. Empty on the catalog itself.
    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        match self {
            Self::Catalog { .. } => Vec::new(),
            Self::Detail { name } => vec![
                Crumb::link("Home", Self::default().to_hash()),
                Crumb {
                    label: humanize(name),
                    href: self.to_hash(),
                    current: true,
                },
            ],
            Self::NotFound => vec![
                Crumb::link("Home", Self::default().to_hash()),
                Crumb {
                    label: "Not found".to_string(),
                    href: self.to_hash(),
                    current: true,
                },
            ],
        }
    }
}

/// One entry in a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    pub current: bool,
}

impl Crumb {
    fn link(label: &str, href: String) -> Self {
        Self {
            label: label.to_string(),
            href,
            current: false,
        }
    }
}

fn parse_query(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
}

fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    urlencoding::decode(&s)
        .map(|c| c.into_owned())
        .unwrap_or(s)
}
