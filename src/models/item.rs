//! Item records: list references and fully hydrated details.

use serde::{Deserialize, Serialize};

use crate::config::STAT_KEYS;

/// A reference to an item as returned by list endpoints.
///
/// `identifier` is the absolute URL of the item's detail record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    pub identifier: String,
}

impl ItemSummary {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
        }
    }
}

/// Artwork URLs for an item. Either may be empty when upstream has none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariants {
    /// Small sprite.
    pub default: String,
    /// Official artwork.
    pub high_res: String,
}

impl ImageVariants {
    /// High-resolution artwork when present, otherwise the sprite.
    pub fn preferred(&self) -> &str {
        if self.high_res.is_empty() {
            &self.default
        } else {
            &self.high_res
        }
    }
}

/// The six base stats every item carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatKind {
    /// All stats in display order.
    pub const ALL: [StatKind; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    /// Upstream stat name (e.g. `special-attack`).
    pub fn key(self) -> &'static str {
        STAT_KEYS[self.index()]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        STAT_KEYS
            .iter()
            .position(|k| *k == key)
            .map(|i| Self::ALL[i])
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Base stat values keyed by [`StatKind`].
///
/// Always holds all six stats; a stat missing upstream reads as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats([u32; 6]);

impl Stats {
    /// Build from upstream `(name, value)` pairs, ignoring unknown names.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let mut stats = Self::default();
        for (name, value) in pairs {
            if let Some(kind) = StatKind::from_key(name) {
                stats.0[kind.index()] = value;
            }
        }
        stats
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        self.0[kind.index()]
    }

    /// Iterate `(kind, value)` in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        StatKind::ALL.iter().map(|k| (*k, self.get(*k)))
    }
}

/// A fully hydrated item, used for list cards and the detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    pub image_variants: ImageVariants,
    /// Category names in upstream slot order.
    pub categories: Vec<String>,
    pub stats: Stats,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
}

impl ItemDetail {
    /// Case-insensitive substring match on the name.
    ///
    /// `needle_lower` must already be lower-cased.
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }
}
