//! Upstream JSON shapes.
//!
//! These mirror the PokéAPI response bodies closely enough to deserialize
//! them, and convert into the app's own records. Fields the app never reads
//! are omitted; serde ignores them.

use serde::Deserialize;

use super::{Category, ImageVariants, ItemDetail, ItemSummary, Stats};

/// `{ name, url }` reference used throughout the API.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl From<NamedResource> for ItemSummary {
    fn from(r: NamedResource) -> Self {
        ItemSummary::new(r.name, r.url)
    }
}

impl From<NamedResource> for Category {
    fn from(r: NamedResource) -> Self {
        Category {
            identifier: r.name.clone(),
            name: r.name,
            url: r.url,
        }
    }
}

/// `GET /type` and `GET /pokemon?limit&offset`.
#[derive(Debug, Deserialize)]
pub struct ResourceList {
    pub count: usize,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `GET /type/{identifier}`.
#[derive(Debug, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedResource,
}

/// `GET /pokemon/{nameOrId}`.
#[derive(Debug, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilityEntry>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct AbilityEntry {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub kind: NamedResource,
}

impl From<PokemonRecord> for ItemDetail {
    fn from(record: PokemonRecord) -> Self {
        let image_variants = ImageVariants {
            default: record.sprites.front_default.unwrap_or_default(),
            high_res: record
                .sprites
                .other
                .and_then(|o| o.official_artwork)
                .and_then(|a| a.front_default)
                .unwrap_or_default(),
        };

        let mut types = record.types;
        types.sort_by_key(|t| t.slot);

        let stats = Stats::from_pairs(
            record
                .stats
                .iter()
                .map(|s| (s.stat.name.as_str(), s.base_stat)),
        );

        ItemDetail {
            id: record.id,
            name: record.name,
            image_variants,
            categories: types.into_iter().map(|t| t.kind.name).collect(),
            stats,
            abilities: record.abilities.into_iter().map(|a| a.ability.name).collect(),
            moves: record.moves.into_iter().map(|m| m.kind.name).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::StatKind;
    use serde_json::json;

    #[test]
    fn test_pokemon_record_conversion() {
        let body = json!({
            "id": 6,
            "name": "charizard",
            "sprites": {
                "front_default": "https://img/6.png",
                "other": { "official-artwork": { "front_default": "https://art/6.png" } }
            },
            "types": [
                { "slot": 2, "type": { "name": "flying", "url": "https://api/type/3/" } },
                { "slot": 1, "type": { "name": "fire", "url": "https://api/type/10/" } }
            ],
            "stats": [
                { "base_stat": 78, "effort": 0, "stat": { "name": "hp", "url": "" } },
                { "base_stat": 109, "effort": 3, "stat": { "name": "special-attack", "url": "" } }
            ],
            "abilities": [
                { "ability": { "name": "blaze", "url": "" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "solar-power", "url": "" }, "is_hidden": true, "slot": 3 }
            ],
            "moves": [
                { "move": { "name": "mega-punch", "url": "" }, "version_group_details": [] }
            ],
            "weight": 905
        });

        let record: PokemonRecord = serde_json::from_value(body).unwrap();
        let detail = ItemDetail::from(record);

        assert_eq!(detail.id, 6);
        assert_eq!(detail.categories, vec!["fire", "flying"]);
        assert_eq!(detail.image_variants.high_res, "https://art/6.png");
        assert_eq!(detail.stats.get(StatKind::SpecialAttack), 109);
        assert_eq!(detail.stats.get(StatKind::Defense), 0);
        assert_eq!(detail.abilities, vec!["blaze", "solar-power"]);
        assert_eq!(detail.moves, vec!["mega-punch"]);
    }

    #[test]
    fn test_null_sprites_become_empty() {
        let body = json!({
            "id": 10001,
            "name": "deoxys-attack",
            "sprites": {
                "front_default": null,
                "other": { "official-artwork": { "front_default": null } }
            }
        });
        let detail = ItemDetail::from(serde_json::from_value::<PokemonRecord>(body).unwrap());
        assert_eq!(detail.image_variants.default, "");
        assert_eq!(detail.image_variants.preferred(), "");
        assert!(detail.categories.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let body = json!({ "name": "nameless" });
        assert!(serde_json::from_value::<PokemonRecord>(body).is_err());
    }
}
