//! Core types — Character, Location, Episode and the paged envelope.

use serde::{Deserialize, Serialize};

// ── Paging envelope ──

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Every list endpoint answers `{ "info": {...}, "results": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub info: PageInfo,
    pub results: Vec<T>,
}

// ── Character ──

/// `{name, url}` pair used for a character's origin and current location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub origin: LocationRef,
    #[serde(default)]
    pub location: LocationRef,
    #[serde(default)]
    pub image: String,
    /// Episode URLs in broadcast order.
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

impl Character {
    /// URL of the last episode the character appears in.
    pub fn last_episode(&self) -> Option<&str> {
        self.episode.last().map(String::as_str)
    }
}

// ── Location ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub dimension: String,
    pub url: String,
}

// ── Episode ──

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(rename = "episode", default)]
    pub code: String,
    #[serde(default)]
    pub url: String,
}

// ── Select option catalogues ──

pub const SPECIES_OPTIONS: &[&str] = &[
    "Human",
    "Alien",
    "Humanoid",
    "Poopybutthole",
    "Mythological Creature",
    "Animal",
    "Robot",
    "Cronenberg",
    "Disease",
    "unknown",
];

pub const GENDER_OPTIONS: &[&str] = &["Female", "Male", "Genderless", "unknown"];

pub const STATUS_OPTIONS: &[&str] = &["Alive", "Dead", "unknown"];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_character_from_api_payload() {
        let payload = json!({
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "type": "",
            "gender": "Male",
            "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
            "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
            "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
            "episode": [
                "https://rickandmortyapi.com/api/episode/1",
                "https://rickandmortyapi.com/api/episode/2"
            ],
            "url": "https://rickandmortyapi.com/api/character/1",
            "created": "2017-11-04T18:48:46.250Z"
        });

        let character: Character = serde_json::from_value(payload).unwrap();
        assert_eq!(character.name, "Rick Sanchez");
        assert_eq!(character.location.name, "Citadel of Ricks");
        assert_eq!(
            character.last_episode(),
            Some("https://rickandmortyapi.com/api/episode/2")
        );
    }

    #[test]
    fn test_sparse_character_defaults() {
        let character: Character =
            serde_json::from_value(json!({"id": 7, "name": "Abradolf Lincler"})).unwrap();
        assert!(character.episode.is_empty());
        assert_eq!(character.last_episode(), None);
        assert_eq!(character.location, LocationRef::default());
    }

    #[test]
    fn test_episode_without_air_date() {
        let episode: Episode = serde_json::from_value(json!({"id": 3, "name": "Anatomy Park"})).unwrap();
        assert_eq!(episode.air_date, None);
    }
}
