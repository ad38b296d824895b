//! View models — what a frontend draws, independent of the toolkit.

use crate::filters::FilterState;
use crate::types::Character;

/// Compact summary of one character in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub image: String,
    pub name: String,
    /// "<species> - <status>"
    pub subtitle: String,
    pub location: String,
}

impl CardView {
    pub fn new(character: &Character) -> Self {
        Self {
            id: character.id,
            image: character.image.clone(),
            name: character.name.clone(),
            subtitle: format!("{} - {}", character.species, character.status),
            location: character.location.name.clone(),
        }
    }
}

/// Full detail overlay for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub id: u32,
    pub image: String,
    pub name: String,
    pub species: String,
    pub status: String,
    pub location: String,
    pub last_seen: String,
    /// Episode URLs, as listed by the API.
    pub episodes: Vec<String>,
}

impl ModalView {
    pub fn new(character: &Character, last_seen: String) -> Self {
        Self {
            id: character.id,
            image: character.image.clone(),
            name: character.name.clone(),
            species: character.species.clone(),
            status: character.status.clone(),
            location: character.location.name.clone(),
            last_seen,
            episodes: character.episode.clone(),
        }
    }
}

/// Background scroll behaviour. Locked while a modal is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Auto,
    Hidden,
}

impl Overflow {
    /// CSS value for `body.style.overflow`.
    pub fn as_css(&self) -> &'static str {
        match self {
            Overflow::Auto => "auto",
            Overflow::Hidden => "hidden",
        }
    }
}

/// Build the cards for every character passing the client-side filters.
pub fn render(characters: &[Character], filters: &FilterState) -> Vec<CardView> {
    characters
        .iter()
        .filter(|c| filters.matches(c))
        .map(CardView::new)
        .collect()
}

/// Fetched location names followed by any custom ones, first occurrence wins.
pub fn merge_location_options(fetched: Vec<String>, custom: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(fetched.len() + custom.len());
    for name in fetched.into_iter().chain(custom.iter().cloned()) {
        if !merged.contains(&name) {
            merged.push(name);
        }
    }
    merged
}
