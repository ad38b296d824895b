//! FilterState — the search/filter/pagination record behind every fetch.

use crate::types::{Character, GENDER_OPTIONS, SPECIES_OPTIONS, STATUS_OPTIONS};

/// Which field of the filter record a control writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Name,
    Species,
    Gender,
    Status,
    Location,
}

impl FilterField {
    /// The four select-driven fields, in on-screen order.
    pub const SELECTS: [FilterField; 4] = [
        FilterField::Species,
        FilterField::Gender,
        FilterField::Status,
        FilterField::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Species => "Species",
            FilterField::Gender => "Gender",
            FilterField::Status => "Status",
            FilterField::Location => "Location",
        }
    }

    /// Static option list for a select. Location options are fetched, so `None`.
    pub fn static_options(&self) -> Option<&'static [&'static str]> {
        match self {
            FilterField::Species => Some(SPECIES_OPTIONS),
            FilterField::Gender => Some(GENDER_OPTIONS),
            FilterField::Status => Some(STATUS_OPTIONS),
            FilterField::Name | FilterField::Location => None,
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Active search, filters and page. Empty strings mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub name: String,
    pub species: String,
    pub gender: String,
    pub status: String,
    pub location: String,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: String::new(),
            gender: String::new(),
            status: String::new(),
            location: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Species => &self.species,
            FilterField::Gender => &self.gender,
            FilterField::Status => &self.status,
            FilterField::Location => &self.location,
        }
    }

    /// Overwrite one field. The page is left alone, like the browser page does.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Name => self.name = value,
            FilterField::Species => self.species = value,
            FilterField::Gender => self.gender = value,
            FilterField::Status => self.status = value,
            FilterField::Location => self.location = value,
        }
    }

    /// Advance one page whether or not it has results.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Go back one page. Returns false (and changes nothing) on page 1.
    pub fn previous_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Query pairs sent to the character endpoint, minus `location` (which
    /// must be resolved to a URL first) and `page` (always appended last).
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_str()),
            ("species", self.species.as_str()),
            ("gender", self.gender.as_str()),
            ("status", self.status.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }

    /// Client-side re-filter. Name is intentionally not checked: the API has
    /// already applied it.
    pub fn matches(&self, character: &Character) -> bool {
        (self.species.is_empty() || character.species == self.species)
            && (self.gender.is_empty() || character.gender == self.gender)
            && (self.status.is_empty() || character.status == self.status)
            && (self.location.is_empty() || character.location.name == self.location)
    }
}
