//! Session — owns the filter state and the screen, applies events and completions.
//!
//! Every character or detail fetch gets a ticket. A completion is applied only
//! if its ticket is still the newest one issued, so a slow response can never
//! overwrite the results of a later filter change.

use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::events::{CharactersRequest, Completion, DetailsRequest, Effect, UiEvent};
use crate::filters::FilterState;
use crate::types::Character;
use crate::view::{merge_location_options, render, CardView, ModalView, Overflow};

/// Everything a frontend needs to draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub cards: Vec<CardView>,
    pub modal: Option<ModalView>,
    pub overflow: Overflow,
    pub location_options: Vec<String>,
    /// A character fetch is in flight.
    pub loading: bool,
    /// Message of the last failed fetch, cleared by the next one.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub struct Session {
    filters: FilterState,
    characters: Vec<Character>,
    screen: Screen,
    custom_locations: Vec<String>,
    characters_ticket: u64,
    details_ticket: u64,
}

impl Session {
    pub fn new(custom_locations: Vec<String>) -> Self {
        Self {
            screen: Screen {
                location_options: custom_locations.clone(),
                ..Screen::default()
            },
            custom_locations,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Initial effects: populate locations, then the first page of characters.
    pub fn start(&mut self) -> Vec<Effect> {
        info!("session started");
        vec![Effect::LoadLocations, self.begin_fetch()]
    }

    /// Apply a user event. Returns the fetch to run, if any.
    pub fn handle(&mut self, event: UiEvent) -> Option<Effect> {
        debug!(?event, "ui event");
        match event {
            UiEvent::Search(text) => {
                self.filters.name = text;
                Some(self.begin_fetch())
            }
            UiEvent::Filter(field, value) => {
                self.filters.set(field, value);
                Some(self.begin_fetch())
            }
            UiEvent::NextPage => {
                self.filters.next_page();
                Some(self.begin_fetch())
            }
            UiEvent::PreviousPage => {
                if self.filters.previous_page() {
                    Some(self.begin_fetch())
                } else {
                    None
                }
            }
            UiEvent::OpenCard(id) => self.open_card(id),
            UiEvent::CloseModal => {
                self.close_modal();
                None
            }
        }
    }

    /// Apply the outcome of an effect. Returns false if it was stale and dropped.
    pub fn apply(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Locations(result) => {
                self.set_locations(result);
                true
            }
            Completion::Characters { ticket, result } => self.complete_characters(ticket, result),
            Completion::Details { ticket, modal } => self.complete_details(ticket, modal),
        }
    }

    /// Clear the grid and issue a new ticket for the current filters.
    fn begin_fetch(&mut self) -> Effect {
        self.characters_ticket += 1;
        self.characters.clear();
        self.screen.cards.clear();
        self.screen.loading = true;
        self.screen.error = None;
        Effect::FetchCharacters(CharactersRequest {
            ticket: self.characters_ticket,
            filters: self.filters.clone(),
        })
    }

    pub fn complete_characters(
        &mut self,
        ticket: u64,
        result: Result<Vec<Character>, ApiError>,
    ) -> bool {
        if ticket != self.characters_ticket {
            warn!(
                ticket,
                latest = self.characters_ticket,
                "dropping stale character response"
            );
            return false;
        }

        self.screen.loading = false;
        match result {
            Ok(characters) => {
                // Re-filter against the filters as they are now.
                self.screen.cards = render(&characters, &self.filters);
                self.characters = characters;
                debug!(cards = self.screen.cards.len(), "rendered");
            }
            Err(e) => {
                warn!(error = %e, "character fetch failed");
                self.screen.error = Some(e.to_string());
            }
        }
        true
    }

    fn open_card(&mut self, id: u32) -> Option<Effect> {
        let Some(character) = self.characters.iter().find(|c| c.id == id) else {
            debug!(id, "open requested for a character not on screen");
            return None;
        };
        self.details_ticket += 1;
        Some(Effect::FetchDetails(DetailsRequest {
            ticket: self.details_ticket,
            character: character.clone(),
        }))
    }

    pub fn complete_details(&mut self, ticket: u64, modal: ModalView) -> bool {
        if ticket != self.details_ticket {
            warn!(ticket, latest = self.details_ticket, "dropping stale details");
            return false;
        }
        self.screen.modal = Some(modal);
        self.screen.overflow = Overflow::Hidden;
        true
    }

    /// Remove the modal if one is open and unlock background scroll.
    pub fn close_modal(&mut self) -> bool {
        if self.screen.modal.take().is_some() {
            self.screen.overflow = Overflow::Auto;
            true
        } else {
            false
        }
    }

    fn set_locations(&mut self, result: Result<Vec<String>, ApiError>) {
        match result {
            Ok(fetched) => {
                self.screen.location_options =
                    merge_location_options(fetched, &self.custom_locations);
                info!(count = self.screen.location_options.len(), "location options loaded");
            }
            Err(e) => {
                warn!(error = %e, "failed to load locations");
                self.screen.error = Some(e.to_string());
            }
        }
    }
}
