//! UiEvent / Effect / Completion — the contract between a Session and a frontend.
//!
//! Frontends translate toolkit input into [`UiEvent`]s, run the [`Effect`]s the
//! session returns (usually on a spawned task) and feed the resulting
//! [`Completion`] back.

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::filters::{FilterField, FilterState};
use crate::types::Character;
use crate::view::ModalView;

/// User input, already decoded from the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search box edited; carries the full box contents.
    Search(String),
    /// One of the select filters changed.
    Filter(FilterField, String),
    NextPage,
    PreviousPage,
    /// A card was activated; carries the character id.
    OpenCard(u32),
    CloseModal,
}

/// One character-list fetch, stamped with the ticket that must still be
/// current when it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharactersRequest {
    pub ticket: u64,
    pub filters: FilterState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailsRequest {
    pub ticket: u64,
    pub character: Character,
}

/// Work a frontend must perform on behalf of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LoadLocations,
    FetchCharacters(CharactersRequest),
    FetchDetails(DetailsRequest),
}

/// Result of running an [`Effect`].
#[derive(Debug)]
pub enum Completion {
    Locations(Result<Vec<String>, ApiError>),
    Characters {
        ticket: u64,
        result: Result<Vec<Character>, ApiError>,
    },
    Details {
        ticket: u64,
        modal: ModalView,
    },
}

impl Effect {
    /// Perform the network work for this effect.
    pub async fn run<T: Transport>(self, client: &ApiClient<T>) -> Completion {
        match self {
            Effect::LoadLocations => Completion::Locations(client.get_locations().await),
            Effect::FetchCharacters(req) => Completion::Characters {
                ticket: req.ticket,
                result: client.get_characters(&req.filters).await,
            },
            Effect::FetchDetails(req) => Completion::Details {
                ticket: req.ticket,
                modal: client.character_details(&req.character).await,
            },
        }
    }
}
