//! rickdex-core — Pure domain logic, no UI.
//!
//! Wire types, filter state, the REST client and the view models for the
//! Rick and Morty character browser. Frontends (TUI, Web) feed `UiEvent`s into
//! a `Session`, run the `Effect`s it hands back and draw its `Screen`.

pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod filters;
pub mod session;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;
