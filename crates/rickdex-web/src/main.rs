//! rickdex WASM frontend — Dioxus app root.

mod api;
mod components;

use std::rc::Rc;

use dioxus::prelude::*;

use rickdex_core::api::ApiClient;
use rickdex_core::config::DEFAULT_API_BASE_URL;
use rickdex_core::events::{Effect, UiEvent};
use rickdex_core::session::Session;

use api::GlooTransport;

type Client = Rc<ApiClient<GlooTransport>>;

fn main() {
    dioxus::launch(App);
}

/// Run an effect and apply its completion once it resolves.
fn run_effect(mut session: Signal<Session>, client: Client, effect: Effect) {
    spawn(async move {
        let completion = effect.run(&client).await;
        if !session.write().apply(completion) {
            tracing::debug!("stale completion dropped");
        }
    });
}

/// Mirror the modal's scroll lock onto `<body>`.
fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        if let Err(e) = body.style().set_property("overflow", value) {
            tracing::warn!(error = ?e, value, "failed to set body overflow");
        }
    }
}

fn App() -> Element {
    let mut session = use_signal(|| Session::new(Vec::new()));
    let client = use_hook(|| {
        ApiClient::new(DEFAULT_API_BASE_URL, GlooTransport)
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });

    // Populate locations and fetch the first page on mount
    let start_client = client.clone();
    use_hook(move || {
        if let Ok(client) = &start_client {
            let effects = session.write().start();
            for effect in effects {
                run_effect(session, client.clone(), effect);
            }
        }
    });

    use_effect(move || {
        set_body_overflow(session.read().screen().overflow.as_css());
    });

    let client = match client {
        Ok(client) => client,
        Err(e) => return rsx! { div { class: "error", "{e}" } },
    };

    let on_event = EventHandler::new(move |event: UiEvent| {
        let effect = session.write().handle(event);
        if let Some(effect) = effect {
            run_effect(session, client.clone(), effect);
        }
    });

    let filters = session.read().filters().clone();
    let screen = session.read().screen().clone();

    rsx! {
        div { id: "main",
            components::filter_bar::FilterBar {
                filters: filters.clone(),
                location_options: screen.location_options.clone(),
                on_event,
            }

            if let Some(err) = &screen.error {
                div { class: "error", "{err}" }
            }

            components::card_grid::CardGrid {
                cards: screen.cards.clone(),
                loading: screen.loading,
                on_open: move |id: u32| on_event.call(UiEvent::OpenCard(id)),
            }

            components::pagination::Pagination {
                page: filters.page,
                on_event,
            }

            if let Some(modal) = &screen.modal {
                components::modal::CharacterModal {
                    modal: modal.clone(),
                    on_close: move |_| on_event.call(UiEvent::CloseModal),
                }
            }
        }
    }
}
