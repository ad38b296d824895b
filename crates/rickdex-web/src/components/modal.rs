//! Character detail overlay.

use dioxus::prelude::*;
use rickdex_core::view::ModalView;

#[derive(Clone, PartialEq, Props)]
pub struct CharacterModalProps {
    modal: ModalView,
    on_close: EventHandler<()>,
}

pub fn CharacterModal(props: CharacterModalProps) -> Element {
    let modal = &props.modal;
    let on_close = props.on_close;

    rsx! {
        div { class: "character-modal",
            div { class: "modal-content",
                span {
                    class: "close-button",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                img { src: "{modal.image}", alt: "{modal.name}" }
                br {}
                h2 { "{modal.name}" }
                p { b { "Species: " } "{modal.species}" }
                p { b { "Status: " } "{modal.status}" }
                p { b { "Location: " } "{modal.location}" }
                p { b { "Last Seen: " } "{modal.last_seen}" }
                div { class: "episodes-list",
                    h3 { "Episodes:" }
                    br {}
                    for episode in modal.episodes.iter() {
                        p { "{episode}" }
                    }
                }
            }
        }
    }
}
