//! Character card grid.

use dioxus::prelude::*;
use rickdex_core::view::CardView;

#[derive(Clone, PartialEq, Props)]
pub struct CardGridProps {
    cards: Vec<CardView>,
    loading: bool,
    on_open: EventHandler<u32>,
}

pub fn CardGrid(props: CardGridProps) -> Element {
    let on_open = props.on_open;

    rsx! {
        div { class: "chars-container",
            if props.cards.is_empty() && !props.loading {
                p { class: "empty", "No characters match." }
            }
            for card in props.cards.iter() {
                div {
                    key: "{card.id}",
                    class: "char",
                    onclick: {
                        let id = card.id;
                        move |_| on_open.call(id)
                    },
                    img { src: "{card.image}", alt: "{card.name}" }
                    div { class: "char-info",
                        h3 { "{card.name}" }
                        h6 { "{card.subtitle}" }
                        h6 { "{card.location}" }
                    }
                }
            }
        }
    }
}
