//! Previous / next page buttons.

use dioxus::prelude::*;
use rickdex_core::events::UiEvent;

#[derive(Clone, PartialEq, Props)]
pub struct PaginationProps {
    page: u32,
    on_event: EventHandler<UiEvent>,
}

pub fn Pagination(props: PaginationProps) -> Element {
    let on_event = props.on_event;

    rsx! {
        div { class: "pagination",
            button {
                id: "previous-page",
                disabled: props.page <= 1,
                onclick: move |_| on_event.call(UiEvent::PreviousPage),
                "Previous"
            }
            span { class: "page", "Page {props.page}" }
            button {
                id: "next-page",
                onclick: move |_| on_event.call(UiEvent::NextPage),
                "Next"
            }
        }
    }
}
