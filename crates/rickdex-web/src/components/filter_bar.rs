//! Search box and the species / gender / status / location selects.

use dioxus::prelude::*;
use rickdex_core::events::UiEvent;
use rickdex_core::filters::{FilterField, FilterState};

#[derive(Clone, PartialEq, Props)]
pub struct FilterBarProps {
    filters: FilterState,
    location_options: Vec<String>,
    on_event: EventHandler<UiEvent>,
}

pub fn FilterBar(props: FilterBarProps) -> Element {
    let on_event = props.on_event;

    rsx! {
        div { class: "filters",
            input {
                id: "search",
                r#type: "text",
                placeholder: "Search by name...",
                value: "{props.filters.name}",
                oninput: move |e| on_event.call(UiEvent::Search(e.value())),
            }
            for field in FilterField::SELECTS {
                select {
                    key: "{field}",
                    id: field.label().to_lowercase(),
                    onchange: move |e| on_event.call(UiEvent::Filter(field, e.value())),
                    option { value: "", "{field}: All" }
                    for name in options(field, &props.location_options) {
                        option {
                            value: "{name}",
                            selected: props.filters.get(field) == name,
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

fn options(field: FilterField, locations: &[String]) -> Vec<String> {
    match field.static_options() {
        Some(list) => list.iter().map(|s| s.to_string()).collect(),
        None => locations.to_vec(),
    }
}
