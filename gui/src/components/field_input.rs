// A bound input plus its feedback element.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::models::{FieldRef, FormField};
use engine::UiEvent;

use crate::state::app_state::AppState;

#[component]
pub fn FieldInput(field: FormField, target: FieldRef, input_type: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let class = if field.invalid { "form-control is-invalid" } else { "form-control" };

    rsx! {
        input {
            class: "{class}",
            name: "{field.name}",
            r#type: "{input_type}",
            value: "{field.value}",
            oninput: move |evt: FormEvent| {
                state.write().handle(UiEvent::Input { field: target.clone(), value: evt.value() });
            },
        }
        div { class: "invalid-feedback", "{field.feedback}" }
    }
}
