#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::models::{FieldRef, FormField};

use super::FieldInput;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn HeaderFields() -> Element {
    let state = use_context::<Signal<AppState>>();
    let config = use_context::<AppConfig>();

    let fields: Vec<(FormField, String, String)> = state
        .read()
        .page
        .form()
        .header()
        .iter()
        .map(|field| {
            let caption = config.label_for(&field.name).unwrap_or(&field.name).to_string();
            (field.clone(), caption, config.input_type_for(&field.name))
        })
        .collect();

    rsx! {
        div { class: "invoice-header",
            for (field, caption, input_type) in fields {
                div { key: "{field.name}", class: "mb-3",
                    label { class: "form-label", "{caption}" }
                    FieldInput {
                        field: field.clone(),
                        target: FieldRef::Header(field.name.clone()),
                        input_type: input_type,
                    }
                }
            }
        }
    }
}
