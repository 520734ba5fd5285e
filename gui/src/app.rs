#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::format::Formatter;

use crate::components::{HeaderFields, InvoiceTable, Toolbar, TotalsPanel};
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let formatter = use_context::<Formatter>();
    let state = use_signal(|| AppState::new(&config, formatter.clone()));
    use_context_provider(|| state);

    rsx! {
        div { class: "invoice-app", dir: "{config.app.direction}",
            h1 { "{config.app.title}" }
            HeaderFields {}
            InvoiceTable {}
            TotalsPanel {}
            Toolbar {}
        }
    }
}
