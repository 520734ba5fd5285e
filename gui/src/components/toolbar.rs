// Save / reset actions and the submission status line.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::services::FormTransport;
use engine::UiEvent;

use crate::services::local_backend::LocalBackend;
use crate::state::app_state::{AppState, Status};

#[component]
pub fn Toolbar() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let backend = use_context::<LocalBackend>();

    let status = state.read().status.clone();
    let submitting = status == Status::Submitting;
    let status_text = match &status {
        Status::Idle => String::new(),
        Status::Submitting => "جارٍ الحفظ...".to_string(),
        Status::Saved(payload) => format!("تم الحفظ: {}", payload),
        Status::Invalid(count) => format!("يرجى تصحيح {} حقل", count),
        Status::Failed(reason) => format!("تعذر الحفظ: {}", reason),
    };

    rsx! {
        div { class: "toolbar",
            button {
                class: "btn btn-primary",
                disabled: submitting,
                onclick: move |_| {
                    // Never hold the state borrow across the await.
                    let submission = state.read().page.submission();
                    state.write().status = Status::Submitting;
                    let backend = backend.clone();
                    spawn(async move {
                        let outcome = backend.submit(submission).await;
                        state.write().finish_submission(outcome);
                    });
                },
                "حفظ"
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| {
                    state.write().handle(UiEvent::Reset);
                },
                "مسح الأخطاء"
            }
            span { class: "status", "{status_text}" }
        }
    }
}
