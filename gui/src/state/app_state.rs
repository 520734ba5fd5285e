// Global application state: the invoice page plus the last submission outcome.
// Provided to components as a `Signal<AppState>` context.

use engine::models::InvoiceForm;
use engine::services::{apply_response, SubmitResponse};
use engine::{EngineError, InvoicePage, UiEvent};
use shared::format::Formatter;
use std::sync::Arc;

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Submitting,
    Saved(String),
    Invalid(usize),
    Failed(String),
}

pub struct AppState {
    pub page: InvoicePage,
    pub status: Status,
}

impl AppState {
    /// Builds the page described by `config`; `formatter` comes from the
    /// already validated engine settings.
    pub fn new(config: &AppConfig, formatter: Formatter) -> Self {
        let formatter = Arc::new(formatter);

        let mut form = InvoiceForm::new(
            config.engine.submit_action.clone(),
            config.engine.submit_method.clone(),
        );
        for field in &config.form.header_fields {
            form = form.with_header_field(field.name.clone(), "");
        }
        if config.form.discount {
            form = form.with_discount();
        }
        form.tax_rate.value = config.form.tax_rate.clone();

        let mut page = InvoicePage::new(form, formatter);
        for _ in 0..config.form.initial_rows {
            page.handle(UiEvent::AddRow);
        }

        Self {
            page,
            status: Status::Idle,
        }
    }

    pub fn handle(&mut self, event: UiEvent) {
        self.page.handle(event);
    }

    /// Routes a finished submission into the form and the status line.
    pub fn finish_submission(&mut self, outcome: Result<SubmitResponse, EngineError>) {
        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Submission failed: {}", e);
                self.status = Status::Failed(e.to_string());
                return;
            }
        };

        let mut saved = None;
        if let SubmitResponse::Rejected(errors) = &response {
            self.status = Status::Invalid(errors.len());
        }
        apply_response(self.page.form_mut(), response, |payload| saved = Some(payload));
        if let Some(payload) = saved {
            self.status = Status::Saved(payload.to_string());
        }
    }
}
