// In-process stand-in for the accounting server's invoice endpoint. It runs
// the server's required-field validation so the editor can be used offline.

use engine::services::{FormSubmission, FormTransport, SubmitResponse};
use engine::EngineError;
use serde_json::json;
use shared::models::FieldErrorMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LocalBackend {
    required: Vec<String>,
    required_message: String,
    latency: Duration,
}

impl LocalBackend {
    pub fn new(required: Vec<String>, required_message: impl Into<String>) -> Self {
        Self {
            required,
            required_message: required_message.into(),
            latency: Duration::from_millis(150),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn validate(&self, submission: &FormSubmission) -> FieldErrorMap {
        let mut errors = FieldErrorMap::new();
        for name in &self.required {
            let blank = submission.value(name).map_or(true, |v| v.trim().is_empty());
            if blank {
                errors.insert(name.clone(), self.required_message.clone());
            }
        }
        errors
    }
}

impl FormTransport for LocalBackend {
    async fn submit(&self, submission: FormSubmission) -> Result<SubmitResponse, EngineError> {
        tracing::info!(action = %submission.action, method = %submission.method, fields = submission.fields.len(), "Submitting invoice");
        tokio::time::sleep(self.latency).await;

        // Answer the way the server does: a status line and a JSON body.
        let errors = self.validate(&submission);
        if !errors.is_empty() {
            return SubmitResponse::from_status(400, &serde_json::to_string(&errors)?);
        }
        let lines = submission.fields.iter().filter(|(name, _)| name == "quantity").count();
        let body = json!({
            "status": "draft",
            "number": submission.value("number").unwrap_or_default(),
            "lines": lines,
        });
        SubmitResponse::from_status(201, &body.to_string())
    }
}
