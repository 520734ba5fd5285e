// Boundary to the external form-submission transport. The transport itself
// (HTTP, retries, cancellation) is not ours; we build the request and route
// whatever comes back.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::models::FieldErrorMap;

use super::presenter::{clear_errors, show_errors};
use crate::error::EngineError;
use crate::models::InvoiceForm;

/// Serialized form, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub action: String,
    pub method: String,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn from_form(form: &InvoiceForm) -> Self {
        Self {
            action: form.action.clone(),
            method: form.method.clone(),
            fields: form.form_data(),
        }
    }

    /// First value submitted under `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResponse {
    /// Success payload, forwarded untouched to the caller's callback.
    Accepted(Value),
    /// Per-field validation errors.
    Rejected(FieldErrorMap),
}

impl SubmitResponse {
    /// Interprets an HTTP-style status and body: 2xx is success (JSON body,
    /// or the raw text when it is not JSON); anything else must carry a
    /// field error map.
    pub fn from_status(status: u16, body: &str) -> Result<Self, EngineError> {
        if (200..300).contains(&status) {
            let payload = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
            Ok(SubmitResponse::Accepted(payload))
        } else {
            let errors: FieldErrorMap = serde_json::from_str(body)?;
            Ok(SubmitResponse::Rejected(errors))
        }
    }
}

/// The external collaborator that actually delivers a submission.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn submit(&self, submission: FormSubmission) -> Result<SubmitResponse, EngineError>;
}

/// Routes a response: success goes to `on_success`, errors replace whatever
/// error state the form showed before.
pub fn apply_response<F>(form: &mut InvoiceForm, response: SubmitResponse, on_success: F)
where
    F: FnOnce(Value),
{
    match response {
        SubmitResponse::Accepted(payload) => {
            tracing::info!(action = %form.action, "Form submission accepted");
            on_success(payload);
        }
        SubmitResponse::Rejected(errors) => {
            tracing::info!(action = %form.action, fields = errors.len(), "Form submission rejected");
            clear_errors(form);
            show_errors(form, &errors);
        }
    }
}

/// Builds the submission, awaits the transport and routes the outcome. A
/// transport failure is returned and leaves the form untouched.
pub async fn submit_form<T, F>(form: &mut InvoiceForm, transport: &T, on_success: F) -> Result<(), EngineError>
where
    T: FormTransport,
    F: FnOnce(Value),
{
    let submission = FormSubmission::from_form(form);
    let response = transport.submit(submission).await.map_err(|e| {
        tracing::error!(action = %form.action, error = %e, "Form submission failed");
        e
    })?;
    apply_response(form, response, on_success);
    Ok(())
}
