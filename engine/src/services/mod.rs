// Form services: totals calculation, validation-error presentation and the
// submission bridge.

pub mod calculator;
pub mod presenter;
pub mod submission;

pub use calculator::InvoiceCalculator;
pub use presenter::{clear_errors, clear_field, show_errors, ErrorTarget};
pub use submission::{apply_response, submit_form, FormSubmission, FormTransport, SubmitResponse};
