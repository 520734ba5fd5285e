//! Client-side layer of the accounting UI: locale formatting, dynamic invoice
//! rows, live totals and inline validation errors.
//!
//! The pieces live in two workspace crates, re-exported here:
//! [`shared`] (formatting and data models) and [`engine`] (the invoice form
//! view-model, event wiring and submission bridge).

pub use engine;
pub use shared;

pub use engine::{EngineError, EngineSettings, InvoiceForm, InvoicePage, UiEvent};
pub use shared::format::{calculate_total, format_currency, format_date, format_number};
