// Engine library root: the invoice form view-model and everything that acts on it.

pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod models;
pub mod page;
pub mod services;

pub use config::EngineSettings;
pub use error::EngineError;
pub use events::{Scope, UiEvent};
pub use models::{FieldRef, InvoiceForm, ItemRow};
pub use page::InvoicePage;
