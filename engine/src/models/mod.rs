// Typed view-model standing in for the form's DOM: named inputs with their
// validation state, item rows, and the totals display slots.

pub mod field;
pub mod invoice_form;
pub mod item_row;

pub use field::{FieldKind, FieldRef, FormField, RowColumn};
pub use invoice_form::{InvoiceForm, TotalsDisplay};
pub use item_row::ItemRow;
