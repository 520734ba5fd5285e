// GUI components module
pub mod field_input;
pub mod header_fields;
pub mod invoice_table;
pub mod toolbar;
pub mod totals;

pub use field_input::FieldInput;
pub use header_fields::HeaderFields;
pub use invoice_table::InvoiceTable;
pub use toolbar::Toolbar;
pub use totals::TotalsPanel;
