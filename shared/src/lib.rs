pub mod format;
pub mod models;
pub mod utils;

pub use format::{
    calculate_total, format_currency, format_date, format_number, DateLike, FormatError, Formatter,
    Locale, LocaleFormatter, Numeric,
};
pub use models::{DraftLine, FieldErrorMap, InvoiceDraft, InvoiceTotals, RowId};
