pub mod row_list;

pub use row_list::{DynamicRow, RowList};
