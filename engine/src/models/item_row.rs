use serde::{Deserialize, Serialize};
use shared::models::{line_total, RowId};
use shared::utils::parse_decimal_or_zero;

use super::field::{FormField, RowColumn};
use crate::data::row_list::DynamicRow;

pub const QUANTITY_FIELD: &str = "quantity";
pub const PRICE_FIELD: &str = "price";

/// One invoice line: a quantity input, a unit price input and the rendered
/// line total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    id: RowId,
    number: usize,
    pub quantity: FormField,
    pub price: FormField,
    pub total_display: String,
}

impl ItemRow {
    /// The blank row cloned by "add row".
    pub fn template() -> Self {
        Self {
            id: RowId(0),
            number: 0,
            quantity: FormField::new(QUANTITY_FIELD),
            price: FormField::new(PRICE_FIELD),
            total_display: String::new(),
        }
    }

    pub fn with_values(mut self, quantity: impl Into<String>, price: impl Into<String>) -> Self {
        self.quantity.value = quantity.into();
        self.price.value = price.into();
        self
    }

    pub fn column(&self, column: RowColumn) -> &FormField {
        match column {
            RowColumn::Quantity => &self.quantity,
            RowColumn::Price => &self.price,
        }
    }

    pub fn column_mut(&mut self, column: RowColumn) -> &mut FormField {
        match column {
            RowColumn::Quantity => &mut self.quantity,
            RowColumn::Price => &mut self.price,
        }
    }

    /// `quantity * unit_price`, each parsed leniently.
    pub fn row_total(&self) -> f64 {
        line_total(
            parse_decimal_or_zero(&self.quantity.value),
            parse_decimal_or_zero(&self.price.value),
        )
    }
}

impl DynamicRow for ItemRow {
    fn id(&self) -> RowId {
        self.id
    }

    fn assign_id(&mut self, id: RowId) {
        self.id = id;
    }

    fn number(&self) -> usize {
        self.number
    }

    fn set_number(&mut self, number: usize) {
        self.number = number;
    }
}
