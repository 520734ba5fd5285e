use serde::{Deserialize, Serialize};
use shared::models::RowId;

/// A named form input plus its sibling feedback element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub invalid: bool,
    pub feedback: String,
}

impl FormField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            invalid: false,
            feedback: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn mark_invalid(&mut self, message: &str) {
        self.invalid = true;
        self.feedback = message.to_string();
    }

    pub fn clear_error(&mut self) {
        self.invalid = false;
        self.feedback.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowColumn {
    Quantity,
    Price,
}

/// Which kind of input an event came from; subscriptions are scoped by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Header,
    Quantity,
    Price,
    TaxRate,
    Discount,
}

/// Address of one input inside an `InvoiceForm`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldRef {
    Header(String),
    Row { row: RowId, column: RowColumn },
    TaxRate,
    Discount,
}

impl FieldRef {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldRef::Header(_) => FieldKind::Header,
            FieldRef::Row { column: RowColumn::Quantity, .. } => FieldKind::Quantity,
            FieldRef::Row { column: RowColumn::Price, .. } => FieldKind::Price,
            FieldRef::TaxRate => FieldKind::TaxRate,
            FieldRef::Discount => FieldKind::Discount,
        }
    }

    pub fn quantity(row: RowId) -> Self {
        FieldRef::Row { row, column: RowColumn::Quantity }
    }

    pub fn price(row: RowId) -> Self {
        FieldRef::Row { row, column: RowColumn::Price }
    }
}
