use serde::{Deserialize, Serialize};
use shared::models::{InvoiceDraft, RowId};

use super::field::{FieldRef, FormField};
use super::item_row::ItemRow;
use crate::data::row_list::RowList;

pub const TAX_RATE_FIELD: &str = "tax_rate";
pub const DISCOUNT_FIELD: &str = "discount";

/// Text slots the calculator writes the aggregate amounts into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsDisplay {
    pub subtotal: String,
    pub tax: String,
    pub discount: String,
    pub total: String,
}

/// An invoice form: header inputs, the dynamic item rows, the global tax
/// rate (and optional discount) inputs and the totals display.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceForm {
    pub action: String,
    pub method: String,
    header: Vec<FormField>,
    rows: RowList<ItemRow>,
    pub tax_rate: FormField,
    pub discount: Option<FormField>,
    pub display: TotalsDisplay,
}

impl InvoiceForm {
    pub fn new(action: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: method.into(),
            header: Vec::new(),
            rows: RowList::new(ItemRow::template()),
            tax_rate: FormField::new(TAX_RATE_FIELD),
            discount: None,
            display: TotalsDisplay::default(),
        }
    }

    /// Builds a form holding the rows and rates of a saved draft.
    pub fn from_draft(draft: &InvoiceDraft) -> Self {
        let mut form = Self::new("", "POST");
        for line in &draft.rows {
            form.rows
                .push(ItemRow::template().with_values(line.quantity.as_str(), line.price.as_str()));
        }
        form.tax_rate.value = draft.tax_rate.clone();
        if let Some(discount) = &draft.discount {
            form.discount = Some(FormField::new(DISCOUNT_FIELD).with_value(discount.as_str()));
        }
        form
    }

    pub fn with_header_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header.push(FormField::new(name).with_value(value));
        self
    }

    pub fn with_discount(mut self) -> Self {
        self.discount = Some(FormField::new(DISCOUNT_FIELD));
        self
    }

    pub fn header(&self) -> &[FormField] {
        &self.header
    }

    pub fn header_field(&self, name: &str) -> Option<&FormField> {
        self.header.iter().find(|f| f.name == name)
    }

    pub fn rows(&self) -> &RowList<ItemRow> {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut RowList<ItemRow> {
        &mut self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&ItemRow> {
        self.rows.get(id)
    }

    pub fn field(&self, target: &FieldRef) -> Option<&FormField> {
        match target {
            FieldRef::Header(name) => self.header_field(name),
            FieldRef::Row { row, column } => self.rows.get(*row).map(|r| r.column(*column)),
            FieldRef::TaxRate => Some(&self.tax_rate),
            FieldRef::Discount => self.discount.as_ref(),
        }
    }

    pub fn field_mut(&mut self, target: &FieldRef) -> Option<&mut FormField> {
        match target {
            FieldRef::Header(name) => self.header.iter_mut().find(|f| &f.name == name),
            FieldRef::Row { row, column } => self.rows.get_mut(*row).map(|r| r.column_mut(*column)),
            FieldRef::TaxRate => Some(&mut self.tax_rate),
            FieldRef::Discount => self.discount.as_mut(),
        }
    }

    /// Every input in document order: header, rows, tax rate, discount.
    pub fn for_each_field_mut(&mut self, visit: &mut dyn FnMut(&mut FormField)) {
        for field in self.header.iter_mut() {
            visit(field);
        }
        for row in self.rows.iter_mut() {
            visit(&mut row.quantity);
            visit(&mut row.price);
        }
        visit(&mut self.tax_rate);
        if let Some(discount) = self.discount.as_mut() {
            visit(discount);
        }
    }

    /// Name/value pairs in document order, like a browser `FormData`.
    pub fn form_data(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = self
            .header
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();
        for row in self.rows.iter() {
            fields.push((row.quantity.name.clone(), row.quantity.value.clone()));
            fields.push((row.price.name.clone(), row.price.value.clone()));
        }
        fields.push((self.tax_rate.name.clone(), self.tax_rate.value.clone()));
        if let Some(discount) = &self.discount {
            fields.push((discount.name.clone(), discount.value.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::row_list::DynamicRow;
    use shared::models::DraftLine;

    fn sample_form() -> InvoiceForm {
        let mut form = InvoiceForm::new("/sales/invoices/create/", "POST")
            .with_header_field("customer", "C-001")
            .with_header_field("date", "2024-03-07")
            .with_discount();
        form.rows_mut().push(ItemRow::template().with_values("2", "10"));
        form.tax_rate.value = "14".to_string();
        form
    }

    #[test]
    fn test_field_lookup_by_ref() {
        let mut form = sample_form();
        let row_id = form.rows().rows()[0].id();
        assert_eq!(form.field(&FieldRef::quantity(row_id)).map(|f| f.value.as_str()), Some("2"));
        assert_eq!(form.field(&FieldRef::Header("date".into())).map(|f| f.value.as_str()), Some("2024-03-07"));
        assert!(form.field(&FieldRef::Header("nope".into())).is_none());
        assert!(form.field_mut(&FieldRef::price(RowId(42))).is_none());
        assert!(form.field_mut(&FieldRef::Discount).is_some());
    }

    #[test]
    fn test_form_data_in_document_order() {
        let form = sample_form();
        let data = form.form_data();
        let names: Vec<&str> = data.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["customer", "date", "quantity", "price", "tax_rate", "discount"]);
        assert_eq!(data[2].1, "2");
    }

    #[test]
    fn test_for_each_field_mut_visits_all_inputs() {
        let mut form = sample_form();
        let mut count = 0;
        form.for_each_field_mut(&mut |_: &mut FormField| count += 1);
        assert_eq!(count, 6);
    }

    #[test]
    fn test_from_draft() {
        let draft = InvoiceDraft {
            rows: vec![
                DraftLine { quantity: "2".into(), price: "10".into() },
                DraftLine { quantity: "1".into(), price: "5".into() },
            ],
            tax_rate: "10".into(),
            discount: None,
        };
        let form = InvoiceForm::from_draft(&draft);
        assert_eq!(form.rows().len(), 2);
        assert_eq!(form.rows().rows()[1].number(), 2);
        assert_eq!(form.tax_rate.value, "10");
        assert!(form.discount.is_none());
    }
}
