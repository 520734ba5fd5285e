use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::utils::number_or_zero;

/// Stable identity of a dynamic row. Never reused within a session, so a
/// removal trigger keeps pointing at its own row after renumbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Derived, non-persistent invoice aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub grand_total: f64,
}

impl InvoiceTotals {
    /// Sums `row_totals` and applies a percentage `tax_rate` and an absolute
    /// `discount`. Summation is order independent.
    pub fn compute<I>(row_totals: I, tax_rate: f64, discount: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let subtotal: f64 = row_totals.into_iter().sum();
        let tax = number_or_zero(subtotal * (tax_rate / 100.0));
        Self {
            subtotal,
            tax,
            discount,
            grand_total: number_or_zero(subtotal + tax - discount),
        }
    }
}

/// Field name to human readable message, as returned by a rejected submission.
///
/// On the wire a message may also be a list of strings (one per failed
/// validator); the list is joined with a single space.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, WireMessage>", into = "BTreeMap<String, String>")]
pub struct FieldErrorMap(BTreeMap<String, String>);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WireMessage {
    One(String),
    Many(Vec<String>),
}

impl From<BTreeMap<String, WireMessage>> for FieldErrorMap {
    fn from(raw: BTreeMap<String, WireMessage>) -> Self {
        raw.into_iter()
            .map(|(field, message)| {
                let text = match message {
                    WireMessage::One(text) => text,
                    WireMessage::Many(parts) => parts.join(" "),
                };
                (field, text)
            })
            .collect()
    }
}

impl From<FieldErrorMap> for BTreeMap<String, String> {
    fn from(map: FieldErrorMap) -> Self {
        map.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrorMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl FieldErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous message for `field`.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One quantity/price pair as typed into an invoice draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftLine {
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub price: String,
}

/// A serialized invoice form: raw input text, exactly as a user typed it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    #[serde(default)]
    pub rows: Vec<DraftLine>,
    #[serde(default)]
    pub tax_rate: String,
    #[serde(default)]
    pub discount: Option<String>,
}

/// Turns an already numeric value into a line amount, collapsing NaN to zero.
pub fn line_total(quantity: f64, unit_price: f64) -> f64 {
    number_or_zero(number_or_zero(quantity) * number_or_zero(unit_price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_totals_compute() {
        let totals = InvoiceTotals::compute([line_total(2.0, 10.0), line_total(1.0, 5.0)], 10.0, 0.0);
        assert_eq!(totals.subtotal, 25.0);
        assert_eq!(totals.tax, 2.5);
        assert_eq!(totals.grand_total, 27.5);
    }

    #[test]
    fn test_invoice_totals_discount_and_empty() {
        let empty = InvoiceTotals::compute(Vec::new(), 14.0, 0.0);
        assert_eq!(empty, InvoiceTotals::default());

        let discounted = InvoiceTotals::compute([100.0], 14.0, 4.0);
        assert_eq!(discounted.grand_total, 110.0);
    }

    #[test]
    fn test_line_total_nan_is_zero() {
        assert_eq!(line_total(f64::NAN, 3.0), 0.0);
        assert_eq!(line_total(f64::INFINITY, 0.0), 0.0);
        assert_eq!(line_total(f64::INFINITY, 2.0), f64::INFINITY);
    }

    #[test]
    fn test_invoice_totals_infinite_subtotal_never_nan() {
        let untaxed = InvoiceTotals::compute([f64::INFINITY], 0.0, 0.0);
        assert_eq!(untaxed.tax, 0.0);
        assert_eq!(untaxed.grand_total, f64::INFINITY);

        let cancelled = InvoiceTotals::compute([f64::INFINITY], 0.0, f64::INFINITY);
        assert_eq!(cancelled.grand_total, 0.0);
    }

    #[test]
    fn test_field_error_map_from_json_strings_and_lists() {
        let json = r#"{"name": "required", "date": ["Enter a valid date.", "Too early."]}"#;
        let errors: FieldErrorMap = serde_json::from_str(json).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("required"));
        assert_eq!(errors.get("date"), Some("Enter a valid date. Too early."));
        assert_eq!(errors.get("missing"), None);
    }

    #[test]
    fn test_field_error_map_serializes_flat() {
        let errors: FieldErrorMap = [("customer", "required")].into_iter().collect();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"customer": "required"}));
    }

    #[test]
    fn test_invoice_draft_defaults() {
        let draft: InvoiceDraft = serde_json::from_str(r#"{"rows": [{"quantity": "2"}]}"#).unwrap();
        assert_eq!(draft.rows[0].price, "");
        assert_eq!(draft.tax_rate, "");
        assert!(draft.discount.is_none());
    }
}
