#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::models::invoice_form::DISCOUNT_FIELD;
use engine::models::{FieldRef, FormField};

use super::FieldInput;
use crate::state::app_state::AppState;

#[component]
pub fn TotalsPanel() -> Element {
    let state = use_context::<Signal<AppState>>();
    let (display, tax_rate, discount) = {
        let s = state.read();
        let form = s.page.form();
        (form.display.clone(), form.tax_rate.clone(), form.discount.clone())
    };
    let has_discount = discount.is_some();
    let discount_field = discount.unwrap_or_else(|| FormField::new(DISCOUNT_FIELD));

    rsx! {
        div { class: "invoice-totals",
            div { class: "totals-row",
                span { "المجموع" }
                span { id: "subtotal", "{display.subtotal}" }
            }
            div { class: "totals-row",
                span { "نسبة الضريبة %" }
                FieldInput { field: tax_rate, target: FieldRef::TaxRate, input_type: "number" }
            }
            div { class: "totals-row",
                span { "مبلغ الضريبة" }
                span { id: "tax-amount", "{display.tax}" }
            }
            if has_discount {
                div { class: "totals-row",
                    span { "مبلغ الخصم" }
                    FieldInput { field: discount_field, target: FieldRef::Discount, input_type: "number" }
                    span { id: "discount-amount", "{display.discount}" }
                }
            }
            div { class: "totals-row grand-total",
                span { "الإجمالي" }
                span { id: "total", "{display.total}" }
            }
        }
    }
}
