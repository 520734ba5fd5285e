// Item rows: quantity/price inputs, live line totals, add/remove triggers.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::data::DynamicRow;
use engine::models::{FieldRef, ItemRow};
use engine::UiEvent;
use shared::models::RowId;

use super::FieldInput;
use crate::state::app_state::AppState;

#[component]
pub fn InvoiceTable() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let rows: Vec<(RowId, ItemRow)> = state
        .read()
        .page
        .form()
        .rows()
        .iter()
        .map(|row| (row.id(), row.clone()))
        .collect();

    rsx! {
        table { class: "table invoice-items",
            thead {
                tr {
                    th { "#" }
                    th { "الكمية" }
                    th { "سعر الوحدة" }
                    th { "الإجمالي" }
                    th {}
                }
            }
            tbody {
                for (id, row) in rows {
                    ItemRowView { key: "{id}", row: row }
                }
            }
        }
        button {
            class: "btn btn-outline-primary add-row",
            onclick: move |_| {
                state.write().handle(UiEvent::AddRow);
            },
            "+ إضافة بند"
        }
    }
}

#[component]
fn ItemRowView(row: ItemRow) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let id = row.id();
    let number = row.number();

    rsx! {
        tr { class: "item-row dynamic-row",
            td { class: "row-number", "{number}" }
            td {
                FieldInput { field: row.quantity.clone(), target: FieldRef::quantity(id), input_type: "number" }
            }
            td {
                FieldInput { field: row.price.clone(), target: FieldRef::price(id), input_type: "number" }
            }
            td { class: "row-total", "{row.total_display}" }
            td {
                button {
                    class: "btn btn-sm btn-danger remove-row",
                    onclick: move |_| {
                        state.write().handle(UiEvent::RemoveRow(id));
                    },
                    "×"
                }
            }
        }
    }
}
