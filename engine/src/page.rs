// The invoice page: a form, its formatter, and the standard subscriptions
// wired once at construction.
use shared::format::LocaleFormatter;
use shared::models::{InvoiceTotals, RowId};
use std::sync::Arc;

use crate::events::{Dispatcher, PageContext, Scope, UiEvent};
use crate::models::{FieldKind, InvoiceForm};
use crate::services::calculator::InvoiceCalculator;
use crate::services::presenter::{clear_errors, clear_field};
use crate::services::submission::FormSubmission;

pub struct InvoicePage {
    ctx: PageContext,
    dispatcher: Dispatcher,
}

impl InvoicePage {
    /// Wraps `form`, registers the standard handlers and renders the initial totals.
    pub fn new(form: InvoiceForm, formatter: Arc<dyn LocaleFormatter>) -> Self {
        let mut page = Self {
            ctx: PageContext { form, formatter },
            dispatcher: Dispatcher::new(),
        };
        page.wire_standard_handlers();
        page.recalculate();
        tracing::info!(
            rows = page.ctx.form.rows().len(),
            subscriptions = page.dispatcher.len(),
            "Invoice page initialised"
        );
        page
    }

    fn wire_standard_handlers(&mut self) {
        let d = &mut self.dispatcher;

        d.subscribe("add-row", Scope::AddRow, |ctx, _| {
            ctx.form.rows_mut().add();
        });
        d.subscribe("remove-row", Scope::RemoveRow, |ctx, event| {
            if let UiEvent::RemoveRow(id) = event {
                ctx.form.rows_mut().remove(*id);
            }
        });
        d.subscribe(
            "recalculate-on-input",
            Scope::InputOn(vec![FieldKind::Quantity, FieldKind::Price, FieldKind::TaxRate, FieldKind::Discount]),
            |ctx, _| {
                InvoiceCalculator::new(ctx.formatter.as_ref()).recalculate(&mut ctx.form);
            },
        );
        // Totals must never describe rows that are gone or missing.
        d.subscribe("recalculate-on-rows", Scope::RowChange, |ctx, _| {
            InvoiceCalculator::new(ctx.formatter.as_ref()).recalculate(&mut ctx.form);
        });
        d.subscribe("clear-field-error", Scope::AnyInput, |ctx, event| {
            if let UiEvent::Input { field, .. } = event {
                if let Some(input) = ctx.form.field_mut(field) {
                    clear_field(input);
                }
            }
        });
        d.subscribe("reset-errors", Scope::Reset, |ctx, _| {
            clear_errors(&mut ctx.form);
        });
    }

    /// Applies `event` to the form and runs every matching handler.
    /// Input on a field the form does not have is dropped.
    pub fn handle(&mut self, event: UiEvent) -> usize {
        if let UiEvent::Input { field, value } = &event {
            match self.ctx.form.field_mut(field) {
                Some(input) => input.value = value.clone(),
                None => {
                    tracing::debug!(field = ?field, "Input for unknown field ignored");
                    return 0;
                }
            }
        }
        self.dispatcher.dispatch(&mut self.ctx, &event)
    }

    /// Registers an extra handler; it runs after the standard ones.
    pub fn subscribe<F>(&mut self, name: &'static str, scope: Scope, handler: F)
    where
        F: FnMut(&mut PageContext, &UiEvent) + 'static,
    {
        self.dispatcher.subscribe(name, scope, handler);
    }

    /// Appends a row and returns its id.
    pub fn add_row(&mut self) -> Option<RowId> {
        self.handle(UiEvent::AddRow);
        self.ctx.form.rows().rows().last().map(crate::data::DynamicRow::id)
    }

    pub fn recalculate(&mut self) -> InvoiceTotals {
        InvoiceCalculator::new(self.ctx.formatter.as_ref()).recalculate(&mut self.ctx.form)
    }

    pub fn submission(&self) -> FormSubmission {
        FormSubmission::from_form(&self.ctx.form)
    }

    pub fn form(&self) -> &InvoiceForm {
        &self.ctx.form
    }

    pub fn form_mut(&mut self) -> &mut InvoiceForm {
        &mut self.ctx.form
    }

    pub fn formatter(&self) -> &dyn LocaleFormatter {
        self.ctx.formatter.as_ref()
    }

    pub fn subscription_names(&self) -> Vec<&'static str> {
        self.dispatcher.subscription_names()
    }
}
