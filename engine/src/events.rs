// Explicit event wiring. Each subscription states the set of events it
// applies to; handlers for the same event run in registration order.
use shared::format::LocaleFormatter;
use shared::models::RowId;
use std::sync::Arc;

use crate::models::{FieldKind, FieldRef, InvoiceForm};

/// A user interaction on the invoice page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Text typed into an input; the new value is already in the form
    /// when handlers run.
    Input { field: FieldRef, value: String },
    AddRow,
    RemoveRow(RowId),
    /// Explicit reset of the form's validation state.
    Reset,
}

/// Which events a subscription applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Scope {
    /// Input on any field.
    AnyInput,
    /// Input on fields of the listed kinds.
    InputOn(Vec<FieldKind>),
    AddRow,
    RemoveRow,
    /// Either row mutation.
    RowChange,
    Reset,
}

impl Scope {
    pub fn matches(&self, event: &UiEvent) -> bool {
        match (self, event) {
            (Scope::AnyInput, UiEvent::Input { .. }) => true,
            (Scope::InputOn(kinds), UiEvent::Input { field, .. }) => kinds.contains(&field.kind()),
            (Scope::AddRow, UiEvent::AddRow) => true,
            (Scope::RemoveRow, UiEvent::RemoveRow(_)) => true,
            (Scope::RowChange, UiEvent::AddRow | UiEvent::RemoveRow(_)) => true,
            (Scope::Reset, UiEvent::Reset) => true,
            _ => false,
        }
    }
}

/// State handed to every handler.
pub struct PageContext {
    pub form: InvoiceForm,
    pub formatter: Arc<dyn LocaleFormatter>,
}

pub type Handler = Box<dyn FnMut(&mut PageContext, &UiEvent)>;

struct Subscription {
    name: &'static str,
    scope: Scope,
    handler: Handler,
}

#[derive(Default)]
pub struct Dispatcher {
    subscriptions: Vec<Subscription>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, name: &'static str, scope: Scope, handler: F)
    where
        F: FnMut(&mut PageContext, &UiEvent) + 'static,
    {
        tracing::debug!(subscription = name, scope = ?scope, "Subscribed");
        self.subscriptions.push(Subscription {
            name,
            scope,
            handler: Box::new(handler),
        });
    }

    /// Runs every matching handler in registration order; returns how many ran.
    pub fn dispatch(&mut self, ctx: &mut PageContext, event: &UiEvent) -> usize {
        let mut fired = 0;
        for sub in self.subscriptions.iter_mut().filter(|s| s.scope.matches(event)) {
            tracing::trace!(subscription = sub.name, event = ?event, "Dispatching");
            (sub.handler)(ctx, event);
            fired += 1;
        }
        fired
    }

    pub fn subscription_names(&self) -> Vec<&'static str> {
        self.subscriptions.iter().map(|s| s.name).collect()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
