//! Ledger — append-only log of financial events.
//!
//! Insertion order is chronological order. There is deliberately no update
//! or delete operation: once appended, history is immutable, so every
//! analytic reads exactly what happened. One writer (the allocator), any
//! number of `&Ledger` readers.

use serde::{Deserialize, Serialize};

use crate::event::{EventKind, FinancialEvent};

/// Ordered, append-only sequence of [`FinancialEvent`]s for one run.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Ledger {
    events: Vec<FinancialEvent>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append an event to the end of the log. O(1), infallible for
    /// well-formed input.
    pub fn append(&mut self, event: FinancialEvent) {
        self.events.push(event);
    }

    /// Read-only view over all events in insertion order.
    pub fn all(&self) -> &[FinancialEvent] {
        &self.events
    }

    /// Read-only view over events of one kind, in insertion order.
    pub fn of_kind(&self, kind: EventKind) -> impl Iterator<Item = &FinancialEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    /// Savings amounts in chronological order (forecaster input).
    pub fn savings_amounts(&self) -> Vec<f64> {
        self.of_kind(EventKind::Savings).map(|e| e.amount).collect()
    }

    /// The `n` most recent need/want events, oldest first.
    pub fn recent_expenses(&self, n: usize) -> Vec<&FinancialEvent> {
        let mut expenses: Vec<&FinancialEvent> =
            self.events.iter().filter(|e| e.is_expense()).collect();
        let keep = expenses.len().saturating_sub(n);
        expenses.drain(..keep);
        expenses
    }
}
