//! Spending-pattern aggregation over the ledger.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::EventKind;
use crate::ledger::Ledger;

/// Aggregate figures for one event kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendingSummary {
    pub total: f64,
    pub average: f64,
    pub count: usize,
}

/// Group ledger events by kind and compute total/average/count per group.
///
/// A kind with zero events is omitted from the map rather than reported
/// with zeros, so `average == total / count` holds exactly for every entry
/// and no division by zero can occur. Pure read; the ledger is untouched.
pub fn analyze(ledger: &Ledger) -> HashMap<EventKind, SpendingSummary> {
    let mut sums: HashMap<EventKind, (f64, usize)> = HashMap::new();
    for event in ledger.all() {
        let entry = sums.entry(event.kind).or_insert((0.0, 0));
        entry.0 += event.amount;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(kind, (total, count))| {
            (
                kind,
                SpendingSummary {
                    total,
                    average: total / count as f64,
                    count,
                },
            )
        })
        .collect()
}
