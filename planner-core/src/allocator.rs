//! Greedy, priority-ordered first-fit budget allocation.
//!
//! Needs are walked in descending priority, then wants, drawing from the
//! same remaining pool, so needs always have first claim on the budget. An
//! item is affordable when the remaining budget covers its cost at the
//! moment of evaluation; a rejection never removes later, cheaper items
//! from consideration. No backtracking, no reordering by feasibility:
//! the trade is optimality for determinism and explainability.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::event::{EventKind, FinancialEvent};
use crate::ledger::Ledger;

/// A candidate expense collected from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityItem {
    pub description: String,
    pub cost: f64,
    pub kind: EventKind,
}

impl PriorityItem {
    pub fn need(description: impl Into<String>, cost: f64) -> Self {
        Self {
            description: description.into(),
            cost,
            kind: EventKind::Need,
        }
    }

    pub fn want(description: impl Into<String>, cost: f64) -> Self {
        Self {
            description: description.into(),
            cost,
            kind: EventKind::Want,
        }
    }
}

/// Priority-keyed item collection (keys 1-10, higher evaluated first).
///
/// Registering a second item at an occupied priority replaces the earlier
/// one; the ledger still remembers both registrations. Documented
/// behavior, pinned by tests.
pub type PriorityQueue = BTreeMap<u8, PriorityItem>;

/// Record an item in its queue and append the matching event to the ledger.
pub fn register_item(
    queue: &mut PriorityQueue,
    ledger: &mut Ledger,
    priority: u8,
    item: PriorityItem,
) {
    ledger.append(FinancialEvent::new(
        item.kind,
        item.description.clone(),
        item.cost,
        priority,
    ));
    queue.insert(priority, item);
}

/// The allocator's verdict on a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationDecision {
    pub priority: u8,
    pub item: PriorityItem,
    pub affordable: bool,
}

/// Result of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    /// Per-item verdicts in evaluation order (needs first, then wants,
    /// each by descending priority).
    pub decisions: Vec<AllocationDecision>,
    /// Sum of affordable item costs.
    pub spent: f64,
    /// Budget left over after the walk.
    pub remaining: f64,
    /// Planned savings plus whatever remained unspent.
    pub actual_savings: f64,
}

impl AllocationOutcome {
    /// Descriptions of the items that fit the budget, in evaluation order.
    pub fn affordable_items(&self) -> Vec<&str> {
        self.decisions
            .iter()
            .filter(|d| d.affordable)
            .map(|d| d.item.description.as_str())
            .collect()
    }
}

/// Clamp an over-ambitious savings goal before allocation.
///
/// Returns `(goal, spendable)`. A goal above the whole budget falls back to
/// 20% of it; otherwise both pass through unchanged.
pub fn clamp_savings_goal(budget: f64, goal: f64) -> (f64, f64) {
    if goal > budget {
        let adjusted = budget * 0.2;
        (adjusted, budget - adjusted)
    } else {
        (goal, budget - goal)
    }
}

/// Allocate `remaining` across needs then wants and record the savings
/// deposit.
///
/// `remaining` is taken as given: a caller that passes a negative value
/// gets every item rejected, never a refund of an earlier expensive one.
/// Appends exactly one synthetic savings event to the ledger with
/// `actual_savings = planned_savings + remaining`.
pub fn allocate(
    budget_remaining: f64,
    needs: &PriorityQueue,
    wants: &PriorityQueue,
    planned_savings: f64,
    ledger: &mut Ledger,
) -> AllocationOutcome {
    let mut remaining = budget_remaining;
    let mut spent = 0.0;
    let mut decisions = Vec::with_capacity(needs.len() + wants.len());

    for queue in [needs, wants] {
        for (&priority, item) in queue.iter().rev() {
            let affordable = remaining - item.cost >= 0.0;
            if affordable {
                remaining -= item.cost;
                spent += item.cost;
            }
            debug!(
                priority,
                cost = item.cost,
                affordable,
                "evaluated '{}'",
                item.description
            );
            decisions.push(AllocationDecision {
                priority,
                item: item.clone(),
                affordable,
            });
        }
    }

    let actual_savings = planned_savings + remaining;
    ledger.append(FinancialEvent::savings(
        "Monthly savings deposit",
        actual_savings,
    ));
    info!(spent, remaining, actual_savings, "allocation complete");

    AllocationOutcome {
        decisions,
        spent,
        remaining,
        actual_savings,
    }
}
