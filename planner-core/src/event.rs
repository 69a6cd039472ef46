//! Financial event types for the append-only ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority stamped on the synthetic savings event.
pub const SAVINGS_PRIORITY: u8 = 10;

/// Kind of financial event recorded in the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventKind {
    #[serde(rename = "need")]
    Need,
    #[serde(rename = "want")]
    Want,
    #[serde(rename = "savings")]
    Savings,
}

impl EventKind {
    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Need => "needs",
            EventKind::Want => "wants",
            EventKind::Savings => "savings",
        }
    }
}

/// One spending or savings action.
///
/// Events are created by the allocator (need/want entries at collection
/// time, one savings entry at allocation completion) and never mutated or
/// deleted afterwards. Every kind carries the same `DateTime<Utc>` timestamp
/// representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialEvent {
    /// When the event was recorded (UTC).
    pub timestamp: DateTime<Utc>,
    /// Event kind.
    pub kind: EventKind,
    /// Human-readable description.
    pub description: String,
    /// Non-negative amount, validated at the boundary.
    pub amount: f64,
    /// Priority 1-10; savings events are stamped with 10.
    pub priority: u8,
}

impl FinancialEvent {
    /// Create a new event stamped with the current time.
    pub fn new(kind: EventKind, description: impl Into<String>, amount: f64, priority: u8) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            description: description.into(),
            amount,
            priority,
        }
    }

    /// A need expense.
    pub fn need(description: impl Into<String>, amount: f64, priority: u8) -> Self {
        Self::new(EventKind::Need, description, amount, priority)
    }

    /// A want expense.
    pub fn want(description: impl Into<String>, amount: f64, priority: u8) -> Self {
        Self::new(EventKind::Want, description, amount, priority)
    }

    /// The monthly savings deposit recorded at allocation completion.
    pub fn savings(description: impl Into<String>, amount: f64) -> Self {
        Self::new(EventKind::Savings, description, amount, SAVINGS_PRIORITY)
    }

    /// Override the timestamp (deterministic tests, backdated imports).
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns true for need/want events.
    pub fn is_expense(&self) -> bool {
        matches!(self.kind, EventKind::Need | EventKind::Want)
    }
}
