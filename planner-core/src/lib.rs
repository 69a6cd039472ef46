//! planner-core: allocation and analytics engine for a monthly budget
//! planner.
//!
//! The engine collects prioritized spending items, greedily allocates a
//! fixed budget across them (needs before wants, descending priority),
//! logs every financial event to an append-only [`Ledger`], and derives
//! analytics from that history: per-kind spending patterns, a linear
//! savings forecast, lexicon-based tone labels, and rule-based
//! recommendations. Interactive collection, rendering and notification
//! transport live outside this crate and consume the [`BudgetReport`].

pub mod allocator;
pub mod event;
pub mod forecast;
pub mod ledger;
pub mod patterns;
pub mod recommend;
pub mod report;
pub mod sentiment;
pub mod time;

pub use allocator::{
    allocate, clamp_savings_goal, register_item, AllocationDecision, AllocationOutcome,
    PriorityItem, PriorityQueue,
};
pub use event::{EventKind, FinancialEvent, SAVINGS_PRIORITY};
pub use forecast::{forecast_savings, ForecastError, DEFAULT_HORIZON};
pub use ledger::Ledger;
pub use patterns::{analyze, SpendingSummary};
pub use recommend::recommend;
pub use report::{build_report, BudgetReport, ForecastOutcome, ToneEntry, TONE_SAMPLE};
pub use sentiment::{classify_or_unavailable, Tone, ToneClassifier};
pub use time::parse_timestamp;
