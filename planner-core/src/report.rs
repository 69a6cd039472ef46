//! Report assembly — the engine's boundary output.
//!
//! Everything the rendering/notification collaborators consume is packed
//! into one serializable [`BudgetReport`]. Building a report reads the
//! ledger and never mutates it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::allocator::AllocationOutcome;
use crate::event::EventKind;
use crate::forecast::{self, ForecastError, DEFAULT_HORIZON};
use crate::ledger::Ledger;
use crate::patterns::{self, SpendingSummary};
use crate::recommend;
use crate::sentiment::{classify_or_unavailable, Tone, ToneClassifier};

/// How many recent expense descriptions get a tone label.
pub const TONE_SAMPLE: usize = 5;

/// Forecast result flattened for transport: either a projection or the
/// reportable insufficient-data marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForecastOutcome {
    #[serde(rename = "projection")]
    Projection(Vec<f64>),
    #[serde(rename = "insufficient_data")]
    InsufficientData { have: usize },
}

impl From<Result<Vec<f64>, ForecastError>> for ForecastOutcome {
    fn from(result: Result<Vec<f64>, ForecastError>) -> Self {
        match result {
            Ok(projection) => ForecastOutcome::Projection(projection),
            Err(ForecastError::InsufficientData { have }) => {
                ForecastOutcome::InsufficientData { have }
            }
        }
    }
}

/// Tone label for one recent expense description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneEntry {
    pub description: String,
    pub tone: Tone,
}

/// Structured output of a full planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    /// Per-item affordability decisions and savings figures.
    pub outcome: AllocationOutcome,
    /// Per-kind spending aggregates; kinds without events are absent.
    pub patterns: HashMap<EventKind, SpendingSummary>,
    /// Savings projection or the insufficient-data marker.
    pub forecast: ForecastOutcome,
    /// Tone labels for the most recent expenses, oldest first.
    pub tones: Vec<ToneEntry>,
    /// Rule-based suggestions.
    pub recommendations: Vec<String>,
}

impl BudgetReport {
    /// Human-readable digest lines for the notification collaborators:
    /// one line per spending kind, then one per tone-labeled expense.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut kinds: Vec<(&EventKind, &SpendingSummary)> = self.patterns.iter().collect();
        kinds.sort_by_key(|(kind, _)| kind.label());

        let mut lines: Vec<String> = kinds
            .into_iter()
            .map(|(kind, summary)| {
                format!(
                    "Your {} spending totals {:.2} with average {:.2} per item ({} items)",
                    kind.label(),
                    summary.total,
                    summary.average,
                    summary.count
                )
            })
            .collect();

        for entry in &self.tones {
            lines.push(format!("{}: {}", entry.description, entry.tone.hint()));
        }
        lines
    }
}

/// Assemble the report handed to the excluded rendering and notification
/// collaborators.
///
/// Analytics failures stay local: a short savings history or a missing
/// lexicon shows up inside the report, never as an error from this
/// function.
pub fn build_report(
    ledger: &Ledger,
    outcome: AllocationOutcome,
    classifier: Option<&ToneClassifier>,
    income: f64,
    total_expenses: f64,
    goal_tags: &[String],
) -> BudgetReport {
    let tones = ledger
        .recent_expenses(TONE_SAMPLE)
        .into_iter()
        .map(|event| ToneEntry {
            description: event.description.clone(),
            tone: classify_or_unavailable(classifier, &event.description),
        })
        .collect();

    BudgetReport {
        patterns: patterns::analyze(ledger),
        forecast: forecast::forecast_savings(ledger, DEFAULT_HORIZON).into(),
        tones,
        recommendations: recommend::recommend(income, total_expenses, goal_tags),
        outcome,
    }
}
