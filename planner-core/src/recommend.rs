//! Rule-based savings recommendations.

use tracing::debug;

/// Goal tags with a dedicated suggestion. Anything else is ignored.
const KNOWN_TAGS: [&str; 2] = ["emergency", "retirement"];

/// Produce human-readable budget suggestions.
///
/// Always emits one baseline recommendation from the fixed 50/30/20 split
/// of `income`, independent of actual spending, then one suggestion per
/// known goal tag found in `goal_tags`. Tags are matched after trimming
/// and lowercasing; unknown tags produce no output and no error.
pub fn recommend(income: f64, total_expenses: f64, goal_tags: &[String]) -> Vec<String> {
    debug!(
        income,
        total_expenses,
        disposable = income - total_expenses,
        "building recommendations"
    );

    let mut recommendations = vec![format!(
        "Standard budget split: needs {:.2}, wants {:.2}, save {:.2}",
        income * 0.5,
        income * 0.3,
        income * 0.2
    )];

    let tags: Vec<String> = goal_tags
        .iter()
        .map(|t| t.trim().to_lowercase())
        .collect();
    let has = |tag: &str| tags.iter().any(|t| t == tag);

    if has(KNOWN_TAGS[0]) {
        recommendations.push("Boost your emergency fund by reducing wants by 10%".to_string());
    }
    if has(KNOWN_TAGS[1]) {
        recommendations
            .push("Consider increasing retirement savings by 5% of income".to_string());
    }

    recommendations
}
