//! Shared types — ingredient maps and checklist reports.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named input value.
///
/// Recipes may produce any value; a rule's verdict must be `Value::Bool`.
pub use serde_json::Value;

/// Order-preserving map of named input values.
pub type Ingredients = IndexMap<String, Value>;

/// Build an ingredient map from name/value pairs.
pub fn ingredients<I, K>(pairs: I) -> Ingredients
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

// ============================================================================
// Checklist report
// ============================================================================

/// Outcome of evaluating a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// Rule name
    pub rule: String,

    /// Whether the predicate held
    pub passed: bool,
}

/// Full checklist evaluation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistReport {
    /// Order in which used recipes were cooked (dependencies first)
    pub cook_order: Vec<String>,

    /// Per-rule outcomes in registration order
    pub outcomes: Vec<RuleOutcome>,

    /// Summary counts
    pub rules_passed: u32,
    pub rules_failed: u32,
}

// ============================================================================
// Tests
// ============================================================================
