//! Error types for declaration, lookup, resolution, and evaluation.

use thiserror::Error;

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the cookbook.
///
/// All errors are synchronous and local. Resolution either returns a
/// complete missing-input set or fails outright; there is no retry or
/// partial-success mode. An input lacking a recipe is NOT an error at
/// resolution time — it is reported in the missing-input set instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rule or recipe declaration is malformed.
    #[error("invalid definition '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },

    /// A rule produced a verdict that is not strictly boolean.
    #[error("rule '{rule}' returned a non-boolean: {got}")]
    InvalidResult { rule: String, got: String },

    /// No recipe is registered under the requested input name.
    #[error("recipe for '{input}' is not in the cookbook")]
    RecipeNotFound { input: String },

    /// A dependency cycle exists among the recipes the rules need.
    #[error("recipe cycle detected: {}", .cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },

    /// Evaluation was requested while required inputs are still missing.
    #[error("cannot evaluate checklist, missing inputs: {}", .inputs.join(", "))]
    MissingInputs { inputs: Vec<String> },
}
