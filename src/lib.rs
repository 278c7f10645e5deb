//! Recetario — predicate rules with recipe-driven input resolution.
//!
//! Rules are named predicates over named inputs. Recipes compute an
//! intermediate input's value from other named inputs, feeding one another
//! the way test fixtures do. The [`Cookbook`] resolves which inputs must
//! still be supplied by the caller to satisfy every rule's transitive
//! requirements, rejects dependency cycles among the recipes actually
//! needed, and evaluates the whole checklist once the inputs are on hand.
//!
//! Resolution is a pure read over the cookbook's current state: build the
//! registry first, then resolve. Concurrent mutation during resolution is
//! unsupported.

pub mod core;
pub mod rulebook;

pub use crate::core::checklist;
pub use crate::core::cookbook::Cookbook;
pub use crate::core::error::{Error, Result};
pub use crate::core::recipe::Recipe;
pub use crate::core::rule::Rule;
pub use crate::core::types::{ingredients, ChecklistReport, Ingredients, RuleOutcome, Value};
pub use crate::rulebook::{load_pack, load_packs, RulePack};
