//! Checklist evaluation — cook needed inputs, then run every rule.

use super::cookbook::Cookbook;
use super::error::{Error, Result};
use super::resolver;
use super::types::{ChecklistReport, Ingredients, RuleOutcome};
use std::collections::BTreeSet;

/// Evaluate every rule in the cookbook against the supplied primary inputs.
///
/// Used recipes are cooked in dependency order; each produced value joins
/// the working pantry alongside the primary values, and every rule is then
/// served the subset its declaration names. Fails with
/// [`Error::MissingInputs`] when resolution still reports gaps, and stops
/// on the first rule whose verdict is not strictly boolean. A false verdict
/// is counted, not fatal.
pub fn run(book: &Cookbook, primary: &Ingredients) -> Result<ChecklistReport> {
    let primary_names: BTreeSet<String> = primary.keys().cloned().collect();

    let missing = resolver::missing_inputs(book, &primary_names)?;
    if !missing.is_empty() {
        return Err(Error::MissingInputs {
            inputs: missing.into_iter().collect(),
        });
    }

    let cook_order = resolver::cook_order(book, &primary_names)?;

    let mut pantry = primary.clone();
    for name in &cook_order {
        let recipe = book.recipe_for(name)?;
        let served = serve(&pantry, recipe.requires());
        let value = recipe.cook(&served);
        tracing::debug!(input = %name, "cooked intermediate input");
        pantry.insert(name.clone(), value);
    }

    let mut outcomes = Vec::with_capacity(book.rules.len());
    let mut rules_passed = 0u32;
    let mut rules_failed = 0u32;

    for rule in &book.rules {
        let served = serve(&pantry, rule.requires());
        let passed = rule.check(&served)?;
        if passed {
            rules_passed += 1;
        } else {
            rules_failed += 1;
        }
        outcomes.push(RuleOutcome {
            rule: rule.name().to_string(),
            passed,
        });
    }

    tracing::debug!(
        passed = rules_passed,
        failed = rules_failed,
        "checklist complete"
    );
    Ok(ChecklistReport {
        cook_order,
        outcomes,
        rules_passed,
        rules_failed,
    })
}

/// Subset of the pantry named by a requirement list, in declaration order.
fn serve(pantry: &Ingredients, requires: &[String]) -> Ingredients {
    requires
        .iter()
        .filter_map(|name| pantry.get(name).map(|value| (name.clone(), value.clone())))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recipe::Recipe;
    use crate::core::rule::Rule;
    use crate::core::types::{ingredients, Value};
    use serde_json::json;

    fn geometry_book() -> Cookbook {
        let mut book = Cookbook::new();
        book.add_recipe(
            Recipe::new("area", ["width", "height"], |served| {
                let width = served.get("width").and_then(Value::as_i64).unwrap_or(0);
                let height = served.get("height").and_then(Value::as_i64).unwrap_or(0);
                json!(width * height)
            })
            .unwrap(),
        );
        book.add_rule(
            Rule::new("area_positive", ["area"], |served| {
                Value::Bool(served.get("area").and_then(Value::as_i64).unwrap_or(0) > 0)
            })
            .unwrap(),
        );
        book
    }

    #[test]
    fn test_run_cooks_intermediates_and_feeds_rules() {
        let book = geometry_book();
        let primary = ingredients([("width", json!(3)), ("height", json!(4))]);

        let report = run(&book, &primary).unwrap();
        assert_eq!(report.cook_order, vec!["area"]);
        assert_eq!(report.rules_passed, 1);
        assert_eq!(report.rules_failed, 0);
        assert_eq!(
            report.outcomes,
            vec![RuleOutcome {
                rule: "area_positive".to_string(),
                passed: true,
            }]
        );
    }

    #[test]
    fn test_false_verdicts_are_counted_not_fatal() {
        let book = geometry_book();
        let primary = ingredients([("width", json!(0)), ("height", json!(4))]);

        let report = run(&book, &primary).unwrap();
        assert_eq!(report.rules_passed, 0);
        assert_eq!(report.rules_failed, 1);
        assert!(!report.outcomes[0].passed);
    }

    #[test]
    fn test_run_refuses_while_inputs_are_missing() {
        let book = geometry_book();
        let primary = ingredients([("width", json!(3))]);

        let err = run(&book, &primary).unwrap_err();
        assert_eq!(
            err,
            Error::MissingInputs {
                inputs: vec!["height".to_string()]
            }
        );
    }

    #[test]
    fn test_chained_recipes_cook_in_dependency_order() {
        let mut book = Cookbook::new();
        book.add_recipe(
            Recipe::new("doubled", ["base"], |served| {
                json!(served.get("base").and_then(Value::as_i64).unwrap_or(0) * 2)
            })
            .unwrap(),
        );
        book.add_recipe(
            Recipe::new("quadrupled", ["doubled"], |served| {
                json!(served.get("doubled").and_then(Value::as_i64).unwrap_or(0) * 2)
            })
            .unwrap(),
        );
        book.add_rule(
            Rule::new("is_twenty", ["quadrupled"], |served| {
                Value::Bool(served.get("quadrupled") == Some(&json!(20)))
            })
            .unwrap(),
        );

        let report = run(&book, &ingredients([("base", json!(5))])).unwrap();
        assert_eq!(report.cook_order, vec!["doubled", "quadrupled"]);
        assert_eq!(report.rules_passed, 1);
    }

    #[test]
    fn test_non_boolean_verdict_aborts_the_run() {
        let mut book = Cookbook::new();
        book.add_rule(Rule::new("first", Vec::<String>::new(), |_| json!("yes")).unwrap());
        book.add_rule(Rule::new("second", Vec::<String>::new(), |_| Value::Bool(true)).unwrap());

        let err = run(&book, &Ingredients::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidResult { .. }));
    }

    #[test]
    fn test_primary_value_wins_over_recipe_with_same_name() {
        let mut book = Cookbook::new();
        book.add_recipe(Recipe::new("area", ["width"], |_| json!(-1)).unwrap());
        book.add_rule(
            Rule::new("area_positive", ["area"], |served| {
                Value::Bool(served.get("area").and_then(Value::as_i64).unwrap_or(0) > 0)
            })
            .unwrap(),
        );

        // "area" arrives as primary: its recipe is never cooked and "width"
        // is never demanded.
        let report = run(&book, &ingredients([("area", json!(9))])).unwrap();
        assert!(report.cook_order.is_empty());
        assert_eq!(report.rules_passed, 1);
    }

    #[test]
    fn test_empty_cookbook_reports_nothing() {
        let report = run(&Cookbook::new(), &Ingredients::new()).unwrap();
        assert!(report.cook_order.is_empty());
        assert!(report.outcomes.is_empty());
        assert_eq!(report.rules_passed, 0);
        assert_eq!(report.rules_failed, 0);
    }
}
