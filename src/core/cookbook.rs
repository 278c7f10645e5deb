//! Cookbook — the ordered registry of rules and recipes.

use super::error::{Error, Result};
use super::recipe::Recipe;
use super::resolver;
use super::rule::Rule;
use std::collections::BTreeSet;

/// Ordered registry of rules and recipes.
///
/// Rules declare what must hold; recipes supply intermediate inputs, and a
/// recipe may feed other recipes. Both lists are append-ordered and public.
/// If two recipes exist for the same input name, only the first one in the
/// list is ever used; later duplicates are inert unless independently
/// reachable under a different name.
///
/// Resolution reads the current snapshot and never mutates it. The registry
/// must not be mutated concurrently with an in-progress resolution.
#[derive(Debug, Default)]
pub struct Cookbook {
    /// Rules whose requirements must be satisfied
    pub rules: Vec<Rule>,

    /// Recipes available to produce intermediate inputs
    pub recipes: Vec<Recipe>,
}

impl Cookbook {
    /// Create an empty cookbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append a recipe.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Get the recipe that will be used to generate the specified input.
    ///
    /// First match in registration order wins. Fails with
    /// [`Error::RecipeNotFound`] when no recipe carries the name.
    pub fn recipe_for(&self, input_name: &str) -> Result<&Recipe> {
        self.find_recipe(input_name).ok_or_else(|| Error::RecipeNotFound {
            input: input_name.to_string(),
        })
    }

    pub(crate) fn find_recipe(&self, input_name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name() == input_name)
    }

    /// Union of every rule's requirements.
    pub fn required(&self) -> BTreeSet<String> {
        self.rules
            .iter()
            .flat_map(|rule| rule.requires().iter().cloned())
            .collect()
    }

    /// For the given primary inputs, calculate the inputs still missing.
    ///
    /// Primary inputs are provided beforehand: they are removed from the
    /// result and exempt from recipe lookup, so a recipe sharing a primary
    /// input's name is never traversed. Fails with
    /// [`Error::CyclicDependency`] when the recipes needed by the rules
    /// form a cycle.
    pub fn missing_inputs(&self, primary: &BTreeSet<String>) -> Result<BTreeSet<String>> {
        resolver::missing_inputs(self, primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Value;
    use serde_json::json;

    fn recipe(name: &str, requires: &[&str]) -> Recipe {
        Recipe::new(name, requires.iter().copied(), |_| Value::Null).unwrap()
    }

    #[test]
    fn test_recipe_for_returns_first_match() {
        let mut book = Cookbook::new();
        book.add_recipe(Recipe::new("pick", ["first"], |_| json!(1)).unwrap());
        book.add_recipe(Recipe::new("pick", ["second"], |_| json!(2)).unwrap());

        let found = book.recipe_for("pick").unwrap();
        assert_eq!(found.requires(), ["first"]);
    }

    #[test]
    fn test_recipe_for_unknown_name_fails() {
        let book = Cookbook::new();
        let err = book.recipe_for("ghost").unwrap_err();
        assert_eq!(
            err,
            Error::RecipeNotFound {
                input: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_required_is_the_union_of_rule_requirements() {
        let mut book = Cookbook::new();
        book.add_rule(Rule::new("r1", ["a", "b"], |_| Value::Bool(true)).unwrap());
        book.add_rule(Rule::new("r2", ["b", "c"], |_| Value::Bool(true)).unwrap());

        let required: Vec<String> = book.required().into_iter().collect();
        assert_eq!(required, ["a", "b", "c"]);
    }

    #[test]
    fn test_lists_are_append_ordered() {
        let mut book = Cookbook::new();
        book.add_recipe(recipe("z", &[]));
        book.add_recipe(recipe("a", &[]));
        book.recipes.push(recipe("m", &[]));

        let names: Vec<&str> = book.recipes.iter().map(Recipe::name).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }
}
