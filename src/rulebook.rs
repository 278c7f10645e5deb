//! Rule packs — explicit registration of rule and recipe declarations.
//!
//! Replaces dynamic discovery of rule definitions: a pack is whatever
//! implements [`RulePack`], and a declaration is whatever the pack hands
//! over. Registration preserves each pack's declaration order, and the
//! resolver consumes only the resulting ordered lists.

use crate::core::cookbook::Cookbook;
use crate::core::recipe::Recipe;
use crate::core::rule::Rule;

/// An ordered source of rule and recipe declarations.
pub trait RulePack {
    /// Pack name, for diagnostics.
    fn name(&self) -> &str;

    /// Rules declared by this pack, in declaration order.
    fn rules(&self) -> Vec<Rule>;

    /// Recipes declared by this pack, in declaration order. Most packs
    /// declare none.
    fn recipes(&self) -> Vec<Recipe> {
        Vec::new()
    }
}

/// Append a pack's declarations to the cookbook, preserving order.
pub fn load_pack(book: &mut Cookbook, pack: &dyn RulePack) {
    let rules = pack.rules();
    let recipes = pack.recipes();
    tracing::debug!(
        pack = pack.name(),
        rules = rules.len(),
        recipes = recipes.len(),
        "loading rule pack"
    );
    book.rules.extend(rules);
    book.recipes.extend(recipes);
}

/// Load several packs, in the given order.
pub fn load_packs(book: &mut Cookbook, packs: &[&dyn RulePack]) {
    for pack in packs {
        load_pack(book, *pack);
    }
}
