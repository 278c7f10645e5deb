//! Dependency resolution over the cookbook's recipe graph.
//!
//! Input names are graph nodes; an edge runs from a name to each input its
//! first-match recipe requires. Resolution walks only the subgraph reachable
//! from the rules' requirements, so recipes nobody needs are never
//! validated, even if they cycle among themselves. Traversal starts from
//! sorted roots and follows declaration order, which keeps the missing set
//! and cycle reports reproducible across runs with identical input.

use super::cookbook::Cookbook;
use super::error::{Error, Result};
use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Compute the inputs still lacking a recipe after transitive resolution.
///
/// Roots are the union of every rule's requirements. The result is every
/// root or used-recipe requirement with no matching recipe, minus the
/// primary inputs. An input without a recipe is not an error here; a cycle
/// among the used recipes is.
pub fn missing_inputs(book: &Cookbook, primary: &BTreeSet<String>) -> Result<BTreeSet<String>> {
    let roots = book.required();
    let used = used_recipes(book, &roots, primary);
    ensure_no_cycles(book, &roots, primary)?;

    let mut pool = roots;
    for name in &used {
        if let Some(recipe) = book.find_recipe(name) {
            pool.extend(recipe.requires().iter().cloned());
        }
    }

    let missing: BTreeSet<String> = pool
        .into_iter()
        .filter(|name| book.find_recipe(name).is_none() && !primary.contains(name))
        .collect();

    tracing::debug!(
        used = used.len(),
        missing = missing.len(),
        "resolved cookbook requirements"
    );
    Ok(missing)
}

/// Names whose first-match recipe is reachable from the roots.
///
/// Breadth-first from `roots \ primary`. A name with no matching recipe
/// terminates its branch without error, and a primary input is never
/// expanded, even when a recipe shares its name.
fn used_recipes(
    book: &Cookbook,
    roots: &BTreeSet<String>,
    primary: &BTreeSet<String>,
) -> BTreeSet<String> {
    let mut visited: FxHashSet<&str> = FxHashSet::default();
    let mut used = BTreeSet::new();
    let mut queue: VecDeque<&str> = roots
        .iter()
        .filter(|name| !primary.contains(*name))
        .map(String::as_str)
        .collect();

    while let Some(name) = queue.pop_front() {
        if !visited.insert(name) {
            continue;
        }
        let Some(recipe) = book.find_recipe(name) else {
            continue;
        };
        used.insert(name.to_string());
        for req in recipe.requires() {
            if !primary.contains(req) {
                queue.push_back(req);
            }
        }
    }

    used
}

/// Walk every root's recipe chain, failing on a revisit within the walk.
///
/// Only recipes reachable from the roots are checked. Names proven
/// cycle-free are memoized, so each recipe is expanded once overall.
fn ensure_no_cycles(
    book: &Cookbook,
    roots: &BTreeSet<String>,
    primary: &BTreeSet<String>,
) -> Result<()> {
    let mut proven: FxHashSet<String> = FxHashSet::default();
    let mut path: Vec<String> = Vec::new();
    for root in roots {
        if !primary.contains(root) {
            walk(book, root, primary, &mut path, &mut proven)?;
        }
    }
    Ok(())
}

fn walk(
    book: &Cookbook,
    name: &str,
    primary: &BTreeSet<String>,
    path: &mut Vec<String>,
    proven: &mut FxHashSet<String>,
) -> Result<()> {
    if proven.contains(name) {
        return Ok(());
    }
    let Some(recipe) = book.find_recipe(name) else {
        // No recipe: the branch ends here. Missing-input reporting owns it.
        proven.insert(name.to_string());
        return Ok(());
    };
    if let Some(first) = path.iter().position(|on_path| on_path == name) {
        let mut cycle = path[first..].to_vec();
        cycle.push(name.to_string());
        return Err(Error::CyclicDependency { cycle });
    }

    path.push(name.to_string());
    for req in recipe.requires() {
        if !primary.contains(req) {
            walk(book, req, primary, path, proven)?;
        }
    }
    path.pop();
    proven.insert(name.to_string());
    Ok(())
}

/// Topological cook order over the used-recipe subgraph.
///
/// Dependencies come first. Uses Kahn's algorithm with alphabetical
/// tie-breaking for determinism. An incomplete order means a cycle among
/// the used recipes; the sorted cyclic remainder is reported.
pub fn cook_order(book: &Cookbook, primary: &BTreeSet<String>) -> Result<Vec<String>> {
    let roots = book.required();
    let used = used_recipes(book, &roots, primary);

    let mut in_degree: HashMap<&str, usize> = HashMap::new();
    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
    for name in &used {
        in_degree.insert(name, 0);
        dependents.insert(name, Vec::new());
    }

    // An edge runs from each used requirement to the recipe consuming it.
    // Duplicate requirement entries contribute a single edge.
    for name in &used {
        let Some(recipe) = book.find_recipe(name) else {
            continue;
        };
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for req in recipe.requires() {
            if primary.contains(req) || !used.contains(req) || !seen.insert(req) {
                continue;
            }
            dependents.entry(req).or_default().push(name);
            *in_degree.entry(name).or_insert(0) += 1;
        }
    }

    // Kahn's algorithm with sorted tie-breaking
    let mut queue: VecDeque<&str> = VecDeque::new();
    let mut zero_degree: Vec<&str> = in_degree
        .iter()
        .filter(|(_, &degree)| degree == 0)
        .map(|(name, _)| *name)
        .collect();
    zero_degree.sort_unstable();
    for name in zero_degree {
        queue.push_back(name);
    }

    let mut order: Vec<String> = Vec::with_capacity(used.len());
    while let Some(current) = queue.pop_front() {
        order.push(current.to_string());

        let mut next_ready: Vec<&str> = Vec::new();
        if let Some(consumers) = dependents.get(current) {
            for &consumer in consumers {
                if let Some(degree) = in_degree.get_mut(consumer) {
                    *degree -= 1;
                    if *degree == 0 {
                        next_ready.push(consumer);
                    }
                }
            }
        }
        next_ready.sort_unstable();
        for name in next_ready {
            queue.push_back(name);
        }
    }

    if order.len() != used.len() {
        let ordered: FxHashSet<&str> = order.iter().map(String::as_str).collect();
        let cycle: Vec<String> = used
            .iter()
            .filter(|name| !ordered.contains(name.as_str()))
            .cloned()
            .collect();
        return Err(Error::CyclicDependency { cycle });
    }

    Ok(order)
}

// ============================================================================
// Tests
// ============================================================================
