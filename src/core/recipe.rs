//! Recipe declarations — named value producers with explicit requirements.

use super::error::{Error, Result};
use super::types::{Ingredients, Value};
use std::fmt;

/// Computation wrapped by a declaration.
pub(crate) type CookFn = Box<dyn Fn(&Ingredients) -> Value + Send + Sync>;

/// A callable that computes the value of an input of a given name.
///
/// The name is the input the recipe produces. `requires` names the inputs it
/// consumes, in declaration order; duplicates are permitted and resolution
/// treats the sequence as a set. Recipe names are not guaranteed unique
/// across a cookbook: on lookup, the earliest-registered recipe wins.
pub struct Recipe {
    name: String,
    requires: Vec<String>,
    cook: CookFn,
}

impl Recipe {
    /// Declare a recipe from a name, its required inputs, and a closure.
    ///
    /// Fails with [`Error::InvalidDefinition`] when the name or any required
    /// input name is blank.
    pub fn new<N, R, S, F>(name: N, requires: R, cook: F) -> Result<Self>
    where
        N: Into<String>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Ingredients) -> Value + Send + Sync + 'static,
    {
        let name = name.into();
        let requires: Vec<String> = requires.into_iter().map(Into::into).collect();
        validate_declaration(&name, &requires)?;
        Ok(Self {
            name,
            requires,
            cook: Box::new(cook),
        })
    }

    /// Name of the input this recipe produces.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inputs required by the recipe, in declaration order.
    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    /// Produce the value, forwarding the given ingredients to the closure.
    pub fn cook(&self, served: &Ingredients) -> Value {
        (self.cook)(served)
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}

/// Validate a declaration's name and requirement list.
pub(crate) fn validate_declaration(name: &str, requires: &[String]) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidDefinition {
            name: name.to_string(),
            reason: "declaration name is blank".to_string(),
        });
    }
    if requires.iter().any(|req| req.trim().is_empty()) {
        return Err(Error::InvalidDefinition {
            name: name.to_string(),
            reason: "required input name is blank".to_string(),
        });
    }
    Ok(())
}
