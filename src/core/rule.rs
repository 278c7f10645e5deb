//! Rule declarations — named predicates with explicit requirements.

use super::error::{Error, Result};
use super::recipe::{validate_declaration, CookFn};
use super::types::{Ingredients, Value};
use std::fmt;

/// A callable that computes the value of a logic statement.
///
/// Shares the declaration shape of a recipe, but its verdict must be
/// strictly boolean: a truthy number or string is rejected with
/// [`Error::InvalidResult`] at invocation time.
pub struct Rule {
    name: String,
    requires: Vec<String>,
    check: CookFn,
}

impl Rule {
    /// Declare a rule from a name, its required inputs, and a predicate.
    ///
    /// Fails with [`Error::InvalidDefinition`] when the name or any required
    /// input name is blank.
    pub fn new<N, R, S, F>(name: N, requires: R, check: F) -> Result<Self>
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
            check: Box::new(check),
        })
    }

    /// Name of the rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inputs required by the rule, in declaration order.
    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    /// Perform the check, forwarding the given ingredients to the predicate.
    pub fn check(&self, served: &Ingredients) -> Result<bool> {
        match (self.check)(served) {
            Value::Bool(verdict) => Ok(verdict),
            other => Err(Error::InvalidResult {
                rule: self.name.clone(),
                got: other.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("requires", &self.requires)
            .finish_non_exhaustive()
    }
}
