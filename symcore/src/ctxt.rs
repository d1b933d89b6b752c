use crate::{error::MissingVariable, Result, Variable};
use levenshtein::levenshtein;
use std::collections::HashMap;
use symcore_error::Error;

/// A context used when evaluating expressions: the values assigned to each variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Ctxt<T> {
    /// The variables in the context.
    vars: HashMap<Variable, T>,
}

impl<T> Default for Ctxt<T> {
    fn default() -> Self {
        Self { vars: HashMap::new() }
    }
}

impl<T> Ctxt<T> {
    /// Creates a new context with no assigned variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a value to a variable, replacing any previous value.
    pub fn add_var(&mut self, var: Variable, value: T) {
        self.vars.insert(var, value);
    }

    /// Returns the value assigned to the variable, if any.
    pub fn get_var(&self, var: &Variable) -> Option<&T> {
        self.vars.get(var)
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<Variable, T> {
        &self.vars
    }

    /// Returns all assigned variables with a name similar to the given name, sorted by name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|v| levenshtein(v.name(), name) < 2)
            .map(Variable::name)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }

    /// Returns the value assigned to the variable, or a [`MissingVariable`] error whose source is
    /// the rendering of `expr`.
    pub(crate) fn require(&self, var: &Variable, expr: &impl std::fmt::Display) -> Result<&T> {
        self.vars.get(var).ok_or_else(|| {
            Error::new(expr.to_string(), MissingVariable {
                name: var.name().to_string(),
                suggestions: self.get_similar_vars(var.name())
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
        })
    }
}

impl<T> From<HashMap<Variable, T>> for Ctxt<T> {
    fn from(vars: HashMap<Variable, T>) -> Self {
        Self { vars }
    }
}

impl<T> FromIterator<(Variable, T)> for Ctxt<T> {
    fn from_iter<I: IntoIterator<Item = (Variable, T)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().collect() }
    }
}
