use std::collections::HashMap;

use crate::error::ParseError;

/// The variables of a session.
///
/// Maps names to the values they were declared with. A name is bound at most
/// once: any later declaration of the same name is rejected and the original
/// value is kept.
///
/// The lexer and parser borrow the same environment for every line of a
/// session; neither owns it.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`.
    ///
    /// # Errors
    /// Returns [`ParseError::VariableRedeclaration`] if `name` is already
    /// bound. The environment is left unchanged in that case.
    ///
    /// # Example
    /// ```
    /// use lineval::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.declare("x", 5.0).unwrap();
    ///
    /// assert!(env.declare("x", 1.0).is_err());
    /// assert_eq!(env.get("x"), Some(5.0));
    /// ```
    pub fn declare(&mut self, name: &str, value: f64) -> Result<(), ParseError> {
        if self.variables.contains_key(name) {
            return Err(ParseError::VariableRedeclaration { name: name.to_string() });
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bindings, sorted by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, f64)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), *value))
                                       .collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}
