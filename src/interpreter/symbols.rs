use indexmap::IndexMap;

use crate::interpreter::value::Value;

/// The single global frame of a program run.
///
/// Maps variable names to their current values, remembering the order in
/// which names were first seen. Variables come into existence the first time
/// they are mentioned, read or write, holding `0`.
///
/// # Example
/// ```
/// use languageko::interpreter::{symbols::SymbolTable, value::Value};
///
/// let mut symbols = SymbolTable::new();
/// assert_eq!(symbols.get_or_insert("x"), &Value::Integer(0));
///
/// symbols.assign("x", Value::Text("kumusta".into()));
/// symbols.assign("y", Value::Integer(3));
///
/// let names: Vec<&str> = symbols.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["x", "y"]);
/// assert_eq!(symbols.get("x"), Some(&Value::Text("kumusta".into())));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    variables: IndexMap<String, Value>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `name`, declaring it with `0` if it is unseen.
    pub fn get_or_insert(&mut self, name: &str) -> &Value {
        if !self.variables.contains_key(name) {
            self.variables.insert(name.to_string(), Value::default());
        }
        &self.variables[name]
    }

    /// Binds `name` to `value`, replacing whatever it held before.
    pub fn assign(&mut self, name: &str, value: Value) {
        match self.variables.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.variables.insert(name.to_string(), value);
            },
        }
    }

    /// Looks up `name` without declaring it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been declared yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}
