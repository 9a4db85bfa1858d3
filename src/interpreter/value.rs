/// Represents the value bound to a variable.
///
/// A variable holds exactly one of an integer or a piece of text. Assigning
/// one kind replaces the other entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string, from a literal or a line of input.
    Text(String),
}

impl Value {
    /// Returns the value as it participates in arithmetic.
    ///
    /// Text has no numeric reading and counts as `0`.
    ///
    /// # Example
    /// ```
    /// use languageko::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(7).as_integer(), 7);
    /// assert_eq!(Value::Text("pito".into()).as_integer(), 0);
    /// ```
    #[must_use]
    pub const fn as_integer(&self) -> i64 {
        match self {
            Self::Integer(n) => *n,
            Self::Text(_) => 0,
        }
    }

    /// Returns the text if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::Text(s) => Some(s.as_str()),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
