use std::fmt;

use super::Value;
use crate::context::FormatterManager;
use crate::PackError;

/// Leading character that marks a source string as a binding.
pub const BINDING_PREFIX: char = '~';

const FUNCTION_PREFIX: &str = "fn:";

/// A data-binding expression, e.g. `user.name` or `fn:date(user.dob)`.
///
/// Function bindings name a formatter; construction checks it against the
/// [`FormatterManager`] so an unknown formatter fails at load time rather than
/// at bind time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    expression: String,
}

impl Binding {
    /// Returns `true` when a source string should be read as a binding.
    pub fn is_binding_value(value: &str) -> bool {
        value.len() > 1 && value.starts_with(BINDING_PREFIX)
    }

    /// Builds a binding from its canonical expression (no prefix).
    pub fn value_of(
        expression: impl Into<String>,
        formatters: &dyn FormatterManager,
    ) -> Result<Self, PackError> {
        let expression = expression.into();
        if let Some(name) = function_name(&expression) {
            if !formatters.has_formatter(name) {
                return Err(PackError::UnknownFormatter(name.to_owned()));
            }
        }
        Ok(Self { expression })
    }

    /// Builds a binding from a prefixed source string such as `~user.name`.
    pub fn from_source(value: &str, formatters: &dyn FormatterManager) -> Result<Self, PackError> {
        let expression = value.strip_prefix(BINDING_PREFIX).unwrap_or(value);
        Self::value_of(expression, formatters)
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Formatter named by a function binding, if any.
    pub fn formatter(&self) -> Option<&str> {
        function_name(&self.expression)
    }
}

fn function_name(expression: &str) -> Option<&str> {
    let rest = expression.strip_prefix(FUNCTION_PREFIX)?;
    let name = match rest.find('(') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(name.trim())
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

/// A value whose leaves contain bindings, resolved as a whole at bind time.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedBinding {
    pub inner: Box<Value>,
}

impl NestedBinding {
    pub fn new(inner: impl Into<Value>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FormatterSet;

    #[test]
    fn binding_prefix_detection() {
        assert!(Binding::is_binding_value("~user.name"));
        assert!(!Binding::is_binding_value("~"));
        assert!(!Binding::is_binding_value("user.name"));
        assert!(!Binding::is_binding_value(""));
    }

    #[test]
    fn from_source_strips_prefix() {
        let formatters = FormatterSet::new();
        let binding = Binding::from_source("~user.name", &formatters).unwrap();
        assert_eq!(binding.expression(), "user.name");
        assert_eq!(binding.to_string(), "user.name");
        assert_eq!(binding.formatter(), None);
    }

    #[test]
    fn function_bindings_need_a_known_formatter() {
        let formatters = FormatterSet::new().with("date");
        let binding = Binding::value_of("fn:date(user.dob)", &formatters).unwrap();
        assert_eq!(binding.formatter(), Some("date"));
        assert_eq!(
            Binding::value_of("fn:upper(user.name)", &formatters),
            Err(PackError::UnknownFormatter("upper".into()))
        );
    }
}
