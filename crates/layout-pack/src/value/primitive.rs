//! Scalar values: numbers, booleans and strings.

use std::fmt;

use layout_json_stream::is_json_number;

use crate::PackError;

/// A JSON number kept in its original lexical form.
///
/// Nothing is converted at read time, so `1.000` stays `1.000` and integers
/// wider than 64 bits survive a read/write cycle untouched. Conversions
/// happen on request through the `as_*` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    text: String,
}

impl Number {
    /// Parses `text` as a JSON number.
    pub fn parse(text: &str) -> Result<Self, PackError> {
        if !is_json_number(text) {
            return Err(PackError::InvalidCoercion {
                expected: "number",
                found: "string",
            });
        }
        Ok(Self {
            text: text.to_owned(),
        })
    }

    /// Wraps text the tokenizer has already validated.
    pub(crate) fn from_lexical(text: String) -> Self {
        Self { text }
    }

    pub fn as_text(&self) -> &str {
        &self.text
    }

    pub fn as_i64(&self) -> Result<i64, PackError> {
        self.text.parse().map_err(|_| Self::coercion("i64"))
    }

    pub fn as_i32(&self) -> Result<i32, PackError> {
        self.text.parse().map_err(|_| Self::coercion("i32"))
    }

    pub fn as_u64(&self) -> Result<u64, PackError> {
        self.text.parse().map_err(|_| Self::coercion("u64"))
    }

    pub fn as_f64(&self) -> Result<f64, PackError> {
        self.text.parse().map_err(|_| Self::coercion("f64"))
    }

    fn coercion(expected: &'static str) -> PackError {
        PackError::InvalidCoercion {
            expected,
            found: "number",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::from_lexical(value.to_string())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::from_lexical(value.to_string())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::from_lexical(value.to_string())
    }
}

impl TryFrom<f64> for Number {
    type Error = PackError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(PackError::InvalidCoercion {
                expected: "finite number",
                found: "number",
            });
        }
        Ok(Self::from_lexical(value.to_string()))
    }
}

/// Scalar payload of [`Value::Primitive`](crate::Value::Primitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    Number(Number),
    Boolean(bool),
    String(String),
}

impl Primitive {
    pub fn is_number(&self) -> bool {
        matches!(self, Primitive::Number(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Primitive::Boolean(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Primitive::String(_))
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Primitive::Number(_) => "number",
            Primitive::Boolean(_) => "boolean",
            Primitive::String(_) => "string",
        }
    }

    pub fn as_number(&self) -> Result<&Number, PackError> {
        match self {
            Primitive::Number(n) => Ok(n),
            other => Err(PackError::InvalidCoercion {
                expected: "number",
                found: other.kind_name(),
            }),
        }
    }

    pub fn as_bool(&self) -> Result<bool, PackError> {
        match self {
            Primitive::Boolean(b) => Ok(*b),
            other => Err(PackError::InvalidCoercion {
                expected: "boolean",
                found: other.kind_name(),
            }),
        }
    }

    pub fn as_str(&self) -> Result<&str, PackError> {
        match self {
            Primitive::String(s) => Ok(s),
            other => Err(PackError::InvalidCoercion {
                expected: "string",
                found: other.kind_name(),
            }),
        }
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_owned())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Boolean(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Number(value.into())
    }
}

impl From<i64> for Primitive {
    fn from(value: i64) -> Self {
        Primitive::Number(value.into())
    }
}

impl From<Number> for Primitive {
    fn from(value: Number) -> Self {
        Primitive::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keeps_lexical_form() {
        let n = Number::parse("1.500").unwrap();
        assert_eq!(n.as_text(), "1.500");
        assert_eq!(n.as_f64().unwrap(), 1.5);
        assert!(n.as_i64().is_err());

        let big = Number::parse("123456789012345678901234567890").unwrap();
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        assert!(big.as_u64().is_err());
        assert!(big.as_f64().is_ok());
    }

    #[test]
    fn number_parse_rejects_non_numbers() {
        assert!(Number::parse("12px").is_err());
        assert!(Number::parse("").is_err());
        assert!(Number::try_from(f64::NAN).is_err());
        assert_eq!(Number::try_from(2.5).unwrap().as_text(), "2.5");
    }

    #[test]
    fn primitive_accessors_check_kind() {
        let p = Primitive::from("hi");
        assert!(p.is_string());
        assert_eq!(p.as_str().unwrap(), "hi");
        assert_eq!(
            p.as_bool(),
            Err(PackError::InvalidCoercion {
                expected: "boolean",
                found: "string",
            })
        );
        assert_eq!(Primitive::from(7).as_number().unwrap().as_i32().unwrap(), 7);
        assert!(Primitive::from(true).as_bool().unwrap());
    }
}
