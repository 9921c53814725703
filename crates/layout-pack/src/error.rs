//! Error type shared by readers, writers and codecs.

use layout_json_stream::StreamError;
use thiserror::Error;

use crate::registry::VariantId;
use crate::value::ValueKind;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PackError {
    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error(transparent)]
    Stream(StreamError),
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("invalid coercion: primitive is a {found}, not a {expected}")]
    InvalidCoercion {
        expected: &'static str,
        found: &'static str,
    },
    #[error("{0:?} is not registered")]
    UnknownVariant(VariantId),
    #[error("{0} is not a known value type code")]
    UnknownCode(String),
    #[error("layout must have a type")]
    MissingType,
    #[error("missing required field `{0}`")]
    MissingRequiredField(&'static str),
    #[error("duplicate key `{0}` in layout data")]
    DuplicateDataKey(String),
    #[error("malformed integer `{0}`")]
    MalformedInt(String),
    #[error("unknown attribute key `{0}`")]
    UnknownAttributeKey(String),
    #[error("unknown formatter `{0}`")]
    UnknownFormatter(String),
    #[error("invalid dimension `{0}`")]
    InvalidDimension(String),
    #[error("invalid color `{0}`")]
    InvalidColor(String),
    #[error("{what}: {left} entries vs {right} entries")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },
    #[error("writing the {0} form is not supported")]
    WriteUnsupported(&'static str),
}

/// Placeholder used as `expected` when any value token would do.
pub(crate) const VALUE: &str = "a value";

impl PackError {
    pub(crate) fn unexpected(expected: impl Into<String>, found: impl Into<String>) -> Self {
        PackError::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl From<StreamError> for PackError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::UnexpectedToken { expected, found } => {
                PackError::unexpected(expected.as_str(), found.as_str())
            }
            StreamError::ExpectedValue(found) => PackError::unexpected(VALUE, found.as_str()),
            other => PackError::Stream(other),
        }
    }
}
