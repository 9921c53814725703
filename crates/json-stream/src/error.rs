//! JSON stream error type.

use thiserror::Error;

use crate::TokenKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("unexpected character {ch:?} at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("expected {expected} but found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("expected a value but found {0}")]
    ExpectedValue(TokenKind),
    #[error("invalid escape sequence at byte {0}")]
    InvalidEscape(usize),
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("name written outside of an object")]
    NameOutsideObject,
    #[error("object value written without a name")]
    ValueWithoutName,
    #[error("document already has a top-level value")]
    MultipleTopLevelValues,
    #[error("document is incomplete")]
    IncompleteDocument,
    #[error("close does not match the open container")]
    MismatchedClose,
}
