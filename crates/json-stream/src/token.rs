//! Token kinds and the cursor traits shared by readers and writers.

use std::fmt;

use crate::StreamError;

/// Kind of the next token in a JSON stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    String,
    Number,
    Boolean,
    Null,
    BeginArray,
    EndArray,
    BeginObject,
    EndObject,
    Name,
    EndDocument,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Null => "NULL",
            TokenKind::BeginArray => "BEGIN_ARRAY",
            TokenKind::EndArray => "END_ARRAY",
            TokenKind::BeginObject => "BEGIN_OBJECT",
            TokenKind::EndObject => "END_OBJECT",
            TokenKind::Name => "NAME",
            TokenKind::EndDocument => "END_DOCUMENT",
        }
    }

    /// Returns `true` for tokens that start a value.
    pub fn is_value(self) -> bool {
        matches!(
            self,
            TokenKind::String
                | TokenKind::Number
                | TokenKind::Boolean
                | TokenKind::Null
                | TokenKind::BeginArray
                | TokenKind::BeginObject
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pull cursor over a JSON token stream.
///
/// `peek` never consumes. Every other method consumes exactly one token and
/// fails with [`StreamError::UnexpectedToken`] when the next token is of a
/// different kind.
pub trait TokenReader {
    fn peek(&mut self) -> Result<TokenKind, StreamError>;

    /// Returns `true` while the current array or object has more elements.
    fn has_next(&mut self) -> Result<bool, StreamError> {
        Ok(!matches!(
            self.peek()?,
            TokenKind::EndArray | TokenKind::EndObject | TokenKind::EndDocument
        ))
    }

    /// Reads a STRING token. NUMBER tokens are accepted too and returned in
    /// their lexical form.
    fn next_string(&mut self) -> Result<String, StreamError>;

    /// Reads a NUMBER token, returning its exact lexical text.
    fn next_number_text(&mut self) -> Result<String, StreamError>;

    fn next_boolean(&mut self) -> Result<bool, StreamError>;

    fn next_null(&mut self) -> Result<(), StreamError>;

    fn next_name(&mut self) -> Result<String, StreamError>;

    fn begin_object(&mut self) -> Result<(), StreamError>;

    fn end_object(&mut self) -> Result<(), StreamError>;

    fn begin_array(&mut self) -> Result<(), StreamError>;

    fn end_array(&mut self) -> Result<(), StreamError>;
}

/// Push emitter mirroring [`TokenReader`].
pub trait TokenWriter {
    fn name(&mut self, name: &str) -> Result<(), StreamError>;

    fn value_str(&mut self, value: &str) -> Result<(), StreamError>;

    /// Writes a number from its lexical form. The text must be a valid JSON
    /// number.
    fn value_number(&mut self, text: &str) -> Result<(), StreamError>;

    fn value_i64(&mut self, value: i64) -> Result<(), StreamError> {
        self.value_number(&value.to_string())
    }

    fn value_bool(&mut self, value: bool) -> Result<(), StreamError>;

    fn null_value(&mut self) -> Result<(), StreamError>;

    fn begin_object(&mut self) -> Result<(), StreamError>;

    fn end_object(&mut self) -> Result<(), StreamError>;

    fn begin_array(&mut self) -> Result<(), StreamError>;

    fn end_array(&mut self) -> Result<(), StreamError>;
}
