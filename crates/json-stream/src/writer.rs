//! Push emitter producing compact JSON text.

use crate::number::scan_number;
use crate::scope::Scope;
use crate::{StreamError, TokenWriter};

/// Writes compact JSON (no insignificant whitespace) into a `String`.
///
/// Structural misuse, such as a value inside an object without a preceding
/// name, is reported as an error instead of producing broken output.
pub struct JsonWriter {
    out: String,
    stack: Vec<Scope>,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            stack: vec![Scope::EmptyDocument],
        }
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Returns the finished document. Fails if a container is still open or
    /// nothing was written.
    pub fn into_string(self) -> Result<String, StreamError> {
        if self.stack.as_slice() != [Scope::NonEmptyDocument] {
            return Err(StreamError::IncompleteDocument);
        }
        Ok(self.out)
    }

    fn top(&self) -> Scope {
        self.stack.last().copied().unwrap_or(Scope::NonEmptyDocument)
    }

    fn set_top(&mut self, scope: Scope) {
        if let Some(top) = self.stack.last_mut() {
            *top = scope;
        }
    }

    fn before_value(&mut self) -> Result<(), StreamError> {
        match self.top() {
            Scope::EmptyDocument => self.set_top(Scope::NonEmptyDocument),
            Scope::NonEmptyDocument => return Err(StreamError::MultipleTopLevelValues),
            Scope::EmptyArray => self.set_top(Scope::NonEmptyArray),
            Scope::NonEmptyArray => self.out.push(','),
            Scope::DanglingName => {
                self.out.push(':');
                self.set_top(Scope::NonEmptyObject);
            }
            Scope::EmptyObject | Scope::NonEmptyObject => {
                return Err(StreamError::ValueWithoutName)
            }
        }
        Ok(())
    }

    fn close(&mut self, empty: Scope, non_empty: Scope, ch: char) -> Result<(), StreamError> {
        let top = self.top();
        if top != empty && top != non_empty {
            return Err(StreamError::MismatchedClose);
        }
        self.stack.pop();
        self.out.push(ch);
        Ok(())
    }

    fn write_quoted(&mut self, value: &str) {
        self.out.reserve(value.len() + 2);
        self.out.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{8}' => self.out.push_str("\\b"),
                '\u{c}' => self.out.push_str("\\f"),
                '\u{2028}' => self.out.push_str("\\u2028"),
                '\u{2029}' => self.out.push_str("\\u2029"),
                c if (c as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }
}

impl TokenWriter for JsonWriter {
    fn name(&mut self, name: &str) -> Result<(), StreamError> {
        match self.top() {
            Scope::EmptyObject => {}
            Scope::NonEmptyObject => self.out.push(','),
            _ => return Err(StreamError::NameOutsideObject),
        }
        self.write_quoted(name);
        self.set_top(Scope::DanglingName);
        Ok(())
    }

    fn value_str(&mut self, value: &str) -> Result<(), StreamError> {
        self.before_value()?;
        self.write_quoted(value);
        Ok(())
    }

    fn value_number(&mut self, text: &str) -> Result<(), StreamError> {
        if scan_number(text.as_bytes()) != Some(text.len()) {
            return Err(StreamError::InvalidNumber(text.to_owned()));
        }
        self.before_value()?;
        self.out.push_str(text);
        Ok(())
    }

    fn value_bool(&mut self, value: bool) -> Result<(), StreamError> {
        self.before_value()?;
        self.out.push_str(if value { "true" } else { "false" });
        Ok(())
    }

    fn null_value(&mut self) -> Result<(), StreamError> {
        self.before_value()?;
        self.out.push_str("null");
        Ok(())
    }

    fn begin_object(&mut self) -> Result<(), StreamError> {
        self.before_value()?;
        self.out.push('{');
        self.stack.push(Scope::EmptyObject);
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), StreamError> {
        self.close(Scope::EmptyObject, Scope::NonEmptyObject, '}')
    }

    fn begin_array(&mut self) -> Result<(), StreamError> {
        self.before_value()?;
        self.out.push('[');
        self.stack.push(Scope::EmptyArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), StreamError> {
        self.close(Scope::EmptyArray, Scope::NonEmptyArray, ']')
    }
}
