//! Pull tokenizer over JSON text.

use crate::number::scan_number;
use crate::scope::Scope;
use crate::{StreamError, TokenKind, TokenReader};

/// A pull-style JSON reader over borrowed text.
///
/// The reader validates structure as it goes: separators, nesting and
/// literal spelling. Numbers are never converted; [`TokenReader::next_number_text`]
/// hands back the exact characters from the input.
///
/// # Example
///
/// ```
/// use layout_json_stream::{JsonReader, TokenKind, TokenReader};
///
/// let mut reader = JsonReader::new(r#"{"a": [1.50]}"#);
/// reader.begin_object().unwrap();
/// assert_eq!(reader.next_name().unwrap(), "a");
/// reader.begin_array().unwrap();
/// assert_eq!(reader.peek().unwrap(), TokenKind::Number);
/// assert_eq!(reader.next_number_text().unwrap(), "1.50");
/// ```
pub struct JsonReader<'a> {
    input: &'a str,
    pos: usize,
    stack: Vec<Scope>,
    peeked: Option<TokenKind>,
}

impl<'a> JsonReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            stack: vec![Scope::EmptyDocument],
            peeked: None,
        }
    }

    /// Current byte offset in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Fails unless the whole document has been consumed.
    pub fn finish(&mut self) -> Result<(), StreamError> {
        self.expect(TokenKind::EndDocument)
    }

    fn current(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn top(&self) -> Scope {
        self.stack.last().copied().unwrap_or(Scope::NonEmptyDocument)
    }

    fn set_top(&mut self, scope: Scope) {
        if let Some(top) = self.stack.last_mut() {
            *top = scope;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.current() {
            self.pos += 1;
        }
    }

    fn unexpected(&self) -> StreamError {
        match self.input[self.pos..].chars().next() {
            Some(ch) => StreamError::UnexpectedChar { ch, pos: self.pos },
            None => StreamError::UnexpectedEof,
        }
    }

    fn do_peek(&mut self) -> Result<TokenKind, StreamError> {
        let top = self.top();
        match top {
            Scope::EmptyArray => {
                self.set_top(Scope::NonEmptyArray);
                self.skip_whitespace();
                if self.current() == Some(b']') {
                    return Ok(TokenKind::EndArray);
                }
            }
            Scope::NonEmptyArray => {
                self.skip_whitespace();
                match self.current() {
                    Some(b']') => return Ok(TokenKind::EndArray),
                    Some(b',') => self.pos += 1,
                    _ => return Err(self.unexpected()),
                }
            }
            Scope::EmptyObject | Scope::NonEmptyObject => {
                self.skip_whitespace();
                match self.current() {
                    Some(b'}') => return Ok(TokenKind::EndObject),
                    Some(b',') if top == Scope::NonEmptyObject => {
                        self.pos += 1;
                        self.skip_whitespace();
                    }
                    Some(b'"') if top == Scope::EmptyObject => {}
                    _ => return Err(self.unexpected()),
                }
                if self.current() != Some(b'"') {
                    return Err(self.unexpected());
                }
                self.set_top(Scope::DanglingName);
                return Ok(TokenKind::Name);
            }
            Scope::DanglingName => {
                self.skip_whitespace();
                if self.current() != Some(b':') {
                    return Err(self.unexpected());
                }
                self.pos += 1;
                self.set_top(Scope::NonEmptyObject);
            }
            Scope::EmptyDocument => self.set_top(Scope::NonEmptyDocument),
            Scope::NonEmptyDocument => {
                self.skip_whitespace();
                return match self.current() {
                    None => Ok(TokenKind::EndDocument),
                    Some(_) => Err(self.unexpected()),
                };
            }
        }

        self.skip_whitespace();
        match self.current() {
            Some(b'{') => Ok(TokenKind::BeginObject),
            Some(b'[') => Ok(TokenKind::BeginArray),
            Some(b'"') => Ok(TokenKind::String),
            Some(b't' | b'f') => Ok(TokenKind::Boolean),
            Some(b'n') => Ok(TokenKind::Null),
            Some(b'-' | b'0'..=b'9') => Ok(TokenKind::Number),
            Some(b']') => Err(StreamError::ExpectedValue(TokenKind::EndArray)),
            Some(b'}') => Err(StreamError::ExpectedValue(TokenKind::EndObject)),
            None => Err(StreamError::ExpectedValue(TokenKind::EndDocument)),
            _ => Err(self.unexpected()),
        }
    }

    fn expect(&mut self, expected: TokenKind) -> Result<(), StreamError> {
        let found = self.peek()?;
        if found != expected {
            return Err(StreamError::UnexpectedToken { expected, found });
        }
        Ok(())
    }

    fn consume_literal(&mut self, literal: &str) -> Result<(), StreamError> {
        if !self.input[self.pos..].starts_with(literal) {
            return Err(self.unexpected());
        }
        self.pos += literal.len();
        self.peeked = None;
        Ok(())
    }

    fn read_number(&mut self) -> Result<String, StreamError> {
        let rest = &self.input[self.pos..];
        let len = match scan_number(rest.as_bytes()) {
            Some(len) => len,
            None => {
                let end = rest
                    .find(|c: char| matches!(c, ',' | ':' | ']' | '}') || c.is_whitespace())
                    .unwrap_or(rest.len());
                return Err(StreamError::InvalidNumber(rest[..end].to_owned()));
            }
        };
        let text = rest[..len].to_owned();
        self.pos += len;
        self.peeked = None;
        Ok(text)
    }

    /// Reads a quoted string starting at the opening `"`.
    fn read_quoted(&mut self) -> Result<String, StreamError> {
        self.pos += 1;
        let bytes = self.input.as_bytes();
        let mut out = String::new();
        let mut start = self.pos;
        loop {
            match bytes.get(self.pos) {
                None => return Err(StreamError::UnexpectedEof),
                Some(b'"') => {
                    out.push_str(&self.input[start..self.pos]);
                    self.pos += 1;
                    self.peeked = None;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[start..self.pos]);
                    self.pos += 1;
                    let ch = self.read_escape()?;
                    out.push(ch);
                    start = self.pos;
                }
                Some(&c) if c < 0x20 => return Err(self.unexpected()),
                Some(_) => self.pos += 1,
            }
        }
    }

    fn read_escape(&mut self) -> Result<char, StreamError> {
        let at = self.pos;
        let c = self.current().ok_or(StreamError::UnexpectedEof)?;
        self.pos += 1;
        let ch = match c {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{8}',
            b'f' => '\u{c}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                let high = self.read_hex4(at)?;
                if (0xD800..0xDC00).contains(&high) {
                    if !self.input[self.pos..].starts_with("\\u") {
                        return Err(StreamError::InvalidEscape(at));
                    }
                    self.pos += 2;
                    let low = self.read_hex4(at)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(StreamError::InvalidEscape(at));
                    }
                    let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                    char::from_u32(code).ok_or(StreamError::InvalidEscape(at))?
                } else {
                    char::from_u32(high).ok_or(StreamError::InvalidEscape(at))?
                }
            }
            _ => return Err(StreamError::InvalidEscape(at)),
        };
        Ok(ch)
    }

    fn read_hex4(&mut self, at: usize) -> Result<u32, StreamError> {
        let digits = self
            .input
            .get(self.pos..self.pos + 4)
            .ok_or(StreamError::UnexpectedEof)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StreamError::InvalidEscape(at));
        }
        self.pos += 4;
        u32::from_str_radix(digits, 16).map_err(|_| StreamError::InvalidEscape(at))
    }
}

impl TokenReader for JsonReader<'_> {
    fn peek(&mut self) -> Result<TokenKind, StreamError> {
        if let Some(kind) = self.peeked {
            return Ok(kind);
        }
        let kind = self.do_peek()?;
        self.peeked = Some(kind);
        Ok(kind)
    }

    fn next_string(&mut self) -> Result<String, StreamError> {
        match self.peek()? {
            TokenKind::String => self.read_quoted(),
            TokenKind::Number => self.read_number(),
            found => Err(StreamError::UnexpectedToken {
                expected: TokenKind::String,
                found,
            }),
        }
    }

    fn next_number_text(&mut self) -> Result<String, StreamError> {
        self.expect(TokenKind::Number)?;
        self.read_number()
    }

    fn next_boolean(&mut self) -> Result<bool, StreamError> {
        self.expect(TokenKind::Boolean)?;
        if self.current() == Some(b't') {
            self.consume_literal("true")?;
            Ok(true)
        } else {
            self.consume_literal("false")?;
            Ok(false)
        }
    }

    fn next_null(&mut self) -> Result<(), StreamError> {
        self.expect(TokenKind::Null)?;
        self.consume_literal("null")
    }

    fn next_name(&mut self) -> Result<String, StreamError> {
        self.expect(TokenKind::Name)?;
        self.read_quoted()
    }

    fn begin_object(&mut self) -> Result<(), StreamError> {
        self.expect(TokenKind::BeginObject)?;
        self.pos += 1;
        self.stack.push(Scope::EmptyObject);
        self.peeked = None;
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), StreamError> {
        self.expect(TokenKind::EndObject)?;
        self.pos += 1;
        self.stack.pop();
        self.peeked = None;
        Ok(())
    }

    fn begin_array(&mut self) -> Result<(), StreamError> {
        self.expect(TokenKind::BeginArray)?;
        self.pos += 1;
        self.stack.push(Scope::EmptyArray);
        self.peeked = None;
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), StreamError> {
        self.expect(TokenKind::EndArray)?;
        self.pos += 1;
        self.stack.pop();
        self.peeked = None;
        Ok(())
    }
}
