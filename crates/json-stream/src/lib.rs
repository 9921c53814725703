//! Streaming JSON tokenizer and emitter for layout documents.
//!
//! [`JsonReader`] is a pull cursor with one token of lookahead; [`JsonWriter`]
//! is the matching push emitter. Both are reached through the
//! [`TokenReader`] / [`TokenWriter`] traits so value codecs stay independent
//! of the concrete text backend.

mod error;
mod number;
mod reader;
mod scope;
mod token;
mod writer;

pub use error::StreamError;
pub use number::is_json_number;
pub use reader::JsonReader;
pub use token::{TokenKind, TokenReader, TokenWriter};
pub use writer::JsonWriter;
