//! Recursive value reading shared by the source and compiled forms.
//!
//! Objects go through a small state machine. The first entry decides what the
//! object is:
//!
//! * no entries: an empty [`ObjectValue`];
//! * `"type"` naming a known layout: the rest is handed to the
//!   [`LayoutCompiler`];
//! * a form-specific tag (compiled `$t`): a custom variant;
//! * anything else: a generic object whose first member is already read.

use layout_json_stream::{TokenKind, TokenReader};

use crate::context::Context;
use crate::error::VALUE;
use crate::layout::LayoutCompiler;
use crate::value::{Binding, Number, ObjectValue, Primitive};
use crate::{PackError, Value};

/// Key whose string value marks an object as a layout.
pub(crate) const LAYOUT_TYPE_KEY: &str = "type";

/// A token-stream to [`Value`] reader for one wire form.
pub trait ValueReader: Sized {
    fn context(&self) -> Context<'_>;

    /// Reads one complete value.
    fn read<R: TokenReader>(&self, reader: &mut R) -> Result<Value, PackError> {
        read_value(self, reader)
    }

    /// Called after the first key of an object has been consumed. A form that
    /// recognises `first_key` as a custom tag reads the tagged payload and
    /// returns it; the closing brace is left to the caller.
    fn read_custom<R: TokenReader>(
        &self,
        _reader: &mut R,
        _first_key: &str,
    ) -> Result<Option<Value>, PackError> {
        Ok(None)
    }
}

enum ObjectKind {
    Empty,
    Generic(String, Value),
    Layout(String),
    Custom(Value),
}

pub(crate) fn read_value<V, R>(form: &V, reader: &mut R) -> Result<Value, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    match reader.peek()? {
        TokenKind::String => {
            let text = reader.next_string()?;
            compile_string(&form.context(), text)
        }
        TokenKind::Number => {
            let text = reader.next_number_text()?;
            Ok(Value::Primitive(Primitive::Number(Number::from_lexical(text))))
        }
        TokenKind::Boolean => Ok(reader.next_boolean()?.into()),
        TokenKind::Null => {
            reader.next_null()?;
            Ok(Value::Null)
        }
        TokenKind::BeginArray => {
            reader.begin_array()?;
            let mut items = Vec::new();
            while reader.has_next()? {
                items.push(form.read(reader)?);
            }
            reader.end_array()?;
            Ok(Value::Array(items))
        }
        TokenKind::BeginObject => read_object(form, reader),
        other => Err(PackError::unexpected(VALUE, other.as_str())),
    }
}

/// Strings carrying the binding prefix become [`Binding`]s.
pub(crate) fn compile_string(context: &Context<'_>, text: String) -> Result<Value, PackError> {
    if Binding::is_binding_value(&text) {
        return Ok(Binding::from_source(&text, context.formatters)?.into());
    }
    Ok(text.into())
}

fn read_object<V, R>(form: &V, reader: &mut R) -> Result<Value, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    reader.begin_object()?;
    let value = match detect_kind(form, reader)? {
        ObjectKind::Empty => Value::Object(ObjectValue::new()),
        ObjectKind::Generic(first_key, first_value) => {
            let mut object = ObjectValue::new();
            object.insert(first_key, first_value);
            read_members(form, reader, &mut object)?;
            Value::Object(object)
        }
        ObjectKind::Layout(type_name) => LayoutCompiler::new(form).compile(reader, type_name)?.into(),
        ObjectKind::Custom(value) => value,
    };
    reader.end_object()?;
    Ok(value)
}

/// Reads an object without looking at its first key, so a leading `"type"`
/// or `"$t"` stays an ordinary member. Member values are read normally.
pub(crate) fn read_plain_object<V, R>(form: &V, reader: &mut R) -> Result<ObjectValue, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let mut object = ObjectValue::new();
    reader.begin_object()?;
    read_members(form, reader, &mut object)?;
    reader.end_object()?;
    Ok(object)
}

fn read_members<V, R>(form: &V, reader: &mut R, object: &mut ObjectValue) -> Result<(), PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    while reader.has_next()? {
        let key = reader.next_name()?;
        let value = form.read(reader)?;
        object.insert(key, value);
    }
    Ok(())
}

fn detect_kind<V, R>(form: &V, reader: &mut R) -> Result<ObjectKind, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    if !reader.has_next()? {
        return Ok(ObjectKind::Empty);
    }
    let key = reader.next_name()?;
    if let Some(value) = form.read_custom(reader, &key)? {
        return Ok(ObjectKind::Custom(value));
    }
    if key == LAYOUT_TYPE_KEY && reader.peek()? == TokenKind::String {
        let type_name = reader.next_string()?;
        let context = form.context();
        if context.layouts.is_known_layout_type(&type_name) {
            return Ok(ObjectKind::Layout(type_name));
        }
        let value = compile_string(&context, type_name)?;
        return Ok(ObjectKind::Generic(key, value));
    }
    let value = form.read(reader)?;
    Ok(ObjectKind::Generic(key, value))
}

#[cfg(test)]
mod tests {
    use layout_json_stream::StreamError;

    use super::*;
    use crate::context::FormatterSet;
    use crate::registry::TypeRegistry;
    use crate::schema::StaticSchema;
    use crate::source::SourceReader;

    /// Always reports the same token and refuses to consume anything.
    struct Stuck(TokenKind);

    impl Stuck {
        fn refuse<T>(&self, expected: TokenKind) -> Result<T, StreamError> {
            Err(StreamError::UnexpectedToken {
                expected,
                found: self.0,
            })
        }
    }

    impl TokenReader for Stuck {
        fn peek(&mut self) -> Result<TokenKind, StreamError> {
            Ok(self.0)
        }

        fn next_string(&mut self) -> Result<String, StreamError> {
            self.refuse(TokenKind::String)
        }

        fn next_number_text(&mut self) -> Result<String, StreamError> {
            self.refuse(TokenKind::Number)
        }

        fn next_boolean(&mut self) -> Result<bool, StreamError> {
            self.refuse(TokenKind::Boolean)
        }

        fn next_null(&mut self) -> Result<(), StreamError> {
            self.refuse(TokenKind::Null)
        }

        fn next_name(&mut self) -> Result<String, StreamError> {
            self.refuse(TokenKind::Name)
        }

        fn begin_object(&mut self) -> Result<(), StreamError> {
            self.refuse(TokenKind::BeginObject)
        }

        fn end_object(&mut self) -> Result<(), StreamError> {
            self.refuse(TokenKind::EndObject)
        }

        fn begin_array(&mut self) -> Result<(), StreamError> {
            self.refuse(TokenKind::BeginArray)
        }

        fn end_array(&mut self) -> Result<(), StreamError> {
            self.refuse(TokenKind::EndArray)
        }
    }

    #[test]
    fn non_value_tokens_are_rejected() {
        let registry = TypeRegistry::standard();
        let schema = StaticSchema::new();
        let formatters = FormatterSet::new();
        let form = SourceReader::new(Context::new(&registry, &schema, &schema, &formatters));

        for kind in [
            TokenKind::Name,
            TokenKind::EndArray,
            TokenKind::EndObject,
            TokenKind::EndDocument,
        ] {
            assert_eq!(
                form.read(&mut Stuck(kind)),
                Err(PackError::unexpected("a value", kind.as_str())),
                "{kind}"
            );
        }
    }
}
