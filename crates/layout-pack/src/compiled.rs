//! Compiled form: plain JSON in which every custom value is wrapped as
//! `{"$t": <type code>, "$v": <payload>}`.
//!
//! Type codes come from the [`TypeRegistry`]; a document can only be read
//! back by a registry that assigned the same codes.

use layout_json_stream::{TokenKind, TokenReader, TokenWriter};
use log::trace;

use crate::codec;
use crate::context::Context;
use crate::read::ValueReader;
use crate::registry::{TypeRegistry, VariantId};
use crate::value::{ObjectValue, Primitive};
use crate::{PackError, Value};

/// Envelope key holding the type code.
pub const TYPE_CODE_KEY: &str = "$t";
/// Envelope key holding the payload.
pub const PAYLOAD_KEY: &str = "$v";

/// Reads compiled documents.
///
/// Behaves like the source reader, bindings and layouts included, and in
/// addition decodes tagged custom values.
pub struct CompiledReader<'a> {
    context: Context<'a>,
}

impl<'a> CompiledReader<'a> {
    pub fn new(context: Context<'a>) -> Self {
        Self { context }
    }
}

impl ValueReader for CompiledReader<'_> {
    fn context(&self) -> Context<'_> {
        self.context
    }

    fn read_custom<R: TokenReader>(
        &self,
        reader: &mut R,
        first_key: &str,
    ) -> Result<Option<Value>, PackError> {
        if first_key != TYPE_CODE_KEY || reader.peek()? != TokenKind::Number {
            return Ok(None);
        }
        let code = parse_code(reader.next_number_text()?)?;
        let variant = self.context.registry.variant_of(code)?;

        let key = reader.next_name()?;
        if key != PAYLOAD_KEY {
            return Err(PackError::unexpected(PAYLOAD_KEY, key));
        }
        trace!("decoding {variant:?} (type code {code})");
        codec::decode(self, reader, variant).map(Some)
    }
}

/// Integral codes outside `i64` can never be assigned, so they are unknown
/// rather than malformed.
fn parse_code(text: String) -> Result<i64, PackError> {
    match text.parse() {
        Ok(code) => Ok(code),
        Err(_) if is_integral(&text) => Err(PackError::UnknownCode(text)),
        Err(_) => Err(PackError::MalformedInt(text)),
    }
}

fn is_integral(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Writes compiled documents.
#[derive(Debug, Clone, Copy)]
pub struct CompiledWriter<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> CompiledWriter<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn write<W: TokenWriter>(&self, out: &mut W, value: &Value) -> Result<(), PackError> {
        match value.variant_id() {
            Some(variant) => self.write_custom(out, variant, value),
            None => self.write_plain(out, value),
        }
    }

    pub(crate) fn write_object<W: TokenWriter>(
        &self,
        out: &mut W,
        object: &ObjectValue,
    ) -> Result<(), PackError> {
        out.begin_object()?;
        for (key, value) in object.iter() {
            out.name(key)?;
            self.write(out, value)?;
        }
        out.end_object()?;
        Ok(())
    }

    fn write_custom<W: TokenWriter>(
        &self,
        out: &mut W,
        variant: VariantId,
        value: &Value,
    ) -> Result<(), PackError> {
        let code = self.registry.code_of(variant)?;
        out.begin_object()?;
        out.name(TYPE_CODE_KEY)?;
        out.value_i64(i64::from(code))?;
        out.name(PAYLOAD_KEY)?;
        codec::encode(self, out, value)?;
        out.end_object()?;
        Ok(())
    }

    fn write_plain<W: TokenWriter>(&self, out: &mut W, value: &Value) -> Result<(), PackError> {
        match value {
            Value::Null => out.null_value()?,
            Value::Primitive(Primitive::Number(number)) => out.value_number(number.as_text())?,
            Value::Primitive(Primitive::Boolean(flag)) => out.value_bool(*flag)?,
            Value::Primitive(Primitive::String(text)) => out.value_str(text)?,
            Value::Array(items) => {
                out.begin_array()?;
                for item in items {
                    self.write(out, item)?;
                }
                out.end_array()?;
            }
            Value::Object(object) => self.write_object(out, object)?,
            _ => unreachable!("custom values carry a variant id"),
        }
        Ok(())
    }
}
