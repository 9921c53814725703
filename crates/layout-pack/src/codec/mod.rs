//! Compact payload codecs for the custom value variants.
//!
//! A codec only produces and consumes the `$v` payload; the `{"$t", "$v"}`
//! envelope belongs to the compiled writer and reader. Object payloads use a
//! short private key alphabet, accept keys in any order, and reject keys they
//! do not know.

mod binding;
mod color;
mod dimension;
mod drawable;
mod layout;
mod resource;

use layout_json_stream::{TokenReader, TokenWriter};

use crate::compiled::CompiledWriter;
use crate::read::ValueReader;
use crate::registry::VariantId;
use crate::value::Color;
use crate::{PackError, Value};

/// Writes the payload of a custom value.
pub(crate) fn encode<W: TokenWriter>(
    writer: &CompiledWriter<'_>,
    out: &mut W,
    value: &Value,
) -> Result<(), PackError> {
    match value {
        Value::Layout(layout) => layout::encode(writer, out, layout),
        Value::AttributeResource(resource) => resource::encode_attribute(out, resource),
        Value::Binding(binding) => binding::encode(out, binding),
        Value::Color(Color::Int(color)) => color::encode_int(out, color),
        Value::Color(Color::StateList(list)) => color::encode_state_list(out, list),
        Value::Dimension(dimension) => dimension::encode(out, dimension),
        Value::Drawable(drawable) => drawable::encode(writer, out, drawable),
        Value::NestedBinding(nested) => binding::encode_nested(writer, out, nested),
        Value::Resource(resource) => resource::encode(out, resource),
        Value::StyleResource(style) => resource::encode_style(out, style),
        Value::Null | Value::Primitive(_) | Value::Array(_) | Value::Object(_) => {
            unreachable!("plain values are written without a codec")
        }
    }
}

/// Reads the payload of a custom value of the given variant.
pub(crate) fn decode<V, R>(form: &V, reader: &mut R, variant: VariantId) -> Result<Value, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let value = match variant {
        VariantId::AttributeResource => resource::decode_attribute(reader)?.into(),
        VariantId::Binding => binding::decode(form, reader)?.into(),
        VariantId::ColorInt => color::decode_int(reader)?.into(),
        VariantId::ColorStateList => color::decode_state_list(reader)?.into(),
        VariantId::Dimension => dimension::decode(reader)?.into(),
        VariantId::DrawableColor
        | VariantId::DrawableLayerList
        | VariantId::DrawableLevelList
        | VariantId::DrawableRipple
        | VariantId::DrawableShape
        | VariantId::DrawableStateList
        | VariantId::DrawableUrl => drawable::decode(form, reader, variant)?.into(),
        VariantId::Layout => layout::decode(form, reader)?.into(),
        VariantId::NestedBinding => binding::decode_nested(form, reader)?.into(),
        VariantId::Resource => resource::decode(reader)?.into(),
        VariantId::StyleResource => resource::decode_style(reader)?.into(),
    };
    Ok(value)
}

/// Reads an integer written either as a JSON number or as a numeric string.
fn next_int<R: TokenReader>(reader: &mut R) -> Result<i32, PackError> {
    let text = reader.next_string()?;
    text.parse().map_err(|_| PackError::MalformedInt(text))
}

fn write_int<W: TokenWriter>(out: &mut W, value: i32) -> Result<(), PackError> {
    out.value_i64(i64::from(value))?;
    Ok(())
}

fn required<T>(field: Option<T>, key: &'static str) -> Result<T, PackError> {
    field.ok_or(PackError::MissingRequiredField(key))
}
