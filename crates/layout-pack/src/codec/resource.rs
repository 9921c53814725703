//! Resource references: bare ints, and `{"a", "s"}` for style lookups.

use layout_json_stream::{TokenReader, TokenWriter};

use super::{next_int, required, write_int};
use crate::value::{AttributeResource, Resource, StyleResource};
use crate::PackError;

const KEY_ATTRIBUTE_ID: &str = "a";
const KEY_STYLE_ID: &str = "s";

pub(super) fn encode_attribute<W: TokenWriter>(
    out: &mut W,
    value: &AttributeResource,
) -> Result<(), PackError> {
    write_int(out, value.id)
}

pub(super) fn decode_attribute<R: TokenReader>(reader: &mut R) -> Result<AttributeResource, PackError> {
    Ok(AttributeResource::new(next_int(reader)?))
}

pub(super) fn encode<W: TokenWriter>(out: &mut W, value: &Resource) -> Result<(), PackError> {
    write_int(out, value.id)
}

pub(super) fn decode<R: TokenReader>(reader: &mut R) -> Result<Resource, PackError> {
    Ok(Resource::new(next_int(reader)?))
}

pub(super) fn encode_style<W: TokenWriter>(out: &mut W, value: &StyleResource) -> Result<(), PackError> {
    out.begin_object()?;
    out.name(KEY_ATTRIBUTE_ID)?;
    write_int(out, value.attribute_id)?;
    out.name(KEY_STYLE_ID)?;
    write_int(out, value.style_id)?;
    out.end_object()?;
    Ok(())
}

pub(super) fn decode_style<R: TokenReader>(reader: &mut R) -> Result<StyleResource, PackError> {
    let mut attribute_id = None;
    let mut style_id = None;
    reader.begin_object()?;
    while reader.has_next()? {
        let key = reader.next_name()?;
        match key.as_str() {
            KEY_ATTRIBUTE_ID => attribute_id = Some(next_int(reader)?),
            KEY_STYLE_ID => style_id = Some(next_int(reader)?),
            _ => return Err(PackError::UnknownAttributeKey(key)),
        }
    }
    reader.end_object()?;
    Ok(StyleResource::new(
        required(attribute_id, KEY_ATTRIBUTE_ID)?,
        required(style_id, KEY_STYLE_ID)?,
    ))
}
