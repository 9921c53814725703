//! Layout payload: `{"t": type, "d"?: {..}, "a"?: [{"i": id, "v": value}..], "e"?: {..}}`.

use indexmap::IndexMap;
use layout_json_stream::{TokenKind, TokenReader, TokenWriter};

use super::{next_int, required, write_int};
use crate::compiled::CompiledWriter;
use crate::read::{read_plain_object, ValueReader};
use crate::value::{Attribute, Layout};
use crate::{PackError, Value};

const KEY_TYPE: &str = "t";
const KEY_DATA: &str = "d";
const KEY_ATTRIBUTES: &str = "a";
const KEY_EXTRAS: &str = "e";

const KEY_ATTRIBUTE_ID: &str = "i";
const KEY_ATTRIBUTE_VALUE: &str = "v";

pub(super) fn encode<W: TokenWriter>(
    writer: &CompiledWriter<'_>,
    out: &mut W,
    layout: &Layout,
) -> Result<(), PackError> {
    out.begin_object()?;
    out.name(KEY_TYPE)?;
    out.value_str(&layout.type_name)?;

    if let Some(data) = &layout.data {
        out.name(KEY_DATA)?;
        out.begin_object()?;
        for (key, value) in data {
            out.name(key)?;
            writer.write(out, value)?;
        }
        out.end_object()?;
    }

    if let Some(attributes) = &layout.attributes {
        out.name(KEY_ATTRIBUTES)?;
        out.begin_array()?;
        for attribute in attributes {
            out.begin_object()?;
            out.name(KEY_ATTRIBUTE_ID)?;
            write_int(out, attribute.id)?;
            out.name(KEY_ATTRIBUTE_VALUE)?;
            writer.write(out, &attribute.value)?;
            out.end_object()?;
        }
        out.end_array()?;
    }

    if let Some(extras) = &layout.extras {
        out.name(KEY_EXTRAS)?;
        writer.write_object(out, extras)?;
    }

    out.end_object()?;
    Ok(())
}

pub(super) fn decode<V, R>(form: &V, reader: &mut R) -> Result<Layout, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let mut type_name = None;
    let mut data = None;
    let mut attributes = None;
    let mut extras = None;

    reader.begin_object()?;
    while reader.has_next()? {
        let key = reader.next_name()?;
        match key.as_str() {
            KEY_TYPE => type_name = Some(next_type_name(reader)?),
            KEY_DATA => data = Some(decode_data(form, reader)?),
            KEY_ATTRIBUTES => attributes = Some(decode_attributes(form, reader)?),
            KEY_EXTRAS => extras = Some(read_plain_object(form, reader)?),
            _ => return Err(PackError::UnknownAttributeKey(key)),
        }
    }
    reader.end_object()?;

    Ok(Layout {
        type_name: type_name.ok_or(PackError::MissingType)?,
        data,
        attributes,
        extras,
    })
}

fn next_type_name<R: TokenReader>(reader: &mut R) -> Result<String, PackError> {
    match reader.peek()? {
        TokenKind::String => Ok(reader.next_string()?),
        found => Err(PackError::unexpected(TokenKind::String.as_str(), found.as_str())),
    }
}

fn decode_data<V, R>(form: &V, reader: &mut R) -> Result<IndexMap<String, Value>, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let mut data = IndexMap::new();
    reader.begin_object()?;
    while reader.has_next()? {
        let key = reader.next_name()?;
        if data.contains_key(&key) {
            return Err(PackError::DuplicateDataKey(key));
        }
        let value = form.read(reader)?;
        data.insert(key, value);
    }
    reader.end_object()?;
    Ok(data)
}

fn decode_attributes<V, R>(form: &V, reader: &mut R) -> Result<Vec<Attribute>, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let mut attributes = Vec::new();
    reader.begin_array()?;
    while reader.has_next()? {
        let mut id = None;
        let mut value = None;
        reader.begin_object()?;
        while reader.has_next()? {
            let key = reader.next_name()?;
            match key.as_str() {
                KEY_ATTRIBUTE_ID => id = Some(next_int(reader)?),
                KEY_ATTRIBUTE_VALUE => value = Some(form.read(reader)?),
                _ => return Err(PackError::UnknownAttributeKey(key)),
            }
        }
        reader.end_object()?;
        attributes.push(Attribute::new(
            required(id, KEY_ATTRIBUTE_ID)?,
            required(value, KEY_ATTRIBUTE_VALUE)?,
        ));
    }
    reader.end_array()?;
    Ok(attributes)
}
