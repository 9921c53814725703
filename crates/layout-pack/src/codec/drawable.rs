//! Drawable payloads.
//!
//! | variant    | payload                                      |
//! |------------|----------------------------------------------|
//! | color      | nested value                                 |
//! | layer list | `{"i": [id...], "l": [value...]}`            |
//! | level list | `[{"i": min, "a": max, "d": value}...]`      |
//! | ripple     | `{"c": color, "m"?: .., "t"?: .., "d"?: ..}` |
//! | shape      | raw string; written as a transparent color   |
//! | state list | raw string; written as a transparent color   |
//! | url        | url string                                   |

use layout_json_stream::{TokenReader, TokenWriter};

use super::{next_int, required, write_int};
use crate::compiled::CompiledWriter;
use crate::read::ValueReader;
use crate::registry::VariantId;
use crate::value::{Drawable, LayerList, Level, Ripple};
use crate::{PackError, Value};

const KEY_IDS: &str = "i";
const KEY_LAYERS: &str = "l";

const KEY_MIN_LEVEL: &str = "i";
const KEY_MAX_LEVEL: &str = "a";
const KEY_DRAWABLE: &str = "d";

const KEY_COLOR: &str = "c";
const KEY_MASK: &str = "m";
const KEY_CONTENT: &str = "t";
const KEY_DEFAULT_BACKGROUND: &str = "d";

/// Shapes and state lists are not carried through compilation; they degrade
/// to a fully transparent color.
const TRANSPARENT_PLACEHOLDER: &str = "#00000000";

pub(super) fn encode<W: TokenWriter>(
    writer: &CompiledWriter<'_>,
    out: &mut W,
    drawable: &Drawable,
) -> Result<(), PackError> {
    match drawable {
        Drawable::Color(color) => writer.write(out, color),
        Drawable::LayerList(list) => encode_layer_list(writer, out, list),
        Drawable::LevelList(levels) => encode_level_list(writer, out, levels),
        Drawable::Ripple(ripple) => encode_ripple(writer, out, ripple),
        Drawable::Shape(_) | Drawable::StateList(_) => {
            out.value_str(TRANSPARENT_PLACEHOLDER)?;
            Ok(())
        }
        Drawable::Url(url) => {
            out.value_str(url)?;
            Ok(())
        }
    }
}

pub(super) fn decode<V, R>(form: &V, reader: &mut R, variant: VariantId) -> Result<Drawable, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let drawable = match variant {
        VariantId::DrawableColor => Drawable::Color(Box::new(form.read(reader)?)),
        VariantId::DrawableLayerList => Drawable::LayerList(decode_layer_list(form, reader)?),
        VariantId::DrawableLevelList => Drawable::LevelList(decode_level_list(form, reader)?),
        VariantId::DrawableRipple => Drawable::Ripple(decode_ripple(form, reader)?),
        VariantId::DrawableShape => Drawable::Shape(reader.next_string()?),
        VariantId::DrawableStateList => Drawable::StateList(reader.next_string()?),
        VariantId::DrawableUrl => Drawable::Url(reader.next_string()?),
        other => return Err(PackError::UnknownVariant(other)),
    };
    Ok(drawable)
}

fn encode_layer_list<W: TokenWriter>(
    writer: &CompiledWriter<'_>,
    out: &mut W,
    list: &LayerList,
) -> Result<(), PackError> {
    out.begin_object()?;
    out.name(KEY_IDS)?;
    out.begin_array()?;
    for id in list.ids() {
        write_int(out, *id)?;
    }
    out.end_array()?;
    out.name(KEY_LAYERS)?;
    out.begin_array()?;
    for layer in list.layers() {
        writer.write(out, layer)?;
    }
    out.end_array()?;
    out.end_object()?;
    Ok(())
}

fn decode_layer_list<V, R>(form: &V, reader: &mut R) -> Result<LayerList, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let mut ids = None;
    let mut layers = None;
    reader.begin_object()?;
    while reader.has_next()? {
        let key = reader.next_name()?;
        match key.as_str() {
            KEY_IDS => {
                let mut values = Vec::new();
                reader.begin_array()?;
                while reader.has_next()? {
                    values.push(next_int(reader)?);
                }
                reader.end_array()?;
                ids = Some(values);
            }
            KEY_LAYERS => {
                let mut values = Vec::new();
                reader.begin_array()?;
                while reader.has_next()? {
                    values.push(form.read(reader)?);
                }
                reader.end_array()?;
                layers = Some(values);
            }
            _ => return Err(PackError::UnknownAttributeKey(key)),
        }
    }
    reader.end_object()?;
    LayerList::new(required(ids, KEY_IDS)?, required(layers, KEY_LAYERS)?)
}

fn encode_level_list<W: TokenWriter>(
    writer: &CompiledWriter<'_>,
    out: &mut W,
    levels: &[Level],
) -> Result<(), PackError> {
    out.begin_array()?;
    for level in levels {
        out.begin_object()?;
        out.name(KEY_MIN_LEVEL)?;
        write_int(out, level.min)?;
        out.name(KEY_MAX_LEVEL)?;
        write_int(out, level.max)?;
        out.name(KEY_DRAWABLE)?;
        writer.write(out, &level.drawable)?;
        out.end_object()?;
    }
    out.end_array()?;
    Ok(())
}

fn decode_level_list<V, R>(form: &V, reader: &mut R) -> Result<Vec<Level>, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let mut levels = Vec::new();
    reader.begin_array()?;
    while reader.has_next()? {
        let mut min = None;
        let mut max = None;
        let mut drawable = None;
        reader.begin_object()?;
        while reader.has_next()? {
            let key = reader.next_name()?;
            match key.as_str() {
                KEY_MIN_LEVEL => min = Some(next_int(reader)?),
                KEY_MAX_LEVEL => max = Some(next_int(reader)?),
                KEY_DRAWABLE => drawable = Some(form.read(reader)?),
                _ => return Err(PackError::UnknownAttributeKey(key)),
            }
        }
        reader.end_object()?;
        levels.push(Level::new(
            required(min, KEY_MIN_LEVEL)?,
            required(max, KEY_MAX_LEVEL)?,
            required(drawable, KEY_DRAWABLE)?,
        ));
    }
    reader.end_array()?;
    Ok(levels)
}

fn encode_ripple<W: TokenWriter>(
    writer: &CompiledWriter<'_>,
    out: &mut W,
    ripple: &Ripple,
) -> Result<(), PackError> {
    out.begin_object()?;
    out.name(KEY_COLOR)?;
    writer.write(out, &ripple.color)?;
    let optional = [
        (KEY_MASK, &ripple.mask),
        (KEY_CONTENT, &ripple.content),
        (KEY_DEFAULT_BACKGROUND, &ripple.default_background),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            out.name(key)?;
            writer.write(out, value)?;
        }
    }
    out.end_object()?;
    Ok(())
}

fn decode_ripple<V, R>(form: &V, reader: &mut R) -> Result<Ripple, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let mut color: Option<Value> = None;
    let mut mask = None;
    let mut content = None;
    let mut default_background = None;
    reader.begin_object()?;
    while reader.has_next()? {
        let key = reader.next_name()?;
        let slot = match key.as_str() {
            KEY_COLOR => &mut color,
            KEY_MASK => &mut mask,
            KEY_CONTENT => &mut content,
            KEY_DEFAULT_BACKGROUND => &mut default_background,
            _ => return Err(PackError::UnknownAttributeKey(key)),
        };
        *slot = Some(form.read(reader)?);
    }
    reader.end_object()?;
    Ok(Ripple {
        color: Box::new(required(color, KEY_COLOR)?),
        mask: mask.map(Box::new),
        content: content.map(Box::new),
        default_background: default_background.map(Box::new),
    })
}
