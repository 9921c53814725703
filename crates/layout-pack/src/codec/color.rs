//! Colors: a bare ARGB int, or packed `{"s", "c"}` for state lists.

use layout_json_stream::{TokenReader, TokenWriter};

use super::{next_int, required, write_int};
use crate::packed::{decode_int_matrix, decode_ints, encode_int_matrix, encode_ints};
use crate::value::{ColorInt, ColorStateList};
use crate::PackError;

const KEY_STATES: &str = "s";
const KEY_COLORS: &str = "c";

pub(super) fn encode_int<W: TokenWriter>(out: &mut W, color: &ColorInt) -> Result<(), PackError> {
    write_int(out, color.value)
}

pub(super) fn decode_int<R: TokenReader>(reader: &mut R) -> Result<ColorInt, PackError> {
    Ok(ColorInt::new(next_int(reader)?))
}

pub(super) fn encode_state_list<W: TokenWriter>(
    out: &mut W,
    list: &ColorStateList,
) -> Result<(), PackError> {
    out.begin_object()?;
    out.name(KEY_STATES)?;
    out.value_str(&encode_int_matrix(list.states()))?;
    out.name(KEY_COLORS)?;
    out.value_str(&encode_ints(list.colors()))?;
    out.end_object()?;
    Ok(())
}

pub(super) fn decode_state_list<R: TokenReader>(reader: &mut R) -> Result<ColorStateList, PackError> {
    let mut states = None;
    let mut colors = None;
    reader.begin_object()?;
    while reader.has_next()? {
        let key = reader.next_name()?;
        match key.as_str() {
            KEY_STATES => states = Some(decode_int_matrix(&reader.next_string()?)?),
            KEY_COLORS => colors = Some(decode_ints(&reader.next_string()?)?),
            _ => return Err(PackError::UnknownAttributeKey(key)),
        }
    }
    reader.end_object()?;
    ColorStateList::new(required(states, KEY_STATES)?, required(colors, KEY_COLORS)?)
}
