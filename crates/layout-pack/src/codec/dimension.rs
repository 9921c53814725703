use layout_json_stream::{TokenReader, TokenWriter};

use crate::value::Dimension;
use crate::PackError;

pub(super) fn encode<W: TokenWriter>(out: &mut W, dimension: &Dimension) -> Result<(), PackError> {
    out.value_str(&dimension.to_string())?;
    Ok(())
}

pub(super) fn decode<R: TokenReader>(reader: &mut R) -> Result<Dimension, PackError> {
    reader.next_string()?.parse()
}
