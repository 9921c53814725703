use layout_json_stream::{TokenReader, TokenWriter};

use crate::compiled::CompiledWriter;
use crate::read::ValueReader;
use crate::value::{Binding, NestedBinding};
use crate::PackError;

pub(super) fn encode<W: TokenWriter>(out: &mut W, binding: &Binding) -> Result<(), PackError> {
    out.value_str(binding.expression())?;
    Ok(())
}

/// The expression is checked against the reader's formatters again, so a
/// compiled document naming a formatter this process lacks fails to load.
pub(super) fn decode<V, R>(form: &V, reader: &mut R) -> Result<Binding, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    let expression = reader.next_string()?;
    Binding::value_of(expression, form.context().formatters)
}

pub(super) fn encode_nested<W: TokenWriter>(
    writer: &CompiledWriter<'_>,
    out: &mut W,
    nested: &NestedBinding,
) -> Result<(), PackError> {
    writer.write(out, &nested.inner)
}

pub(super) fn decode_nested<V, R>(form: &V, reader: &mut R) -> Result<NestedBinding, PackError>
where
    V: ValueReader,
    R: TokenReader,
{
    Ok(NestedBinding::new(form.read(reader)?))
}
