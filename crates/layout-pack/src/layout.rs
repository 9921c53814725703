//! Eager layout compilation.
//!
//! Once an object has been recognised as a layout, its remaining keys are
//! resolved against the schema while reading: known attributes become
//! `(id, precompiled value)` pairs, `data` becomes the layout's data map and
//! everything else is kept verbatim in `extras`.

use indexmap::IndexMap;
use layout_json_stream::{TokenKind, TokenReader};
use log::{debug, trace};

use crate::context::PrecompileContext;
use crate::read::ValueReader;
use crate::value::{Attribute, Layout, ObjectValue};
use crate::{PackError, Value};

const DATA_KEY: &str = "data";

/// Compiles the body of a layout object using `form` to read nested values.
pub struct LayoutCompiler<'f, V> {
    form: &'f V,
}

impl<'f, V: ValueReader> LayoutCompiler<'f, V> {
    pub fn new(form: &'f V) -> Self {
        Self { form }
    }

    /// Reads the remaining entries of an open object whose type key has been
    /// consumed. The closing brace is left to the caller.
    pub fn compile<R: TokenReader>(
        &self,
        reader: &mut R,
        type_name: String,
    ) -> Result<Layout, PackError> {
        trace!("compiling layout `{type_name}`");
        let context = self.form.context();
        let mut data: Option<IndexMap<String, Value>> = None;
        let mut attributes = Vec::new();
        let mut extras = ObjectValue::new();

        while reader.has_next()? {
            let key = reader.next_name()?;
            if key == DATA_KEY {
                self.read_data(reader, data.get_or_insert_with(IndexMap::new))?;
                continue;
            }
            match context.attributes.resolve(&key, &type_name) {
                Some(descriptor) => {
                    let value = self.form.read(reader)?;
                    let precompile = PrecompileContext {
                        layout_type: &type_name,
                        attribute_id: descriptor.id,
                        formatters: context.formatters,
                    };
                    let value = descriptor.processor.precompile(value, &precompile)?;
                    attributes.push(Attribute::new(descriptor.id, value));
                }
                None => {
                    debug!("`{key}` is not an attribute of `{type_name}`, keeping it in extras");
                    let value = self.form.read(reader)?;
                    extras.insert(key, value);
                }
            }
        }

        Ok(Layout {
            type_name,
            data,
            attributes: (!attributes.is_empty()).then_some(attributes),
            extras: (!extras.is_empty()).then_some(extras),
        })
    }

    fn read_data<R: TokenReader>(
        &self,
        reader: &mut R,
        data: &mut IndexMap<String, Value>,
    ) -> Result<(), PackError> {
        match reader.peek()? {
            TokenKind::Null => {
                reader.next_null()?;
                Ok(())
            }
            TokenKind::BeginObject => {
                reader.begin_object()?;
                while reader.has_next()? {
                    let key = reader.next_name()?;
                    if data.contains_key(&key) {
                        return Err(PackError::DuplicateDataKey(key));
                    }
                    let value = self.form.read(reader)?;
                    data.insert(key, value);
                }
                reader.end_object()?;
                Ok(())
            }
            other => Err(PackError::unexpected(
                TokenKind::BeginObject.as_str(),
                other.as_str(),
            )),
        }
    }
}
