//! Reading and writing UI layout documents in source and compiled form.
//!
//! Both forms are JSON. The source form is what people write: bindings are
//! `~`-prefixed strings and layouts are objects with a `"type"` key. The
//! compiled form tags every custom value with a registry type code and stores
//! layout attributes by id instead of by name.
//!
//! ```
//! use layout_pack::{
//!     from_compiled_str, from_source_str, to_compiled_string, Context, FormatterSet,
//!     IdentityProcessor, StaticSchema, TypeRegistry,
//! };
//!
//! let mut schema = StaticSchema::new();
//! schema.view("Button").attribute("text", 5, IdentityProcessor);
//! let registry = TypeRegistry::standard();
//! let formatters = FormatterSet::new();
//! let context = Context::new(&registry, &schema, &schema, &formatters);
//!
//! let layout = from_source_str(r#"{"type": "Button", "text": "hi"}"#, context).unwrap();
//! let compiled = to_compiled_string(&layout, &registry).unwrap();
//! assert_eq!(compiled, r#"{"$t":12,"$v":{"t":"Button","a":[{"i":5,"v":"hi"}]}}"#);
//! assert_eq!(from_compiled_str(&compiled, context).unwrap(), layout);
//! ```

mod codec;
mod error;
mod layout;
mod read;

pub mod compiled;
pub mod context;
pub mod packed;
pub mod processor;
pub mod registry;
pub mod schema;
pub mod source;
pub mod value;

pub use compiled::{CompiledReader, CompiledWriter, PAYLOAD_KEY, TYPE_CODE_KEY};
pub use context::{
    AttributeDescriptor, AttributeResolver, Context, FormatterManager, FormatterSet,
    LayoutRegistry, PrecompileContext, ValueProcessor,
};
pub use error::PackError;
pub use layout::LayoutCompiler;
pub use processor::{ColorProcessor, DimensionProcessor, IdentityProcessor, ResourceProcessor};
pub use read::ValueReader;
pub use registry::{TypeRegistry, VariantId};
pub use schema::{ProcessorKind, SchemaError, StaticSchema, ViewType};
pub use source::SourceReader;
pub use value::*;

use layout_json_stream::{JsonReader, JsonWriter};

/// Reads one source-form document.
pub fn from_source_str(text: &str, context: Context<'_>) -> Result<Value, PackError> {
    read_document(&SourceReader::new(context), text)
}

/// Reads one compiled-form document.
pub fn from_compiled_str(text: &str, context: Context<'_>) -> Result<Value, PackError> {
    read_document(&CompiledReader::new(context), text)
}

/// Writes `value` as a compiled-form document.
pub fn to_compiled_string(value: &Value, registry: &TypeRegistry) -> Result<String, PackError> {
    let mut out = JsonWriter::new();
    CompiledWriter::new(registry).write(&mut out, value)?;
    Ok(out.into_string()?)
}

/// Source form is read-only: layouts lose their attribute names on the way
/// in, so there is nothing faithful to write back.
pub fn to_source_string(_value: &Value) -> Result<String, PackError> {
    Err(PackError::WriteUnsupported("source"))
}

fn read_document<V: ValueReader>(form: &V, text: &str) -> Result<Value, PackError> {
    let mut reader = JsonReader::new(text);
    let value = form.read(&mut reader)?;
    reader.finish()?;
    Ok(value)
}
