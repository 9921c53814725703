//! Source form: hand-written JSON.
//!
//! Nothing is tagged, so custom values are inferred while reading. Strings
//! starting with [`BINDING_PREFIX`](crate::BINDING_PREFIX) become bindings and
//! objects whose first key is `"type"` naming a known layout are compiled
//! into [`Layout`](crate::Layout)s on the spot.

use crate::context::Context;
use crate::read::ValueReader;

pub struct SourceReader<'a> {
    context: Context<'a>,
}

impl<'a> SourceReader<'a> {
    pub fn new(context: Context<'a>) -> Self {
        Self { context }
    }
}

impl ValueReader for SourceReader<'_> {
    fn context(&self) -> Context<'_> {
        self.context
    }
}

#[cfg(test)]
mod tests {
    use layout_json_stream::JsonReader;

    use super::*;
    use crate::value::{Binding, Dimension, DimensionUnit, Layout, ObjectValue};
    use crate::{
        DimensionProcessor, FormatterSet, IdentityProcessor, PackError, StaticSchema,
        TypeRegistry, Value,
    };

    fn schema() -> StaticSchema {
        let mut schema = StaticSchema::new();
        schema.view("View").attribute("width", 1, DimensionProcessor);
        schema
            .view("Button")
            .extends("View")
            .attribute("text", 5, IdentityProcessor);
        schema
    }

    fn read(text: &str) -> Result<Value, PackError> {
        let registry = TypeRegistry::standard();
        let schema = schema();
        let formatters = FormatterSet::new();
        let context = Context::new(&registry, &schema, &schema, &formatters);
        let mut reader = JsonReader::new(text);
        let value = SourceReader::new(context).read(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }

    #[test]
    fn plain_json_stays_plain() {
        let value = read(r#"{"a": [1, true, null, "x"], "b": {}}"#).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(
            object.get("a").unwrap().as_array().unwrap(),
            &[Value::from(1), Value::from(true), Value::Null, Value::from("x")]
        );
        assert_eq!(object.get("b"), Some(&Value::Object(ObjectValue::new())));
    }

    #[test]
    fn prefixed_strings_become_bindings() {
        let value = read(r#""~user.name""#).unwrap();
        assert_eq!(value.as_binding().unwrap().expression(), "user.name");
        assert_eq!(read(r#""~""#).unwrap(), Value::from("~"));
        assert_eq!(
            read(r#""~fn:upper(x)""#),
            Err(PackError::UnknownFormatter("upper".into()))
        );
    }

    #[test]
    fn known_type_compiles_a_layout() {
        let value = read(r#"{"type": "Button", "width": "8dp", "text": "~label"}"#).unwrap();
        let layout = value.as_layout().unwrap();
        assert_eq!(layout.type_name, "Button");
        assert_eq!(
            layout.attribute(1),
            Some(&Value::from(Dimension::new(8.0, DimensionUnit::Dp)))
        );
        assert_eq!(
            layout.attribute(5),
            Some(&Value::from(
                Binding::value_of("label", &FormatterSet::new()).unwrap()
            ))
        );
    }

    #[test]
    fn unknown_type_reads_as_object() {
        let value = read(r#"{"type": "Spinner", "text": "hi"}"#).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("type"), Some(&Value::from("Spinner")));
        assert_eq!(object.get("text"), Some(&Value::from("hi")));

        // "type" only switches modes as the first key.
        let value = read(r#"{"text": "hi", "type": "Button"}"#).unwrap();
        assert!(value.is_object());
    }

    #[test]
    fn nested_layouts_compile_in_place() {
        let value = read(r#"[{"type": "View"}, {"child": {"type": "Button"}}]"#).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items[0], Value::from(Layout::new("View")));
        assert_eq!(
            items[1].as_object().unwrap().get("child"),
            Some(&Value::from(Layout::new("Button")))
        );
    }

    #[test]
    fn compiled_tags_are_not_special_in_source() {
        let value = read(r#"{"$t": 14, "$v": 3}"#).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
