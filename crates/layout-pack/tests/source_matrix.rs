use indexmap::IndexMap;
use layout_json_stream::StreamError;
use layout_pack::{
    from_source_str, Attribute, Binding, ColorInt, Context, Dimension, DimensionUnit,
    FormatterSet, Layout, ObjectValue, PackError, Resource, StaticSchema, TypeRegistry, Value,
};

const SCHEMA: &str = r#"
[views.View.attributes]
width = { id = 1, processor = "dimension" }
background = { id = 2, processor = "color" }

[views.Button]
parent = "View"

[views.Button.attributes]
text = { id = 5 }
icon = { id = 6, processor = "resource" }
"#;

struct Fixture {
    registry: TypeRegistry,
    schema: StaticSchema,
    formatters: FormatterSet,
}

impl Fixture {
    fn new() -> Self {
        Self {
            registry: TypeRegistry::standard(),
            schema: StaticSchema::from_toml_str(SCHEMA).unwrap(),
            formatters: FormatterSet::new().with("upper"),
        }
    }

    fn read(&self, text: &str) -> Result<Value, PackError> {
        let context = Context::new(
            &self.registry,
            &self.schema,
            &self.schema,
            &self.formatters,
        );
        from_source_str(text, context)
    }
}

#[test]
fn layout_short_circuit_matrix() {
    let fixture = Fixture::new();
    assert_eq!(
        fixture.read(r#"{"type":"Button","text":"hi"}"#).unwrap(),
        Value::from(Layout::new("Button").with_attributes(vec![Attribute::new(5, "hi")]))
    );
    assert_eq!(
        fixture.read(r#"{"type":"View"}"#).unwrap(),
        Value::from(Layout::new("View"))
    );
}

#[test]
fn unknown_attributes_go_to_extras() {
    let fixture = Fixture::new();
    let extras: ObjectValue = [("bogus", "x")].into_iter().collect();
    assert_eq!(
        fixture.read(r#"{"type":"Button","bogus":"x"}"#).unwrap(),
        Value::from(Layout::new("Button").with_extras(extras))
    );

    // `text` belongs to Button, not to its parent.
    let layout = fixture
        .read(r#"{"type":"View","text":"hi"}"#)
        .unwrap()
        .into_layout()
        .unwrap();
    assert_eq!(layout.attributes, None);
    assert_eq!(layout.extras.unwrap().get("text"), Some(&Value::from("hi")));
}

#[test]
fn binding_inference_matrix() {
    let fixture = Fixture::new();
    let value = fixture.read(r#""~user.name""#).unwrap();
    assert_eq!(
        value,
        Value::from(Binding::value_of("user.name", &fixture.formatters).unwrap())
    );

    let value = fixture.read(r#"["~fn:upper(user.name)", "plain", "~"]"#).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items[0].as_binding().unwrap().formatter(), Some("upper"));
    assert_eq!(items[1], Value::from("plain"));
    assert_eq!(items[2], Value::from("~"));

    assert_eq!(
        fixture.read(r#"{"k": "~fn:lower(x)"}"#),
        Err(PackError::UnknownFormatter("lower".into()))
    );
}

#[test]
fn attributes_are_precompiled_in_order() {
    let fixture = Fixture::new();
    let layout = fixture
        .read(
            r##"{
                "type": "Button",
                "icon": 7,
                "width": "match_parent",
                "text": "~user.name",
                "background": "#ff0000",
                "data": {"user": {"name": "Ada"}},
                "tooltip": "press"
            }"##,
        )
        .unwrap()
        .into_layout()
        .unwrap();

    let ids: Vec<i32> = layout
        .attributes
        .as_ref()
        .unwrap()
        .iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec![6, 1, 5, 2]);
    assert_eq!(layout.attribute(6), Some(&Value::from(Resource::new(7))));
    assert_eq!(layout.attribute(1), Some(&Value::from(Dimension::MATCH_PARENT)));
    assert!(layout.attribute(5).unwrap().as_binding().is_ok());
    assert_eq!(
        layout.attribute(2),
        Some(&Value::from(ColorInt::new(0xFFFF_0000_u32 as i32)))
    );

    let data = layout.data.unwrap();
    let user = data.get("user").unwrap().as_object().unwrap();
    assert_eq!(user.get("name"), Some(&Value::from("Ada")));
    assert_eq!(layout.extras.unwrap().len(), 1);
}

#[test]
fn data_section_matrix() {
    let fixture = Fixture::new();

    assert_eq!(
        fixture.read(r#"{"type":"Button","data":{"a":"1","a":"2"}}"#),
        Err(PackError::DuplicateDataKey("a".into()))
    );

    let layout = fixture
        .read(r#"{"type":"Button","data":null}"#)
        .unwrap()
        .into_layout()
        .unwrap();
    assert_eq!(layout.data, Some(IndexMap::new()));

    assert_eq!(
        fixture.read(r#"{"type":"Button","data":"oops"}"#),
        Err(PackError::UnexpectedToken {
            expected: "BEGIN_OBJECT".into(),
            found: "STRING".into(),
        })
    );
}

#[test]
fn layouts_nest_anywhere() {
    let fixture = Fixture::new();
    let value = fixture
        .read(r#"{"children": [{"type": "Button", "width": "4.5sp"}], "type": "View"}"#)
        .unwrap();
    let object = value.as_object().unwrap();
    let children = object.get("children").unwrap().as_array().unwrap();
    assert_eq!(
        children[0],
        Value::from(
            Layout::new("Button")
                .with_attributes(vec![Attribute::new(1, Dimension::new(4.5, DimensionUnit::Sp))])
        )
    );
    assert_eq!(object.get("type"), Some(&Value::from("View")));
}

#[test]
fn processor_failures_abort_the_read() {
    let fixture = Fixture::new();
    assert_eq!(
        fixture.read(r#"{"type":"View","width":"wide"}"#),
        Err(PackError::InvalidDimension("wide".into()))
    );
    assert_eq!(
        fixture.read(r#"{"type":"View","background":"red"}"#),
        Err(PackError::InvalidColor("red".into()))
    );
}

#[test]
fn malformed_documents_fail() {
    let fixture = Fixture::new();
    let missing_value = |found: &str| PackError::UnexpectedToken {
        expected: "a value".into(),
        found: found.into(),
    };
    let cases = [
        ("", missing_value("END_DOCUMENT")),
        ("]", missing_value("END_ARRAY")),
        ("}", missing_value("END_OBJECT")),
        ("[1,]", missing_value("END_ARRAY")),
        (r#"{"type":"Button","text":}"#, missing_value("END_OBJECT")),
        ("{", PackError::Stream(StreamError::UnexpectedEof)),
        (
            "[1] 2",
            PackError::Stream(StreamError::UnexpectedChar { ch: '2', pos: 4 }),
        ),
    ];
    for (text, expected) in cases {
        assert_eq!(fixture.read(text), Err(expected), "{text:?}");
    }
}
