use layout_json_stream::{
    JsonReader, JsonWriter, StreamError, TokenKind, TokenReader, TokenWriter,
};
use serde_json::{json, Value as JsonValue};

fn read_tree<R: TokenReader>(reader: &mut R) -> Result<JsonValue, StreamError> {
    Ok(match reader.peek()? {
        TokenKind::String => JsonValue::String(reader.next_string()?),
        TokenKind::Number => {
            let text = reader.next_number_text()?;
            serde_json::from_str(&text).expect("tokenizer number is valid json")
        }
        TokenKind::Boolean => JsonValue::Bool(reader.next_boolean()?),
        TokenKind::Null => {
            reader.next_null()?;
            JsonValue::Null
        }
        TokenKind::BeginArray => {
            reader.begin_array()?;
            let mut items = Vec::new();
            while reader.has_next()? {
                items.push(read_tree(reader)?);
            }
            reader.end_array()?;
            JsonValue::Array(items)
        }
        TokenKind::BeginObject => {
            reader.begin_object()?;
            let mut map = serde_json::Map::new();
            while reader.has_next()? {
                let key = reader.next_name()?;
                map.insert(key, read_tree(reader)?);
            }
            reader.end_object()?;
            JsonValue::Object(map)
        }
        other => panic!("unexpected token {other}"),
    })
}

fn write_tree<W: TokenWriter>(out: &mut W, value: &JsonValue) -> Result<(), StreamError> {
    match value {
        JsonValue::Null => out.null_value(),
        JsonValue::Bool(b) => out.value_bool(*b),
        JsonValue::Number(n) => out.value_number(&n.to_string()),
        JsonValue::String(s) => out.value_str(s),
        JsonValue::Array(items) => {
            out.begin_array()?;
            for item in items {
                write_tree(out, item)?;
            }
            out.end_array()
        }
        JsonValue::Object(map) => {
            out.begin_object()?;
            for (key, item) in map {
                out.name(key)?;
                write_tree(out, item)?;
            }
            out.end_object()
        }
    }
}

#[test]
fn reader_agrees_with_serde_json_matrix() {
    let cases = [
        "null",
        "true",
        " false ",
        "0",
        "-12.5e3",
        r#""plain""#,
        r#""esc \" \\ \/ \b \f \n \r \t é 😀""#,
        "[]",
        "{}",
        "[1, [2, [3, []]], {}]",
        r#"{"a": {"b": [null, true, "c"]}, "d": -0.0}"#,
        "\n\t{ \"k\" :\r\n 1 }\n",
    ];
    for case in cases {
        let mut reader = JsonReader::new(case);
        let tree = read_tree(&mut reader).unwrap_or_else(|e| panic!("{case}: {e}"));
        reader.finish().unwrap();
        let expected: JsonValue = serde_json::from_str(case).unwrap();
        assert_eq!(tree, expected, "{case}");
    }
}

#[test]
fn reader_rejects_malformed_matrix() {
    let cases = [
        "",
        "[",
        "[1,]",
        "{\"a\" 1}",
        "{\"a\":1,}",
        "{1: 2}",
        "tru",
        "01",
        "1.",
        "\"unterminated",
        "\"bad \\x escape\"",
        "[1] [2]",
        "\"\u{1}\"",
    ];
    for case in cases {
        let mut reader = JsonReader::new(case);
        let result = read_tree(&mut reader).and_then(|_| reader.finish());
        assert!(result.is_err(), "{case:?} should fail");
        assert!(serde_json::from_str::<JsonValue>(case).is_err(), "{case:?}");
    }
}

#[test]
fn writer_output_parses_back_matrix() {
    let cases = [
        json!(null),
        json!(["a", 1, 2.5, true, null]),
        json!({"name": "line\nbreak \"quoted\"", "nested": {"list": [[], {}]}}),
        json!({"ctrl": "\u{1}\u{1f}", "uni": "é😀"}),
    ];
    for case in cases {
        let mut writer = JsonWriter::new();
        write_tree(&mut writer, &case).unwrap();
        let text = writer.into_string().unwrap();
        let back: JsonValue = serde_json::from_str(&text).unwrap();
        assert_eq!(back, case);

        let mut reader = JsonReader::new(&text);
        assert_eq!(read_tree(&mut reader).unwrap(), case);
        reader.finish().unwrap();
    }
}

#[test]
fn writer_misuse_matrix() {
    let mut writer = JsonWriter::new();
    assert_eq!(writer.name("a"), Err(StreamError::NameOutsideObject));

    let mut writer = JsonWriter::new();
    writer.begin_object().unwrap();
    assert_eq!(writer.value_bool(true), Err(StreamError::ValueWithoutName));
    assert_eq!(writer.end_array(), Err(StreamError::MismatchedClose));
    assert_eq!(writer.into_string(), Err(StreamError::IncompleteDocument));

    let mut writer = JsonWriter::new();
    writer.null_value().unwrap();
    assert_eq!(writer.null_value(), Err(StreamError::MultipleTopLevelValues));

    let mut writer = JsonWriter::new();
    assert!(matches!(
        writer.value_number("1e"),
        Err(StreamError::InvalidNumber(_))
    ));
    assert_eq!(writer.into_string(), Err(StreamError::IncompleteDocument));
}

#[test]
fn wrong_token_kind_is_reported() {
    let mut reader = JsonReader::new(r#"{"a": 1}"#);
    assert_eq!(
        reader.begin_array(),
        Err(StreamError::UnexpectedToken {
            expected: TokenKind::BeginArray,
            found: TokenKind::BeginObject,
        })
    );
    reader.begin_object().unwrap();
    assert_eq!(
        reader.next_boolean(),
        Err(StreamError::UnexpectedToken {
            expected: TokenKind::Boolean,
            found: TokenKind::Name,
        })
    );
}
