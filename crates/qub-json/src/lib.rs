//! Streaming JSON document builders.
//!
//! Documents are emitted directly onto a [`CharacterWriteStream`] as they
//! are built; nothing is buffered and the compact output is byte-exact:
//! `{"key":value,...}` with no extraneous whitespace. Structural
//! correctness (matching braces, comma placement) is managed by the
//! closure-scoped builders, so a malformed document is not representable.
//!
//! The only failure mode is the underlying stream failing, which surfaces
//! as the stream's own [`StreamError`].

use qub_streams::{CharacterWriteStream, StreamError};

/// Emit a JSON object document: `{` then the properties added by `build`,
/// then `}`.
pub fn write_object(
    stream: &mut dyn CharacterWriteStream,
    build: impl FnOnce(&mut JsonObjectBuilder<'_>) -> Result<(), StreamError>,
) -> Result<(), StreamError> {
    stream.write_char('{')?;
    let mut builder = JsonObjectBuilder {
        stream,
        wrote_property: false,
    };
    build(&mut builder)?;
    builder.stream.write_char('}')?;
    Ok(())
}

/// Emit a JSON array document: `[` then the elements added by `build`,
/// then `]`.
pub fn write_array(
    stream: &mut dyn CharacterWriteStream,
    build: impl FnOnce(&mut JsonArrayBuilder<'_>) -> Result<(), StreamError>,
) -> Result<(), StreamError> {
    stream.write_char('[')?;
    let mut builder = JsonArrayBuilder {
        stream,
        wrote_element: false,
    };
    build(&mut builder)?;
    builder.stream.write_char(']')?;
    Ok(())
}

/// Adds properties to the object currently being written.
pub struct JsonObjectBuilder<'a> {
    stream: &'a mut dyn CharacterWriteStream,
    wrote_property: bool,
}

impl JsonObjectBuilder<'_> {
    fn property_prefix(&mut self, name: &str) -> Result<(), StreamError> {
        if self.wrote_property {
            self.stream.write_char(',')?;
        }
        self.wrote_property = true;
        write_escaped_string(self.stream, name)?;
        self.stream.write_char(':')?;
        Ok(())
    }

    pub fn string_property(&mut self, name: &str, value: &str) -> Result<(), StreamError> {
        self.property_prefix(name)?;
        write_escaped_string(self.stream, value)
    }

    pub fn integer_property(&mut self, name: &str, value: i64) -> Result<(), StreamError> {
        self.property_prefix(name)?;
        self.stream.write_str(&value.to_string())?;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `value` is not finite (JSON has no NaN or infinity).
    pub fn number_property(&mut self, name: &str, value: f64) -> Result<(), StreamError> {
        assert!(value.is_finite(), "JSON numbers must be finite");
        self.property_prefix(name)?;
        self.stream.write_str(&value.to_string())?;
        Ok(())
    }

    pub fn boolean_property(&mut self, name: &str, value: bool) -> Result<(), StreamError> {
        self.property_prefix(name)?;
        self.stream.write_str(if value { "true" } else { "false" })?;
        Ok(())
    }

    pub fn null_property(&mut self, name: &str) -> Result<(), StreamError> {
        self.property_prefix(name)?;
        self.stream.write_str("null")?;
        Ok(())
    }

    pub fn object_property(
        &mut self,
        name: &str,
        build: impl FnOnce(&mut JsonObjectBuilder<'_>) -> Result<(), StreamError>,
    ) -> Result<(), StreamError> {
        self.property_prefix(name)?;
        self.stream.write_char('{')?;
        let mut nested = JsonObjectBuilder {
            stream: &mut *self.stream,
            wrote_property: false,
        };
        build(&mut nested)?;
        self.stream.write_char('}')?;
        Ok(())
    }

    pub fn array_property(
        &mut self,
        name: &str,
        build: impl FnOnce(&mut JsonArrayBuilder<'_>) -> Result<(), StreamError>,
    ) -> Result<(), StreamError> {
        self.property_prefix(name)?;
        self.stream.write_char('[')?;
        let mut nested = JsonArrayBuilder {
            stream: &mut *self.stream,
            wrote_element: false,
        };
        build(&mut nested)?;
        self.stream.write_char(']')?;
        Ok(())
    }
}

/// Adds elements to the array currently being written.
pub struct JsonArrayBuilder<'a> {
    stream: &'a mut dyn CharacterWriteStream,
    wrote_element: bool,
}

impl JsonArrayBuilder<'_> {
    fn element_prefix(&mut self) -> Result<(), StreamError> {
        if self.wrote_element {
            self.stream.write_char(',')?;
        }
        self.wrote_element = true;
        Ok(())
    }

    pub fn string_element(&mut self, value: &str) -> Result<(), StreamError> {
        self.element_prefix()?;
        write_escaped_string(self.stream, value)
    }

    pub fn integer_element(&mut self, value: i64) -> Result<(), StreamError> {
        self.element_prefix()?;
        self.stream.write_str(&value.to_string())?;
        Ok(())
    }

    /// # Panics
    ///
    /// Panics if `value` is not finite (JSON has no NaN or infinity).
    pub fn number_element(&mut self, value: f64) -> Result<(), StreamError> {
        assert!(value.is_finite(), "JSON numbers must be finite");
        self.element_prefix()?;
        self.stream.write_str(&value.to_string())?;
        Ok(())
    }

    pub fn boolean_element(&mut self, value: bool) -> Result<(), StreamError> {
        self.element_prefix()?;
        self.stream.write_str(if value { "true" } else { "false" })?;
        Ok(())
    }

    pub fn null_element(&mut self) -> Result<(), StreamError> {
        self.element_prefix()?;
        self.stream.write_str("null")?;
        Ok(())
    }

    pub fn object_element(
        &mut self,
        build: impl FnOnce(&mut JsonObjectBuilder<'_>) -> Result<(), StreamError>,
    ) -> Result<(), StreamError> {
        self.element_prefix()?;
        self.stream.write_char('{')?;
        let mut nested = JsonObjectBuilder {
            stream: &mut *self.stream,
            wrote_property: false,
        };
        build(&mut nested)?;
        self.stream.write_char('}')?;
        Ok(())
    }

    pub fn array_element(
        &mut self,
        build: impl FnOnce(&mut JsonArrayBuilder<'_>) -> Result<(), StreamError>,
    ) -> Result<(), StreamError> {
        self.element_prefix()?;
        self.stream.write_char('[')?;
        let mut nested = JsonArrayBuilder {
            stream: &mut *self.stream,
            wrote_element: false,
        };
        build(&mut nested)?;
        self.stream.write_char(']')?;
        Ok(())
    }
}

fn write_escaped_string(
    stream: &mut dyn CharacterWriteStream,
    text: &str,
) -> Result<(), StreamError> {
    stream.write_char('"')?;
    for ch in text.chars() {
        match ch {
            '"' => stream.write_str("\\\"")?,
            '\\' => stream.write_str("\\\\")?,
            '\n' => stream.write_str("\\n")?,
            '\r' => stream.write_str("\\r")?,
            '\t' => stream.write_str("\\t")?,
            control if (control as u32) < 0x20 => {
                stream.write_str(&format!("\\u{:04x}", control as u32))?
            }
            other => stream.write_char(other)?,
        };
    }
    stream.write_char('"')?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qub_streams::InMemoryCharacterStream;

    fn built_object(
        build: impl FnOnce(&mut JsonObjectBuilder<'_>) -> Result<(), StreamError>,
    ) -> String {
        let mut stream = InMemoryCharacterStream::create();
        write_object(&mut stream, build).unwrap();
        stream.text()
    }

    #[test]
    fn empty_object() {
        assert_eq!(built_object(|_| Ok(())), "{}");
    }

    #[test]
    fn compact_output_is_byte_exact() {
        let text = built_object(|object| {
            object.string_property("name", "qub")?;
            object.integer_property("count", 3)?;
            object.number_property("ratio", 1.5)?;
            object.boolean_property("enabled", true)?;
            object.null_property("extra")
        });
        assert_eq!(
            text,
            r#"{"name":"qub","count":3,"ratio":1.5,"enabled":true,"extra":null}"#
        );
    }

    #[test]
    fn nested_objects_and_arrays() {
        let text = built_object(|object| {
            object.object_property("inner", |inner| inner.integer_property("a", 1))?;
            object.array_property("items", |items| {
                items.string_element("x")?;
                items.object_element(|element| element.boolean_property("ok", false))?;
                items.array_element(|nested| nested.integer_element(2))
            })
        });
        assert_eq!(
            text,
            r#"{"inner":{"a":1},"items":["x",{"ok":false},[2]]}"#
        );
    }

    #[test]
    fn array_document() {
        let mut stream = InMemoryCharacterStream::create();
        write_array(&mut stream, |array| {
            array.integer_element(1)?;
            array.null_element()?;
            array.string_element("two")
        })
        .unwrap();
        assert_eq!(stream.text(), r#"[1,null,"two"]"#);
    }

    #[test]
    fn strings_are_escaped() {
        let text = built_object(|object| {
            object.string_property("q", "say \"hi\"")?;
            object.string_property("path", "a\\b")?;
            object.string_property("lines", "one\ntwo\r\tthree")?;
            object.string_property("control", "\u{1}")
        });
        assert_eq!(
            text,
            r#"{"q":"say \"hi\"","path":"a\\b","lines":"one\ntwo\r\tthree","control":"\u0001"}"#
        );
    }

    #[test]
    fn integer_display_has_no_fraction() {
        let text = built_object(|object| object.number_property("whole", 2.0));
        assert_eq!(text, r#"{"whole":2}"#);
    }

    #[test]
    #[should_panic(expected = "finite")]
    fn non_finite_numbers_are_rejected() {
        let _ = built_object(|object| object.number_property("bad", f64::NAN));
    }

    #[test]
    fn output_parses_with_a_real_json_parser() {
        let text = built_object(|object| {
            object.string_property("name", "qub \"core\"")?;
            object.array_property("values", |values| {
                values.integer_element(1)?;
                values.number_element(2.5)?;
                values.boolean_element(true)?;
                values.null_element()
            })?;
            object.object_property("nested", |nested| {
                nested.string_property("text", "a\\b\nc")
            })
        });

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({
                "name": "qub \"core\"",
                "values": [1, 2.5, true, null],
                "nested": { "text": "a\\b\nc" },
            })
        );
    }
}
