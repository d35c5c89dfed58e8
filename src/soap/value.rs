//! Structured values carried in SOAP headers, call parameters, and decoded
//! response bodies.

/// Arbitrary structured XML content: a scalar, an ordered map of named
/// children, or a repeated sequence.
///
/// Map order is serialization order, and duplicate keys are legal (they
/// serialize as repeated elements). A `List` bound to a name repeats that
/// name once per item.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlValue {
    Text(String),
    Map(Vec<(String, XmlValue)>),
    List(Vec<XmlValue>),
}

impl XmlValue {
    pub fn text(value: impl Into<String>) -> Self {
        XmlValue::Text(value.into())
    }

    /// An empty parameter map, for operations that take no arguments.
    pub fn empty() -> Self {
        XmlValue::Map(Vec::new())
    }
}

impl From<serde_json::Value> for XmlValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => XmlValue::Text(String::new()),
            serde_json::Value::Bool(b) => XmlValue::Text(b.to_string()),
            serde_json::Value::Number(n) => XmlValue::Text(n.to_string()),
            serde_json::Value::String(s) => XmlValue::Text(s),
            serde_json::Value::Array(items) => {
                XmlValue::List(items.into_iter().map(XmlValue::from).collect())
            }
            serde_json::Value::Object(fields) => XmlValue::Map(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, XmlValue::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_objects_keep_field_order() {
        let value = XmlValue::from(json!({ "zeta": "1", "alpha": "2" }));
        let XmlValue::Map(fields) = value else {
            panic!("expected a map");
        };
        assert_eq!(fields[0].0, "zeta");
        assert_eq!(fields[1].0, "alpha");
    }

    #[test]
    fn json_scalars_become_text() {
        assert_eq!(XmlValue::from(json!(12.5)), XmlValue::text("12.5"));
        assert_eq!(XmlValue::from(json!(true)), XmlValue::text("true"));
        assert_eq!(XmlValue::from(json!(null)), XmlValue::text(""));
    }

    #[test]
    fn json_arrays_become_lists() {
        assert_eq!(
            XmlValue::from(json!(["a", "b"])),
            XmlValue::List(vec![XmlValue::text("a"), XmlValue::text("b")])
        );
    }
}
