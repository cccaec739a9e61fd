//! JSON codec.
//!
//! Same shape as the YAML codec: parse to [`serde_json::Value`], then convert
//! into the config model so out-of-model values carry a precise error.

use serde_json::Value;

use crate::domain::value::{ConfigMapping, ConfigValue};

use super::{CodecError, ConfigFormat};

pub fn decode(text: &str) -> Result<ConfigMapping, CodecError> {
    let value: Value = serde_json::from_str(text).map_err(|err| CodecError::Parse {
        format: ConfigFormat::Json,
        reason: err.to_string(),
    })?;
    let Value::Object(map) = value else {
        return Err(unsupported("top-level value must be an object"));
    };
    convert_object(map)
}

fn convert_object(map: serde_json::Map<String, Value>) -> Result<ConfigMapping, CodecError> {
    let mut out = ConfigMapping::new();
    for (key, value) in map {
        out.insert(key, convert_value(value)?);
    }
    Ok(out)
}

fn convert_value(value: Value) -> Result<ConfigValue, CodecError> {
    match value {
        Value::Bool(b) => Ok(ConfigValue::Bool(b)),
        Value::Number(n) => n
            .as_i64()
            .map(ConfigValue::Int)
            .ok_or_else(|| unsupported(&format!("non-integer number {n}"))),
        Value::String(s) => Ok(ConfigValue::String(s)),
        Value::Object(m) => Ok(ConfigValue::Mapping(convert_object(m)?)),
        Value::Null => Err(unsupported("null values are not allowed")),
        Value::Array(_) => Err(unsupported("arrays are not allowed")),
    }
}

fn unsupported(detail: &str) -> CodecError {
    CodecError::UnsupportedValue {
        format: ConfigFormat::Json,
        detail: detail.to_string(),
    }
}

pub fn encode(mapping: &ConfigMapping) -> Result<String, CodecError> {
    serde_json::to_string_pretty(mapping).map_err(|err| CodecError::Encode {
        format: ConfigFormat::Json,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_document() {
        let text = r#"{"project": {"auto_backup": true, "default_project_type": "td"}}"#;
        let mapping = decode(text).unwrap();
        assert_eq!(
            mapping.get_nested("project", "auto_backup"),
            Some(&ConfigValue::Bool(true))
        );
        assert_eq!(
            mapping.get_nested("project", "default_project_type"),
            Some(&ConfigValue::from("td"))
        );
    }

    #[test]
    fn rejects_top_level_array() {
        assert!(matches!(
            decode("[1, 2, 3]").unwrap_err(),
            CodecError::UnsupportedValue { .. }
        ));
    }

    #[test]
    fn rejects_floats_and_nulls() {
        assert!(matches!(
            decode(r#"{"a": 1.5}"#).unwrap_err(),
            CodecError::UnsupportedValue { .. }
        ));
        assert!(matches!(
            decode(r#"{"a": null}"#).unwrap_err(),
            CodecError::UnsupportedValue { .. }
        ));
    }

    #[test]
    fn rejects_trailing_garbage() {
        let err = decode(r#"{"a": 1} trailing"#).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Parse {
                format: ConfigFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn encodes_pretty_printed() {
        let mut mapping = ConfigMapping::new();
        mapping.set_nested("connection", "installation_path", "C:/games/war3");
        let text = encode(&mapping).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"installation_path\""));
    }
}
