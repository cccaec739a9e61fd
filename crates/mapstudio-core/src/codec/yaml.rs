//! YAML codec, the primary on-disk format.
//!
//! Decoding goes through [`serde_yaml::Value`] so that documents outside the
//! config model (floats, sequences, nulls) are reported precisely instead of
//! as a generic deserialization failure.

use serde_yaml::Value;

use crate::domain::value::{ConfigMapping, ConfigValue};

use super::{CodecError, ConfigFormat};

pub fn decode(text: &str) -> Result<ConfigMapping, CodecError> {
    let value: Value = serde_yaml::from_str(text).map_err(|err| CodecError::Parse {
        format: ConfigFormat::Yaml,
        reason: err.to_string(),
    })?;
    let Value::Mapping(map) = value else {
        return Err(unsupported("top-level value must be a mapping"));
    };
    convert_mapping(map)
}

fn convert_mapping(map: serde_yaml::Mapping) -> Result<ConfigMapping, CodecError> {
    let mut out = ConfigMapping::new();
    for (key, value) in map {
        let Value::String(key) = key else {
            return Err(unsupported("mapping keys must be strings"));
        };
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
        Value::Mapping(m) => Ok(ConfigValue::Mapping(convert_mapping(m)?)),
        Value::Null => Err(unsupported("null values are not allowed")),
        Value::Sequence(_) => Err(unsupported("sequences are not allowed")),
        Value::Tagged(_) => Err(unsupported("tagged values are not allowed")),
    }
}

fn unsupported(detail: &str) -> CodecError {
    CodecError::UnsupportedValue {
        format: ConfigFormat::Yaml,
        detail: detail.to_string(),
    }
}

pub fn encode(mapping: &ConfigMapping) -> Result<String, CodecError> {
    serde_yaml::to_string(mapping).map_err(|err| CodecError::Encode {
        format: ConfigFormat::Yaml,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_document() {
        let text = "editor:\n  default_editor: world_editor\n  backup_enabled: true\n  auto_save_interval: 300\n";
        let mapping = decode(text).unwrap();
        assert_eq!(
            mapping.get_nested("editor", "default_editor"),
            Some(&ConfigValue::from("world_editor"))
        );
        assert_eq!(
            mapping.get_nested("editor", "backup_enabled"),
            Some(&ConfigValue::Bool(true))
        );
        assert_eq!(
            mapping.get_nested("editor", "auto_save_interval"),
            Some(&ConfigValue::Int(300))
        );
    }

    #[test]
    fn rejects_malformed_document() {
        let err = decode("editor: [unclosed").unwrap_err();
        assert!(matches!(
            err,
            CodecError::Parse {
                format: ConfigFormat::Yaml,
                ..
            }
        ));
    }

    #[test]
    fn rejects_floats_sequences_and_nulls() {
        for text in [
            "editor:\n  scale: 1.5\n",
            "editor:\n  tools: [a, b]\n",
            "editor:\n  empty: null\n",
        ] {
            let err = decode(text).unwrap_err();
            assert!(
                matches!(err, CodecError::UnsupportedValue { .. }),
                "expected UnsupportedValue for {text:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn rejects_top_level_scalar() {
        assert!(matches!(
            decode("just a string").unwrap_err(),
            CodecError::UnsupportedValue { .. }
        ));
    }

    #[test]
    fn encodes_scalars_without_quotes_where_possible() {
        let mut mapping = ConfigMapping::new();
        mapping.set_nested("development", "log_level", "info");
        let text = encode(&mapping).unwrap();
        assert!(text.contains("log_level: info"));
    }

    #[test]
    fn empty_document_is_an_error_not_a_mapping() {
        // An empty document parses as null, which the model rejects.
        assert!(decode("").is_err());
    }
}
