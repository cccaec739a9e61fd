//! INI codec.
//!
//! No crate in our stack speaks INI, and the dialect we need is tiny:
//! `[section]` headers, `key = value` pairs, `;` or `#` comments. Values are
//! coerced to booleans and integers on decode so that the same file produces
//! the same typed mapping a YAML or JSON source would.

use crate::domain::value::{ConfigMapping, ConfigValue};

use super::{CodecError, ConfigFormat};

pub fn decode(text: &str) -> Result<ConfigMapping, CodecError> {
    let mut root = ConfigMapping::new();
    let mut current_section: Option<String> = None;

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let Some(name) = header.strip_suffix(']') else {
                return Err(parse_error(line_no, "unterminated section header"));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(parse_error(line_no, "empty section name"));
            }
            current_section = Some(name.to_string());
            // Make empty sections visible in the decoded mapping.
            if root.section(name).is_none() {
                root.insert(name, ConfigValue::Mapping(ConfigMapping::new()));
            }
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(parse_error(line_no, "expected 'key = value'"));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(parse_error(line_no, "empty key"));
        }
        let Some(section) = &current_section else {
            return Err(parse_error(line_no, "key outside any [section]"));
        };
        root.set_nested(section, key, coerce_scalar(value.trim()));
    }

    Ok(root)
}

fn parse_error(line_no: usize, reason: &str) -> CodecError {
    CodecError::Parse {
        format: ConfigFormat::Ini,
        reason: format!("line {}: {reason}", line_no + 1),
    }
}

/// Booleans first, then integers, then plain text.
pub fn coerce_scalar(raw: &str) -> ConfigValue {
    if raw.eq_ignore_ascii_case("true") {
        return ConfigValue::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return ConfigValue::Bool(false);
    }
    if let Ok(i) = raw.parse::<i64>() {
        return ConfigValue::Int(i);
    }
    ConfigValue::from(raw)
}

pub fn encode(mapping: &ConfigMapping) -> Result<String, CodecError> {
    let mut out = String::new();
    for (section, value) in mapping.entries() {
        let ConfigValue::Mapping(body) = value else {
            return Err(CodecError::Flatten {
                key: section.to_string(),
            });
        };
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("[{section}]\n"));
        for (key, leaf) in body.entries() {
            if !leaf.is_scalar() {
                return Err(CodecError::Flatten {
                    key: format!("{section}.{key}"),
                });
            }
            out.push_str(&format!("{key} = {leaf}\n"));
        }
    }
    Ok(out)
}

// ── tests ─────────────────────────────────────────────────────────────────────
