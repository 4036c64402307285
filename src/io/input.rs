use anyhow::{Context, Result, anyhow};
use indexmap::IndexMap;
use serde_json::Value;

use crate::domain::Entry;

use super::DocumentFormat;

/// Keys accepted for a wrapped catalog (`{"entries": [...]}`); TOML needs one.
const CATALOG_KEYS: [&str; 2] = ["entries", "monsters"];

fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Table>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Parse a catalog document: either a bare list of entries or a wrapper object.
pub fn parse_catalog_str(contents: &str, format: DocumentFormat) -> Result<Vec<Entry>> {
    let document = parse_document_str(contents, format)?;
    let list = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => CATALOG_KEYS
            .iter()
            .find_map(|key| map.remove(*key))
            .ok_or_else(|| anyhow!("catalog object has no `entries` list"))?,
        other => return Err(anyhow!("catalog must be a list of entries, found {other}")),
    };
    serde_json::from_value::<Vec<Entry>>(list).context("catalog entries are malformed")
}

/// Parse a flat settings document into string values.
pub fn parse_settings_str(
    contents: &str,
    format: DocumentFormat,
) -> Result<IndexMap<String, String>> {
    let Value::Object(map) = parse_document_str(contents, format)? else {
        return Err(anyhow!("settings document must be an object"));
    };
    Ok(map
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
            scalar => Some((key, scalar.to_string())),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_entry_lists() {
        let raw = r#"[{"id": 2, "name": "Anjanath"}, {"id": 1, "name": "Jagras"}]"#;
        let entries = parse_catalog_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Anjanath");
    }

    #[test]
    fn parses_wrapped_entry_lists() {
        let raw = r#"{"monsters": [{"id": 1, "name": "Jagras"}]}"#;
        let entries = parse_catalog_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(entries[0].id.0, 1);
    }

    #[test]
    fn rejects_scalar_documents() {
        let err = parse_catalog_str("42", DocumentFormat::Json).unwrap_err();
        assert!(err.to_string().contains("list of entries"));
    }

    #[test]
    fn reports_malformed_entries() {
        let err = parse_catalog_str(r#"[{"name": "no id"}]"#, DocumentFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("id"));
    }

    #[test]
    fn settings_values_are_stringified() {
        let raw = r#"{"items-per-page": 8, "dark-mode": "enabled", "nested": {"x": 1}}"#;
        let settings = parse_settings_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(settings["items-per-page"], "8");
        assert_eq!(settings["dark-mode"], "enabled");
        assert!(!settings.contains_key("nested"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parses_yaml_catalogs() {
        let raw = "- id: 1\n  name: Jagras\n  star: 1\n";
        let entries = parse_catalog_str(raw, DocumentFormat::Yaml).unwrap();
        assert_eq!(entries[0].name, "Jagras");
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parses_toml_catalogs() {
        let raw = "[[entries]]\nid = 1\nname = \"Jagras\"\n";
        let entries = parse_catalog_str(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(entries[0].name, "Jagras");
    }
}
