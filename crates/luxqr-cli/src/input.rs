//! # Candidate Input
//!
//! Loads a candidate record from a `.json`, `.yaml` or `.yml` file. YAML
//! is converted to the equivalent JSON value tree before validation so the
//! schema sees one input shape regardless of file format.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use luxqr_core::Candidate;
use serde_json::Value;

/// Read a candidate record from `path`. The format is chosen by extension;
/// anything that is not `.yaml`/`.yml` is read as JSON.
pub fn load_candidate(path: &Path) -> Result<Candidate> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let value = if is_yaml(path) {
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML in {}", path.display()))?;
        yaml_to_json_value(&yaml)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("unsupported YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), "loaded candidate");
    Candidate::from_value(value).with_context(|| format!("{} is not a record", path.display()))
}

/// Read all of `path`, or stdin when `path` is `None` or `-`.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Record files use only the JSON-compatible subset of YAML. Tags are
/// dropped and scalar map keys are stringified.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(Value::from(u))
            } else if let Some(i) = n.as_i64() {
                Ok(Value::from(i))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tote.json");
        std::fs::write(&path, r#"{"productName":"Tote","warrantyMonths":12}"#).unwrap();

        let c = load_candidate(&path).unwrap();
        assert_eq!(c.get("productName"), Some(&json!("Tote")));
        assert_eq!(c.get("warrantyMonths"), Some(&json!(12)));
    }

    #[test]
    fn loads_yaml_file_as_json_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tote.yml");
        std::fs::write(
            &path,
            concat!(
                "productName: Tote\n",
                "sku: HB-1\n",
                "warrantyMonths: 24\n",
                "manufacturingDate: \"2024-06-15T00:00:00Z\"\n",
            ),
        )
        .unwrap();

        let c = load_candidate(&path).unwrap();
        assert_eq!(c.get("sku"), Some(&json!("HB-1")));
        assert_eq!(c.get("warrantyMonths"), Some(&json!(24)));
        assert_eq!(c.get("manufacturingDate"), Some(&json!("2024-06-15T00:00:00Z")));
    }

    #[test]
    fn rejects_non_object_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let err = load_candidate(&path).unwrap_err();
        assert!(format!("{err:#}").contains("not a record"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_candidate(&dir.path().join("nope.json")).is_err());
        assert!(load_candidate(dir.path()).is_err());
    }

    #[test]
    fn yaml_numeric_keys_are_stringified() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes").unwrap();
        let json = yaml_to_json_value(&yaml).unwrap();
        assert_eq!(json, json!({"1": "one", "true": "yes"}));
    }

    #[test]
    fn reads_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pasted.txt");
        std::fs::write(&path, "  {\"sku\":\"A\"}\n").unwrap();
        assert_eq!(read_text(Some(&path)).unwrap(), "  {\"sku\":\"A\"}\n");
    }
}
