//! `package.json` read-merge-write

use crate::error::ScaffoldError;
use serde_json::{json, Value};
use std::path::Path;
use tokio::fs;

/// File name of the project manifest
pub const PACKAGE_JSON: &str = "package.json";

/// Deep-merge `patch` into `target`
///
/// Objects present on both sides are merged key by key; any other value in
/// `patch` replaces the one in `target`. Existing keys keep their position.
pub fn merge(target: &mut Value, patch: &Value) {
    match (target, patch) {
        (Value::Object(target), Value::Object(patch)) => {
            for (key, value) in patch {
                let both_objects = value.is_object() && target.get(key).is_some_and(Value::is_object);
                if both_objects {
                    if let Some(existing) = target.get_mut(key) {
                        merge(existing, value);
                    }
                } else {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
        (target, patch) => *target = patch.clone(),
    }
}

/// Set a top-level `key`, replacing whatever value it held
pub fn set_field(target: &mut Value, key: &str, value: Value) {
    match target {
        Value::Object(map) => {
            map.insert(key.to_string(), value);
        }
        other => *other = json!({ key: value }),
    }
}

/// Merge `patch` into the manifest at `path` and write it back
pub async fn merge_file(path: &Path, patch: &Value) -> Result<(), ScaffoldError> {
    update_file(path, |manifest| merge(manifest, patch)).await
}

/// Replace one top-level key of the manifest at `path` and write it back
pub async fn set_field_file(path: &Path, key: &str, value: &Value) -> Result<(), ScaffoldError> {
    update_file(path, |manifest| set_field(manifest, key, value.clone())).await
}

/// Read, update and rewrite a manifest
///
/// The file is rewritten with two-space indentation and a trailing newline.
async fn update_file(
    path: &Path,
    update: impl FnOnce(&mut Value),
) -> Result<(), ScaffoldError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ScaffoldError::io(path, source))?;
    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|source| ScaffoldError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;

    update(&mut manifest);

    let mut output =
        serde_json::to_string_pretty(&manifest).map_err(|source| ScaffoldError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
    output.push('\n');

    fs::write(path, output)
        .await
        .map_err(|source| ScaffoldError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_extends_nested_objects() {
        let mut manifest = json!({
            "name": "app",
            "scripts": { "dev": "vite", "build": "tsc -b && vite build" }
        });
        merge(
            &mut manifest,
            &json!({ "scripts": { "lint": "eslint . --ext .ts,.tsx", "dev": "vite --host" } }),
        );

        assert_eq!(manifest["scripts"]["build"], "tsc -b && vite build");
        assert_eq!(manifest["scripts"]["lint"], "eslint . --ext .ts,.tsx");
        assert_eq!(manifest["scripts"]["dev"], "vite --host");
        let keys: Vec<&String> = manifest["scripts"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["dev", "build", "lint"]);
    }

    #[test]
    fn test_merge_adds_and_replaces_keys() {
        let mut manifest = json!({ "name": "app", "private": true });
        merge(
            &mut manifest,
            &json!({ "private": false, "lint-staged": { "*.ts": ["eslint --fix"] } }),
        );
        assert_eq!(manifest["private"], false);
        assert_eq!(manifest["lint-staged"]["*.ts"], json!(["eslint --fix"]));
    }

    #[test]
    fn test_merge_creates_missing_object() {
        let mut manifest = json!({ "name": "app" });
        merge(&mut manifest, &json!({ "scripts": { "format": "prettier --write ." } }));
        assert_eq!(manifest["scripts"], json!({ "format": "prettier --write ." }));
    }

    #[tokio::test]
    async fn test_merge_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PACKAGE_JSON);
        std::fs::write(&path, "{\"name\":\"app\",\"version\":\"0.0.0\"}").unwrap();

        merge_file(&path, &json!({ "scripts": { "lint": "eslint ." } }))
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"name\": \"app\",\n  \"version\": \"0.0.0\",\n  \"scripts\": {\n    \"lint\": \"eslint .\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_set_field_replaces_existing_value() {
        let mut manifest = json!({
            "name": "app",
            "lint-staged": { "*.js": ["old"] },
            "private": true
        });
        set_field(
            &mut manifest,
            "lint-staged",
            json!({ "*/**/*.{ts,tsx}": ["eslint --fix"] }),
        );

        assert_eq!(
            manifest["lint-staged"],
            json!({ "*/**/*.{ts,tsx}": ["eslint --fix"] })
        );
        let keys: Vec<&String> = manifest.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "lint-staged", "private"]);
    }

    #[tokio::test]
    async fn test_set_field_file_appends_new_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PACKAGE_JSON);
        std::fs::write(&path, "{\"name\":\"app\"}").unwrap();

        set_field_file(&path, "lint-staged", &json!({ "*.ts": ["prettier --write"] }))
            .await
            .unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({ "name": "app", "lint-staged": { "*.ts": ["prettier --write"] } })
        );
    }

    #[tokio::test]
    async fn test_merge_file_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PACKAGE_JSON);
        std::fs::write(&path, "{ not json").unwrap();

        let err = merge_file(&path, &json!({})).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Manifest { .. }));
    }

    #[tokio::test]
    async fn test_merge_file_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = merge_file(&dir.path().join(PACKAGE_JSON), &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
