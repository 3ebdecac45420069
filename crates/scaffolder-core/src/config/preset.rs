//! YAML answer presets
//!
//! A preset answers any subset of the questions, using the same field names
//! as the prompt flow:
//!
//! ```yaml
//! framework: vite-react-ts
//! packageManager: pnpm
//! query: react-query
//! extras: [eslint-prettier, husky-lint-staged]
//! ```

use crate::answers::PartialAnswers;
use crate::error::ScaffoldError;
use std::path::Path;
use tokio::fs;

/// Load a preset file
pub async fn load_preset(path: &Path) -> Result<PartialAnswers, ScaffoldError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ScaffoldError::io(path, source))?;

    // An empty file answers nothing
    if content.trim().is_empty() {
        return Ok(PartialAnswers::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ScaffoldError::Preset {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Extra, PackageManager, Query};

    #[tokio::test]
    async fn test_load_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.yaml");
        std::fs::write(
            &path,
            "packageManager: npm\nquery: react-query\nextras:\n  - clsx\n",
        )
        .unwrap();

        let answers = load_preset(&path).await.unwrap();
        assert_eq!(answers.package_manager, Some(PackageManager::Npm));
        assert_eq!(answers.query, Some(Query::ReactQuery));
        assert_eq!(answers.extras, Some(vec![Extra::Clsx]));
        assert_eq!(answers.framework, None);
    }

    #[tokio::test]
    async fn test_empty_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(&path, "\n").unwrap();

        assert_eq!(load_preset(&path).await.unwrap(), PartialAnswers::default());
    }

    #[tokio::test]
    async fn test_invalid_preset_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "framework: svelte\n").unwrap();

        let err = load_preset(&path).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Preset { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[tokio::test]
    async fn test_unknown_preset_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("typo.yaml");
        std::fs::write(&path, "packagemanager: npm\n").unwrap();

        assert!(load_preset(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_preset_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_preset(&dir.path().join("nope.yaml")).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
