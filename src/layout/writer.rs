//! Output writing
//!
//! Every file starts with a `---` separator line and a blank line, followed by
//! the YAML body. Directories are created idempotently and existing files are
//! overwritten.

use std::path::Path;

use serde::Serialize;

use super::Kustomization;
use crate::error::{self, Result};

/// Written before every YAML body
pub const SEPARATOR: &str = "---\n\n";

/// Separator followed by the serialized value
pub fn render<T: Serialize>(value: &T, target: impl Into<String>) -> Result<String> {
    let body = serde_yaml::to_string(value)
        .map_err(|e| error::manifest::serialize_failed(target, &e))?;
    Ok(format!("{SEPARATOR}{body}"))
}

/// Create a directory and its parents; existing directories are fine
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| error::fs::dir_create_failed(dir, &e))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| error::fs::write_failed(path, &e))
}

/// Write one resource document to `path`
pub fn write_document(path: &Path, index: usize, document: &serde_yaml::Value) -> Result<()> {
    let text = render(document, format!("document {index}"))?;
    write_text(path, &text)
}

/// Write a `kustomization.yaml`
pub fn write_kustomization(path: &Path, kustomization: &Kustomization) -> Result<()> {
    let text = render(kustomization, path.display().to_string())?;
    write_text(path, &text)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_document_starts_with_separator() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pod_web.yaml");
        let document: serde_yaml::Value =
            serde_yaml::from_str("kind: Pod\nmetadata:\n  name: web\n").unwrap();

        write_document(&path, 0, &document).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("---\n\nkind: Pod\n"));
        let reparsed: serde_yaml::Value = serde_yaml::from_str(&written).unwrap();
        assert_eq!(reparsed, document);
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("x.yaml");
        std::fs::write(&path, "stale").unwrap();
        let document: serde_yaml::Value = serde_yaml::from_str("kind: Pod\n").unwrap();

        write_document(&path, 0, &document).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "---\n\nkind: Pod\n");
    }

    #[test]
    fn test_kustomization_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("kustomization.yaml");
        let kustomization = Kustomization::new(vec!["app/pod".into(), "app/deployment".into()]);

        write_kustomization(&path, &kustomization).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(SEPARATOR));
        assert!(written.contains("resources:"));
        let reparsed: Kustomization = serde_yaml::from_str(&written).unwrap();
        assert_eq!(reparsed, kustomization);
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("base/app/pod");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/x.yaml");
        let document: serde_yaml::Value = serde_yaml::from_str("kind: Pod\n").unwrap();
        let err = write_document(&path, 0, &document).unwrap_err();
        assert!(matches!(err, crate::error::ManifestError::FileWriteFailed { .. }));
    }
}
