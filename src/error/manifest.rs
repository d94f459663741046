//! Manifest parsing errors

use std::path::Path;

use super::ManifestError;

pub fn parse_failed(path: &Path, err: &serde_yaml::Error) -> ManifestError {
    ManifestError::ParseFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn serialize_failed(target: impl Into<String>, err: &serde_yaml::Error) -> ManifestError {
    ManifestError::SerializeFailed {
        target: target.into(),
        reason: err.to_string(),
    }
}
