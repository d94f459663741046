//! File system errors

use std::path::Path;

use super::ManifestError;

/// Maps a failure to read the source manifest, distinguishing a missing file
pub fn read_failed(path: &Path, err: &std::io::Error) -> ManifestError {
    if err.kind() == std::io::ErrorKind::NotFound {
        ManifestError::FileNotFound {
            path: path.display().to_string(),
        }
    } else {
        ManifestError::FileReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

pub fn dir_create_failed(path: &Path, err: &std::io::Error) -> ManifestError {
    ManifestError::DirCreateFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

pub fn write_failed(path: &Path, err: &std::io::Error) -> ManifestError {
    ManifestError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
