//! Error types and handling for kubesplit
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`fs`]: reading the source manifest and writing output files
//! - [`manifest`]: parsing and classifying manifest documents

pub mod fs;
pub mod manifest;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for kubesplit operations
#[derive(Error, Diagnostic, Debug)]
pub enum ManifestError {
    // Source errors
    #[error("Manifest not found: {path}")]
    #[diagnostic(
        code(kubesplit::fs::not_found),
        help("Pass the path of an existing multi-document YAML file")
    )]
    FileNotFound { path: String },

    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(code(kubesplit::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    // Manifest errors
    #[error("Failed to parse YAML in {path}: {reason}")]
    #[diagnostic(
        code(kubesplit::manifest::parse_failed),
        help("Each document must be valid YAML, separated by '---' lines")
    )]
    ParseFailed { path: String, reason: String },

    #[error("Document {index} is not a mapping")]
    #[diagnostic(
        code(kubesplit::manifest::not_a_mapping),
        help("Every document must be a Kubernetes object with top-level keys")
    )]
    NotAMapping { index: usize },

    #[error("Document {index} has a non-text kind")]
    #[diagnostic(
        code(kubesplit::manifest::non_text_kind),
        help("The 'kind' field is used to build file names and must be a string")
    )]
    NonTextKind { index: usize },

    #[error("Failed to serialize {target}: {reason}")]
    #[diagnostic(code(kubesplit::manifest::serialize_failed))]
    SerializeFailed { target: String, reason: String },

    // Output errors
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(kubesplit::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(kubesplit::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ManifestError>;
