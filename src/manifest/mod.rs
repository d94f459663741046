//! Manifest loading
//!
//! This module handles:
//! - Reading a multi-document YAML manifest from disk
//! - Splitting it into documents, lazily, and skipping empty ones
//! - Classifying each document by kind and name (see [`classify`])

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value as YamlValue;

use crate::error::{self, Result};

pub mod classify;

pub use classify::{ClassifiedResource, classify};

/// One non-empty document from a manifest stream
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Zero-based position in the source stream, empty documents included
    pub index: usize,
    /// Document root as parsed
    pub value: YamlValue,
}

/// Read the manifest at `path`
pub fn read_manifest(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, &e))
}

/// Read and parse every document of the manifest at `path`
pub fn load_documents(path: &Path) -> Result<Vec<ParsedDocument>> {
    let content = read_manifest(path)?;
    documents(&content, path).collect()
}

/// Lazily parse a multi-document YAML string, dropping null documents.
///
/// Each document is parsed only when the iterator reaches it, so a caller
/// can act on earlier documents before a malformed one is seen. Indexes keep
/// counting across dropped documents so placeholder names stay tied to the
/// document's position in the file. `path` only labels parse errors.
pub fn documents<'a>(
    content: &'a str,
    path: &'a Path,
) -> impl Iterator<Item = Result<ParsedDocument>> + 'a {
    serde_yaml::Deserializer::from_str(content)
        .enumerate()
        .filter_map(move |(index, document)| match YamlValue::deserialize(document) {
            Ok(value) if value.is_null() => None,
            Ok(value) => Some(Ok(ParsedDocument { index, value })),
            Err(e) => Some(Err(error::manifest::parse_failed(path, &e))),
        })
}

/// Parse a whole multi-document YAML string held in memory
pub fn parse_documents(content: &str) -> Result<Vec<ParsedDocument>> {
    documents(content, Path::new("<input>")).collect()
}

/// Manifest file name without its last extension (`app.prod.yaml` -> `app.prod`)
pub fn manifest_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
