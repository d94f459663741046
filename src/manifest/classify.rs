//! Resource classification
//!
//! Derives a `kind` and a `name` for every parsed document. Missing fields get
//! placeholders keyed by the document's ordinal position, so a document is
//! never rejected just for lacking `kind` or `metadata.name`.

use serde_yaml::Value as YamlValue;

use super::ParsedDocument;
use crate::error::{ManifestError, Result};
use crate::ordering::priority_for;

/// A document with its derived identity and ordering priority
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedResource {
    pub index: usize,
    pub kind: String,
    pub name: String,
    pub priority: u32,
    pub document: YamlValue,
}

impl ClassifiedResource {
    /// Lower-cased kind, used both as file prefix and as Kustomize folder name
    pub fn kind_slug(&self) -> String {
        self.kind.to_lowercase()
    }

    /// `<kind>_<name>.yaml`
    pub fn file_name(&self) -> String {
        format!("{}_{}.yaml", self.kind_slug(), self.name)
    }

    /// `<kind>_<index>.yaml`, for splitting without name lookup
    pub fn indexed_file_name(&self) -> String {
        format!("{}_{}.yaml", self.kind_slug(), self.index)
    }
}

/// Classify one parsed document
pub fn classify(document: ParsedDocument) -> Result<ClassifiedResource> {
    let ParsedDocument { index, value } = document;
    if !value.is_mapping() {
        return Err(ManifestError::NotAMapping { index });
    }

    let kind = read_kind(index, &value)?;
    let name = read_name(index, &value);
    let priority = priority_for(&kind);

    Ok(ClassifiedResource {
        index,
        kind,
        name,
        priority,
        document: value,
    })
}

fn read_kind(index: usize, value: &YamlValue) -> Result<String> {
    match value.get("kind") {
        None | Some(YamlValue::Null) => Ok(format!("unknown_{index}")),
        Some(YamlValue::String(kind)) => Ok(kind.clone()),
        // Lower-casing needs text
        Some(_) => Err(ManifestError::NonTextKind { index }),
    }
}

fn read_name(index: usize, value: &YamlValue) -> String {
    match value.get("metadata").and_then(|metadata| metadata.get("name")) {
        None | Some(YamlValue::Null) => format!("unnamed_{index}"),
        Some(name) => render_scalar(name).unwrap_or_else(|| format!("unnamed_{index}")),
    }
}

/// Text of a YAML value as it would appear in a file name
fn render_scalar(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Tagged(tagged) => render_scalar(&tagged.value),
        other => serde_yaml::to_string(other)
            .ok()
            .map(|text| text.trim().replace('\n', " ")),
    }
}
