//! Flat layout: every document in one directory
//!
//! Files are named `<kind>_<name>.yaml` (or `<kind>_<index>.yaml` when
//! splitting by position). Two resources sharing a file name overwrite each
//! other; the last one in the manifest wins.

use std::path::PathBuf;

use super::writer;
use crate::error::Result;
use crate::manifest::{ParsedDocument, classify};
use crate::ui::Reporter;

/// Default flat output directory
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Options for a flat split
#[derive(Debug, Clone, PartialEq)]
pub struct FlatOptions {
    pub output_dir: PathBuf,
    /// Name files by position instead of `metadata.name`
    pub by_index: bool,
}

impl Default for FlatOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            by_index: false,
        }
    }
}

/// Classify and write each document as it comes. Returns the number of files written.
///
/// Documents are pulled one at a time, so everything before a malformed
/// document is already on disk when its error is returned.
pub fn write_flat(
    documents: impl IntoIterator<Item = Result<ParsedDocument>>,
    options: &FlatOptions,
    reporter: &mut dyn Reporter,
) -> Result<usize> {
    writer::ensure_dir(&options.output_dir)?;

    let mut written = 0;
    for document in documents {
        let resource = classify(document?)?;
        let file_name = if options.by_index {
            resource.indexed_file_name()
        } else {
            resource.file_name()
        };
        let path = options.output_dir.join(file_name);
        writer::write_document(&path, resource.index, &resource.document)?;
        reporter.created(&path);
        written += 1;
    }

    reporter.finish(written);
    Ok(written)
}
