//! Flat split command
//!
//! load -> classify -> write, one document at a time.

use crate::cli::SplitArgs;
use crate::error::Result;
use crate::layout::write_flat;
use crate::manifest::{documents, read_manifest};
use crate::ui;

/// Run `k8s-split`
pub fn run(args: &SplitArgs) -> Result<usize> {
    let content = read_manifest(&args.manifest_file)?;
    let mut reporter = ui::reporter(args.quiet);
    write_flat(
        documents(&content, &args.manifest_file),
        &args.options(),
        reporter.as_mut(),
    )
}
