use clap::Parser;
use std::path::PathBuf;

use crate::layout::FlatOptions;
use crate::layout::flat::DEFAULT_OUTPUT_DIR;

/// Split a multi-document Kubernetes manifest into one file per resource
#[derive(Parser, Debug)]
#[command(
    name = "k8s-split",
    version,
    styles = super::styles(),
    after_help = "EXAMPLES:\n  \
                  Split into ./output:\n    k8s-split all.yaml\n\n\
                  Split into another directory:\n    k8s-split all.yaml --output manifests\n\n\
                  Name files by position:\n    k8s-split all.yaml --by-index"
)]
pub struct SplitArgs {
    /// Path to the joined Kubernetes manifest file
    pub manifest_file: PathBuf,

    /// Directory that receives the split files
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Name files `<kind>_<index>.yaml` instead of `<kind>_<name>.yaml`
    #[arg(long)]
    pub by_index: bool,

    /// Do not print written files
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl SplitArgs {
    pub fn options(&self) -> FlatOptions {
        FlatOptions {
            output_dir: self.output.clone(),
            by_index: self.by_index,
        }
    }
}
