use clap::Parser;
use std::path::PathBuf;

use crate::layout::KustomizeOptions;
use crate::manifest::manifest_stem;

/// Generate a Kustomize base and overlays from a multi-document manifest
#[derive(Parser, Debug)]
#[command(
    name = "kustomize-gen",
    version,
    styles = super::styles(),
    after_help = "EXAMPLES:\n  \
                  Generate base/ and overlays/ here:\n    kustomize-gen app.yaml\n\n\
                  Generate under another directory:\n    kustomize-gen app.yaml --root deploy"
)]
pub struct KustomizeArgs {
    /// Path to the joined Kubernetes manifest file
    pub manifest_file: PathBuf,

    /// Directory that receives `base/` and `overlays/` (defaults to current directory)
    #[arg(long, short = 'r')]
    pub root: Option<PathBuf>,

    /// Do not print written files
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl KustomizeArgs {
    pub fn options(&self) -> KustomizeOptions {
        KustomizeOptions::new(
            self.root.clone().unwrap_or_default(),
            manifest_stem(&self.manifest_file),
        )
    }
}
