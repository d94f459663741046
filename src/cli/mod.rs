//! CLI definitions using clap derive API
//!
//! One argument struct per binary:
//! - split: `k8s-split`, flat output
//! - kustomize: `kustomize-gen`, Kustomize base and overlays

use clap::builder::{Styles, styling::AnsiColor};

pub mod kustomize;
pub mod split;

pub use kustomize::KustomizeArgs;
pub use split::SplitArgs;

/// Help styling shared by both binaries
pub fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
}
