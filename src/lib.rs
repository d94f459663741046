//! kubesplit - Kubernetes manifest splitter
//!
//! Splits a multi-document Kubernetes manifest into one file per resource,
//! either flat into a single directory (`k8s-split`) or arranged as a
//! Kustomize base with per-kind folders and overlay environments
//! (`kustomize-gen`).

pub mod cli;
pub mod commands;
pub mod error;
pub mod layout;
pub mod manifest;
pub mod ordering;
pub mod path_utils;
pub mod ui;

pub use error::{ManifestError, Result};
