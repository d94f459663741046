//! Output layouts
//!
//! Two shapes are produced:
//! - [`flat`]: one file per document in a single directory, written as the
//!   manifest is read
//! - [`kustomize`]: `base/<stem>/<kind>/` folders with `kustomization.yaml`
//!   aggregators and overlay scaffolding, planned in memory before writing

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

pub mod flat;
pub mod kustomize;
pub mod writer;

pub use flat::{FlatOptions, write_flat};
pub use kustomize::{KustomizeOptions, plan_kustomize, write_plan};

/// Environments that get an overlay referencing the base
pub const OVERLAY_ENVIRONMENTS: &[&str] = &["development", "staging", "production"];

/// File name of every aggregator
pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";

/// Contents of a `kustomization.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
    pub api_version: String,
    pub kind: String,
    pub resources: Vec<String>,
}

impl Kustomization {
    pub fn new(resources: Vec<String>) -> Self {
        Self {
            api_version: "kustomize.config.k8s.io/v1beta1".to_string(),
            kind: "Kustomization".to_string(),
            resources,
        }
    }
}

/// A resource document and where it goes
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDocument {
    pub dir: PathBuf,
    pub file_name: String,
    /// Source position, for error messages
    pub index: usize,
    pub document: YamlValue,
}

impl PlannedDocument {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// An aggregator file and its entries, relative to its own directory
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedKustomization {
    pub path: PathBuf,
    pub kustomization: Kustomization,
}

/// Everything a Kustomize run writes, in write order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputPlan {
    /// Each directory once, parents before children
    pub directories: Vec<PathBuf>,
    pub documents: Vec<PlannedDocument>,
    pub kustomizations: Vec<PlannedKustomization>,
}

impl OutputPlan {
    /// Record a directory unless it is already planned
    pub fn add_directory(&mut self, dir: PathBuf) {
        if !self.directories.contains(&dir) {
            self.directories.push(dir);
        }
    }

    /// Number of files the plan writes
    pub fn file_count(&self) -> usize {
        self.documents.len() + self.kustomizations.len()
    }
}
