//! Kustomize layout
//!
//! Produces, under the chosen root:
//!
//! ```text
//! base/
//!   kustomization.yaml            resources: [<stem>/<kind>, ...]
//!   <stem>/
//!     <kind>/
//!       kustomization.yaml        resources: [<kind>_<name>.yaml, ...]
//!       <kind>_<name>.yaml
//! overlays/
//!   development/kustomization.yaml   resources: [../../base]
//!   staging/kustomization.yaml
//!   production/kustomization.yaml
//! ```
//!
//! Resources are expected in priority order (see [`crate::ordering`]). Kind
//! folders are keyed by the lower-cased kind, so `Pod` and `pod` share one;
//! a folder ranks by the highest priority among its members, ties in the
//! order the folder first appears.

use std::path::PathBuf;

use super::{
    KUSTOMIZATION_FILE, Kustomization, OVERLAY_ENVIRONMENTS, OutputPlan, PlannedDocument,
    PlannedKustomization, writer,
};
use crate::error::Result;
use crate::manifest::ClassifiedResource;
use crate::path_utils::resource_reference;
use crate::ui::Reporter;

/// Options for a Kustomize layout
#[derive(Debug, Clone, PartialEq)]
pub struct KustomizeOptions {
    /// Directory that receives `base/` and `overlays/`
    pub root: PathBuf,
    /// Manifest file name without extension; names the folder under `base/`
    pub stem: String,
    pub environments: Vec<String>,
}

impl KustomizeOptions {
    pub fn new(root: PathBuf, stem: impl Into<String>) -> Self {
        Self {
            root,
            stem: stem.into(),
            environments: OVERLAY_ENVIRONMENTS.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn base_dir(&self) -> PathBuf {
        self.root.join("base")
    }

    pub fn overlays_dir(&self) -> PathBuf {
        self.root.join("overlays")
    }
}

/// Members of one kind folder
struct KindFolder {
    dir: PathBuf,
    files: Vec<String>,
    priority: u32,
}

/// Build the full output plan for already-sorted resources
pub fn plan_kustomize(
    resources: Vec<ClassifiedResource>,
    options: &KustomizeOptions,
) -> OutputPlan {
    let base_dir = options.base_dir();
    let stem_dir = base_dir.join(&options.stem);

    let mut plan = OutputPlan::default();
    plan.add_directory(base_dir.clone());
    plan.add_directory(stem_dir.clone());

    let mut folders: Vec<KindFolder> = Vec::new();
    for resource in resources {
        let dir = stem_dir.join(resource.kind_slug());
        let file_name = resource.file_name();

        let position = match folders.iter().position(|folder| folder.dir == dir) {
            Some(position) => position,
            None => {
                plan.add_directory(dir.clone());
                folders.push(KindFolder {
                    dir: dir.clone(),
                    files: Vec::new(),
                    priority: resource.priority,
                });
                folders.len() - 1
            }
        };
        // A colliding file is written twice but listed once
        let folder = &mut folders[position];
        folder.priority = folder.priority.max(resource.priority);
        if !folder.files.contains(&file_name) {
            folder.files.push(file_name.clone());
        }

        plan.documents.push(PlannedDocument {
            dir,
            file_name,
            index: resource.index,
            document: resource.document,
        });
    }

    folders.sort_by_key(|folder| folder.priority);

    let mut base_entries = Vec::with_capacity(folders.len());
    for folder in folders {
        base_entries.push(resource_reference(&base_dir, &folder.dir));
        plan.kustomizations.push(PlannedKustomization {
            path: folder.dir.join(KUSTOMIZATION_FILE),
            kustomization: Kustomization::new(folder.files),
        });
    }
    plan.kustomizations.push(PlannedKustomization {
        path: base_dir.join(KUSTOMIZATION_FILE),
        kustomization: Kustomization::new(base_entries),
    });

    let overlays_dir = options.overlays_dir();
    plan.add_directory(overlays_dir.clone());
    for environment in &options.environments {
        let env_dir = overlays_dir.join(environment);
        plan.add_directory(env_dir.clone());
        plan.kustomizations.push(PlannedKustomization {
            path: env_dir.join(KUSTOMIZATION_FILE),
            kustomization: Kustomization::new(vec![resource_reference(&env_dir, &base_dir)]),
        });
    }

    plan
}

/// Write a plan: directories, then documents, then aggregators
pub fn write_plan(plan: &OutputPlan, reporter: &mut dyn Reporter) -> Result<usize> {
    for dir in &plan.directories {
        writer::ensure_dir(dir)?;
    }

    for planned in &plan.documents {
        let path = planned.path();
        writer::write_document(&path, planned.index, &planned.document)?;
        reporter.created(&path);
    }

    for planned in &plan.kustomizations {
        writer::write_kustomization(&planned.path, &planned.kustomization)?;
        reporter.created(&planned.path);
    }

    let total = plan.file_count();
    reporter.finish(total);
    Ok(total)
}
