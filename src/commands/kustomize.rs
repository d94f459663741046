//! Kustomize generation command
//!
//! load -> classify -> order -> plan -> write. The whole plan is built before
//! the first file is written.

use crate::cli::KustomizeArgs;
use crate::error::Result;
use crate::layout::{plan_kustomize, write_plan};
use crate::manifest::{ClassifiedResource, classify, load_documents};
use crate::ordering::sort_by_priority;
use crate::ui;

/// Run `kustomize-gen`
pub fn run(args: &KustomizeArgs) -> Result<usize> {
    let documents = load_documents(&args.manifest_file)?;
    let mut resources = documents
        .into_iter()
        .map(classify)
        .collect::<Result<Vec<ClassifiedResource>>>()?;
    sort_by_priority(&mut resources);

    let plan = plan_kustomize(resources, &args.options());
    let mut reporter = ui::reporter(args.quiet);
    write_plan(&plan, reporter.as_mut())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::layout::Kustomization;
    use tempfile::TempDir;

    #[test]
    fn test_run_generates_layout() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("stack.yaml");
        std::fs::write(
            &manifest,
            "kind: Deployment\nmetadata:\n  name: app\n---\nkind: ServiceAccount\nmetadata:\n  name: svc\n",
        )
        .unwrap();
        let args = KustomizeArgs {
            manifest_file: manifest,
            root: Some(temp.path().to_path_buf()),
            quiet: true,
        };

        assert_eq!(run(&args).unwrap(), 2 + 2 + 1 + 3);

        let base: Kustomization = serde_yaml::from_str(
            &std::fs::read_to_string(temp.path().join("base/kustomization.yaml")).unwrap(),
        )
        .unwrap();
        assert_eq!(base.resources, vec!["stack/serviceaccount", "stack/deployment"]);
        assert!(
            temp.path()
                .join("base/stack/serviceaccount/serviceaccount_svc.yaml")
                .is_file()
        );
    }

    #[test]
    fn test_bad_document_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("bad.yaml");
        std::fs::write(&manifest, "kind: Pod\nmetadata:\n  name: p\n---\n- a\n- b\n").unwrap();
        let args = KustomizeArgs {
            manifest_file: manifest,
            root: Some(temp.path().to_path_buf()),
            quiet: true,
        };

        assert!(run(&args).is_err());
        assert!(!temp.path().join("base").exists());
    }
}
