//! Common test utilities for kubesplit integration tests

use std::path::PathBuf;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A scratch working directory for one test
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).is_file()
    }

    /// Relative paths of all files under `dir`, sorted
    pub fn files_under(&self, dir: &str) -> Vec<String> {
        let root = self.path.join(dir);
        let mut files: Vec<String> = WalkDir::new(&root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(&root)
                    .expect("Walked path outside root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }

    /// `resources` entries of a kustomization file
    pub fn kustomization_resources(&self, path: &str) -> Vec<String> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(&self.read_file(path)).expect("Invalid kustomization YAML");
        value["resources"]
            .as_sequence()
            .expect("Missing resources list")
            .iter()
            .map(|entry| entry.as_str().expect("Non-string resource").to_string())
            .collect()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Two resources: an RBAC primitive listed after the workload that uses it
#[allow(dead_code)]
pub const WORKLOAD_FIRST: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: app
spec:
  replicas: 2
---
apiVersion: v1
kind: ServiceAccount
metadata:
  name: svc
";

/// The example from the README: service account first
#[allow(dead_code)]
pub const SVC_THEN_APP: &str = "\
kind: ServiceAccount
metadata:
  name: svc
---
kind: Deployment
metadata:
  name: app
";
