//! Path helpers for kustomization references
//!
//! Kustomize resolves `resources` entries relative to the directory holding
//! the `kustomization.yaml`, always with forward slashes.

use std::path::{Component, Path, PathBuf};

/// Convert a path to a string with forward slashes
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Lexical path from directory `from` to `to`.
///
/// Both paths must be expressed against the same root (both relative to the
/// working directory, or both absolute); nothing is resolved on disk.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use kubesplit::path_utils::relative_path;
///
/// assert_eq!(
///     relative_path(Path::new("overlays/staging"), Path::new("base")),
///     PathBuf::from("../../base")
/// );
/// assert_eq!(
///     relative_path(Path::new("base"), Path::new("base/app/pod")),
///     PathBuf::from("app/pod")
/// );
/// ```
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = normal_components(from);
    let to: Vec<Component> = normal_components(to);

    let shared = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in shared..from.len() {
        relative.push("..");
    }
    for component in &to[shared..] {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

/// Kustomization entry for `to`, seen from directory `from`
pub fn resource_reference(from: &Path, to: &Path) -> String {
    to_forward_slashes(&relative_path(from, to))
}

fn normal_components(path: &Path) -> Vec<Component<'_>> {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}
