//! Resource ordering for Kustomize output
//!
//! Resources are listed so that RBAC primitives come before the workloads
//! that reference them, since tools applying files in listing order would
//! otherwise create workloads whose service accounts do not exist yet.
//!
//! ## Priorities
//!
//! | Kind                                    | Priority |
//! |-----------------------------------------|----------|
//! | `ServiceAccount`                        | 1        |
//! | `Role`                                  | 2        |
//! | `ClusterRole`                           | 3        |
//! | `RoleBinding`                           | 4        |
//! | `ClusterRoleBinding`                    | 5        |
//! | `Deployment`, `DaemonSet`, `StatefulSet`, `Pod` | 100 |
//! | anything else                           | 99       |
//!
//! Resources with equal priority keep their original document order.

use crate::manifest::ClassifiedResource;

/// Priority of kinds missing from the table
pub const DEFAULT_PRIORITY: u32 = 99;

/// Fixed kind priorities, lowest first
const KIND_PRIORITIES: &[(&str, u32)] = &[
    ("ServiceAccount", 1),
    ("Role", 2),
    ("ClusterRole", 3),
    ("RoleBinding", 4),
    ("ClusterRoleBinding", 5),
    ("Deployment", 100),
    ("DaemonSet", 100),
    ("StatefulSet", 100),
    ("Pod", 100),
];

/// Priority for a resource kind. Matching is case-sensitive.
pub fn priority_for(kind: &str) -> u32 {
    KIND_PRIORITIES
        .iter()
        .find(|(known, _)| *known == kind)
        .map_or(DEFAULT_PRIORITY, |(_, priority)| *priority)
}

/// Sort resources by ascending priority.
///
/// `sort_by_key` is stable, which is what keeps same-priority resources in
/// document order.
pub fn sort_by_priority(resources: &mut [ClassifiedResource]) {
    resources.sort_by_key(|resource| resource.priority);
}
