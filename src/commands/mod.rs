//! Command implementations for both binaries

pub mod kustomize;
pub mod split;
