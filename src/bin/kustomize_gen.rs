//! Generate a Kustomize base and overlays from a Kubernetes manifest

use clap::Parser;
use kubesplit::cli::KustomizeArgs;
use kubesplit::commands;

fn main() {
    let args = KustomizeArgs::parse();

    if let Err(e) = commands::kustomize::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
