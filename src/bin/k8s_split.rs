//! Split a Kubernetes manifest into one file per resource

use clap::Parser;
use kubesplit::cli::SplitArgs;
use kubesplit::commands;

fn main() {
    let args = SplitArgs::parse();

    if let Err(e) = commands::split::run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
