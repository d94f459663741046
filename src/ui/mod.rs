//! User-facing reporting
//!
//! Every file the tools write is announced through the [`Reporter`] trait,
//! so the binaries can print styled output while `--quiet` runs and library
//! tests stay silent:
//! - [`ConsoleReporter`]: `Created: <path>` lines on stdout
//! - [`SilentReporter`]: no output
//! - [`CollectingReporter`]: remembers paths in write order

use std::path::{Path, PathBuf};

use console::Style;

/// Receives one event per written file
pub trait Reporter {
    /// A file was written
    fn created(&mut self, path: &Path);

    /// All files were written
    fn finish(&mut self, total: usize);
}

/// Prints each written file to stdout
#[derive(Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn created(&mut self, path: &Path) {
        println!(
            "{} {}",
            Style::new().green().bold().apply_to("Created:"),
            path.display()
        );
    }

    fn finish(&mut self, total: usize) {
        let noun = if total == 1 { "file" } else { "files" };
        println!("{}", Style::new().dim().apply_to(format!("{total} {noun} written")));
    }
}

/// No-op reporter for `--quiet`
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn created(&mut self, _path: &Path) {}

    fn finish(&mut self, _total: usize) {}
}

/// Records written paths in order
#[derive(Default, Debug)]
pub struct CollectingReporter {
    pub paths: Vec<PathBuf>,
    pub finished: Option<usize>,
}

impl Reporter for CollectingReporter {
    fn created(&mut self, path: &Path) {
        self.paths.push(path.to_path_buf());
    }

    fn finish(&mut self, total: usize) {
        self.finished = Some(total);
    }
}

/// Pick the reporter for a run
pub fn reporter(quiet: bool) -> Box<dyn Reporter> {
    if quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter)
    }
}
