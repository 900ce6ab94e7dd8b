//! Console reporter
//!
//! Complete file names go to stdout so the result stream stays
//! machine-parseable; everything else is diagnostics on stderr.

use std::io::Write;
use std::path::Path;

use super::CheckReporter;
use crate::check::{CheckResults, FileStatus};
use crate::domain::{FileIndex, PieceIndex};

/// Console implementation for check operations
pub struct ConsoleCheckReporter {
    verbose: bool,
    /// Selection mode suppresses names; the list is the primary output then
    print_names: bool,
}

impl ConsoleCheckReporter {
    pub fn new(verbose: bool, print_names: bool) -> Self {
        Self {
            verbose,
            print_names,
        }
    }
}

impl CheckReporter for ConsoleCheckReporter {
    fn report_check_start(&self, name: &str, num_files: usize, num_pieces: usize) {
        eprintln!(
            "Checking \"{}\" ({} files, {} pieces)",
            name, num_files, num_pieces
        );
    }

    fn report_piece(&self, piece: PieceIndex, total: usize) {
        if self.verbose {
            eprint!("\rpiece {} of {} ", piece.as_usize() + 1, total);
            std::io::stderr().flush().ok();
        }
    }

    fn report_file_status(&self, _file: FileIndex, path: &Path, status: FileStatus) {
        if self.verbose {
            eprintln!("\rTarget: \"{}\" - {}.", path.display(), status);
        }
    }

    fn report_file_complete(&self, _file: FileIndex, path: &Path) {
        if self.print_names {
            println!("{}", path.display());
        }
    }

    fn report_check_results(&self, results: &CheckResults) {
        eprint!("{}", results);
    }
}
