//! Progress and output reporting for check operations
//!
//! Decouples the checking engine from output formatting. The primary result
//! stream (complete file names) stays machine-parseable on stdout; progress
//! and summaries go to stderr.

mod console;
mod silent;

pub use console::ConsoleCheckReporter;
pub use silent::SilentCheckReporter;

use std::path::Path;

use crate::check::{CheckResults, FileStatus};
use crate::domain::{FileIndex, PieceIndex};

/// Trait for reporting check progress and results
pub trait CheckReporter {
    /// Report starting a check for one torrent
    fn report_check_start(&self, name: &str, num_files: usize, num_pieces: usize);

    /// Report a real (non-cached) verification attempt for a piece
    fn report_piece(&self, piece: PieceIndex, total: usize);

    /// Report the decided status of a file
    fn report_file_status(&self, file: FileIndex, path: &Path, status: FileStatus);

    /// Report a complete file on the primary result stream
    fn report_file_complete(&self, file: FileIndex, path: &Path);

    /// Report the final results summary
    fn report_check_results(&self, results: &CheckResults);
}
