//! Silent reporter
//!
//! No-output implementation for quiet operation and for tests.

use std::path::Path;

use super::CheckReporter;
use crate::check::{CheckResults, FileStatus};
use crate::domain::{FileIndex, PieceIndex};

/// Reporter that swallows every notification
#[derive(Default)]
pub struct SilentCheckReporter;

impl SilentCheckReporter {
    pub fn new() -> Self {
        Self
    }
}

impl CheckReporter for SilentCheckReporter {
    fn report_check_start(&self, _name: &str, _num_files: usize, _num_pieces: usize) {}
    fn report_piece(&self, _piece: PieceIndex, _total: usize) {}
    fn report_file_status(&self, _file: FileIndex, _path: &Path, _status: FileStatus) {}
    fn report_file_complete(&self, _file: FileIndex, _path: &Path) {}
    fn report_check_results(&self, _results: &CheckResults) {}
}
