//! Completeness checking engine
//!
//! Decides, per piece and per file, whether a download's on-disk bytes match
//! the digests recorded in its metadata. One call to [`check_torrent`] is
//! one verification session: it owns a fresh piece cache, walks the files in
//! metadata order, and reports decisions as they land.

mod config;
mod file_check;
mod piece;
mod types;

pub use config::CheckConfig;
pub use file_check::{check_file, piece_range};
pub use piece::PieceVerifier;
pub use types::{CheckResults, FileCheckResult, FileStatus, PieceState};

use std::path::Path;

use crate::domain::FileIndex;
use crate::materialize::OutputDir;
use crate::metainfo::Metainfo;
use crate::reporters::CheckReporter;

/// Check every file of one torrent against the bytes under `content_dir`
///
/// Files are processed in ascending index order, which fixes both the
/// reported order and selection-list ordering. The piece cache lives exactly
/// as long as this call; nothing is persisted across runs.
pub fn check_torrent<R: CheckReporter + ?Sized>(
    metainfo: &Metainfo,
    content_dir: &Path,
    config: &CheckConfig,
    output: Option<&OutputDir>,
    reporter: &R,
) -> CheckResults {
    reporter.report_check_start(metainfo.name(), metainfo.num_files(), metainfo.num_pieces());

    let mut verifier = PieceVerifier::new(metainfo, content_dir);
    let mut file_results = Vec::with_capacity(metainfo.num_files());

    for index in 0..metainfo.num_files() {
        let file = FileIndex::new(index);
        let status = check_file(metainfo, file, &mut verifier, config, output, reporter);
        let entry = metainfo.file_info(file);
        reporter.report_file_status(file, &entry.path, status);

        let mut reported = true;
        if status.is_complete() {
            let already = output.is_some_and(|out| out.is_materialized(&entry.path));
            if config.only_new && already {
                reported = false;
            } else {
                reporter.report_file_complete(file, &entry.path);
                if let Some(out) = output {
                    if let Err(err) = out.link(content_dir, &entry.path) {
                        log::warn!("Failed to link \"{}\": {}", entry.path.display(), err);
                    }
                }
            }
        }

        file_results.push(FileCheckResult {
            file,
            path: entry.path.clone(),
            status,
            reported,
        });
    }

    let results = results_aggregation::aggregate(
        file_results,
        verifier.pieces_hashed(),
        metainfo.num_pieces(),
    );
    reporter.report_check_results(&results);
    results
}

/// Functional helpers for results aggregation
mod results_aggregation {
    use super::*;

    /// Fold per-file decisions into the final results
    pub fn aggregate(
        file_results: Vec<FileCheckResult>,
        pieces_hashed: usize,
        total_pieces: usize,
    ) -> CheckResults {
        let stats = file_results
            .iter()
            .fold(FileStats::default(), |stats, result| {
                stats.with_status_update(result.status)
            });

        CheckResults {
            files: file_results,
            complete_count: stats.complete,
            trusted_count: stats.trusted,
            incomplete_count: stats.incomplete,
            skipped_count: stats.skipped,
            pieces_hashed,
            total_pieces,
        }
    }

    #[derive(Default, Clone, Copy)]
    struct FileStats {
        complete: usize,
        trusted: usize,
        incomplete: usize,
        skipped: usize,
    }

    impl FileStats {
        fn with_status_update(mut self, status: FileStatus) -> Self {
            match status {
                FileStatus::Complete => self.complete += 1,
                FileStatus::Trusted => self.trusted += 1,
                FileStatus::Incomplete => self.incomplete += 1,
                FileStatus::Skipped => self.skipped += 1,
            }
            self
        }
    }
}
