//! Torrent file discovery
//!
//! Command-line inputs may name `.torrent` files directly or directories
//! containing them; directory scans are sorted so processing order is
//! deterministic across runs.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet as HashSet;

/// Find all torrent files directly inside a directory
pub fn find_torrent_files_in_directory(folder_path: &Path) -> Vec<PathBuf> {
    match fs::read_dir(folder_path) {
        Ok(entries) => {
            let mut found: Vec<PathBuf> = entries
                .filter_map(|entry| {
                    let path = entry.ok()?.path();
                    (path.extension().is_some_and(|ext| ext == "torrent") && path.is_file())
                        .then_some(path)
                })
                .collect();
            found.sort();
            found
        }
        Err(err) => {
            log::warn!("Failed to read directory {}: {}", folder_path.display(), err);
            Vec::new()
        }
    }
}

/// Expand CLI inputs into a deduplicated list of torrent files
///
/// Files are kept in the order given; directories expand in place to their
/// sorted contents. A path that is neither is kept too, so the metadata
/// loader surfaces the error for it.
pub fn collect_torrent_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::default();
    let mut torrents = Vec::new();

    for input in inputs {
        if input.is_dir() {
            for path in find_torrent_files_in_directory(input) {
                if seen.insert(path.clone()) {
                    torrents.push(path);
                }
            }
        } else if seen.insert(input.clone()) {
            torrents.push(input.clone());
        }
    }

    torrents
}
