//! Tests for torrent file discovery

use std::fs;
use std::path::PathBuf;

use btcheck::file_ops::{collect_torrent_files, find_torrent_files_in_directory};
use tempfile::TempDir;

#[test]
fn directory_scan_finds_only_torrent_files_sorted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.torrent"), b"").unwrap();
    fs::write(dir.path().join("a.torrent"), b"").unwrap();
    fs::write(dir.path().join("readme.txt"), b"").unwrap();
    fs::create_dir(dir.path().join("nested.torrent")).unwrap();

    let found = find_torrent_files_in_directory(dir.path());
    assert_eq!(
        found,
        vec![
            dir.path().join("a.torrent"),
            dir.path().join("b.torrent")
        ]
    );
}

#[test]
fn missing_directory_yields_nothing() {
    assert!(find_torrent_files_in_directory(&PathBuf::from("/nonexistent/dir")).is_empty());
}

#[test]
fn collect_expands_directories_and_keeps_files() {
    let dir = TempDir::new().unwrap();
    let lone = dir.path().join("standalone.torrent");
    fs::write(&lone, b"").unwrap();

    let sub = dir.path().join("watch");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("y.torrent"), b"").unwrap();

    let collected = collect_torrent_files(&[lone.clone(), sub.clone()]);
    assert_eq!(collected, vec![lone, sub.join("y.torrent")]);
}

#[test]
fn collect_deduplicates_repeated_inputs() {
    let dir = TempDir::new().unwrap();
    let torrent = dir.path().join("t.torrent");
    fs::write(&torrent, b"").unwrap();

    let collected =
        collect_torrent_files(&[torrent.clone(), torrent.clone(), dir.path().to_path_buf()]);
    assert_eq!(collected, vec![torrent]);
}

#[test]
fn collect_keeps_nonexistent_paths_for_the_loader_to_report() {
    let ghost = PathBuf::from("/nonexistent/ghost.torrent");
    let collected = collect_torrent_files(&[ghost.clone()]);
    assert_eq!(collected, vec![ghost]);
}
