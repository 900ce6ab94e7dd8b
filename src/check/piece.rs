//! Memoized piece verification
//!
//! [`PieceVerifier`] owns the per-session piece cache. Each piece is hashed
//! at most once per session: piece content on disk does not change while a
//! check runs, so a recorded result is returned as-is on every later call,
//! including calls made for a different file whose span touches the same
//! piece.
//!
//! Piece hashing reads exactly the spans the metadata describes, so bytes
//! appended past a file's declared length are invisible here; the
//! materialized copy shares the inode, trailing garbage included.

use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

use super::types::PieceState;
use crate::domain::{PieceIndex, Sha1Hash};
use crate::metainfo::{FileSpan, Metainfo};
use crate::reporters::CheckReporter;

/// Upper bound on a single read, so large pieces hash in constant memory
const READ_CHUNK_SIZE: u64 = 1024 * 1024;

/// Verifies pieces against their expected digests, memoizing every outcome
pub struct PieceVerifier<'a> {
    metainfo: &'a Metainfo,
    content_dir: PathBuf,
    cache: Vec<PieceState>,
    hashed: usize,
}

impl<'a> PieceVerifier<'a> {
    /// Create a verifier with a fresh cache for one metadata file
    pub fn new<P: AsRef<Path>>(metainfo: &'a Metainfo, content_dir: P) -> Self {
        Self {
            metainfo,
            content_dir: content_dir.as_ref().to_path_buf(),
            cache: vec![PieceState::Unknown; metainfo.num_pieces()],
            hashed: 0,
        }
    }

    /// Recorded state of a piece
    pub fn state(&self, piece: PieceIndex) -> PieceState {
        self.cache[piece.as_usize()]
    }

    /// Number of pieces actually read and hashed so far
    pub fn pieces_hashed(&self) -> usize {
        self.hashed
    }

    /// Force-seed the cache, bypassing verification
    ///
    /// Seeding before the first real verification fully determines the
    /// result; seeding after a computed result overrides it.
    pub fn assume(&mut self, piece: PieceIndex, valid: bool) {
        self.cache[piece.as_usize()] = if valid {
            PieceState::Valid
        } else {
            PieceState::Invalid
        };
    }

    /// Decide whether a piece's on-disk bytes match its expected digest
    ///
    /// Cached results are returned without touching the filesystem.
    pub fn verify<R: CheckReporter + ?Sized>(&mut self, piece: PieceIndex, reporter: &R) -> bool {
        match self.cache[piece.as_usize()] {
            PieceState::Valid => return true,
            PieceState::Invalid => return false,
            PieceState::Unknown => {}
        }

        reporter.report_piece(piece, self.metainfo.num_pieces());
        self.hashed += 1;

        let valid = self.hash_piece(piece);
        self.assume(piece, valid);
        valid
    }

    /// Read every span of the piece in order and compare digests
    fn hash_piece(&self, piece: PieceIndex) -> bool {
        let expected = self.metainfo.expected_hash(piece);
        let size = self.metainfo.piece_size(piece);
        let spans = self.metainfo.piece_spans(piece, 0, size);

        let mut hasher = Sha1::new();
        for span in &spans {
            let entry = self.metainfo.file_info(span.file);
            if entry.base_offset != 0 {
                log::error!(
                    "Piece {}: \"{}\" declares base offset {}, a layout this checker cannot verify",
                    piece,
                    entry.path.display(),
                    entry.base_offset
                );
                return false;
            }

            let path = self.content_dir.join(&entry.path);
            if !hash_span(&path, span, &mut hasher) {
                return false;
            }
        }

        let computed = Sha1Hash::new(hasher.finalize().into());
        if computed == expected {
            true
        } else {
            log::info!(
                "Piece {}: digest mismatch (expected {}, computed {})",
                piece,
                expected,
                computed
            );
            false
        }
    }
}

/// Feed one span's bytes into the hasher, in bounded chunks
///
/// Any shortfall fails the whole piece: no partial credit, no retry.
fn hash_span(path: &Path, span: &FileSpan, hasher: &mut Sha1) -> bool {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            log::warn!("Cannot open \"{}\": {}", path.display(), err);
            return false;
        }
    };

    if let Err(err) = file.seek(SeekFrom::Start(span.offset)) {
        log::warn!(
            "Cannot seek to {} in \"{}\": {}",
            span.offset,
            path.display(),
            err
        );
        return false;
    }

    let mut buffer = vec![0u8; span.length.min(READ_CHUNK_SIZE) as usize];
    let mut remaining = span.length;

    while remaining > 0 {
        let want = remaining.min(READ_CHUNK_SIZE) as usize;
        match file.read(&mut buffer[..want]) {
            Ok(0) => {
                log::info!(
                    "\"{}\" is truncated: {} byte(s) missing at offset {}",
                    path.display(),
                    remaining,
                    span.offset + span.length - remaining
                );
                return false;
            }
            Ok(read) => {
                hasher.update(&buffer[..read]);
                remaining -= read as u64;
            }
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                log::warn!("Read failed in \"{}\": {}", path.display(), err);
                return false;
            }
        }
    }

    true
}
