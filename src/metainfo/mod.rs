//! Normalized torrent metadata and piece/file geometry
//!
//! [`Metainfo`] is the read-only description every other module works
//! against: piece count and digests, the file list, and the two mapping
//! queries between piece space and file space. Decoding of the on-disk
//! bencode container lives in the `bencode` submodule and happens once;
//! after construction the model is immutable for the whole session.

mod bencode;
mod error;

pub use error::{MetainfoError, Result};

use std::path::{Path, PathBuf};

use smallvec::SmallVec;

use crate::domain::{FileIndex, PieceIndex, Sha1Hash};

/// One file described by the metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the content directory
    pub path: PathBuf,
    /// Declared length in bytes
    pub length: u64,
    /// Offset of the file's data within a shared container region.
    ///
    /// Standard metadata layouts always place file data at offset zero; a
    /// non-zero value marks a shared-region layout the verifier rejects.
    pub base_offset: u64,
}

/// A contiguous byte range within one file contributed by a piece
///
/// A piece may contribute several spans across several files; spans are
/// always produced in stream order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSpan {
    pub file: FileIndex,
    /// Byte offset within the owning file
    pub offset: u64,
    /// Number of bytes the piece contributes at that offset
    pub length: u64,
}

/// Most pieces touch one file, boundary pieces two
pub type SpanList = SmallVec<[FileSpan; 2]>;

/// Normalized, immutable torrent metadata
#[derive(Debug, Clone)]
pub struct Metainfo {
    name: String,
    piece_length: u64,
    pieces: Vec<Sha1Hash>,
    files: Vec<FileEntry>,
    /// Cumulative start offset of each file in the torrent byte stream
    file_starts: Vec<u64>,
    total_size: u64,
}

impl Metainfo {
    /// Build a normalized model, validating the piece geometry
    pub fn new(
        name: String,
        piece_length: u64,
        pieces: Vec<Sha1Hash>,
        files: Vec<FileEntry>,
    ) -> Result<Self> {
        if piece_length == 0 {
            return Err(MetainfoError::ZeroPieceLength);
        }
        if files.is_empty() {
            return Err(MetainfoError::NoFiles);
        }

        let mut file_starts = Vec::with_capacity(files.len());
        let mut total_size: u64 = 0;
        for file in &files {
            file_starts.push(total_size);
            total_size += file.length;
        }

        let expected_pieces = total_size.div_ceil(piece_length) as usize;
        if pieces.len() != expected_pieces {
            return Err(MetainfoError::PieceCountMismatch {
                expected: expected_pieces,
                actual: pieces.len(),
            });
        }

        Ok(Metainfo {
            name,
            piece_length,
            pieces,
            files,
            file_starts,
            total_size,
        })
    }

    /// Load and decode a `.torrent` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref()).map_err(|source| MetainfoError::Read {
            file: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Decode a bencoded metadata container
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bencode::decode(bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_pieces(&self) -> usize {
        self.pieces.len()
    }

    pub fn num_files(&self) -> usize {
        self.files.len()
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Byte size of a piece; the final piece covers the stream remainder
    pub fn piece_size(&self, piece: PieceIndex) -> u64 {
        let index = piece.as_usize();
        if index + 1 == self.pieces.len() {
            self.total_size - index as u64 * self.piece_length
        } else {
            self.piece_length
        }
    }

    /// Expected digest for a piece
    pub fn expected_hash(&self, piece: PieceIndex) -> Sha1Hash {
        self.pieces[piece.as_usize()]
    }

    /// Description of a file by index
    pub fn file_info(&self, file: FileIndex) -> &FileEntry {
        &self.files[file.as_usize()]
    }

    /// Piece covering a byte offset within a file
    pub fn piece_for_offset(&self, file: FileIndex, byte_offset: u64) -> PieceIndex {
        let global = self.file_starts[file.as_usize()] + byte_offset;
        PieceIndex::new((global / self.piece_length) as usize)
    }

    /// File spans covered by a byte range of a piece, in stream order
    ///
    /// Zero-length files occupy no bytes of the stream and never appear in
    /// the result.
    pub fn piece_spans(&self, piece: PieceIndex, block_offset: u64, block_size: u64) -> SpanList {
        let mut spans = SpanList::new();
        if block_size == 0 {
            return spans;
        }

        let start = piece.as_usize() as u64 * self.piece_length + block_offset;
        let mut remaining = block_size.min(self.total_size.saturating_sub(start));
        let mut global = start;

        // First file whose byte range contains the start offset
        let mut index = self.file_starts.partition_point(|&s| s <= global) - 1;

        while remaining > 0 && index < self.files.len() {
            let file = &self.files[index];
            if file.length == 0 {
                index += 1;
                continue;
            }

            let offset_in_file = global - self.file_starts[index];
            let available = file.length - offset_in_file;
            let length = available.min(remaining);

            spans.push(FileSpan {
                file: FileIndex::new(index),
                offset: offset_in_file,
                length,
            });

            global += length;
            remaining -= length;
            index += 1;
        }

        spans
    }
}
