//! Error types for metadata loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and normalizing torrent metadata
///
/// All of these are fatal for the affected metadata file: no verification is
/// attempted against a description that failed to load.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// Failed to read the metadata file from disk
    #[error("Failed to read metadata file {file}: {source}")]
    Read {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Bencode container could not be decoded
    #[error("Failed to decode metadata: {0}")]
    Decode(#[from] serde_bencode::Error),

    /// Piece digest blob length is not a multiple of the digest size
    #[error("Piece digest blob is {len} bytes, not a multiple of 20")]
    BadPieceBlob { len: usize },

    /// Piece length of zero cannot describe any content
    #[error("Metadata declares a piece length of zero")]
    ZeroPieceLength,

    /// Digest count does not cover the declared content size
    #[error("Metadata declares {expected} pieces but carries {actual} digests")]
    PieceCountMismatch { expected: usize, actual: usize },

    /// File list is empty
    #[error("Metadata describes no files")]
    NoFiles,

    /// A file path tries to escape the content directory
    #[error("Unsafe file path in metadata: {0}")]
    UnsafePath(String),
}

/// Type alias for metadata loading results
pub type Result<T> = std::result::Result<T, MetainfoError>;
