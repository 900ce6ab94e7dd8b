//! Core domain types for torrent completeness checking
//!
//! This module contains type-safe wrappers for piece hashes and indices.
//! These newtypes prevent common mistakes by making it impossible to mix
//! different kinds of indices at compile time.
//!
//! - **Sha1Hash**: keeps 20-byte piece digests distinct from arbitrary byte slices
//! - **PieceIndex, FileIndex**: prevents off-by-one errors when a piece spans
//!   several files and both index spaces are in play at once

/// Type-safe wrapper for SHA-1 piece digests (20 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha1Hash([u8; 20]);

impl Sha1Hash {
    pub fn new(bytes: [u8; 20]) -> Self {
        Sha1Hash(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl From<[u8; 20]> for Sha1Hash {
    fn from(bytes: [u8; 20]) -> Self {
        Sha1Hash::new(bytes)
    }
}

impl AsRef<[u8; 20]> for Sha1Hash {
    fn as_ref(&self) -> &[u8; 20] {
        &self.0
    }
}

impl PartialEq<[u8; 20]> for Sha1Hash {
    fn eq(&self, other: &[u8; 20]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<Sha1Hash> for [u8; 20] {
    fn eq(&self, other: &Sha1Hash) -> bool {
        self == &other.0
    }
}

impl std::fmt::Display for Sha1Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Type-safe wrapper for piece indices (across the whole torrent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceIndex(usize);

impl PieceIndex {
    pub fn new(index: usize) -> Self {
        PieceIndex(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for PieceIndex {
    fn from(index: usize) -> Self {
        PieceIndex::new(index)
    }
}

impl std::ops::Add<usize> for PieceIndex {
    type Output = PieceIndex;

    fn add(self, rhs: usize) -> PieceIndex {
        PieceIndex(self.0 + rhs)
    }
}

impl std::ops::Sub for PieceIndex {
    type Output = usize;

    fn sub(self, rhs: PieceIndex) -> usize {
        self.0 - rhs.0
    }
}

impl std::fmt::Display for PieceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe wrapper for file indices (position in the metadata file list)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileIndex(usize);

impl FileIndex {
    pub fn new(index: usize) -> Self {
        FileIndex(index)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }

    /// 1-based position, used by selection lists
    pub fn ordinal(&self) -> usize {
        self.0 + 1
    }
}

impl From<usize> for FileIndex {
    fn from(index: usize) -> Self {
        FileIndex::new(index)
    }
}

impl std::fmt::Display for FileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
