//! Bencode boundary adapter
//!
//! Decodes `.torrent` containers with serde_bencode and normalizes them into
//! the [`Metainfo`](super::Metainfo) model. All digest and path normalization
//! happens here, once, at the edge: the rest of the crate only ever sees
//! fixed-length [`Sha1Hash`](crate::domain::Sha1Hash) values and pre-joined
//! relative paths.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use serde_bytes::ByteBuf;

use super::error::{MetainfoError, Result};
use super::{FileEntry, Metainfo};
use crate::domain::Sha1Hash;

#[derive(Debug, Deserialize)]
struct RawTorrent {
    info: RawInfo,
}

#[derive(Debug, Deserialize)]
struct RawInfo {
    name: String,
    #[serde(rename = "piece length")]
    piece_length: u64,
    pieces: ByteBuf,
    /// Present for single-file layouts
    length: Option<u64>,
    /// Present for multi-file layouts
    files: Option<Vec<RawFile>>,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    length: u64,
    path: Vec<String>,
}

/// Decode a bencoded metadata container and normalize it
pub fn decode(bytes: &[u8]) -> Result<Metainfo> {
    let raw: RawTorrent = serde_bencode::from_bytes(bytes)?;
    normalize(raw.info)
}

fn normalize(info: RawInfo) -> Result<Metainfo> {
    let pieces = split_piece_digests(&info.pieces)?;
    let files = normalize_files(&info)?;

    Metainfo::new(info.name, info.piece_length, pieces, files)
}

/// Split the concatenated digest blob into fixed-length hashes
fn split_piece_digests(blob: &[u8]) -> Result<Vec<Sha1Hash>> {
    if blob.len() % 20 != 0 {
        return Err(MetainfoError::BadPieceBlob { len: blob.len() });
    }

    Ok(blob
        .chunks_exact(20)
        .map(|chunk| {
            let mut digest = [0u8; 20];
            digest.copy_from_slice(chunk);
            Sha1Hash::new(digest)
        })
        .collect())
}

/// Flatten single-file and multi-file layouts into one file list
///
/// Multi-file content lives under a directory named after the torrent, so
/// every returned path is already relative to the content directory and can
/// be joined directly.
fn normalize_files(info: &RawInfo) -> Result<Vec<FileEntry>> {
    match (&info.files, info.length) {
        (Some(raw_files), _) => {
            let root = checked_component(&info.name)?;
            raw_files
                .iter()
                .map(|raw| {
                    let mut path = PathBuf::from(&root);
                    if raw.path.is_empty() {
                        return Err(MetainfoError::UnsafePath(String::from("<empty>")));
                    }
                    for part in &raw.path {
                        path.push(checked_component(part)?);
                    }
                    Ok(FileEntry {
                        path,
                        length: raw.length,
                        base_offset: 0,
                    })
                })
                .collect()
        }
        (None, Some(length)) => Ok(vec![FileEntry {
            path: PathBuf::from(checked_component(&info.name)?),
            length,
            base_offset: 0,
        }]),
        (None, None) => Err(MetainfoError::NoFiles),
    }
}

/// Reject path components that could escape the content directory
fn checked_component(part: &str) -> Result<String> {
    let path = Path::new(part);
    let mut components = path.components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(part.to_string()),
        _ => Err(MetainfoError::UnsafePath(part.to_string())),
    }
}
