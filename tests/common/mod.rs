//! Shared fixtures for checker tests
//!
//! Builds torrent layouts (metadata plus matching on-disk content) inside
//! temporary directories, and bencodes metadata for the loader tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use btcheck::domain::Sha1Hash;
use btcheck::metainfo::{FileEntry, Metainfo};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha1::{Digest, Sha1};

/// SHA-1 digests of a byte stream split into pieces
pub fn piece_hashes(stream: &[u8], piece_length: u64) -> Vec<Sha1Hash> {
    stream
        .chunks(piece_length as usize)
        .map(|chunk| {
            let mut hasher = Sha1::new();
            hasher.update(chunk);
            Sha1Hash::new(hasher.finalize().into())
        })
        .collect()
}

/// Deterministic pseudo-random content
pub fn content_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random()).collect()
}

/// Metadata for a layout, without touching the filesystem
pub fn layout(name: &str, piece_length: u64, files: &[(&str, &[u8])]) -> Metainfo {
    let mut stream = Vec::new();
    let mut entries = Vec::new();
    for (path, content) in files {
        stream.extend_from_slice(content);
        entries.push(FileEntry {
            path: PathBuf::from(path),
            length: content.len() as u64,
            base_offset: 0,
        });
    }

    Metainfo::new(
        name.to_string(),
        piece_length,
        piece_hashes(&stream, piece_length),
        entries,
    )
    .unwrap()
}

/// Metadata plus matching content files written under `root`
pub fn write_layout(
    root: &Path,
    name: &str,
    piece_length: u64,
    files: &[(&str, &[u8])],
) -> Metainfo {
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
    layout(name, piece_length, files)
}

/// Flip one byte of an already-written content file
pub fn corrupt_byte(root: &Path, rel_path: &str, offset: u64) {
    let full = root.join(rel_path);
    let mut bytes = fs::read(&full).unwrap();
    bytes[offset as usize] ^= 0xff;
    fs::write(full, bytes).unwrap();
}

fn push_bstr(out: &mut Vec<u8>, value: &[u8]) {
    out.extend_from_slice(value.len().to_string().as_bytes());
    out.push(b':');
    out.extend_from_slice(value);
}

fn push_bint(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(format!("i{}e", value).as_bytes());
}

fn digest_blob(pieces: &[Sha1Hash]) -> Vec<u8> {
    pieces
        .iter()
        .flat_map(|hash| hash.as_bytes().iter().copied())
        .collect()
}

/// Bencode a single-file torrent
pub fn bencode_single(name: &str, piece_length: u64, length: u64, pieces: &[Sha1Hash]) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(b'd');
    push_bstr(&mut out, b"info");
    out.push(b'd');
    push_bstr(&mut out, b"length");
    push_bint(&mut out, length);
    push_bstr(&mut out, b"name");
    push_bstr(&mut out, name.as_bytes());
    push_bstr(&mut out, b"piece length");
    push_bint(&mut out, piece_length);
    push_bstr(&mut out, b"pieces");
    push_bstr(&mut out, &digest_blob(pieces));
    out.push(b'e');
    out.push(b'e');
    out
}

/// Bencode a multi-file torrent; each file is (path components, length)
pub fn bencode_multi(
    name: &str,
    piece_length: u64,
    files: &[(&[&str], u64)],
    pieces: &[Sha1Hash],
) -> Vec<u8> {
    let mut out = Vec::new();
    out.push(b'd');
    push_bstr(&mut out, b"info");
    out.push(b'd');
    push_bstr(&mut out, b"files");
    out.push(b'l');
    for (components, length) in files {
        out.push(b'd');
        push_bstr(&mut out, b"length");
        push_bint(&mut out, *length);
        push_bstr(&mut out, b"path");
        out.push(b'l');
        for component in *components {
            push_bstr(&mut out, component.as_bytes());
        }
        out.push(b'e');
        out.push(b'e');
    }
    out.push(b'e');
    push_bstr(&mut out, b"name");
    push_bstr(&mut out, name.as_bytes());
    push_bstr(&mut out, b"piece length");
    push_bint(&mut out, piece_length);
    push_bstr(&mut out, b"pieces");
    push_bstr(&mut out, &digest_blob(pieces));
    out.push(b'e');
    out.push(b'e');
    out
}
