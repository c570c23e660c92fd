// crates/engine/src/sniff.rs
//! Content-based MIME detection.
//!
//! File names and extensions are never consulted: the type is derived from
//! the leading bytes of the file.

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected per file.
const SAMPLE_LEN: usize = 8192;

pub const EMPTY_MIME: &str = "inode/x-empty";
pub const TEXT_MIME: &str = "text/plain";
pub const BINARY_MIME: &str = "application/octet-stream";

const ZIP_MIME: &str = "application/zip";
const ZIP_LOCAL_HEADER: &[u8] = b"PK\x03\x04";
const ZIP_LOCAL_HEADER_LEN: usize = 30;

/// OOXML part directories and the document type they imply.
const OOXML_PARTS: &[(&[u8], &str)] = &[
    (
        b"word/",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (
        b"xl/",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    (
        b"ppt/",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
];

/// Derives a MIME type string from a file's content.
pub trait MimeSniffer {
    /// # Errors
    /// Returns `EngineError::Sniff` when the file cannot be opened or read.
    fn sniff(&self, path: &Path) -> Result<String>;
}

/// Magic-number sniffer backed by the `infer` crate, with a text fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSniffer;

impl MimeSniffer for ContentSniffer {
    fn sniff(&self, path: &Path) -> Result<String> {
        let sample = read_sample(path).map_err(|source| EngineError::Sniff {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(classify_sample(&sample).to_string())
    }
}

fn read_sample(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut sample = Vec::with_capacity(SAMPLE_LEN);
    file.take(SAMPLE_LEN as u64).read_to_end(&mut sample)?;
    Ok(sample)
}

/// Map a leading byte sample to a MIME type.
pub fn classify_sample(sample: &[u8]) -> &'static str {
    if sample.is_empty() {
        return EMPTY_MIME;
    }
    if let Some(kind) = infer::get(sample) {
        return match normalize(kind.mime_type()) {
            ZIP_MIME => ooxml_type(sample).unwrap_or(ZIP_MIME),
            mime => mime,
        };
    }
    if looks_like_text(sample) {
        TEXT_MIME
    } else {
        BINARY_MIME
    }
}

/// `infer` and libmagic disagree on a few names; the kind tables use libmagic's.
fn normalize(mime: &'static str) -> &'static str {
    match mime {
        "application/vnd.rar" => "application/x-rar-compressed",
        other => other,
    }
}

/// Recognize an OOXML package by its entry names.
///
/// `infer` only looks at the first few entries in the order Office writes
/// them; other producers order entries differently. Scans the local file
/// headers in the sample for `[Content_Types].xml` plus a part directory.
fn ooxml_type(sample: &[u8]) -> Option<&'static str> {
    let mut has_content_types = false;
    let mut found = None;

    for name in zip_entry_names(sample) {
        if name == b"[Content_Types].xml" {
            has_content_types = true;
        } else if found.is_none() {
            found = OOXML_PARTS
                .iter()
                .find(|(prefix, _)| name.starts_with(prefix))
                .map(|&(_, mime)| mime);
        }
        if has_content_types && found.is_some() {
            return found;
        }
    }
    None
}

/// Names of the zip local file headers present in `sample`.
fn zip_entry_names(sample: &[u8]) -> impl Iterator<Item = &[u8]> {
    sample
        .windows(ZIP_LOCAL_HEADER.len())
        .enumerate()
        .filter(|(_, window)| *window == ZIP_LOCAL_HEADER)
        .filter_map(move |(start, _)| {
            let header = sample.get(start..start + ZIP_LOCAL_HEADER_LEN)?;
            let name_len = usize::from(u16::from_le_bytes([header[26], header[27]]));
            let name_start = start + ZIP_LOCAL_HEADER_LEN;
            sample.get(name_start..name_start + name_len)
        })
}

fn looks_like_text(sample: &[u8]) -> bool {
    // UTF-8 / UTF-16 (LE, BE) byte order marks
    if sample.starts_with(&[0xEF, 0xBB, 0xBF])
        || sample.starts_with(&[0xFF, 0xFE])
        || sample.starts_with(&[0xFE, 0xFF])
    {
        return true;
    }
    if sample.contains(&0) {
        return false;
    }
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // A multi-byte sequence cut off by the sample boundary is still text.
        Err(e) => e.error_len().is_none() && sample.len() == SAMPLE_LEN,
    }
}
