// crates/engine/src/kind.rs
//! Kind classification: maps a `--kind` keyword to a test over sniffed MIME types.

use crate::error::Result;
use crate::sniff::MimeSniffer;
use std::path::Path;

pub const DOC_MIME_TYPES: &[&str] = &[
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.oasis.opendocument.text",
];

pub const XLS_MIME_TYPES: &[&str] = &[
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.oasis.opendocument.spreadsheet",
];

pub const PPT_MIME_TYPES: &[&str] = &[
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.oasis.opendocument.presentation",
];

pub const ZIP_MIME_TYPES: &[&str] = &[
    "application/zip",
    "application/x-tar",
    "application/x-bzip2",
    "application/gzip",
    "application/x-7z-compressed",
    "application/x-rar-compressed",
    "application/x-xz",
    "application/x-lzma",
    "application/x-compress",
];

/// Named kind groups. Any other keyword is compared against the MIME major type.
pub const KIND_GROUPS: &[(&str, &[&str])] = &[
    ("doc", DOC_MIME_TYPES),
    ("xls", XLS_MIME_TYPES),
    ("ppt", PPT_MIME_TYPES),
    ("zip", ZIP_MIME_TYPES),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindSpec {
    /// No filter; every file matches without being read.
    Any,
    /// Exact membership in one of the fixed groups.
    Group {
        name: &'static str,
        mime_types: &'static [&'static str],
    },
    /// The part of the MIME type before `/` must equal the keyword.
    MajorType(String),
}

impl KindSpec {
    /// Resolve an optional keyword. Empty and absent keywords mean no filter.
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        let Some(keyword) = keyword.filter(|k| !k.is_empty()) else {
            return Self::Any;
        };
        let keyword = keyword.to_lowercase();
        KIND_GROUPS
            .iter()
            .find(|(name, _)| *name == keyword)
            .map_or(Self::MajorType(keyword), |&(name, mime_types)| Self::Group {
                name,
                mime_types,
            })
    }

    pub fn is_filter(&self) -> bool {
        !matches!(self, Self::Any)
    }

    pub fn matches_mime(&self, mime: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Group { mime_types, .. } => mime_types.contains(&mime),
            Self::MajorType(major) => mime.split('/').next() == Some(major.as_str()),
        }
    }

    /// Test a file, sniffing its content only when a filter is active.
    ///
    /// # Errors
    /// Propagates the sniffer's error for unreadable files.
    pub fn matches(&self, path: &Path, sniffer: &dyn MimeSniffer) -> Result<bool> {
        if !self.is_filter() {
            return Ok(true);
        }
        let mime = sniffer.sniff(path)?;
        log::debug!("{} sniffed as {mime}", path.display());
        Ok(self.matches_mime(&mime))
    }
}

impl std::fmt::Display for KindSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Group { name, .. } => f.write_str(name),
            Self::MajorType(major) => write!(f, "{major}/*"),
        }
    }
}
