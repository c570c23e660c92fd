// crates/engine/src/select.rs
//! Ordered selection of resolved files by modification time.

use crate::error::{EngineError, Result};
use crate::filesystem::ResolvedFile;
use crate::kind::KindSpec;
use crate::sniff::MimeSniffer;
use std::cmp::Reverse;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Newest first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
}

/// How many files to take, and from which end of the mtime ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub direction: Direction,
    pub count: NonZeroUsize,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            direction: Direction::Newest,
            count: NonZeroUsize::MIN,
        }
    }
}

impl Selection {
    pub const fn newest(count: NonZeroUsize) -> Self {
        Self {
            direction: Direction::Newest,
            count,
        }
    }

    pub const fn oldest(count: NonZeroUsize) -> Self {
        Self {
            direction: Direction::Oldest,
            count,
        }
    }

    /// Build from a signed count: positive selects newest, negative oldest.
    ///
    /// # Errors
    /// Returns `EngineError::Config` for a zero count.
    pub fn from_signed(count: i64) -> Result<Self> {
        let magnitude = usize::try_from(count.unsigned_abs())
            .map_err(|_| EngineError::Config(format!("count out of range: {count}")))?;
        let magnitude = NonZeroUsize::new(magnitude)
            .ok_or_else(|| EngineError::Config("count must not be zero".to_string()))?;
        Ok(if count > 0 {
            Self::newest(magnitude)
        } else {
            Self::oldest(magnitude)
        })
    }

    pub fn requested(&self) -> usize {
        self.count.get()
    }
}

#[derive(Debug, Default)]
pub struct SelectResult {
    /// Selected files in output order.
    pub files: Vec<ResolvedFile>,
    /// Files excluded because their content could not be sniffed.
    pub skipped: Vec<(PathBuf, EngineError)>,
}

/// Sort by modification time in the selection's direction.
///
/// The sort is stable: files with equal mtimes keep their discovery order.
pub fn sort_by_mtime(files: &mut [ResolvedFile], direction: Direction) {
    match direction {
        Direction::Newest => files.sort_by_key(|f| Reverse(f.modified)),
        Direction::Oldest => files.sort_by_key(|f| f.modified),
    }
}

/// Pick up to `selection.count` files matching `kind`, in output order.
///
/// Files are tested in mtime order and the scan stops as soon as enough
/// matches are collected, so later files are never sniffed. A file whose
/// content cannot be sniffed is logged, recorded in `skipped` and treated
/// as a non-match.
pub fn select(
    mut files: Vec<ResolvedFile>,
    selection: Selection,
    kind: &KindSpec,
    sniffer: &dyn MimeSniffer,
) -> SelectResult {
    sort_by_mtime(&mut files, selection.direction);
    let needed = selection.requested();

    if !kind.is_filter() {
        files.truncate(needed);
        return SelectResult {
            files,
            skipped: Vec::new(),
        };
    }

    let mut result = SelectResult::default();
    for file in files {
        if result.files.len() >= needed {
            break;
        }
        match kind.matches(&file.path, sniffer) {
            Ok(true) => result.files.push(file),
            Ok(false) => {}
            Err(e) => {
                log::warn!("{e}");
                result.skipped.push((file.path, e));
            }
        }
    }
    result
}
