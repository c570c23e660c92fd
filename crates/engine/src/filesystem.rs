// crates/engine/src/filesystem.rs
//! Pattern resolution: expands glob patterns (with `~` support) into a
//! deduplicated list of regular files.

use crate::error::{EngineError, Result};
use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

const GLOB_META: &[char] = &['*', '?', '['];

/// A unique regular file found by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Absolute, canonical path. Unique within a resolution.
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Display forms of resolved files, keyed by absolute path.
///
/// Only files reached through a `~` pattern and located under the home
/// directory get an entry; every other file is displayed by its absolute path.
#[derive(Debug, Clone, Default)]
pub struct DisplayPaths {
    tilde: HashMap<PathBuf, String>,
}

impl DisplayPaths {
    pub fn display(&self, path: &Path) -> String {
        self.tilde
            .get(path)
            .cloned()
            .unwrap_or_else(|| path.display().to_string())
    }

    fn record(&mut self, path: &Path, home: &Path) {
        if let Ok(rel) = path.strip_prefix(home) {
            let shown = if rel.as_os_str().is_empty() {
                "~".to_string()
            } else {
                format!("~/{}", rel.display())
            };
            self.tilde.insert(path.to_path_buf(), shown);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Files in discovery order.
    pub files: Vec<ResolvedFile>,
    pub display: DisplayPaths,
}

/// Expand every pattern and collect unique regular files in discovery order.
///
/// Patterns that match nothing, or are not valid globs, contribute no files.
pub fn resolve<S: AsRef<str>>(patterns: &[S], home: Option<&Path>) -> Resolution {
    let canonical_home = home.and_then(|h| fs::canonicalize(h).ok());
    let mut seen = HashSet::new();
    let mut resolution = Resolution::default();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let (expanded, used_tilde) = expand_tilde(pattern, home);

        let matches = match expand_glob(&expanded) {
            Ok(matches) => matches,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };
        log::debug!("pattern '{pattern}' matched {} path(s)", matches.len());

        for candidate in matches {
            let Some(file) = stat_regular_file(&candidate) else {
                continue;
            };
            if !seen.insert(file.path.clone()) {
                continue;
            }
            if used_tilde && let Some(home) = &canonical_home {
                resolution.display.record(&file.path, home);
            }
            resolution.files.push(file);
        }
    }

    resolution
}

/// Replace a leading `~` or `~/` with the home directory.
///
/// Returns the expanded pattern and whether a substitution happened.
/// `~user` forms and patterns without a known home are returned unchanged.
pub fn expand_tilde(pattern: &str, home: Option<&Path>) -> (String, bool) {
    let Some(home) = home else {
        return (pattern.to_string(), false);
    };
    let home = home.to_string_lossy();
    let home = home.trim_end_matches('/');

    if pattern == "~" {
        (home.to_string(), true)
    } else if let Some(rest) = pattern.strip_prefix("~/") {
        (format!("{home}/{rest}"), true)
    } else {
        (pattern.to_string(), false)
    }
}

fn has_glob_meta(s: &str) -> bool {
    s.contains(GLOB_META)
}

/// Split a pattern into its literal leading directory and the glob remainder.
///
/// The remainder is `None` when the pattern contains no wildcards.
pub fn split_pattern(pattern: &str) -> (PathBuf, Option<String>) {
    if !has_glob_meta(pattern) {
        return (PathBuf::from(pattern), None);
    }

    let mut base = PathBuf::new();
    let mut rest = Vec::new();
    for component in Path::new(pattern).components() {
        let text = component.as_os_str().to_string_lossy();
        if rest.is_empty() && !has_glob_meta(&text) {
            base.push(component);
        } else {
            rest.push(text.into_owned());
        }
    }

    if base.as_os_str().is_empty() {
        base.push(Component::CurDir);
    }
    (base, Some(rest.join("/")))
}

/// Expand a single (already tilde-expanded) pattern into matching paths.
///
/// Directories are included; callers filter to regular files. A pattern
/// ending in `/` matches directories only.
///
/// # Errors
/// Returns `EngineError::InvalidPattern` when the glob cannot be compiled.
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let dirs_only = pattern.len() > 1 && pattern.ends_with('/');
    let (base, rest) = split_pattern(pattern);
    let Some(rest) = rest else {
        let exists = if dirs_only {
            base.is_dir()
        } else {
            fs::symlink_metadata(&base).is_ok()
        };
        return Ok(if exists { vec![base] } else { Vec::new() });
    };

    let invalid = |source| EngineError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    };
    let matcher = compile(&rest).map_err(invalid)?;
    // Wildcards never match a leading dot; only a dot-prefixed component does.
    let dot_components = rest
        .split('/')
        .filter(|c| c.starts_with('.'))
        .map(compile)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(invalid)?;

    let max_depth = if rest.contains("**") {
        None
    } else {
        Some(rest.split('/').filter(|c| !c.is_empty()).count())
    };

    let walker = WalkBuilder::new(&base)
        .standard_filters(false)
        .follow_links(true)
        .max_depth(max_depth)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            entry.depth() == 0
                || !is_hidden(entry.file_name())
                || dot_components.iter().any(|m| m.is_match(entry.file_name()))
        })
        .build();

    let mut matches = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping while expanding '{pattern}': {}", EngineError::from(e));
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(&base) else {
            continue;
        };
        if !matcher.is_match(rel) {
            continue;
        }
        if dirs_only && !entry.path().is_dir() {
            continue;
        }
        matches.push(entry.into_path());
    }
    Ok(matches)
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

fn compile(glob: &str) -> std::result::Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(&escape_braces(glob))
        .literal_separator(true)
        .backslash_escape(true)
        .build()?
        .compile_matcher())
}

/// Escape `{` and `}` so braces are always literal, as in plain shell globs.
///
/// Escaped characters and bracket classes are copied through untouched.
fn escape_braces(glob: &str) -> String {
    let mut out = String::with_capacity(glob.len());
    let mut chars = glob.chars().peekable();
    let mut in_class = false;

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
                if let Some(&negate @ ('!' | '^')) = chars.peek() {
                    out.push(negate);
                    chars.next();
                }
                // A leading `]` is a member of the class, not its end.
                if chars.peek() == Some(&']') {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' | '}' if !in_class => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Stat a candidate, keeping it only if it is (or links to) a regular file.
fn stat_regular_file(candidate: &Path) -> Option<ResolvedFile> {
    let meta = match fs::metadata(candidate) {
        Ok(meta) => meta,
        Err(source) => {
            // Dangling symlinks land here.
            log::debug!(
                "{}",
                EngineError::Metadata {
                    path: candidate.to_path_buf(),
                    source,
                }
            );
            return None;
        }
    };
    if !meta.is_file() {
        return None;
    }

    let checked = fs::canonicalize(candidate).and_then(|path| Ok((path, meta.modified()?)));
    match checked {
        Ok((path, modified)) => Some(ResolvedFile { path, modified }),
        Err(source) => {
            log::warn!(
                "{}",
                EngineError::Metadata {
                    path: candidate.to_path_buf(),
                    source,
                }
            );
            None
        }
    }
}
