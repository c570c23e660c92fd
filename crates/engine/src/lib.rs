// crates/engine/src/lib.rs
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod kind;
pub mod select;
pub mod sniff;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::filesystem::{DisplayPaths, ResolvedFile};
use crate::kind::KindSpec;
use crate::sniff::{ContentSniffer, MimeSniffer};

#[derive(Debug, Default)]
pub struct RunResult {
    /// Number of unique regular files the patterns resolved to.
    pub resolved: usize,
    /// Selected files in output order.
    pub selected: Vec<ResolvedFile>,
    pub display: DisplayPaths,
    /// Files excluded from kind matching because they could not be sniffed.
    pub skipped: Vec<(PathBuf, EngineError)>,
}

/// Resolve the configured patterns and select files, sniffing content with
/// the default `ContentSniffer`.
///
/// # Errors
///
/// Returns an error only for an invalid configuration. Unmatched patterns,
/// unreadable directories and unsniffable files are logged and skipped.
pub fn run(config: &Config) -> Result<RunResult> {
    run_with(config, &ContentSniffer)
}

/// Same as [`run`] with a caller-supplied sniffer.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(config: &Config, sniffer: &dyn MimeSniffer) -> Result<RunResult> {
    config.validate()?;

    let resolution = filesystem::resolve(config.patterns.as_slice(), config.home_dir.as_deref());
    let resolved = resolution.files.len();
    log::debug!("{resolved} unique file(s) resolved");
    if resolved == 0 {
        return Ok(RunResult::default());
    }

    let kind = KindSpec::from_keyword(config.kind.as_deref());
    log::debug!(
        "selecting {} {:?} file(s) of kind {kind}",
        config.selection.requested(),
        config.selection.direction
    );
    if log::log_enabled!(log::Level::Debug) {
        for file in &resolution.files {
            let mtime: chrono::DateTime<chrono::Local> = file.modified.into();
            log::debug!(
                "{} modified {}",
                file.path.display(),
                mtime.format("%Y-%m-%d %H:%M:%S%.3f")
            );
        }
    }

    let selected = select::select(resolution.files, config.selection, &kind, sniffer);

    Ok(RunResult {
        resolved,
        selected: selected.files,
        display: resolution.display,
        skipped: selected.skipped,
    })
}
