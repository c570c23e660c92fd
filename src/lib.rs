// src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;

use crate::config::Request;
use crate::error::{AppError, Result};
use latest_engine::kind::KindSpec;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolve, select and print, applying the empty/short result policy.
///
/// # Errors
///
/// `NoFilesResolved`, `NoFilesMatchedKind` or `NoFilesSelected` when nothing
/// is selected and empty results are not allowed; IO errors from stdout.
pub fn run(request: &Request) -> Result<()> {
    let allow_empty = request.output.allow_empty_result;
    let result = latest_engine::run(&request.engine)?;

    if result.resolved == 0 {
        return if allow_empty {
            Ok(())
        } else {
            Err(AppError::NoFilesResolved)
        };
    }

    if result.selected.is_empty() {
        if allow_empty {
            return Ok(());
        }
        let filtered = KindSpec::from_keyword(request.engine.kind.as_deref()).is_filter();
        return Err(if filtered {
            AppError::NoFilesMatchedKind
        } else {
            AppError::NoFilesSelected
        });
    }

    let requested = request.engine.selection.requested();
    if result.selected.len() < requested && !allow_empty {
        log::warn!(
            "{}",
            presentation::shortfall_message(result.selected.len(), requested)
        );
    }

    presentation::print_selected(&result, &mut std::io::stdout().lock())?;
    Ok(())
}
