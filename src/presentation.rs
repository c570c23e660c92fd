// src/presentation.rs
use latest_engine::RunResult;
use std::io::{self, Write};
use std::path::Path;

/// Write selected absolute paths to `out`, one per line, noting each on stderr.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_selected<W: Write>(result: &RunResult, out: &mut W) -> io::Result<()> {
    for file in &result.selected {
        log::info!("Selected {}", result.display.display(&file.path));
        write_path(out, &file.path)?;
    }
    out.flush()
}

/// Write `path` and a newline, keeping non-UTF-8 names byte-exact on unix.
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(path.as_os_str().as_bytes())?;
    }
    #[cfg(not(unix))]
    write!(out, "{}", path.display())?;
    out.write_all(b"\n")
}

/// Shortfall notice, e.g. `fewer files than requested: 1 of 3`.
pub fn shortfall_message(found: usize, requested: usize) -> String {
    format!("fewer files than requested: {found} of {requested}")
}
