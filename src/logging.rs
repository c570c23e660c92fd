// src/logging.rs
//! stderr diagnostics through `log` + `env_logger`.

use crate::config::OutputOptions;
use env_logger::{Builder, WriteStyle};
use log::{Level, LevelFilter};
use std::io::Write;
use std::path::Path;

/// Environment variable holding an `env_logger` filter, used when neither
/// `--quiet` nor `--verbose` is given.
pub const LOG_ENV: &str = "LATEST_LOG";

const CRATE_TARGETS: &[&str] = &["latest", "latest_engine"];

/// Basename of the invoked program, used as the message prefix.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(|| "latest".to_string(), |n| n.to_string_lossy().into_owned())
}

/// Install the global logger. Quiet keeps only errors, so a failing run
/// still explains its exit status.
pub fn init(output: &OutputOptions) {
    let prog = program_name();
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .write_style(WriteStyle::Never)
        .format(move |buf, record| match record.level() {
            Level::Warn => writeln!(buf, "{prog}: warning: {}", record.args()),
            Level::Debug | Level::Trace => writeln!(buf, "{prog}: [debug] {}", record.args()),
            _ => writeln!(buf, "{prog}: {}", record.args()),
        });

    if output.quiet {
        builder.filter_level(LevelFilter::Error);
    } else if output.verbose {
        for target in CRATE_TARGETS {
            builder.filter_module(target, LevelFilter::Debug);
        }
    } else {
        builder.parse_env(LOG_ENV);
    }

    // A logger may already be installed when embedded in tests.
    let _ = builder.try_init();
}
