// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use latest_engine::config::{Config, ConfigBuilder};
use latest_engine::select::Selection;

/// CLI-side switches that shape diagnostics and the exit policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub quiet: bool,
    pub verbose: bool,
    pub allow_empty_result: bool,
}

impl From<&Args> for OutputOptions {
    fn from(args: &Args) -> Self {
        Self {
            quiet: args.quiet,
            verbose: args.verbose,
            allow_empty_result: args.allow_empty_result,
        }
    }
}

/// A validated invocation.
#[derive(Debug, Clone)]
pub struct Request {
    pub engine: Config,
    pub output: OutputOptions,
}

impl TryFrom<Args> for Request {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let output = OutputOptions::from(&args);
        let selection = Selection::from_signed(signed_count(&args)?)?;

        let engine = ConfigBuilder::default()
            .patterns(args.files)
            .selection(selection)
            .kind(args.kind)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;
        engine.validate()?;

        Ok(Self { engine, output })
    }
}

/// `--oldest N` is carried as a count of `-N`; no flag means newest 1.
fn signed_count(args: &Args) -> Result<i64> {
    let (magnitude, sign) = match (args.newest, args.oldest) {
        (_, Some(n)) => (n, -1),
        (Some(n), None) => (n, 1),
        (None, None) => (1, 1),
    };
    let magnitude = i64::try_from(magnitude)
        .map_err(|_| AppError::Config(format!("count too large: {magnitude}")))?;
    Ok(sign * magnitude)
}
