// src/error.rs
use latest_engine::error::EngineError;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("No files found matching the given path or wildcard pattern(s).")]
    NoFilesResolved,

    #[error("No files matched the specified kind filter and slice.")]
    NoFilesMatchedKind,

    #[error("No files selected from the given input.")]
    NoFilesSelected,
}

impl AppError {
    /// Usage-type problems exit with 2, everything else with 1.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::Engine(EngineError::Config(_)) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
