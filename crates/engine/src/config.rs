// crates/engine/src/config.rs
use crate::select::Selection;
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Glob patterns in the order given. Must not be empty.
    pub patterns: Vec<String>,
    #[builder(default)]
    pub selection: Selection,
    /// Kind keyword (`doc`, `xls`, `ppt`, `zip` or a MIME major type).
    #[builder(default)]
    pub kind: Option<String>,
    /// Directory substituted for a leading `~`.
    #[builder(default = "dirs::home_dir()")]
    pub home_dir: Option<PathBuf>,
}

impl Config {
    /// # Errors
    /// Returns `EngineError::Config` when no patterns were given.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.patterns.is_empty() {
            return Err(crate::error::EngineError::Config(
                "at least one file pattern is required".to_string(),
            ));
        }
        Ok(())
    }
}
