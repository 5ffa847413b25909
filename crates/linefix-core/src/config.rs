// crates/linefix-core/src/config.rs

use std::ffi::OsStr;

use crate::error::{LinefixError, Result};

pub const DEFAULT_SUFFIX: &str = ".java";
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// What to do when a selected file cannot be read or written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing file and report its path.
    #[default]
    Abort,
    /// Keep going, then fail with every failed path at the end.
    Collect,
}

/// Settings for a whitespace normalization run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetabConfig {
    /// File name suffix selecting which files are touched (e.g. ".java").
    pub suffix: String,
    /// Number of spaces each tab expands to.
    pub tab_width: usize,
    /// Report files that would change without writing them.
    pub dry_run: bool,
    pub policy: FailurePolicy,
}

impl Default for RetabConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            tab_width: DEFAULT_TAB_WIDTH,
            dry_run: false,
            policy: FailurePolicy::Abort,
        }
    }
}

impl RetabConfig {
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(LinefixError::Usage("suffix must not be empty".into()));
        }
        if self.tab_width == 0 {
            return Err(LinefixError::Usage("tab width must be at least 1".into()));
        }
        Ok(())
    }

    /// True if `file_name` ends with the configured suffix. Compared on the
    /// raw name, so names that are not valid UTF-8 still match.
    pub fn selects(&self, file_name: &OsStr) -> bool {
        file_name
            .as_encoded_bytes()
            .ends_with(self.suffix.as_bytes())
    }
}
