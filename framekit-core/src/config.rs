//! Directory scan configuration
//!
//! Options can be built in code or loaded from a TOML file:
//!
//! ```toml
//! range = [1001, 1100]
//! prefix_pattern = "beauty"
//! ext_pattern = "exr"
//! padding_policy = "most-common"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default prefix pattern: word characters, dots and dashes
pub const DEFAULT_PREFIX_PATTERN: &str = r"[\w\-\.]+";

/// Default extension pattern: letters only
pub const DEFAULT_EXT_PATTERN: &str = r"[a-zA-Z]+";

/// How the scan picks the padding width of the sequence
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PaddingPolicy {
    /// The first matching file (in file name order) fixes the padding
    #[default]
    FirstSeen,

    /// The most frequent padding among matching files wins, ties go to the
    /// width seen first
    MostCommon,
}

/// Options controlling how a directory is scanned for a sequence
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScanOptions {
    /// Inclusive frame number filter; frames outside are skipped
    #[serde(default)]
    pub range: Option<(i64, i64)>,

    /// Regex fragment the file name prefix must match
    #[serde(default = "default_prefix_pattern")]
    pub prefix_pattern: String,

    /// Regex fragment the extension must match
    #[serde(default = "default_ext_pattern")]
    pub ext_pattern: String,

    #[serde(default)]
    pub padding_policy: PaddingPolicy,
}

fn default_prefix_pattern() -> String {
    DEFAULT_PREFIX_PATTERN.to_string()
}

fn default_ext_pattern() -> String {
    DEFAULT_EXT_PATTERN.to_string()
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            range: None,
            prefix_pattern: default_prefix_pattern(),
            ext_pattern: default_ext_pattern(),
            padding_policy: PaddingPolicy::default(),
        }
    }
}

impl ScanOptions {
    /// Load options from a TOML file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let options: ScanOptions = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(options)
    }

    /// Restrict the scan to an inclusive frame range
    pub fn with_range(mut self, start: i64, end: i64) -> Self {
        self.range = Some((start, end));
        self
    }

    pub fn with_prefix_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.prefix_pattern = pattern.into();
        self
    }

    pub fn with_ext_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ext_pattern = pattern.into();
        self
    }

    pub fn with_padding_policy(mut self, policy: PaddingPolicy) -> Self {
        self.padding_policy = policy;
        self
    }

    /// Whether a frame number passes the range filter
    pub fn in_range(&self, number: i64) -> bool {
        match self.range {
            Some((start, end)) => number >= start && number <= end,
            None => true,
        }
    }
}
