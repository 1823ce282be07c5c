//! Toolkit settings (`settings.json`)
//!
//! Settings are passed around explicitly instead of living in a process-wide
//! singleton. Keys missing from the file keep their defaults, unknown keys are
//! ignored, and an empty or malformed file falls back to the defaults.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by the tools that consume the toolkit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolkitSettings {
    /// Installed toolkit version, e.g. "v1.0.0"
    #[serde(default = "default_version")]
    pub version: String,

    /// Check for new releases on startup
    #[serde(default)]
    pub auto_check_updates: bool,

    /// Tool names that should not be offered to the user
    #[serde(default = "default_disabled_tools")]
    pub disabled_tools: BTreeSet<String>,
}

fn default_version() -> String {
    "v1.0.0".to_string()
}

fn default_disabled_tools() -> BTreeSet<String> {
    ["savePrefsToStuhome", "calculateMocapLocomotion"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ToolkitSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            auto_check_updates: false,
            disabled_tools: default_disabled_tools(),
        }
    }
}

impl ToolkitSettings {
    /// Per-user settings location (`<config dir>/framekit/settings.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("framekit").join("settings.json"))
    }

    /// Load settings, falling back to defaults when the file is missing,
    /// empty or not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("{} doesn't exist, using default settings", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    "Settings file {} was empty or malformed ({}), using defaults",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))?;

        tracing::info!("Wrote settings to {}", path.display());
        Ok(())
    }

    pub fn is_tool_disabled(&self, tool: &str) -> bool {
        self.disabled_tools.contains(tool)
    }

    /// Enable or disable a tool, returning whether anything changed
    pub fn set_tool_disabled(&mut self, tool: &str, disabled: bool) -> bool {
        if disabled {
            self.disabled_tools.insert(tool.to_string())
        } else {
            self.disabled_tools.remove(tool)
        }
    }
}
