//! Display and tuning configuration for a select widget.
//!
//! Every field has a default, so a config can be built in code or loaded from
//! a partial YAML document such as:
//!
//! ```yaml
//! placeholder: "Pick a user..."
//! async_search_debounce_ms: 250
//! async_search_min_length: 3
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectError};

pub const DEFAULT_PLACEHOLDER: &str = "Select...";
pub const DEFAULT_NO_OPTIONS_MESSAGE: &str = "No Options";
pub const DEFAULT_ASYNC_SEARCH_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_ASYNC_SEARCH_MIN_LENGTH: usize = 1;
pub const DEFAULT_ASYNC_SEARCHING_TEXT: &str = "Searching...";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Text shown in place of a value when nothing is selected
    pub placeholder: String,

    /// Text shown in the open menu when there are no visible options
    pub no_options_message: String,

    /// Optional label rendered above the widget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Disables all interaction
    pub disabled: bool,

    /// Whether the clear affordance is offered when a value is set
    pub clearable: bool,

    /// Whether the text field accepts input
    pub searchable: bool,

    /// Quiet period before the async search runs (default: 500)
    pub async_search_debounce_ms: u64,

    /// Shortest search text that goes to the async search (default: 1)
    pub async_search_min_length: usize,

    /// Menu text while an async search is outstanding
    pub async_searching_text: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            no_options_message: DEFAULT_NO_OPTIONS_MESSAGE.to_string(),
            label: None,
            disabled: false,
            clearable: true,
            searchable: true,
            async_search_debounce_ms: DEFAULT_ASYNC_SEARCH_DEBOUNCE_MS,
            async_search_min_length: DEFAULT_ASYNC_SEARCH_MIN_LENGTH,
            async_searching_text: DEFAULT_ASYNC_SEARCHING_TEXT.to_string(),
        }
    }
}

impl SelectConfig {
    /// Parse a config from YAML, filling missing fields with defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: SelectConfig = serde_yaml_ng::from_str(content)?;
        Ok(config)
    }

    /// Load a config file. A missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(SelectConfig::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SelectError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read select config at {}: {}", path.display(), e),
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Debounce delay for async search. Never shorter than 1ms.
    pub fn async_search_debounce(&self) -> Duration {
        Duration::from_millis(self.async_search_debounce_ms.max(1))
    }
}
