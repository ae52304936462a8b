use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml (all optional; defaults apply when the
/// file or a field is absent)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key-hint line in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Named color overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

/// Startup defaults for the derived view, as mode labels
/// (`all`/`favourite`/`active`/`completed`, `date`/`alpha`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

fn default_true() -> bool {
    true
}
