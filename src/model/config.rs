use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from docket.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Rows per page of the visible window
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Start in infinite-scroll mode instead of discrete pages
    #[serde(default = "default_true")]
    pub infinite: bool,
    /// Fraction of the sentinel row that must be visible to load more
    #[serde(default = "default_load_threshold")]
    pub load_threshold: f64,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            page_size: 10,
            infinite: true,
            load_threshold: 0.9,
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_load_threshold() -> f64 {
    0.9
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
