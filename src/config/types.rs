use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI tick rate in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// The selectable rows, in display order. Labels are taken as-is.
    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,
}

/// One selectable row on the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            items: default_items(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_items() -> Vec<ItemConfig> {
    ["1", "2", "3"]
        .into_iter()
        .map(|label| ItemConfig {
            label: label.to_string(),
        })
        .collect()
}
