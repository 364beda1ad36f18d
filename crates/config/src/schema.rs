use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration structure parsed from `vtop.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VtopConfig {
    /// Theme name: a built-in (`parallax`, `brew`, `wizard`) or a file in the
    /// themes directory.
    pub theme: String,
    /// Delay between two screen redraws, in milliseconds.
    pub redraw_interval_ms: u64,
    /// Minimum number of samples each chart keeps, even when narrower.
    pub history_limit: usize,
    /// Per-sensor poll cadence.
    pub sensors: SensorsConfig,
}

impl Default for VtopConfig {
    fn default() -> Self {
        Self {
            theme: "parallax".to_string(),
            redraw_interval_ms: 100,
            history_limit: 1024,
            sensors: SensorsConfig::default(),
        }
    }
}

impl VtopConfig {
    pub fn redraw_interval(&self) -> Duration {
        Duration::from_millis(self.redraw_interval_ms.max(1))
    }
}

/// Poll intervals, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorsConfig {
    pub cpu_interval_ms: u64,
    pub memory_interval_ms: u64,
    pub process_interval_ms: u64,
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            cpu_interval_ms:     200,
            memory_interval_ms:  200,
            process_interval_ms: 1000,
        }
    }
}
