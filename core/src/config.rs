use serde::{Deserialize, Serialize};

pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Knobs that affect how the scanner reports positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Number of columns a tab character advances.
    pub tab_width: usize,
}

impl ScannerConfig {
    pub fn with_tab_width(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}
