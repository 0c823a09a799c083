//! `[analytics]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [analytics]
//! enable = true               # Annotate links with daa-ll / daa-lh
//! label_length = 20           # Max characters of link and heading labels
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enable: bool,

    /// Maximum characters kept from link text and heading text.
    pub label_length: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            label_length: 20,
        }
    }
}
