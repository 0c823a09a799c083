//! `[block]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [block]
//! class = "homepage-brick"    # Class that marks a block for decoration
//! ```

use serde::{Deserialize, Serialize};

/// Which elements are decorated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    /// Class name identifying brick blocks.
    pub class: String,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            class: "homepage-brick".to_string(),
        }
    }
}
