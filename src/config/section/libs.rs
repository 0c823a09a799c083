//! `[libs]` section configuration.
//!
//! Base location of the shared decoration libraries. A page URL with a
//! `milolibs` query parameter overrides it per page.
//!
//! # Example
//!
//! ```toml
//! [libs]
//! base = "/libs"              # Default collaborator base path
//! override_param = "milolibs" # Query parameter that selects a branch
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibsConfig {
    /// Default base path.
    pub base: String,

    /// Query parameter naming a libs branch (`local` or a branch name).
    pub override_param: String,
}

impl Default for LibsConfig {
    fn default() -> Self {
        Self {
            base: "/libs".to_string(),
            override_param: "milolibs".to_string(),
        }
    }
}
