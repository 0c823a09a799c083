//! `[page]` section configuration.
//!
//! Page-level landmarks that blocks react to, and the URL used to resolve
//! relative links.
//!
//! # Example
//!
//! ```toml
//! [page]
//! url = "https://www.example.com/"   # Base URL for click-target hrefs
//! link_bar = "homepage-link-bar"     # Link bar class
//! custom_bg = "custom-bg"            # Link bar class that opts out of padding
//! masonry = "masonry"                # Section class that gets small-top-padding
//! fragment = "fragment"              # Fragment wrapper class for grid classes
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Base URL of the page. Relative hrefs are resolved against it.
    pub url: Option<String>,

    pub link_bar: String,

    pub custom_bg: String,

    pub masonry: String,

    pub fragment: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: None,
            link_bar: "homepage-link-bar".to_string(),
            custom_bg: "custom-bg".to_string(),
            masonry: "masonry".to_string(),
            fragment: "fragment".to_string(),
        }
    }
}
