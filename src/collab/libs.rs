//! Base path resolution for the shared decoration libraries.

use serde::Serialize;
use url::Url;

use crate::config::LibsConfig;

/// Resolved libraries base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Libs {
    base: String,
}

impl Libs {
    /// Pick the base for a page.
    ///
    /// A page URL carrying the override parameter wins over config:
    /// `local` maps to the local dev server, a value containing `--` is a
    /// full preview host prefix, anything else is a branch name.
    pub fn resolve(config: &LibsConfig, page_url: Option<&Url>) -> Self {
        let branch = page_url.and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == config.override_param.as_str())
                .map(|(_, value)| value.into_owned())
                .filter(|value| !value.is_empty())
        });

        let base = match branch.as_deref() {
            None => config.base.clone(),
            Some("local") => "http://localhost:6456/libs".to_string(),
            Some(b) if b.contains("--") => format!("https://{b}.hlx.live/libs"),
            Some(b) => format!("https://{b}--milo--adobecom.hlx.live/libs"),
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}
