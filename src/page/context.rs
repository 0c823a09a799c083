//! Page-level landmarks a block reacts to.

use anyhow::{Context, Result};
use url::Url;

use crate::config::PageConfig;
use crate::dom::Element;

/// Facts about the whole page, captured once before any block is touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    /// A link bar without a custom background is on the page.
    pub plain_link_bar: bool,

    /// Base for resolving relative hrefs.
    pub base_url: Option<Url>,
}

impl PageContext {
    pub fn scan(root: &Element, config: &PageConfig) -> Result<Self> {
        let plain_link_bar = root
            .find_first(|e| e.has_class(&config.link_bar) && !e.has_class(&config.custom_bg))
            .is_some();
        let base_url = config
            .url
            .as_deref()
            .map(|url| Url::parse(url).with_context(|| format!("invalid page url `{url}`")))
            .transpose()?;

        Ok(Self {
            plain_link_bar,
            base_url,
        })
    }

    /// Absolute form of `href` when a base URL is known.
    pub fn resolve_href(&self, href: &str) -> String {
        match &self.base_url {
            Some(base) => base
                .join(href)
                .map(String::from)
                .unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }
}
