//! Decoration collaborators consumed by the brick core.
//!
//! The core never styles text, buttons or analytics itself; it hands the
//! block to a [`Collaborators`] implementation. [`StandardCollaborators`] is
//! the built-in set used by the CLI.
//!
//! # Modules
//!
//! - `button`: emphasis-wrapped links → `con-button` buttons
//! - `text`: heading/body/detail size classes
//! - `analytics`: `daa-lh` / `daa-ll` link tracking attributes
//! - `libs`: base path resolution for the shared libraries

mod analytics;
mod button;
mod libs;
mod text;

use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;

use crate::brick::TextSizes;
use crate::config::AnalyticsConfig;
use crate::dom::Element;

pub use libs::Libs;

/// External decoration steps applied to a block.
#[allow(async_fn_in_trait)]
pub trait Collaborators {
    /// Turn authored button links into styled buttons of `button_class`.
    fn decorate_buttons(&self, block: &mut Element, button_class: &str);

    /// Apply heading/body/detail/link size classes.
    fn decorate_block_text(&self, block: &mut Element, sizes: &TextSizes);

    /// Annotate links with analytics attributes.
    async fn decorate_link_analytics(&self, block: &mut Element) -> Result<()>;
}

/// Built-in collaborator set.
///
/// One set serves one page; it numbers the blocks it annotates.
#[derive(Debug)]
pub struct StandardCollaborators {
    libs: Libs,
    analytics: AnalyticsConfig,
    blocks: AtomicUsize,
}

impl StandardCollaborators {
    pub fn new(libs: Libs, analytics: AnalyticsConfig) -> Self {
        Self {
            libs,
            analytics,
            blocks: AtomicUsize::new(0),
        }
    }

    /// Base path the collaborators were loaded from.
    pub fn libs(&self) -> &Libs {
        &self.libs
    }
}

impl Collaborators for StandardCollaborators {
    fn decorate_buttons(&self, block: &mut Element, button_class: &str) {
        button::decorate_buttons(block, button_class);
    }

    fn decorate_block_text(&self, block: &mut Element, sizes: &TextSizes) {
        text::decorate_block_text(block, sizes);
    }

    async fn decorate_link_analytics(&self, block: &mut Element) -> Result<()> {
        if !self.analytics.enable {
            return Ok(());
        }
        let index = self.blocks.fetch_add(1, Ordering::Relaxed) + 1;
        analytics::decorate_link_analytics(block, index, self.analytics.label_length).await
    }
}

/// Resolve and load the collaborator set for one page.
pub async fn load(libs: Libs, analytics: &AnalyticsConfig) -> Result<StandardCollaborators> {
    crate::debug!("libs"; "loading collaborators from {}", libs.base());
    tokio::task::yield_now().await;
    Ok(StandardCollaborators::new(libs, analytics.clone()))
}
