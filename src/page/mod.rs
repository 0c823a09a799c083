//! Page driver: finds every brick block on a page and decorates it.
//!
//! Blocks are isolated from each other. Each is decorated on a copy that is
//! swapped into the page only when decoration succeeds, so one malformed
//! block never leaves half-rewritten markup or stops its siblings.

mod context;

pub use context::PageContext;

use anyhow::Result;
use serde::Serialize;

use crate::brick::{Decoration, decorate_block};
use crate::collab::Collaborators;
use crate::config::BrickConfig;
use crate::dom::{Element, Path};
use crate::{debug, log};

/// Outcome of decorating one page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageReport {
    /// Libraries base the page's collaborators were loaded from.
    pub libs: String,
    pub blocks: Vec<BlockReport>,
    /// `small-top-padding` was added to the masonry section.
    pub masonry_padding: bool,
}

impl PageReport {
    pub fn decorated(&self) -> usize {
        self.blocks.iter().filter(|b| b.error.is_none()).count()
    }

    pub fn failed(&self) -> usize {
        self.blocks.len() - self.decorated()
    }
}

/// Outcome of decorating one block.
#[derive(Debug, Clone, Serialize)]
pub struct BlockReport {
    /// Child-index path of the block from the page root.
    pub path: Path,
    pub classes: Vec<String>,
    #[serde(flatten)]
    pub decoration: Option<Decoration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Decorate every brick block under `root`, in document order.
///
/// A block nested inside another block is decorated as part of its outer
/// block's content and is not visited on its own.
pub async fn decorate_page<C: Collaborators>(
    root: &mut Element,
    collab: &C,
    config: &BrickConfig,
) -> Result<PageReport> {
    let ctx = PageContext::scan(root, &config.page)?;
    let blocks = find_blocks(root, &config.block.class);
    debug!("page"; "found {} block(s)", blocks.len());

    let mut report = PageReport::default();
    for path in blocks {
        propagate_grid_classes(root, &path, &config.page.fragment);

        let Some(original) = root.get(&path) else {
            continue;
        };
        let classes = original.classes().map(str::to_string).collect();
        let mut block = original.clone();

        match decorate_block(&mut block, collab, &ctx).await {
            Ok(decoration) => {
                root.replace(&path, block);
                report.blocks.push(BlockReport {
                    path,
                    classes,
                    decoration: Some(decoration),
                    error: None,
                });
            }
            Err(err) => {
                log!("error"; "block at {:?} left undecorated: {}", path, err);
                report.blocks.push(BlockReport {
                    path,
                    classes,
                    decoration: None,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    if ctx.plain_link_bar && !report.blocks.is_empty() {
        let masonry = &config.page.masonry;
        if let Some(path) = root.find_first(|e| e.has_class("section") && e.has_class(masonry))
            && let Some(section) = root.get_mut(&path)
        {
            section.add_class("small-top-padding");
            report.masonry_padding = true;
        }
    }

    Ok(report)
}

/// Outermost elements carrying `class`, in document order.
fn find_blocks(root: &Element, class: &str) -> Vec<Path> {
    let mut outer: Vec<Path> = Vec::new();
    for path in root.find_all(|e| e.has_class(class)) {
        if !outer.iter().any(|done| path.starts_with(done)) {
            outer.push(path);
        }
    }
    outer
}

/// Copy the block's `-grid` classes onto the parent of its closest fragment
/// (the block itself counts).
fn propagate_grid_classes(root: &mut Element, block: &[usize], fragment: &str) {
    let Some(grid) = root.get(block).map(|b| {
        b.classes()
            .filter(|c| c.contains("-grid"))
            .map(str::to_string)
            .collect::<Vec<_>>()
    }) else {
        return;
    };
    if grid.is_empty() {
        return;
    }

    let fragment_len = (1..=block.len())
        .rev()
        .find(|&len| root.get(&block[..len]).is_some_and(|e| e.has_class(fragment)));
    let Some(fragment_len) = fragment_len else {
        return;
    };
    if let Some(parent) = root.get_mut(&block[..fragment_len - 1]) {
        for class in &grid {
            parent.add_class(class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{Libs, StandardCollaborators};
    use crate::config::{AnalyticsConfig, LibsConfig};
    use crate::dom::parse_document;
    use pretty_assertions::assert_eq;

    fn collab() -> StandardCollaborators {
        StandardCollaborators::new(
            Libs::resolve(&LibsConfig::default(), None),
            AnalyticsConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_failed_block_is_left_untouched() {
        let html = concat!(
            r#"<main>"#,
            r#"<div class="homepage-brick link"><div><div>a</div></div><div><p>no group</p></div></div>"#,
            r#"<div class="homepage-brick"><div><div><h2>ok</h2></div></div></div>"#,
            r#"</main>"#,
        );
        let mut doc = parse_document(html);
        let broken_before = doc.root.get(&[0, 0]).unwrap().clone();

        let report = decorate_page(&mut doc.root, &collab(), &BrickConfig::default())
            .await
            .unwrap();

        assert_eq!(report.blocks.len(), 2);
        assert_eq!(report.decorated(), 1);
        assert_eq!(report.failed(), 1);
        assert!(report.blocks[0].error.as_deref().unwrap().contains("inner group"));
        assert_eq!(doc.root.get(&[0, 0]).unwrap(), &broken_before);
        assert!(doc.root.get(&[0, 1]).unwrap().has_class("click"));
    }

    #[tokio::test]
    async fn test_grid_classes_move_to_fragment_parent() {
        let html = concat!(
            r#"<main><div class="section">"#,
            r#"<div class="fragment"><div><div class="homepage-brick two-grid"><div><div>x</div></div></div></div></div>"#,
            r#"</div></main>"#,
        );
        let mut doc = parse_document(html);
        decorate_page(&mut doc.root, &collab(), &BrickConfig::default())
            .await
            .unwrap();

        let section = doc.root.get(&[0, 0]).unwrap();
        assert_eq!(section.get_attr("class"), Some("section two-grid"));
    }

    #[tokio::test]
    async fn test_masonry_padding_needs_plain_link_bar() {
        let html = concat!(
            r#"<main><div class="homepage-link-bar"></div>"#,
            r#"<div class="section masonry"><div class="homepage-brick"><div><div>x</div></div></div></div>"#,
            r#"<div class="section masonry"></div></main>"#,
        );
        let mut doc = parse_document(html);
        let report = decorate_page(&mut doc.root, &collab(), &BrickConfig::default())
            .await
            .unwrap();
        assert!(report.masonry_padding);
        assert!(doc.root.get(&[0, 1]).unwrap().has_class("small-top-padding"));
        assert!(!doc.root.get(&[0, 2]).unwrap().has_class("small-top-padding"));

        let mut doc = parse_document(r#"<main><div class="section masonry"></div></main>"#);
        let report = decorate_page(&mut doc.root, &collab(), &BrickConfig::default())
            .await
            .unwrap();
        assert!(!report.masonry_padding);
    }

    #[test]
    fn test_nested_blocks_are_skipped() {
        let doc = parse_document(
            r#"<div class="homepage-brick"><div class="homepage-brick"></div></div><div class="homepage-brick"></div>"#,
        );
        assert_eq!(find_blocks(&doc.root, "homepage-brick"), vec![vec![0], vec![1]]);
    }
}
