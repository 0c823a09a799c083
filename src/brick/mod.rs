//! Brick block decoration.
//!
//! Turns one authored block into a styled hero component in place:
//!
//! 1. classify the size variant (`size`)
//! 2. style buttons with the variant's button size
//! 3. reshape rows into background / highlight / foreground roles (`reshape`,
//!    `background`)
//! 4. normalize heading levels (`heading`)
//! 5. resolve override classes and style text
//! 6. for click blocks, await link analytics then collapse the click target
//!    (`click`)

mod background;
mod click;
mod error;
mod heading;
mod reshape;
mod size;

pub use error::BrickError;
pub use reshape::Shape;
pub use size::{SizeVariant, TextSizes};

use serde::Serialize;

use crate::collab::Collaborators;
use crate::dom::Element;
use crate::page::PageContext;

/// What was decided for one block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoration {
    pub variant: SizeVariant,
    pub shape: Shape,
    pub sizes: TextSizes,
    pub headings: usize,
    pub collapsed: bool,
}

/// Decorate `block` in place.
///
/// Errors leave the block partially decorated; callers that need isolation
/// decorate a copy.
pub async fn decorate_block<C: Collaborators>(
    block: &mut Element,
    collab: &C,
    ctx: &PageContext,
) -> Result<Decoration, BrickError> {
    let variant = SizeVariant::classify(block.classes());
    let base = TextSizes::for_variant(variant);
    crate::debug!("brick"; "variant {:?} -> {:?}", variant, base.as_array());

    collab.decorate_buttons(block, &base.button_class());

    let layout = reshape::reshape(block)?;
    let headings = heading::normalize_headings(block);

    let sizes = base.with_overrides(block.classes());
    collab.decorate_block_text(block, &sizes);

    for &index in &layout.foreground {
        if let Some(row) = block.child_mut(index) {
            row.add_class("foreground");
        }
    }

    let mut collapsed = false;
    if block.has_class("click") {
        collab
            .decorate_link_analytics(block)
            .await
            .map_err(|err| BrickError::Analytics(err.into()))?;
        collapsed = click::collapse_click_target(block, ctx);
    }

    Ok(Decoration {
        variant,
        shape: layout.shape,
        sizes,
        headings,
        collapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::{Collaborators, Libs, load};
    use crate::config::{AnalyticsConfig, LibsConfig};
    use crate::dom::{Node, parse_fragment};
    use anyhow::{Result, bail};
    use pretty_assertions::assert_eq;

    fn block(html: &str) -> Element {
        match parse_fragment(html).remove(0) {
            Node::Element(e) => *e,
            Node::Text(_) => panic!("expected element"),
        }
    }

    /// Records what the core handed over; touches nothing.
    #[derive(Default)]
    struct Recorder {
        buttons: parking_lot::Mutex<Vec<String>>,
        sizes: parking_lot::Mutex<Vec<TextSizes>>,
        fail_analytics: bool,
    }

    impl Collaborators for Recorder {
        fn decorate_buttons(&self, _block: &mut Element, button_class: &str) {
            self.buttons.lock().push(button_class.to_string());
        }

        fn decorate_block_text(&self, _block: &mut Element, sizes: &TextSizes) {
            self.sizes.lock().push(sizes.clone());
        }

        async fn decorate_link_analytics(&self, block: &mut Element) -> Result<()> {
            if self.fail_analytics {
                bail!("analytics unavailable");
            }
            for path in block.find_all(|e| e.is("a")) {
                if let Some(a) = block.get_mut(&path) {
                    a.set_attr("daa-ll", "abc");
                }
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_overrides_reach_text_collaborator() {
        let mut el = block(
            r#"<div class="homepage-brick medium gold-heading small-body"><div><div><h2>Hi</h2></div></div></div>"#,
        );
        let collab = Recorder::default();
        let decoration = decorate_block(&mut el, &collab, &PageContext::default())
            .await
            .unwrap();

        assert_eq!(decoration.variant, SizeVariant::Medium);
        assert_eq!(decoration.sizes.as_array(), ["gold", "small", "m", "l", "m"]);
        assert_eq!(*collab.sizes.lock(), vec![decoration.sizes.clone()]);
        // buttons use the table value, before overrides
        assert_eq!(*collab.buttons.lock(), vec!["button-l".to_string()]);
    }

    #[tokio::test]
    async fn test_click_block_end_to_end() {
        let mut el = block(concat!(
            r#"<div class="homepage-brick large">"#,
            r##"<div><div>#ff0000</div></div>"##,
            r#"<div><div><h2>Sale</h2><h5>Now on</h5><p><a href="https://x">Shop</a></p></div></div>"#,
            r#"</div>"#,
        ));
        let collab = Recorder::default();
        let decoration = decorate_block(&mut el, &collab, &PageContext::default())
            .await
            .unwrap();

        assert_eq!(decoration.shape, Shape::Click);
        assert_eq!(decoration.headings, 2);
        assert!(decoration.collapsed);
        assert!(el.has_class("click"));

        let bg = el.get(&[0]).unwrap();
        assert!(bg.has_class("first-background"));
        assert_eq!(bg.style("background"), Some("#ff0000"));
        assert!(bg.children.is_empty());

        let front = el.get(&[1]).unwrap();
        assert_eq!(front.tag, "a");
        assert_eq!(front.get_attr("class"), Some("foreground"));
        assert_eq!(front.get_attr("href"), Some("https://x"));
        assert_eq!(front.get_attr("daa-ll"), Some("abc"));

        let inner = front.get(&[0]).unwrap();
        assert_eq!(inner.get(&[0]).unwrap().tag, "h3");
        assert_eq!(inner.get(&[1]).unwrap().tag, "h4");
        let caption = inner.get(&inner.find_first(|e| e.has_class("click-link")).unwrap()).unwrap();
        assert_eq!(caption.text_content(), "Shop");
        assert!(el.find_first(|e| e.is("a") && !e.has_class("foreground")).is_none());
    }

    #[tokio::test]
    async fn test_link_block_is_not_collapsed() {
        let mut el = block(
            r#"<div class="homepage-brick link"><div><div><h2>Left</h2></div></div><div><div><a href="/r">Right</a></div></div></div>"#,
        );
        let decoration = decorate_block(&mut el, &Recorder::default(), &PageContext::default())
            .await
            .unwrap();

        assert_eq!(decoration.variant, SizeVariant::Link);
        assert_eq!(decoration.shape, Shape::Link);
        assert!(!decoration.collapsed);
        assert_eq!(el.rows().len(), 3);
        assert!(el.get(&[2]).unwrap().has_class("foreground"));
        assert!(el.find_first(|e| e.is("a")).is_some());
    }

    #[tokio::test]
    async fn test_news_block_foreground_rows() {
        let mut el = block(concat!(
            r#"<div class="homepage-brick news">"#,
            r#"<div><div>Today</div></div>"#,
            r#"<div><div><a href="/a">a</a></div></div>"#,
            r#"<div><div><a href="/b">b</a></div></div>"#,
            r#"</div>"#,
        ));
        decorate_block(&mut el, &Recorder::default(), &PageContext::default())
            .await
            .unwrap();

        let highlight = el.get(&[0]).unwrap();
        assert!(highlight.has_class("highlight-row"));
        assert_eq!(highlight.get(&[0]).unwrap().tag, "h3");
        assert!(el.get(&[1]).unwrap().has_class("foreground"));
        assert!(el.get(&[2]).unwrap().has_class("foreground"));
    }

    #[tokio::test]
    async fn test_analytics_failure_propagates() {
        let mut el = block(r#"<div class="homepage-brick"><div><div><a href="/x">x</a></div></div></div>"#);
        let collab = Recorder {
            fail_analytics: true,
            ..Recorder::default()
        };
        let err = decorate_block(&mut el, &collab, &PageContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BrickError::Analytics(_)));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("analytics unavailable"));
    }

    #[tokio::test]
    async fn test_standard_collaborators_click_block() {
        let collab = load(
            Libs::resolve(&LibsConfig::default(), None),
            &AnalyticsConfig::default(),
        )
        .await
        .unwrap();
        let mut el = block(concat!(
            r#"<div class="homepage-brick small">"#,
            r#"<div><div><h2>Deals</h2><p><strong><a href="https://x">Shop now</a></strong></p></div></div>"#,
            r#"</div>"#,
        ));
        let decoration = decorate_block(&mut el, &collab, &PageContext::default())
            .await
            .unwrap();

        assert!(decoration.collapsed);
        assert_eq!(el.get_attr("daa-lh"), Some("b1|homepage-brick"));
        let front = el.get(&[0]).unwrap();
        assert_eq!(front.get_attr("daa-ll"), Some("Shop now-1--Deals"));
        let heading = front.get(&[0, 0]).unwrap();
        assert_eq!(heading.tag, "h3");
        assert_eq!(heading.get_attr("class"), Some("heading-m"));
    }
}
