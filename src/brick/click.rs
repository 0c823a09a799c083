//! Click-target collapse: the whole foreground becomes one link.

use crate::dom::{Attrs, Content, Element, create_tag};
use crate::page::PageContext;

/// Replace the block's first link with a small caption and wrap the
/// foreground's content in an anchor carrying that link's target.
///
/// The caption takes the link's place, so it usually lands inside a `<p>`.
/// That nesting is kept as-is in the tree and in the written markup; a
/// browser parsing the written page closes the paragraph before the caption
/// `div`, leaving an empty `<p>` after it.
///
/// Returns `false` without touching the block when there is no link, no
/// foreground, or the foreground sits inside the link.
pub fn collapse_click_target(block: &mut Element, ctx: &PageContext) -> bool {
    let Some(link_path) = block.find_first(|e| e.is("a")) else {
        return false;
    };
    let Some(foreground_path) = block.find_first(|e| e.has_class("foreground")) else {
        return false;
    };
    if foreground_path.starts_with(&link_path) {
        return false;
    }
    let Some(link) = block.get(&link_path) else {
        return false;
    };

    let mut attrs = Attrs::from([("class", "foreground")]);
    attrs.set(
        "href",
        link.get_attr("href")
            .map(|href| ctx.resolve_href(href))
            .unwrap_or_default(),
    );
    if let Some(label) = link.get_attr("daa-ll") {
        attrs.set("daa-ll", label);
    }
    if let Some(target) = link.get_attr("target") {
        attrs.set("target", target);
    }

    let caption = create_tag(
        "div",
        Attrs::from([("class", "click-link body-xs")]),
        Some(Content::Text(link.text_content().trim().to_string())),
    );
    block.replace(&link_path, caption);

    let Some(foreground) = block.get_mut(&foreground_path) else {
        return false;
    };
    let anchor = create_tag("a", attrs, Some(Content::Nodes(foreground.take_children())));
    block.replace(&foreground_path, anchor);
    true
}
