//! Button decoration.
//!
//! Authors mark a link as a button by wrapping it in emphasis: `strong`/`b`
//! for a filled button, `em`/`i` for an outline one.

use crate::dom::Element;

/// Button style implied by the wrapping emphasis tag.
fn button_style(tag: &str) -> Option<&'static str> {
    match tag {
        "strong" | "b" => Some("blue"),
        "em" | "i" => Some("outline"),
        _ => None,
    }
}

/// Style every emphasis-wrapped link in `block` as a button.
///
/// Links are processed last to first so unwrapping one never shifts the
/// path of another still pending.
pub fn decorate_buttons(block: &mut Element, button_class: &str) {
    let links = block.find_all_with_parent(|elem, parent| {
        elem.is("a") && button_style(&parent.tag).is_some()
    });

    for path in links.into_iter().rev() {
        let Some((_, parent_path)) = path.split_last() else {
            continue;
        };
        let Some(style) = block.get(parent_path).and_then(|p| button_style(&p.tag)) else {
            continue;
        };
        if let Some(link) = block.get_mut(&path) {
            link.add_classes(&["con-button", button_class, style]);
        }

        // closest paragraph or group holding the button, never the block
        let area = (1..parent_path.len())
            .rev()
            .map(|len| &parent_path[..len])
            .find(|prefix| block.get(prefix).is_some_and(|e| e.is("p") || e.is("div")));
        if let Some(area) = area.map(<[usize]>::to_vec)
            && let Some(area) = block.get_mut(&area)
        {
            area.add_class("action-area");
        }

        block.unwrap(parent_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Node, outer_html, parse_fragment};
    use pretty_assertions::assert_eq;

    fn block(html: &str) -> Element {
        match parse_fragment(html).remove(0) {
            Node::Element(e) => *e,
            Node::Text(_) => panic!("expected element"),
        }
    }

    #[test]
    fn test_strong_and_em_buttons() {
        let mut el = block(
            r#"<div><div><p><strong><a href="/buy">Buy</a></strong> <em><a href="/more">More</a></em></p></div></div>"#,
        );
        decorate_buttons(&mut el, "button-l");
        assert_eq!(
            outer_html(&el),
            r#"<div><div><p class="action-area"><a href="/buy" class="con-button button-l blue">Buy</a> <a href="/more" class="con-button button-l outline">More</a></p></div></div>"#
        );
    }

    #[test]
    fn test_plain_links_untouched() {
        let html = r#"<div><div><p><a href="/x">x</a></p></div></div>"#;
        let mut el = block(html);
        decorate_buttons(&mut el, "button-m");
        assert_eq!(outer_html(&el), html);
    }
}
