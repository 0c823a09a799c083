//! Text size decoration.

use crate::brick::TextSizes;
use crate::dom::{Element, Path};

/// Apply heading, detail, body and link size classes to `block`.
///
/// The element right before the first heading is the detail line when it
/// is not itself a heading. Body size goes to every still unclassed
/// paragraph or list, so details and action areas keep their own.
pub fn decorate_block_text(block: &mut Element, sizes: &TextSizes) {
    let heading_class = format!("heading-{}", sizes.heading);
    let headings = block.find_all(Element::is_heading);
    for path in &headings {
        if let Some(heading) = block.get_mut(path) {
            heading.add_class(&heading_class);
        }
    }

    if let Some(first) = headings.first()
        && let Some(detail) = previous_element_sibling(block, first)
        && block.get(&detail).is_some_and(|e| !e.is_heading())
        && let Some(detail) = block.get_mut(&detail)
    {
        detail.add_class(&format!("detail-{}", sizes.detail));
    }

    let body_class = format!("body-{}", sizes.body);
    block.for_each_match(
        &|e: &Element| matches!(e.tag.as_str(), "p" | "ul" | "ol") && !e.has_attr("class"),
        &mut |e: &mut Element| e.add_class(&body_class),
    );

    let link_class = format!("body-{}", sizes.link);
    block.for_each_match(&|e: &Element| e.has_class("action-area"), &mut |area: &mut Element| {
        area.for_each_match(
            &|e: &Element| e.is("a") && !e.has_class("con-button"),
            &mut |a: &mut Element| a.add_class(&link_class),
        );
    });
}

/// Path of the element sibling right before `path`, skipping text.
fn previous_element_sibling(block: &Element, path: &[usize]) -> Option<Path> {
    let (&index, parent_path) = path.split_last()?;
    let parent = block.get(parent_path)?;
    let (sibling, _) = parent.child_elements().take_while(|(i, _)| *i < index).last()?;
    let mut found = parent_path.to_vec();
    found.push(sibling);
    Some(found)
}
