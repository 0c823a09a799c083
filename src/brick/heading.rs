//! Heading level normalization.
//!
//! Every heading, plus every direct child of a highlight row, is rebuilt at
//! a fixed level: the first match in document order becomes `h3`, the rest
//! `h4`. Attributes are copied and content is flattened to its text.

use crate::dom::{Element, Node, Path};

/// Level of the first matched heading.
const FIRST_LEVEL: u8 = 3;
/// Level of every later heading.
const REST_LEVEL: u8 = 4;

/// Rewrite heading levels inside `block`. Returns the number rewritten.
///
/// A match nested inside an earlier rewritten match was flattened away
/// with its ancestor; it still counts toward the ordering.
pub fn normalize_headings(block: &mut Element) -> usize {
    let matches = block
        .find_all_with_parent(|elem, parent| elem.is_heading() || parent.has_class("highlight-row"));

    let mut replaced: Vec<Path> = Vec::new();
    for (counter, path) in matches.into_iter().enumerate() {
        if replaced.iter().any(|done| path.starts_with(done)) {
            continue;
        }
        let Some(original) = block.get(&path) else {
            continue;
        };

        let level = if counter == 0 { FIRST_LEVEL } else { REST_LEVEL };
        let mut clone = Element::with_attrs(&format!("h{level}"), original.attrs.clone());
        clone.push_text(original.text_content());

        block.replace(&path, Node::element(clone));
        replaced.push(path);
    }
    replaced.len()
}
