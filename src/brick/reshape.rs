//! Row reshaping: assigns each authored row a role.
//!
//! Rows are the direct `div` children of a block. The shape is picked by
//! class presence, independently of the size variant:
//!
//! | shape   | condition                    | result                                   |
//! |---------|------------------------------|------------------------------------------|
//! | `Link`  | `link` class                 | synthesized background (+ highlight) row |
//! | `News`  | `news` class and > 1 row     | first row is the highlight row           |
//! | `Click` | otherwise                    | up to two background layers, rest front  |

use serde::Serialize;

use crate::dom::{Attrs, Element, Node, create_tag};

use super::BrickError;
use super::background::decorate_background;

/// How the rows of a block were reshaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Link,
    News,
    Click,
}

/// Named row slots after reshaping, as indices into the block's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub shape: Shape,
    pub highlight: Option<usize>,
    pub first_background: Option<usize>,
    pub background: Option<usize>,
    pub foreground: Vec<usize>,
}

impl Layout {
    fn new(shape: Shape) -> Self {
        Self {
            shape,
            highlight: None,
            first_background: None,
            background: None,
            foreground: Vec::new(),
        }
    }
}

/// Rearrange `block`'s rows into roles.
pub fn reshape(block: &mut Element) -> Result<Layout, BrickError> {
    let rows = block.rows();
    if block.has_class("link") {
        reshape_link(block, rows)
    } else if block.has_class("news") && rows.len() > 1 {
        Ok(reshape_news(block, &rows))
    } else {
        reshape_click(block, &rows)
    }
}

/// Link shape: a two-row block collapses into one row holding both groups,
/// then placeholder rows are prepended.
fn reshape_link(block: &mut Element, rows: Vec<usize>) -> Result<Layout, BrickError> {
    let mut layout = Layout::new(Shape::Link);

    let foreground = if rows.len() == 2 {
        let (left, right) = (rows[0], rows[1]);
        let group =
            take_first_group(block, right).ok_or(BrickError::MissingInnerGroup { row: 1 })?;
        if let Some(left_row) = block.child_mut(left) {
            left_row.push(group);
        }
        block.children.remove(right);
        vec![left]
    } else {
        rows
    };

    let background = create_tag(
        "div",
        Attrs::from([("class", "background first-background")]),
        None,
    );
    block.prepend(background);
    let mut prepended = 1;

    if block.has_class("split-background") {
        layout.first_background = Some(0);
    } else {
        let highlight = create_tag("div", Attrs::from([("class", "highlight-row")]), None);
        block.prepend(highlight);
        prepended += 1;
        layout.highlight = Some(0);
        layout.first_background = Some(1);
    }

    layout.foreground = foreground.into_iter().map(|i| i + prepended).collect();
    Ok(layout)
}

/// Detach the first `div` child of the row at `index`.
fn take_first_group(block: &mut Element, index: usize) -> Option<Node> {
    let row = block.child_mut(index)?;
    let (group, _) = row.child_elements().find(|(_, e)| e.is("div"))?;
    Some(row.children.remove(group))
}

/// News shape: first row is the highlight band and every link is small.
fn reshape_news(block: &mut Element, rows: &[usize]) -> Layout {
    let mut layout = Layout::new(Shape::News);
    let [highlight, tail @ ..] = rows else {
        return layout;
    };

    if let Some(row) = block.child_mut(*highlight) {
        row.add_class("highlight-row");
    }
    block.for_each_match(&|e: &Element| e.is("a"), &mut |a: &mut Element| a.add_class("body-xs"));

    layout.highlight = Some(*highlight);
    layout.foreground = tail.to_vec();
    layout
}

/// Click shape: the whole foreground becomes one link later on.
///
/// With more than one row, the first is the first background layer; if more
/// than one row is still left, the next is a second background layer. A
/// single row is always foreground.
fn reshape_click(block: &mut Element, rows: &[usize]) -> Result<Layout, BrickError> {
    let mut layout = Layout::new(Shape::Click);
    block.add_class("click");

    let mut rest = rows;
    if let [head, tail @ ..] = rest
        && !tail.is_empty()
    {
        if let Some(row) = block.child_mut(*head) {
            decorate_background(row, 0)?;
            row.add_class("first-background");
        }
        layout.first_background = Some(*head);
        rest = tail;

        if let [head, tail @ ..] = rest
            && !tail.is_empty()
        {
            if let Some(row) = block.child_mut(*head) {
                decorate_background(row, 1)?;
            }
            layout.background = Some(*head);
            rest = tail;
        }
    }

    layout.foreground = rest.to_vec();
    Ok(layout)
}
