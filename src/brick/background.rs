//! Background layer decoration for a single row.
//!
//! A row without any image is a flat background: its text is the CSS
//! `background` value and is consumed. A row with images is a responsive
//! image set; each item may carry a focal-point caption `x, y, fit`.

use crate::dom::{Element, Node, outer_html};

use super::BrickError;

/// Responsive visibility classes, by item position.
const VIEWPORTS: [&str; 3] = ["mobileOnly", "tabletOnly", "desktopOnly"];

/// Focal point parsed from an image caption (`x[, y[, fit]]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocalPoint {
    pub x: String,
    pub y: String,
    pub fit: Option<String>,
}

impl FocalPoint {
    /// Parse a caption. Parts are trimmed and lower-cased; a missing `y` is
    /// empty and an empty `fit` is absent.
    pub fn parse(caption: &str) -> Self {
        let mut parts = caption.split(',').map(|p| p.trim().to_lowercase());
        let x = parts.next().unwrap_or_default();
        let y = parts.next().unwrap_or_default();
        let fit = parts.next().filter(|f| !f.is_empty());
        Self { x, y, fit }
    }

    /// Value for `object-position`.
    pub fn object_position(&self) -> String {
        format!("{} {}", self.x, self.y).trim_end().to_string()
    }
}

/// Turn `row` into a background layer in place.
///
/// `row_index` only labels errors.
pub fn decorate_background(row: &mut Element, row_index: usize) -> Result<(), BrickError> {
    row.add_class("background");

    if row.find_first(|e| e.is("img")).is_none() {
        let value = row.text_content().trim().to_string();
        if !row.set_style("background", &value) {
            crate::debug!("brick"; "ignoring background {:?} in row {}", value, row_index);
        }
        row.children.clear();
        return Ok(());
    }

    assign_viewports(row);

    let items: Vec<usize> = row.child_elements().map(|(i, _)| i).collect();
    for (item, index) in items.into_iter().enumerate() {
        let Some(child) = row.child_mut(index) else {
            continue;
        };
        if !apply_focal_point(child) {
            return Err(BrickError::MissingPicture {
                row: row_index,
                item,
            });
        }
    }
    Ok(())
}

/// Give each image item a viewport class.
///
/// Two items: the first serves mobile and tablet, the second desktop.
/// Three or more: positional. Items past the third get no class.
fn assign_viewports(row: &mut Element) {
    let items: Vec<usize> = row.child_elements().map(|(i, _)| i).collect();
    match items.as_slice() {
        [] | [_] => {}
        [first, second] => {
            if let Some(e) = row.child_mut(*first) {
                e.add_classes(&VIEWPORTS[..2]);
            }
            if let Some(e) = row.child_mut(*second) {
                e.add_class(VIEWPORTS[2]);
            }
        }
        many => {
            for (&index, class) in many.iter().zip(VIEWPORTS) {
                if let Some(e) = row.child_mut(index) {
                    e.add_class(class);
                }
            }
        }
    }
}

/// Style the item's image from its caption, then keep only its picture.
///
/// Items without an image or without a caption are left as they are.
/// Returns `false` when a captioned item has no picture to keep.
fn apply_focal_point(item: &mut Element) -> bool {
    let Some(img_path) = item.find_first(|e| e.is("img")) else {
        return true;
    };
    let caption = item.text_content();
    let caption = caption.trim();
    if caption.is_empty() {
        return true;
    }

    let focal = FocalPoint::parse(caption);
    if let Some(img) = item.get_mut(&img_path) {
        img.set_style("object-position", &focal.object_position());
        if let Some(fit) = &focal.fit {
            img.set_style("object-fit", fit);
        }
    }

    let Some(picture) = item
        .find_first(|e| e.is("picture"))
        .and_then(|path| item.get(&path).cloned())
    else {
        return false;
    };
    crate::debug!("brick"; "focal point {:?} -> {}", caption, outer_html(&picture));
    item.children.clear();
    item.children.push(Node::element(picture));
    true
}
