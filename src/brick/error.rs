//! Block decoration errors.

use thiserror::Error;

/// Failures while decorating a single block.
///
/// None of these are recovered inside the block; the page driver isolates
/// them so sibling blocks still decorate.
#[derive(Debug, Error)]
pub enum BrickError {
    /// A two-row `link` block whose second row has no inner `div` group.
    #[error("link block row {row} has no inner group to merge")]
    MissingInnerGroup { row: usize },

    /// A captioned background image with no `picture` to keep.
    #[error("background image in row {row}, item {item} has no <picture>")]
    MissingPicture { row: usize, item: usize },

    #[error("analytics decoration failed")]
    Analytics(#[source] Box<dyn std::error::Error + Send + Sync>),
}
