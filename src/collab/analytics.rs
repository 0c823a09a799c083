//! Link analytics attributes.
//!
//! The block gets a `daa-lh` header naming it; every link gets a `daa-ll`
//! label built from its text, its position and the heading it sits under.

use anyhow::{Result, bail};

use crate::dom::Element;

/// Annotate `block` and its links. `index` is the block's 1-based position
/// among decorated blocks.
pub async fn decorate_link_analytics(
    block: &mut Element,
    index: usize,
    label_length: usize,
) -> Result<()> {
    tokio::task::yield_now().await;

    let Some(name) = block.classes().next().map(str::to_string) else {
        bail!("block has no class to name its analytics header after");
    };
    block.set_attr("daa-lh", format!("b{index}|{name}"));

    let mut heading = String::new();
    let mut position = 0;
    for path in block.find_all(|e| e.is("a") || e.is_heading()) {
        let Some(elem) = block.get_mut(&path) else {
            continue;
        };
        if elem.is_heading() {
            heading = truncate(&elem.text_content(), label_length);
            continue;
        }

        position += 1;
        if elem.has_attr("daa-ll") {
            continue;
        }
        let label = truncate(&elem.text_content(), label_length);
        elem.set_attr("daa-ll", format!("{label}-{position}--{heading}"));
    }
    Ok(())
}

/// Trimmed text cut to at most `max` characters.
fn truncate(text: &str, max: usize) -> String {
    text.trim().chars().take(max).collect::<String>().trim_end().to_string()
}
