//! Script extraction from markup.
//!
//! Finds every `<script ...>...</script>` element and returns its inner text.
//! Matching is textual: the body runs to the first closing tag, attributes
//! are ignored, and `src=` elements with an empty body still produce a block.

use std::sync::LazyLock;

use regex::Regex;

use scriptlint_types::ScriptBlock;

#[allow(clippy::expect_used)] // pattern is a literal
static SCRIPT_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script[^>]*>(.*?)</script>").expect("script pattern must compile")
});

/// Inner texts of all script elements, numbered from 1 in document order.
pub fn extract_script_blocks(markup: &str) -> Vec<ScriptBlock> {
    ScriptBlock::numbered(
        SCRIPT_ELEMENT
            .captures_iter(markup)
            .filter_map(|caps| caps.get(1))
            .map(|body| body.as_str()),
    )
}
