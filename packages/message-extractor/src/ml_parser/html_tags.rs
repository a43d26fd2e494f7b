//! HTML Tag Definitions
//!
//! Only the facts the extractor needs about HTML tags.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Elements that can never have content.
static VOID_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ]
    .into_iter()
    .collect()
});

/// Whether `tag_name` is a void element. Matching is case-insensitive.
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(tag_name.to_ascii_lowercase().as_str())
}
