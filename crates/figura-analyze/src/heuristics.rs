//! Name and shape heuristics shared by the analysis passes.

use std::sync::OnceLock;

use figura_core::{DesignNode, DesignTree};
use regex::Regex;

/// Names the authoring tool assigns by default, e.g. `Frame 12`.
const GENERIC_NAME: &str = r"(?i)^\s*(frame|group|rectangle|ellipse|vector|line|star|polygon|component|instance|text|layer|section|union|subtract|image)?\s*\d*\s*$";

fn generic_name_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(GENERIC_NAME).ok()).as_ref()
}

/// Whether a layer name carries no meaning beyond its kind.
pub fn is_generic_name(name: &str) -> bool {
    generic_name_pattern().map_or(name.trim().is_empty(), |p| p.is_match(name))
}

/// Case-insensitive substring match against any keyword.
pub fn name_has_any(node: &DesignNode, keywords: &[&str]) -> bool {
    let name = node.name.to_lowercase();
    keywords.iter().any(|k| name.contains(k))
}

pub const BUTTON_KEYWORDS: [&str; 3] = ["button", "btn", "cta"];

/// A small filled, rounded container holding a single text label.
pub fn looks_like_button(tree: &DesignTree, node: &DesignNode) -> bool {
    if name_has_any(node, &BUTTON_KEYWORDS) {
        return true;
    }
    if !node.kind.is_container() || node.children.len() != 1 {
        return false;
    }
    let short = node
        .bounding_box()
        .map_or(true, |b| b.height > 0.0 && b.height <= 64.0);
    let labelled = tree.children(node).any(|child| child.is_text());
    short && labelled && node.primary_fill_color().is_some() && node.is_rounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_names() {
        assert!(is_generic_name("Frame 12"));
        assert!(is_generic_name("rectangle"));
        assert!(is_generic_name("  "));
        assert!(is_generic_name("42"));
        assert!(!is_generic_name("Login Button"));
        assert!(!is_generic_name("Frame Header"));
    }
}
