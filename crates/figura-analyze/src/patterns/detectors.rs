//! Built-in detectors.
//!
//! Each detector accepts a component either by a keyword in its name or by
//! a structural predicate over its direct children.

use figura_core::{DesignNode, DesignTree, LayoutDirection, NodeKind};
use rustc_hash::FxHashSet;

use super::PatternDetector;
use crate::heuristics::{looks_like_button, name_has_any};

fn children<'a>(tree: &'a DesignTree, node: &'a DesignNode) -> Vec<&'a DesignNode> {
    tree.children(node).collect()
}

fn layout_direction(node: &DesignNode) -> Option<LayoutDirection> {
    node.attrs.auto_layout.map(|layout| layout.direction)
}

/// Children that look alike: same kind and same number of children.
fn uniform_children(children: &[&DesignNode]) -> bool {
    let Some(first) = children.first() else {
        return false;
    };
    children
        .iter()
        .all(|c| c.kind == first.kind && c.children.len() == first.children.len())
}

/// Filled or elevated container with text content.
pub struct CardDetector;

impl PatternDetector for CardDetector {
    fn name(&self) -> &'static str {
        "card"
    }

    fn base_confidence(&self) -> f64 {
        0.7
    }

    fn matches(&self, tree: &DesignTree, node: &DesignNode) -> bool {
        if name_has_any(node, &["card", "tile"]) {
            return true;
        }
        if !node.kind.is_container() {
            return false;
        }
        let children = children(tree, node);
        let surfaced = node.has_shadow() || (node.is_rounded() && node.primary_fill_color().is_some());
        surfaced && children.len() >= 2 && children.iter().any(|c| c.is_text())
    }
}

/// Three or more alike children.
pub struct ListDetector;

impl PatternDetector for ListDetector {
    fn name(&self) -> &'static str {
        "list"
    }

    fn base_confidence(&self) -> f64 {
        0.75
    }

    fn matches(&self, tree: &DesignTree, node: &DesignNode) -> bool {
        if name_has_any(node, &["list", "feed"]) {
            return true;
        }
        let children = children(tree, node);
        children.len() >= 3
            && uniform_children(&children)
            && layout_direction(node) != Some(LayoutDirection::Horizontal)
    }
}

pub struct ButtonDetector;

impl PatternDetector for ButtonDetector {
    fn name(&self) -> &'static str {
        "button"
    }

    fn base_confidence(&self) -> f64 {
        0.8
    }

    fn matches(&self, tree: &DesignTree, node: &DesignNode) -> bool {
        looks_like_button(tree, node)
    }
}

/// A horizontal row of three or more labels or links.
pub struct NavigationDetector;

impl PatternDetector for NavigationDetector {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn base_confidence(&self) -> f64 {
        0.7
    }

    fn matches(&self, tree: &DesignTree, node: &DesignNode) -> bool {
        if name_has_any(node, &["nav", "menu", "tab bar", "tabbar", "breadcrumb"]) {
            return true;
        }
        if layout_direction(node) != Some(LayoutDirection::Horizontal) {
            return false;
        }
        let children = children(tree, node);
        let labelled = children
            .iter()
            .filter(|c| c.is_text() || tree.children(c).any(|g| g.is_text()))
            .count();
        labelled >= 3
    }
}

/// Two or more input-like descendants.
pub struct FormDetector;

const INPUT_KEYWORDS: [&str; 5] = ["input", "field", "textbox", "checkbox", "select"];

impl PatternDetector for FormDetector {
    fn name(&self) -> &'static str {
        "form"
    }

    fn base_confidence(&self) -> f64 {
        0.65
    }

    fn matches(&self, tree: &DesignTree, node: &DesignNode) -> bool {
        if name_has_any(node, &["form", "sign in", "signup", "sign up"]) {
            return true;
        }
        let inputs = tree
            .walk(&node.id)
            .skip(1)
            .filter(|(_, n)| name_has_any(n, &INPUT_KEYWORDS))
            .count();
        inputs >= 2
    }
}

/// Four or more alike children laid out over at least two rows and columns.
pub struct GridDetector;

impl PatternDetector for GridDetector {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn base_confidence(&self) -> f64 {
        0.6
    }

    fn matches(&self, tree: &DesignTree, node: &DesignNode) -> bool {
        if name_has_any(node, &["grid", "gallery"]) {
            return true;
        }
        let children = children(tree, node);
        if children.len() < 4 || !uniform_children(&children) {
            return false;
        }
        let mut rows = FxHashSet::default();
        let mut columns = FxHashSet::default();
        for child in &children {
            let Some(bounds) = child.bounding_box() else {
                return false;
            };
            rows.insert(bounds.y.round() as i64);
            columns.insert(bounds.x.round() as i64);
        }
        rows.len() >= 2 && columns.len() >= 2
    }
}

/// An elevated container with a close control.
pub struct ModalDetector;

impl PatternDetector for ModalDetector {
    fn name(&self) -> &'static str {
        "modal"
    }

    fn base_confidence(&self) -> f64 {
        0.7
    }

    fn matches(&self, tree: &DesignTree, node: &DesignNode) -> bool {
        if name_has_any(node, &["modal", "dialog", "popup", "overlay"]) {
            return true;
        }
        node.has_shadow()
            && matches!(node.kind, NodeKind::Frame | NodeKind::Component | NodeKind::Instance)
            && tree
                .walk(&node.id)
                .skip(1)
                .any(|(_, n)| name_has_any(n, &["close", "dismiss"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figura_core::{
        AutoLayout, BoundingBox, Color, DesignDocument, Effect, NodeSpec, Paint, Shadow,
        TreeLimits,
    };

    fn check(detector: &dyn PatternDetector, spec: NodeSpec) -> bool {
        let id = spec.id.clone();
        let (tree, _) =
            DesignTree::from_document(DesignDocument::Node(Box::new(spec)), &TreeLimits::default())
                .unwrap();
        let node = tree.get(&id).unwrap();
        detector.matches(&tree, node)
    }

    fn item(id: &str, x: f64, y: f64) -> NodeSpec {
        NodeSpec::frame(id, "Item")
            .with_bounds(BoundingBox::new(x, y, 100.0, 100.0))
            .with_child(NodeSpec::text(format!("{id}-t"), "Label", "Item"))
    }

    #[test]
    fn test_card_by_structure() {
        let spec = NodeSpec::frame("1", "Frame 1")
            .with_fill(Paint::solid(Color::WHITE))
            .with_effect(Effect::DropShadow(Shadow::new(0.0, 2.0, 4.0, 0.0, Color::BLACK)))
            .with_child(NodeSpec::rectangle("2", "Photo"))
            .with_child(NodeSpec::text("3", "Title", "Hello"));
        assert!(check(&CardDetector, spec));
        assert!(!check(&CardDetector, NodeSpec::frame("1", "Frame 1")));
    }

    #[test]
    fn test_list_and_grid() {
        let column = NodeSpec::frame("1", "Frame 1")
            .with_child(item("a", 0.0, 0.0))
            .with_child(item("b", 0.0, 110.0))
            .with_child(item("c", 0.0, 220.0));
        assert!(check(&ListDetector, column.clone()));
        assert!(!check(&GridDetector, column));

        let grid = NodeSpec::frame("1", "Frame 1")
            .with_child(item("a", 0.0, 0.0))
            .with_child(item("b", 110.0, 0.0))
            .with_child(item("c", 0.0, 110.0))
            .with_child(item("d", 110.0, 110.0));
        assert!(check(&GridDetector, grid));
    }

    #[test]
    fn test_button_by_shape() {
        let spec = NodeSpec::frame("1", "Frame 3")
            .with_size(120.0, 40.0)
            .with_fill(Paint::solid(Color::BLACK))
            .with_corner_radius(6.0)
            .with_child(NodeSpec::text("2", "Label", "Go"));
        assert!(check(&ButtonDetector, spec));
    }

    #[test]
    fn test_navigation_row() {
        let spec = NodeSpec::frame("1", "Header Links")
            .with_auto_layout(AutoLayout::new(LayoutDirection::Horizontal))
            .with_child(NodeSpec::text("2", "Home", "Home"))
            .with_child(NodeSpec::text("3", "About", "About"))
            .with_child(NodeSpec::text("4", "Blog", "Blog"));
        assert!(check(&NavigationDetector, spec.clone()));
        assert!(!check(&ListDetector, spec));
    }

    #[test]
    fn test_form_and_modal() {
        let form = NodeSpec::frame("1", "Frame 9")
            .with_child(NodeSpec::frame("2", "Email Input"))
            .with_child(NodeSpec::frame("3", "Password Field"));
        assert!(check(&FormDetector, form));

        let modal = NodeSpec::frame("1", "Frame 2")
            .with_effect(Effect::DropShadow(Shadow::new(0.0, 8.0, 24.0, 0.0, Color::BLACK)))
            .with_child(NodeSpec::frame("2", "Close Icon"));
        assert!(check(&ModalDetector, modal));
    }
}
