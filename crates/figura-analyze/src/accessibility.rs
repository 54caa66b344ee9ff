//! Accessibility checks over every node of the tree.

use figura_core::{DesignNode, DesignTree};

use crate::config::AnalyzerConfig;
use crate::heuristics::{is_generic_name, looks_like_button};
use crate::report::{AccessibilityIssue, Severity};

fn issue(node: &DesignNode, severity: Severity, rule: &'static str, message: String) -> AccessibilityIssue {
    AccessibilityIssue {
        severity,
        rule,
        node_id: node.id.clone(),
        node_name: node.name.clone(),
        message,
    }
}

/// Run every check in pre-order. Per node, issues follow check order:
/// alt text, text contrast, interactive naming.
pub fn check_tree(tree: &DesignTree, config: &AnalyzerConfig) -> Vec<AccessibilityIssue> {
    let mut issues = Vec::new();
    for (_, node) in tree.walk_all() {
        let missing_alt = node
            .attrs
            .alt_text
            .as_deref()
            .map_or(true, |alt| alt.trim().is_empty());
        if node.has_image_fill() && missing_alt {
            issues.push(issue(
                node,
                Severity::Critical,
                "image-alt-text",
                format!("Image fill on '{}' has no alternative text", node.name),
            ));
        }

        if config.warn_on_text && node.is_text() {
            issues.push(issue(
                node,
                Severity::Warning,
                "text-contrast",
                format!("Verify color contrast of text '{}'", node.name),
            ));
        }

        if is_generic_name(&node.name) && looks_like_button(tree, node) {
            issues.push(issue(
                node,
                Severity::Warning,
                "interactive-name",
                format!("Interactive element '{}' needs a descriptive name", node.name),
            ));
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use figura_core::{Color, DesignDocument, NodeSpec, Paint, TreeLimits};
    use pretty_assertions::assert_eq;

    fn tree_of(spec: NodeSpec) -> DesignTree {
        DesignTree::from_document(DesignDocument::Node(Box::new(spec)), &TreeLimits::default())
            .unwrap()
            .0
    }

    fn rules(issues: &[AccessibilityIssue]) -> Vec<(&str, &'static str)> {
        issues.iter().map(|i| (i.node_id.as_str(), i.rule)).collect()
    }

    #[test]
    fn test_checks_in_preorder() {
        let tree = tree_of(
            NodeSpec::frame("1", "Frame 3")
                .with_size(100.0, 40.0)
                .with_fill(Paint::solid(Color::BLACK))
                .with_corner_radius(4.0)
                .with_child(NodeSpec::text("2", "Label", "Go")),
        );
        let issues = check_tree(&tree, &AnalyzerConfig::default());
        assert_eq!(
            rules(&issues),
            [("1", "interactive-name"), ("2", "text-contrast")]
        );
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn test_image_alt_text() {
        let tree = tree_of(
            NodeSpec::frame("1", "Gallery")
                .with_child(NodeSpec::rectangle("2", "Photo").with_fill(Paint::image("abc")))
                .with_child(
                    NodeSpec::rectangle("3", "Logo")
                        .with_fill(Paint::image("def"))
                        .with_alt_text("Company logo"),
                ),
        );
        let issues = check_tree(&tree, &AnalyzerConfig::default());
        assert_eq!(rules(&issues), [("2", "image-alt-text")]);
        assert_eq!(issues[0].severity, Severity::Critical);
    }

    #[test]
    fn test_text_warning_can_be_disabled() {
        let tree = tree_of(NodeSpec::text("1", "Heading", "Welcome"));
        let config = AnalyzerConfig {
            warn_on_text: false,
            ..Default::default()
        };
        assert!(check_tree(&tree, &config).is_empty());
        assert_eq!(check_tree(&tree, &AnalyzerConfig::default()).len(), 1);
    }
}
