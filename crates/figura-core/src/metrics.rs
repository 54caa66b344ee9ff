//! Subtree metrics and the complexity score built from them.

use serde::Serialize;

use crate::node::NodeId;
use crate::tree::DesignTree;

/// Counts gathered over one node and all of its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtreeMetrics {
    pub node_count: usize,
    pub depth: usize,
    pub fill_count: usize,
    pub stroke_count: usize,
    pub effect_count: usize,
    pub rounded_count: usize,
    pub variant_count: usize,
    pub text_count: usize,
    pub character_count: usize,
    pub image_fill_count: usize,
    pub has_gradient: bool,
}

impl SubtreeMetrics {
    /// Collect metrics for the subtree rooted at `id`. Unknown ids yield zeros.
    pub fn collect(tree: &DesignTree, id: &NodeId) -> Self {
        let mut metrics = Self::default();
        for (depth, node) in tree.walk(id) {
            metrics.node_count += 1;
            metrics.depth = metrics.depth.max(depth);
            metrics.fill_count += node.attrs.fills.len();
            metrics.stroke_count += node.attrs.strokes.len();
            metrics.effect_count += node.attrs.effects.len();
            metrics.variant_count += node.variant_count();
            if node.is_rounded() {
                metrics.rounded_count += 1;
            }
            if node.is_text() {
                metrics.text_count += 1;
                metrics.character_count += node.text().map_or(0, |t| t.chars().count());
            }
            if node.has_image_fill() {
                metrics.image_fill_count += 1;
            }
            metrics.has_gradient |= node.has_gradient_fill();
        }
        metrics
    }

    /// Fills, strokes, doubled effects and rounded corners.
    pub fn styling_complexity(&self) -> usize {
        self.fill_count + self.stroke_count + 2 * self.effect_count + self.rounded_count
    }

    pub fn interaction_complexity(&self) -> usize {
        3 * self.variant_count
    }

    /// `2 × nodes + 3 × depth + styling + interaction`.
    ///
    /// Every term only grows when the subtree gains nodes or attributes.
    pub fn complexity(&self) -> usize {
        2 * self.node_count
            + 3 * self.depth
            + self.styling_complexity()
            + self.interaction_complexity()
    }
}
