//! Whole-tree component analysis.

use figura_core::{DesignNode, DesignTree, NodeKind, SubtreeMetrics};
use indexmap::IndexMap;
use tracing::debug;

use crate::accessibility::check_tree;
use crate::config::AnalyzerConfig;
use crate::patterns::DetectorRegistry;
use crate::report::{
    AccessibilityIssue, AnalysisReport, ComplexityEntry, Overview, PerformanceEstimate,
    Recommendation, RecommendationKind, ReusabilityScore, Severity,
};
use crate::reusability::score_component;

/// Components are the roots plus every nested instance, in pre-order.
pub fn collect_components(tree: &DesignTree) -> Vec<&DesignNode> {
    tree.walk_all()
        .filter(|(depth, node)| *depth == 1 || node.kind == NodeKind::Instance)
        .map(|(_, node)| node)
        .collect()
}

/// `2 × nodes + 5 × effects`, plus 10 when any gradient fill is present.
pub fn render_cost(metrics: &SubtreeMetrics) -> usize {
    2 * metrics.node_count + 5 * metrics.effect_count + if metrics.has_gradient { 10 } else { 0 }
}

/// `100 × nodes + 2 × characters`.
pub fn memory_footprint(metrics: &SubtreeMetrics) -> usize {
    100 * metrics.node_count + 2 * metrics.character_count
}

/// Produces an [`AnalysisReport`] for a tree.
pub struct ComponentAnalyzer {
    config: AnalyzerConfig,
    detectors: DetectorRegistry,
}

impl ComponentAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_detectors(config, DetectorRegistry::with_defaults())
    }

    pub fn with_detectors(config: AnalyzerConfig, detectors: DetectorRegistry) -> Self {
        Self { config, detectors }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn detectors_mut(&mut self) -> &mut DetectorRegistry {
        &mut self.detectors
    }

    pub fn analyze(&self, tree: &DesignTree) -> AnalysisReport {
        let components = collect_components(tree);
        let metrics: Vec<SubtreeMetrics> = components
            .iter()
            .map(|node| SubtreeMetrics::collect(tree, &node.id))
            .collect();

        let complexity: Vec<ComplexityEntry> = components
            .iter()
            .zip(&metrics)
            .map(|(node, m)| ComplexityEntry {
                component_id: node.id.clone(),
                name: node.name.clone(),
                node_count: m.node_count,
                depth: m.depth,
                styling: m.styling_complexity(),
                interaction: m.interaction_complexity(),
                score: m.complexity(),
            })
            .collect();

        let reusability: Vec<ReusabilityScore> = components
            .iter()
            .zip(&metrics)
            .map(|(node, m)| score_component(tree, node, m))
            .collect();

        let performance: Vec<PerformanceEstimate> = components
            .iter()
            .zip(&metrics)
            .map(|(node, m)| PerformanceEstimate {
                component_id: node.id.clone(),
                name: node.name.clone(),
                render_cost: render_cost(m),
                memory_footprint: memory_footprint(m),
            })
            .collect();

        let patterns = self.detectors.detect(tree, &components);
        let accessibility = check_tree(tree, &self.config);
        let recommendations = self.recommend(&complexity, &reusability, &accessibility, &performance);

        debug!(
            components = components.len(),
            patterns = patterns.len(),
            issues = accessibility.len(),
            recommendations = recommendations.len(),
            "Analyzed tree"
        );

        AnalysisReport {
            overview: overview(tree, &metrics),
            complexity,
            patterns,
            reusability,
            accessibility,
            performance,
            recommendations,
        }
    }

    fn recommend(
        &self,
        complexity: &[ComplexityEntry],
        reusability: &[ReusabilityScore],
        accessibility: &[AccessibilityIssue],
        performance: &[PerformanceEstimate],
    ) -> Vec<Recommendation> {
        let mut out = Vec::new();

        for entry in complexity
            .iter()
            .filter(|e| e.score > self.config.complexity_threshold)
        {
            out.push(Recommendation {
                kind: RecommendationKind::ReduceComplexity,
                component_id: Some(entry.component_id.clone()),
                message: format!(
                    "'{}' has complexity {} (threshold {}); consider splitting it into smaller components",
                    entry.name, entry.score, self.config.complexity_threshold
                ),
            });
        }

        for entry in reusability
            .iter()
            .filter(|e| e.score < self.config.reusability_threshold)
        {
            out.push(Recommendation {
                kind: RecommendationKind::ImproveReusability,
                component_id: Some(entry.component_id.clone()),
                message: format!(
                    "'{}' scores {} for reusability; add variants, props or a descriptive name",
                    entry.name, entry.score
                ),
            });
        }

        let critical = accessibility
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .count();
        if critical > 0 {
            out.push(Recommendation {
                kind: RecommendationKind::FixAccessibility,
                component_id: None,
                message: format!("Resolve {critical} critical accessibility issue(s)"),
            });
        }

        // Stable sort keeps component order among equal costs.
        let mut heaviest: Vec<&PerformanceEstimate> = performance.iter().collect();
        heaviest.sort_by(|a, b| b.render_cost.cmp(&a.render_cost));
        for estimate in heaviest.into_iter().take(self.config.top_heaviest) {
            out.push(Recommendation {
                kind: RecommendationKind::OptimizePerformance,
                component_id: Some(estimate.component_id.clone()),
                message: format!(
                    "'{}' has render cost {}; review effects and node count",
                    estimate.name, estimate.render_cost
                ),
            });
        }

        out
    }
}

impl Default for ComponentAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

fn overview(tree: &DesignTree, metrics: &[SubtreeMetrics]) -> Overview {
    let mut kinds: IndexMap<String, usize> = IndexMap::new();
    let mut visible_count = 0;
    for (_, node) in tree.walk_all() {
        *kinds.entry(node.kind.label().to_string()).or_default() += 1;
        if node.is_visible() {
            visible_count += 1;
        }
    }
    let node_count = kinds.values().sum();
    let average_depth = if metrics.is_empty() {
        0.0
    } else {
        metrics.iter().map(|m| m.depth as f64).sum::<f64>() / metrics.len() as f64
    };

    Overview {
        node_count,
        component_count: metrics.len(),
        average_depth,
        max_depth: metrics.iter().map(|m| m.depth).max().unwrap_or(0),
        kinds,
        visible_count,
        hidden_count: node_count - visible_count,
    }
}

/// Analyze with the default configuration and detectors.
pub fn analyze(tree: &DesignTree) -> AnalysisReport {
    ComponentAnalyzer::default().analyze(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::AtomicTier;
    use figura_core::{
        Color, DesignDocument, Effect, NodeId, NodeSpec, Paint, Shadow, TreeLimits, VariantValue,
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tree_of(roots: Vec<NodeSpec>) -> DesignTree {
        DesignTree::from_document(DesignDocument::Nodes(roots), &TreeLimits::default())
            .unwrap()
            .0
    }

    fn login_button() -> NodeSpec {
        NodeSpec::frame("1", "Login Button")
            .with_size(120.0, 40.0)
            .with_fill(Paint::solid(Color::rgb(0.0, 123.0 / 255.0, 1.0)))
            .with_corner_radius(6.0)
            .with_child(NodeSpec::text("2", "Label", "Login"))
    }

    #[test]
    fn test_components_include_nested_instances() {
        let tree = tree_of(vec![
            NodeSpec::frame("1", "Page").with_child(
                NodeSpec::frame("2", "Body").with_child(NodeSpec::instance("3", "Avatar")),
            ),
            NodeSpec::frame("4", "Footer"),
        ]);
        let ids: Vec<_> = collect_components(&tree)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3", "4"]);
    }

    #[test]
    fn test_login_button_report() {
        let report = analyze(&tree_of(vec![login_button()]));

        assert_eq!(report.overview.node_count, 2);
        assert_eq!(report.overview.component_count, 1);
        assert_eq!(report.overview.max_depth, 2);
        assert_eq!(report.overview.kinds["FRAME"], 1);
        assert_eq!(report.overview.kinds["TEXT"], 1);

        let complexity = report.complexity_of(&NodeId::from("1")).unwrap();
        // 2×2 nodes + 3×2 depth + (1 fill + 1 rounded)
        assert_eq!(complexity.score, 12);

        let patterns: Vec<_> = report.patterns.keys().map(String::as_str).collect();
        assert_eq!(patterns, ["button"]);
        assert_eq!(report.patterns["button"][0].confidence, 0.8);

        let reuse = report.reusability_of(&NodeId::from("1")).unwrap();
        assert_eq!(reuse.tier, AtomicTier::Atom);
        assert_eq!(reuse.score, 80);

        assert_eq!(report.performance[0].render_cost, 4);
        assert_eq!(report.performance[0].memory_footprint, 210);

        assert_eq!(report.accessibility.len(), 1);
        assert_eq!(report.accessibility[0].severity, Severity::Warning);

        let kinds: Vec<_> = report.recommendations.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, [RecommendationKind::OptimizePerformance]);
    }

    #[test]
    fn test_recommendation_thresholds() {
        let mut heavy = NodeSpec::frame("1", "Frame 1").with_fill(Paint::image("hero"));
        for i in 0..20 {
            heavy = heavy.with_child(
                NodeSpec::rectangle(format!("r{i}"), "Rectangle")
                    .with_effect(Effect::DropShadow(Shadow::new(0.0, 1.0, 2.0, 0.0, Color::BLACK))),
            );
        }
        let roots: Vec<NodeSpec> = std::iter::once(heavy)
            .chain((2..8).map(|i| NodeSpec::frame(format!("{i}"), format!("Slot {i}"))))
            .collect();
        let report = analyze(&tree_of(roots));

        let count = |kind: RecommendationKind| report.recommendations.iter().filter(|r| r.kind == kind).count();
        assert_eq!(count(RecommendationKind::ReduceComplexity), 1);
        assert_eq!(count(RecommendationKind::FixAccessibility), 1);
        assert_eq!(count(RecommendationKind::OptimizePerformance), 5);
        assert!(count(RecommendationKind::ImproveReusability) >= 1);
        assert_eq!(report.critical_issues().count(), 1);

        let first_heavy = report
            .recommendations
            .iter()
            .find(|r| r.kind == RecommendationKind::OptimizePerformance)
            .unwrap();
        assert_eq!(first_heavy.component_id, Some(NodeId::from("1")));
    }

    #[test]
    fn test_hidden_count() {
        let report = analyze(&tree_of(vec![
            NodeSpec::frame("1", "A").with_child(NodeSpec::rectangle("2", "B").hidden())
        ]));
        assert_eq!(report.overview.visible_count, 1);
        assert_eq!(report.overview.hidden_count, 1);
    }

    proptest! {
        #[test]
        fn complexity_never_drops_when_adding(
            children in 0usize..6,
            fills in 0usize..3,
            effects in 0usize..3,
            variants in 0usize..3,
        ) {
            let mut spec = NodeSpec::frame("root", "Widget");
            for i in 0..variants {
                spec = spec.with_variant(format!("v{i}"), VariantValue::Boolean(true));
            }
            for _ in 0..fills {
                spec = spec.with_fill(Paint::solid(Color::WHITE));
            }
            for _ in 0..effects {
                spec = spec.with_effect(Effect::DropShadow(Shadow::new(0.0, 1.0, 1.0, 0.0, Color::BLACK)));
            }
            for i in 0..children {
                spec = spec.with_child(NodeSpec::rectangle(format!("c{i}"), "Child"));
            }
            let id = NodeId::from("root");
            let base = analyze(&tree_of(vec![spec.clone()])).complexity_of(&id).unwrap().score;

            let with_child = spec
                .clone()
                .with_child(NodeSpec::text("extra", "Extra", "x"));
            let with_fill = spec.clone().with_fill(Paint::solid(Color::BLACK));
            let with_effect = spec.with_effect(Effect::LayerBlur { radius: 2.0, visible: true });

            for grown in [with_child, with_fill, with_effect] {
                let score = analyze(&tree_of(vec![grown])).complexity_of(&id).unwrap().score;
                prop_assert!(score >= base);
            }
        }
    }
}
