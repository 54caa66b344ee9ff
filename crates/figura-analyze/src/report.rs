//! Analysis report types.

use figura_core::NodeId;
use indexmap::IndexMap;
use serde::Serialize;

/// Aggregate counts over the whole tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub node_count: usize,
    pub component_count: usize,
    /// Mean subtree depth of the components.
    pub average_depth: f64,
    pub max_depth: usize,
    /// Node count per kind label, in first-seen order.
    pub kinds: IndexMap<String, usize>,
    pub visible_count: usize,
    pub hidden_count: usize,
}

/// Complexity score of one component and its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityEntry {
    pub component_id: NodeId,
    pub name: String,
    pub node_count: usize,
    pub depth: usize,
    pub styling: usize,
    pub interaction: usize,
    pub score: usize,
}

/// One component recognized by a pattern detector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternInstance {
    pub component_id: NodeId,
    pub name: String,
    pub confidence: f64,
}

/// Atomic-design tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AtomicTier {
    Atom,
    Molecule,
    Organism,
    Template,
}

/// Which reusability factors a component satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReusabilityFactors {
    pub has_variants: bool,
    pub parametric: bool,
    pub consistent_styling: bool,
    pub atomic: bool,
    pub semantic_naming: bool,
}

impl ReusabilityFactors {
    /// 20 points per satisfied factor.
    pub fn score(&self) -> u32 {
        [
            self.has_variants,
            self.parametric,
            self.consistent_styling,
            self.atomic,
            self.semantic_naming,
        ]
        .iter()
        .filter(|f| **f)
        .count() as u32
            * 20
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReusabilityScore {
    pub component_id: NodeId,
    pub name: String,
    pub score: u32,
    pub tier: AtomicTier,
    pub factors: ReusabilityFactors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

/// An accessibility finding on one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityIssue {
    pub severity: Severity,
    /// Stable rule identifier, e.g. `image-alt-text`.
    pub rule: &'static str,
    pub node_id: NodeId,
    pub node_name: String,
    pub message: String,
}

/// Heuristic cost units, not measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceEstimate {
    pub component_id: NodeId,
    pub name: String,
    pub render_cost: usize,
    pub memory_footprint: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationKind {
    ReduceComplexity,
    ImproveReusability,
    FixAccessibility,
    OptimizePerformance,
}

/// An advisory follow-up derived from the other sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub kind: RecommendationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<NodeId>,
    pub message: String,
}

/// Everything the analyzer computes for one tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub overview: Overview,
    pub complexity: Vec<ComplexityEntry>,
    /// Pattern name to matching components, in detector order. Patterns
    /// without matches are omitted.
    pub patterns: IndexMap<String, Vec<PatternInstance>>,
    pub reusability: Vec<ReusabilityScore>,
    pub accessibility: Vec<AccessibilityIssue>,
    pub performance: Vec<PerformanceEstimate>,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn complexity_of(&self, id: &NodeId) -> Option<&ComplexityEntry> {
        self.complexity.iter().find(|e| &e.component_id == id)
    }

    pub fn reusability_of(&self, id: &NodeId) -> Option<&ReusabilityScore> {
        self.reusability.iter().find(|e| &e.component_id == id)
    }

    pub fn critical_issues(&self) -> impl Iterator<Item = &AccessibilityIssue> {
        self.accessibility
            .iter()
            .filter(|issue| issue.severity == Severity::Critical)
    }
}
