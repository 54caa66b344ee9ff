//! Reusability scoring.

use figura_core::{DesignNode, DesignTree, SubtreeMetrics};
use rustc_hash::FxHashSet;

use crate::heuristics::is_generic_name;
use crate::report::{AtomicTier, ReusabilityFactors, ReusabilityScore};

const TIER_KEYWORDS: [(&str, AtomicTier); 4] = [
    ("atom", AtomicTier::Atom),
    ("molecule", AtomicTier::Molecule),
    ("organism", AtomicTier::Organism),
    ("template", AtomicTier::Template),
];

fn tier_from_name(name: &str) -> Option<AtomicTier> {
    let name = name.to_lowercase();
    TIER_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, tier)| *tier)
}

fn tier_from_size(node_count: usize) -> AtomicTier {
    match node_count {
        0..=3 => AtomicTier::Atom,
        4..=10 => AtomicTier::Molecule,
        11..=30 => AtomicTier::Organism,
        _ => AtomicTier::Template,
    }
}

/// At most three fill colors, two corner radii and two font families.
fn has_consistent_styling(tree: &DesignTree, root: &DesignNode) -> bool {
    let mut colors = FxHashSet::default();
    let mut radii = FxHashSet::default();
    let mut families = FxHashSet::default();
    for (_, node) in tree.walk(&root.id) {
        for color in node.visible_fills().filter_map(|p| p.solid_color()) {
            colors.insert(color.to_rgb_key());
        }
        if let Some(radius) = node.attrs.corner_radius.filter(|r| r.is_rounded()) {
            radii.insert(format!("{:?}", radius.corners()));
        }
        if let Some(family) = node.attrs.style.as_ref().and_then(|s| s.font_family.as_ref()) {
            families.insert(family.clone());
        }
    }
    colors.len() <= 3 && radii.len() <= 2 && families.len() <= 2
}

/// Variants, or text that can become a prop.
fn is_parametric(tree: &DesignTree, root: &DesignNode) -> bool {
    root.variant_count() > 0
        || tree
            .walk(&root.id)
            .any(|(_, node)| node.is_text() && node.text().is_some())
}

/// Score one component out of 100, in steps of 20.
pub fn score_component(
    tree: &DesignTree,
    root: &DesignNode,
    metrics: &SubtreeMetrics,
) -> ReusabilityScore {
    let named_tier = tier_from_name(&root.name);
    let tier = named_tier.unwrap_or_else(|| tier_from_size(metrics.node_count));

    let factors = ReusabilityFactors {
        has_variants: root.variant_count() > 0,
        parametric: is_parametric(tree, root),
        consistent_styling: has_consistent_styling(tree, root),
        atomic: named_tier.is_some() || matches!(tier, AtomicTier::Atom | AtomicTier::Molecule),
        semantic_naming: !is_generic_name(&root.name),
    };

    ReusabilityScore {
        component_id: root.id.clone(),
        name: root.name.clone(),
        score: factors.score(),
        tier,
        factors,
    }
}
