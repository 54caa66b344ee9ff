//! Pattern detectors and their registry.

mod detectors;

use figura_core::{DesignNode, DesignTree};
use indexmap::IndexMap;

use crate::report::PatternInstance;

pub use detectors::{
    ButtonDetector, CardDetector, FormDetector, GridDetector, ListDetector, ModalDetector,
    NavigationDetector,
};

/// Recognizes one recurring structural shape.
pub trait PatternDetector: Send + Sync {
    /// Pattern name used as the report key, e.g. `card`.
    fn name(&self) -> &'static str;

    /// Confidence of a single match.
    fn base_confidence(&self) -> f64;

    /// Whether the component rooted at `node` has this shape.
    fn matches(&self, tree: &DesignTree, node: &DesignNode) -> bool;

    /// Confidence given the number of matching components in the tree.
    ///
    /// Each extra match adds 0.05, capped at 1.
    fn confidence(&self, matches: usize) -> f64 {
        let extra = matches.saturating_sub(1) as f64;
        (self.base_confidence() + 0.05 * extra).min(1.0)
    }
}

/// Ordered set of detectors, keyed by name.
pub struct DetectorRegistry {
    detectors: IndexMap<&'static str, Box<dyn PatternDetector>>,
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DetectorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            detectors: IndexMap::new(),
        }
    }

    /// Create a registry with the built-in detectors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(CardDetector);
        registry.register(ListDetector);
        registry.register(ButtonDetector);
        registry.register(NavigationDetector);
        registry.register(FormDetector);
        registry.register(GridDetector);
        registry.register(ModalDetector);
        registry
    }

    /// Register a detector. A detector with the same name is replaced in place.
    pub fn register<D: PatternDetector + 'static>(&mut self, detector: D) {
        self.detectors.insert(detector.name(), Box::new(detector));
    }

    pub fn get(&self, name: &str) -> Option<&dyn PatternDetector> {
        self.detectors.get(name).map(|d| d.as_ref())
    }

    /// Registered pattern names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.detectors.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Run every detector over `components`. Patterns without matches are
    /// left out.
    pub fn detect(
        &self,
        tree: &DesignTree,
        components: &[&DesignNode],
    ) -> IndexMap<String, Vec<PatternInstance>> {
        let mut found = IndexMap::new();
        for detector in self.detectors.values() {
            let hits: Vec<&DesignNode> = components
                .iter()
                .copied()
                .filter(|node| detector.matches(tree, node))
                .collect();
            if hits.is_empty() {
                continue;
            }
            let confidence = detector.confidence(hits.len());
            let instances = hits
                .into_iter()
                .map(|node| PatternInstance {
                    component_id: node.id.clone(),
                    name: node.name.clone(),
                    confidence,
                })
                .collect();
            found.insert(detector.name().to_string(), instances);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figura_core::{DesignDocument, NodeSpec, TreeLimits};

    struct AlwaysDetector;

    impl PatternDetector for AlwaysDetector {
        fn name(&self) -> &'static str {
            "always"
        }

        fn base_confidence(&self) -> f64 {
            0.9
        }

        fn matches(&self, _tree: &DesignTree, _node: &DesignNode) -> bool {
            true
        }
    }

    #[test]
    fn test_default_order() {
        let names: Vec<_> = DetectorRegistry::with_defaults().names().collect();
        assert_eq!(
            names,
            ["card", "list", "button", "navigation", "form", "grid", "modal"]
        );
    }

    #[test]
    fn test_confidence_nudge_and_cap() {
        let detector = AlwaysDetector;
        assert_eq!(detector.confidence(1), 0.9);
        assert!((detector.confidence(2) - 0.95).abs() < 1e-9);
        assert_eq!(detector.confidence(10), 1.0);
    }

    #[test]
    fn test_register_custom_detector() {
        let (tree, _) = DesignTree::from_document(
            DesignDocument::Nodes(vec![NodeSpec::frame("1", "A"), NodeSpec::frame("2", "B")]),
            &TreeLimits::default(),
        )
        .unwrap();
        let components: Vec<_> = tree.root_nodes().collect();

        let mut registry = DetectorRegistry::new();
        registry.register(AlwaysDetector);
        let found = registry.detect(&tree, &components);
        let instances = &found["always"];
        assert_eq!(instances.len(), 2);
        assert!(instances.iter().all(|i| (i.confidence - 0.95).abs() < 1e-9));
    }
}
