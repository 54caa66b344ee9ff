//! Analyzer thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds and switches for the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Components scoring above this get a simplification recommendation.
    pub complexity_threshold: usize,
    /// Components scoring below this get a reusability recommendation.
    pub reusability_threshold: u32,
    /// How many of the heaviest components to call out.
    pub top_heaviest: usize,
    /// Report a contrast-review warning for every text node.
    pub warn_on_text: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: 50,
            reusability_threshold: 50,
            top_heaviest: 5,
            warn_on_text: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config() {
        let config: AnalyzerConfig =
            serde_json::from_str(r#"{"warnOnText": false, "topHeaviest": 3}"#).unwrap();
        assert!(!config.warn_on_text);
        assert_eq!(config.top_heaviest, 3);
        assert_eq!(config.complexity_threshold, 50);
    }
}
