//! Pipeline configuration.

use std::fs;
use std::path::Path;

use figura_analyze::AnalyzerConfig;
use figura_codegen::TransformOptions;
use figura_core::TreeLimits;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Settings for every pipeline stage. Missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PipelineConfig {
    pub limits: TreeLimits,
    pub transform: TransformOptions,
    pub analysis: AnalyzerConfig,
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| PipelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figura_codegen::Dialect;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(PipelineConfig::from_json_str("{}").unwrap(), PipelineConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = PipelineConfig::from_json_str(
            r#"{"transform": {"dialect": "scss"}, "limits": {"maxDepth": 8}}"#,
        )
        .unwrap();
        assert_eq!(config.transform.dialect, Dialect::Scss);
        assert!(config.transform.static_types);
        assert_eq!(config.limits.max_depth, 8);
        assert_eq!(config.limits.max_nodes, 100_000);
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"analysis": {"warnOnText": false}}"#)
            .unwrap();
        let config = PipelineConfig::from_path(file.path()).unwrap();
        assert!(!config.analysis.warn_on_text);
    }

    #[test]
    fn test_missing_file() {
        let err = PipelineConfig::from_path("/nonexistent/figura.json").unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }

    #[test]
    fn test_round_trip() {
        let config = PipelineConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(PipelineConfig::from_json_str(&json).unwrap(), config);
    }
}
