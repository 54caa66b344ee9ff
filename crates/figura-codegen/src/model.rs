//! Data models for generated components.

use chrono::{DateTime, Utc};
use figura_core::{DesignNode, NodeId, NodeKind};
use serde::Serialize;

use crate::style::StyleMap;

/// An inferred, named parameter of a generated component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prop {
    /// Identifier used in the signature and type declaration.
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: PropType,
    /// Default value, also used in the destructured signature.
    pub default: serde_json::Value,
    pub description: String,
    /// Inferred props are never required.
    pub optional: bool,
    pub source: PropSource,
}

impl Prop {
    /// JavaScript literal for the default value.
    pub fn default_literal(&self) -> String {
        match &self.default {
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(figura_core::format_number)
                .unwrap_or_else(|| n.to_string()),
            other => other.to_string(),
        }
    }
}

/// Type of an inferred prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropType {
    Boolean,
    Number,
    String,
    /// One option of a variant axis; rendered as a string.
    Variant { option: String },
}

impl PropType {
    /// Convert to TypeScript type.
    pub fn to_typescript(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String | Self::Variant { .. } => "string",
        }
    }
}

/// Where a prop was inferred from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "from", rename_all = "camelCase")]
pub enum PropSource {
    TextContent,
    Variant { key: String },
    Visibility,
}

/// Layout classification of a component root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LayoutClass {
    Horizontal,
    Vertical,
    Absolute,
    Leaf,
}

/// Structural summary of a component root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureSummary {
    pub kind: NodeKind,
    pub child_count: usize,
    pub depth: usize,
    pub layout: LayoutClass,
}

/// Classified role of a generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    Button,
    Input,
    Card,
    List,
    Navigation,
    Modal,
    Form,
    Image,
    Icon,
    Text,
    Container,
    Shape,
}

/// Whether the selected styling dialect could be honored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum StylingSupport {
    Supported,
    Unsupported { dialect: String, reason: String },
}

impl StylingSupport {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported)
    }
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// File path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Source artifacts produced for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifacts {
    pub component: GeneratedFile,
    pub stylesheet: Option<GeneratedFile>,
    pub type_declarations: Option<GeneratedFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub original_id: NodeId,
    pub original_name: String,
    pub component_type: ComponentType,
    pub complexity: usize,
    pub generated_at: DateTime<Utc>,
    pub styling: StylingSupport,
}

/// A component generated from one root node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedComponent {
    pub name: String,
    pub structure: StructureSummary,
    pub props: Vec<Prop>,
    /// Styles of the root node.
    pub styles: StyleMap,
    pub artifacts: GeneratedArtifacts,
    pub metadata: ComponentMetadata,
}

/// Error record standing in for a root that failed to generate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformFailure {
    pub id: NodeId,
    pub name: String,
    pub message: String,
    pub node: Option<DesignNode>,
}

/// Result of transforming one root.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TransformOutcome {
    Generated(Box<TransformedComponent>),
    Failed(TransformFailure),
}

impl TransformOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    pub fn component(&self) -> Option<&TransformedComponent> {
        match self {
            Self::Generated(component) => Some(component),
            Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&TransformFailure> {
        match self {
            Self::Generated(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}
