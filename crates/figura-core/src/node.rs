//! Design node model and its wire shapes.
//!
//! A payload arrives either nested (`NodeSpec`, children inline) or flat
//! (`FlatNode`, children by id). Both are folded into arena `DesignNode`s by
//! [`TreeBuilder`](crate::tree::TreeBuilder), which validates the structure.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::TreeError;
use crate::lenient;
use crate::types::{
    AutoLayout, BoundingBox, Color, CornerRadius, Effect, Paint, TypeStyle,
};

fn default_true() -> bool {
    true
}

/// Identifier of a node, unique within one tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

/// Kind of a design node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Vector,
    Line,
    Star,
    Polygon,
    BooleanOperation,
    /// A kind this crate does not model; treated as a leaf.
    #[serde(other)]
    Unknown,
}

impl NodeKind {
    /// Whether nodes of this kind hold children.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Frame
                | Self::Group
                | Self::Section
                | Self::Component
                | Self::ComponentSet
                | Self::Instance
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Rectangle- or vector-like leaf shapes.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Self::Rectangle
                | Self::Ellipse
                | Self::Vector
                | Self::Line
                | Self::Star
                | Self::Polygon
                | Self::BooleanOperation
        )
    }

    /// Component definitions and their instances.
    pub fn is_component(&self) -> bool {
        matches!(self, Self::Component | Self::ComponentSet | Self::Instance)
    }

    /// Wire label, e.g. `FRAME`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Section => "SECTION",
            Self::Component => "COMPONENT",
            Self::ComponentSet => "COMPONENT_SET",
            Self::Instance => "INSTANCE",
            Self::Text => "TEXT",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Vector => "VECTOR",
            Self::Line => "LINE",
            Self::Star => "STAR",
            Self::Polygon => "POLYGON",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value of one variant property on a component binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariantValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    /// One option of an enumerated variant axis.
    #[serde(rename = "VARIANT")]
    EnumVariant(String),
}

/// Binding of a node to a component definition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBinding {
    #[serde(default)]
    pub component_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "componentProperties")]
    pub variant_properties: IndexMap<String, VariantValue>,
}

/// Every attribute of a node except identity and structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttributes {
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default, alias = "absoluteBoundingBox", deserialize_with = "lenient::option")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub auto_layout: Option<AutoLayout>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub fills: Vec<Paint>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub strokes: Vec<Paint>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub stroke_weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub corner_radius: Option<CornerRadius>,
    #[serde(default, deserialize_with = "lenient::vec")]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub style: Option<TypeStyle>,
    #[serde(default)]
    pub component: Option<ComponentBinding>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

impl Default for NodeAttributes {
    fn default() -> Self {
        Self {
            visible: true,
            locked: false,
            bounding_box: None,
            auto_layout: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: None,
            corner_radius: None,
            effects: Vec::new(),
            characters: None,
            style: None,
            component: None,
            alt_text: None,
        }
    }
}

/// A node stored in the tree arena. Children are referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    #[serde(flatten)]
    pub attrs: NodeAttributes,
    pub children: SmallVec<[NodeId; 4]>,
}

impl DesignNode {
    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }

    pub fn is_visible(&self) -> bool {
        self.attrs.visible
    }

    /// Text content, when present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.attrs
            .characters
            .as_deref()
            .filter(|chars| !chars.is_empty())
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.attrs.bounding_box.as_ref()
    }

    /// Variant properties of the component binding, if any.
    pub fn variant_properties(&self) -> Option<&IndexMap<String, VariantValue>> {
        self.attrs
            .component
            .as_ref()
            .map(|c| &c.variant_properties)
            .filter(|props| !props.is_empty())
    }

    pub fn variant_count(&self) -> usize {
        self.variant_properties().map_or(0, |p| p.len())
    }

    pub fn visible_fills(&self) -> impl Iterator<Item = &Paint> {
        self.attrs.fills.iter().filter(|p| p.is_visible())
    }

    pub fn visible_strokes(&self) -> impl Iterator<Item = &Paint> {
        self.attrs.strokes.iter().filter(|p| p.is_visible())
    }

    pub fn has_gradient_fill(&self) -> bool {
        self.visible_fills().any(Paint::is_gradient)
    }

    pub fn has_image_fill(&self) -> bool {
        self.visible_fills().any(Paint::is_image)
    }

    /// Color of the first visible solid fill.
    pub fn primary_fill_color(&self) -> Option<Color> {
        self.visible_fills().find(|p| p.is_solid())?.solid_color()
    }

    pub fn is_rounded(&self) -> bool {
        self.attrs.corner_radius.is_some_and(|r| r.is_rounded())
    }

    pub fn has_shadow(&self) -> bool {
        self.attrs
            .effects
            .iter()
            .any(|e| e.is_visible() && e.shadow().is_some())
    }

    /// Stroke weight when the node has at least one visible stroke.
    pub fn stroke_weight(&self) -> Option<f64> {
        if self.visible_strokes().next().is_none() {
            return None;
        }
        self.attrs.stroke_weight.filter(|w| w.is_finite())
    }
}

/// A node in the nested wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(flatten)]
    pub attrs: NodeAttributes,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// Create a node with default attributes.
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            alias: None,
            attrs: NodeAttributes::default(),
            children: Vec::new(),
        }
    }

    pub fn frame(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Frame)
    }

    pub fn text(id: impl Into<NodeId>, name: impl Into<String>, characters: impl Into<String>) -> Self {
        let mut spec = Self::new(id, name, NodeKind::Text);
        spec.attrs.characters = Some(characters.into());
        spec
    }

    pub fn rectangle(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Rectangle)
    }

    pub fn instance(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Instance)
    }

    /// Set a bounding box at the origin.
    pub fn with_size(self, width: f64, height: f64) -> Self {
        self.with_bounds(BoundingBox::new(0.0, 0.0, width, height))
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.attrs.bounding_box = Some(bounds);
        self
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.attrs.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint, weight: f64) -> Self {
        self.attrs.strokes.push(paint);
        self.attrs.stroke_weight = Some(weight);
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.attrs.corner_radius = Some(CornerRadius::Uniform(radius));
        self
    }

    pub fn with_corner_radii(mut self, radii: [f64; 4]) -> Self {
        self.attrs.corner_radius = Some(CornerRadius::PerCorner(radii));
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.attrs.effects.push(effect);
        self
    }

    pub fn with_auto_layout(mut self, layout: AutoLayout) -> Self {
        self.attrs.auto_layout = Some(layout);
        self
    }

    /// Set font family, size and weight.
    pub fn with_font(mut self, family: impl Into<String>, size: f64, weight: f64) -> Self {
        let style = self.attrs.style.get_or_insert_with(TypeStyle::default);
        style.font_family = Some(family.into());
        style.font_size = Some(size);
        style.font_weight = Some(weight);
        self
    }

    pub fn with_text_style(mut self, style: TypeStyle) -> Self {
        self.attrs.style = Some(style);
        self
    }

    /// Add a variant property, creating the component binding if needed.
    pub fn with_variant(mut self, key: impl Into<String>, value: VariantValue) -> Self {
        self.attrs
            .component
            .get_or_insert_with(ComponentBinding::default)
            .variant_properties
            .insert(key.into(), value);
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_alt_text(mut self, alt: impl Into<String>) -> Self {
        self.attrs.alt_text = Some(alt.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.attrs.visible = false;
        self
    }

    pub fn with_child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }
}

/// A node in the flat wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatNode {
    pub id: NodeId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(flatten)]
    pub attrs: NodeAttributes,
    #[serde(default)]
    pub children: Vec<NodeId>,
}

impl FlatNode {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            alias: None,
            attrs: NodeAttributes::default(),
            children: Vec::new(),
        }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<NodeId>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }
}

/// A flat document: every node listed once, children by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatDocument {
    pub nodes: Vec<FlatNode>,
    /// Explicit roots; when absent, every node without a parent is a root.
    #[serde(default)]
    pub roots: Option<Vec<NodeId>>,
}

/// Any accepted document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DesignDocument {
    Flat(FlatDocument),
    Nested { roots: Vec<NodeSpec> },
    Nodes(Vec<NodeSpec>),
    Node(Box<NodeSpec>),
}

impl DesignDocument {
    /// Decode a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_nested_node() {
        let json = r#"{
            "id": "1:2",
            "name": "Login Button",
            "type": "FRAME",
            "alias": "primary-login",
            "absoluteBoundingBox": {"x": 0, "y": 0, "width": 120, "height": 40},
            "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0.48, "b": 1}}],
            "cornerRadius": 6,
            "children": [
                {"id": "1:3", "name": "Label", "type": "TEXT", "characters": "Login"}
            ]
        }"#;
        let spec: NodeSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.kind, NodeKind::Frame);
        assert_eq!(spec.alias.as_deref(), Some("primary-login"));
        assert!(spec.attrs.visible);
        assert_eq!(spec.attrs.bounding_box.unwrap().width, 120.0);
        assert_eq!(spec.attrs.corner_radius, Some(CornerRadius::Uniform(6.0)));
        assert_eq!(spec.children.len(), 1);
        assert_eq!(spec.children[0].attrs.characters.as_deref(), Some("Login"));
    }

    #[test]
    fn test_decode_variant_properties_in_order() {
        let json = r#"{
            "id": "5:1",
            "name": "Button",
            "type": "INSTANCE",
            "component": {
                "componentId": "c:1",
                "variantProperties": {
                    "State": {"type": "VARIANT", "value": "Hover"},
                    "Disabled": {"type": "BOOLEAN", "value": false},
                    "Count": {"type": "NUMBER", "value": 3}
                }
            }
        }"#;
        let spec: NodeSpec = serde_json::from_str(json).unwrap();
        let component = spec.attrs.component.unwrap();
        let props = &component.variant_properties;
        let keys: Vec<_> = props.keys().map(String::as_str).collect();
        assert_eq!(keys, ["State", "Disabled", "Count"]);
        assert_eq!(props["State"], VariantValue::EnumVariant("Hover".into()));
        assert_eq!(props["Count"], VariantValue::Number(3.0));
    }

    #[test]
    fn test_unknown_kind_decodes() {
        let spec: NodeSpec =
            serde_json::from_str(r#"{"id": "9", "type": "STICKY"}"#).unwrap();
        assert_eq!(spec.kind, NodeKind::Unknown);
        assert!(!spec.kind.is_container());
    }

    #[test]
    fn test_document_shapes() {
        let flat = DesignDocument::from_json_str(
            r#"{"nodes": [{"id": "a", "type": "FRAME", "children": ["b"]}, {"id": "b", "type": "TEXT"}]}"#,
        )
        .unwrap();
        assert!(matches!(flat, DesignDocument::Flat(_)));

        let nested =
            DesignDocument::from_json_str(r#"{"roots": [{"id": "a", "type": "FRAME"}]}"#).unwrap();
        assert!(matches!(nested, DesignDocument::Nested { .. }));

        let list = DesignDocument::from_json_str(r#"[{"id": "a", "type": "FRAME"}]"#).unwrap();
        assert!(matches!(list, DesignDocument::Nodes(_)));

        let single = DesignDocument::from_json_str(r#"{"id": "a", "type": "TEXT"}"#).unwrap();
        assert!(matches!(single, DesignDocument::Node(_)));
    }

    #[test]
    fn test_builder_helpers() {
        let spec = NodeSpec::frame("1", "Card")
            .with_size(200.0, 100.0)
            .with_corner_radius(8.0)
            .with_variant("Size", VariantValue::EnumVariant("Large".into()))
            .with_child(NodeSpec::text("2", "Title", "Hello"));

        assert_eq!(spec.attrs.bounding_box.unwrap().height, 100.0);
        assert_eq!(spec.attrs.component.as_ref().unwrap().variant_properties.len(), 1);
        assert_eq!(spec.children[0].kind, NodeKind::Text);
    }
}
