//! Style extraction: one design node to a flat style map.

use convert_case::{Case, Casing};
use figura_core::{format_number, DesignNode, Paint};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Flat property-to-value mapping of one node, in extraction order.
pub type StyleMap = IndexMap<String, StyleValue>;

/// A single style value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Pixel length.
    Px(f64),
    /// Unitless number.
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Render as a JavaScript object-literal value.
    pub fn to_js(&self) -> String {
        match self {
            Self::Px(v) | Self::Number(v) => format_number(*v),
            Self::Text(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        }
    }

    /// Render as a CSS declaration value for `key`.
    pub fn to_css(&self, key: &str) -> String {
        match self {
            Self::Px(v) => format!("{}px", format_number(*v)),
            Self::Number(v) => format_number(*v),
            Self::Text(s) if key == "fontFamily" => format!("\"{}\"", s.replace('"', "\\\"")),
            Self::Text(s) => s.clone(),
        }
    }
}

/// CSS property name for a style key (`backgroundColor` to `background-color`).
pub fn css_property(key: &str) -> String {
    key.to_case(Case::Kebab)
}

/// Render a style map as an inline `style={{ ... }}` object literal.
pub fn to_inline_object(styles: &StyleMap) -> String {
    let entries: Vec<String> = styles
        .iter()
        .map(|(key, value)| format!("{}: {}", key, value.to_js()))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

/// Render a style map as CSS declarations, one per line.
pub fn to_css_declarations(styles: &StyleMap, indent: usize) -> Vec<String> {
    let spaces = " ".repeat(indent);
    styles
        .iter()
        .map(|(key, value)| format!("{}{}: {};", spaces, css_property(key), value.to_css(key)))
        .collect()
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Extract the style map of a single node. Children are not visited.
///
/// Gradient and image fills are not rendered; they only reach the token
/// catalog. Malformed values are omitted.
pub fn extract_styles(node: &DesignNode) -> StyleMap {
    let mut styles = StyleMap::new();

    if let Some(bounds) = node.bounding_box() {
        if let Some(width) = finite(bounds.width) {
            styles.insert("width".into(), StyleValue::Px(width));
        }
        if let Some(height) = finite(bounds.height) {
            styles.insert("height".into(), StyleValue::Px(height));
        }
    }

    if let Some(fill) = node.visible_fills().find(|p| p.is_solid()) {
        match fill.solid_color() {
            Some(color) => {
                styles.insert("backgroundColor".into(), StyleValue::Text(color.to_css()));
            }
            None => debug!(node = %node.id, "Solid fill without usable color omitted"),
        }
    }

    if let Some(stroke) = node.visible_strokes().next() {
        if let Paint::Solid { .. } = stroke {
            match stroke.solid_color() {
                Some(color) => {
                    styles.insert("borderColor".into(), StyleValue::Text(color.to_css()));
                }
                None => debug!(node = %node.id, "Solid stroke without usable color omitted"),
            }
        }
        if let Some(weight) = node.stroke_weight() {
            styles.insert("borderWidth".into(), StyleValue::Px(weight));
        }
    }

    if let Some(radius) = node.attrs.corner_radius.and_then(|r| r.uniform()) {
        if radius.is_finite() && radius > 0.0 {
            styles.insert("borderRadius".into(), StyleValue::Px(radius));
        }
    }

    if node.is_text() {
        if let Some(style) = &node.attrs.style {
            if let Some(family) = style.font_family.as_ref().filter(|f| !f.is_empty()) {
                styles.insert("fontFamily".into(), StyleValue::Text(family.clone()));
            }
            if let Some(size) = style.font_size.and_then(finite) {
                styles.insert("fontSize".into(), StyleValue::Px(size));
            }
            if let Some(weight) = style.font_weight.and_then(finite) {
                styles.insert("fontWeight".into(), StyleValue::Number(weight));
            }
            if let Some(line_height) = style.line_height.and_then(finite) {
                styles.insert("lineHeight".into(), StyleValue::Px(line_height));
            }
            if let Some(spacing) = style.letter_spacing.and_then(finite) {
                styles.insert("letterSpacing".into(), StyleValue::Px(spacing));
            }
            if let Some(align) = style.text_align_horizontal {
                styles.insert("textAlign".into(), StyleValue::Text(align.to_css().into()));
            }
        }
    }

    styles
}
