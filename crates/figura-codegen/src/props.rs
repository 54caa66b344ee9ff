//! Prop inference for a component root.

use figura_core::{normalize_name, DesignNode, NamingConvention, VariantValue};
use serde_json::json;
use tracing::warn;

use crate::model::{Prop, PropSource, PropType};

/// Infer the ordered prop list of a node.
///
/// Order is: text content (text nodes only), then variant properties in map
/// order, then `visible` when `include_visibility` is set. Descendants are
/// not inspected. Keys that cannot be normalized, or that collide with an
/// earlier prop, are skipped.
pub fn infer_props(node: &DesignNode, include_visibility: bool) -> Vec<Prop> {
    let mut props: Vec<Prop> = Vec::new();

    if node.is_text() {
        if let Some(text) = node.text() {
            props.push(Prop {
                name: "text".into(),
                prop_type: PropType::String,
                default: json!(text),
                description: "Text content".into(),
                optional: true,
                source: PropSource::TextContent,
            });
        }
    }

    if let Some(variants) = node.variant_properties() {
        for (key, value) in variants {
            let name = match normalize_name(key, NamingConvention::Camel) {
                Ok(name) => name,
                Err(err) => {
                    warn!(node = %node.id, key = %key, error = %err, "Skipping variant property");
                    continue;
                }
            };
            if props.iter().any(|p| p.name == name) {
                warn!(node = %node.id, key = %key, prop = %name, "Variant property collides with an earlier prop");
                continue;
            }
            let (prop_type, default) = match value {
                VariantValue::Boolean(b) => (PropType::Boolean, json!(b)),
                VariantValue::Number(n) => (PropType::Number, json!(n)),
                VariantValue::Text(s) => (PropType::String, json!(s)),
                VariantValue::EnumVariant(option) => (
                    PropType::Variant {
                        option: option.clone(),
                    },
                    json!(option),
                ),
            };
            props.push(Prop {
                name,
                prop_type,
                default,
                description: format!("Variant property \"{key}\""),
                optional: true,
                source: PropSource::Variant { key: key.clone() },
            });
        }
    }

    if include_visibility {
        if props.iter().any(|p| p.name == "visible") {
            warn!(node = %node.id, "Variant property named visible shadows the visibility prop");
        } else {
            props.push(Prop {
                name: "visible".into(),
                prop_type: PropType::Boolean,
                default: json!(node.is_visible()),
                description: "Whether the component is rendered".into(),
                optional: true,
                source: PropSource::Visibility,
            });
        }
    }

    props
}
