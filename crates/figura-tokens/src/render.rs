//! Token catalog renderings: CSS custom properties, SCSS variables, JSON
//! and a JavaScript theme module.

use convert_case::{Case, Casing};
use figura_core::format_number;
use rustc_hash::FxHashSet;
use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::model::{DesignToken, DesignTokenCatalog, TokenCategory, TokenValue};

/// Render as CSS custom properties on `:root`.
pub fn to_css_variables(catalog: &DesignTokenCatalog) -> String {
    let mut lines = vec![":root {".to_string()];
    for token in catalog.iter() {
        lines.push(format!("  --{}: {};", token.name, token.value.to_css()));
    }
    lines.push("}".to_string());
    format!("{}\n", lines.join("\n"))
}

/// Render as SCSS variables, one group per category.
pub fn to_scss_variables(catalog: &DesignTokenCatalog) -> String {
    let blocks: Vec<String> = TokenCategory::ALL
        .iter()
        .map(|category| catalog.group(*category))
        .filter(|group| !group.is_empty())
        .map(|group| {
            group
                .iter()
                .map(|token| format!("${}: {};", token.name, token.value.to_css()))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    if blocks.is_empty() {
        return String::new();
    }
    format!("{}\n", blocks.join("\n\n"))
}

/// Structured rendering: groups of `name -> {value, key, usages}`.
pub fn to_json_value(catalog: &DesignTokenCatalog) -> Value {
    let mut root = Map::new();
    for category in TokenCategory::ALL {
        let group: Map<String, Value> = catalog
            .group(category)
            .iter()
            .map(|token| {
                (
                    token.name.clone(),
                    json!({
                        "value": token.value.to_css(),
                        "key": token.key,
                        "usages": token.usages,
                    }),
                )
            })
            .collect();
        root.insert(category.group_name().to_string(), Value::Object(group));
    }
    Value::Object(root)
}

/// Pretty-printed JSON rendering.
pub fn to_json(catalog: &DesignTokenCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_json_value(catalog))?)
}

fn js_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

fn js_value(token: &DesignToken) -> String {
    match &token.value {
        TokenValue::Typography {
            font_family,
            font_size,
            font_weight,
            line_height,
            ..
        } => {
            let mut fields = vec![
                format!("fontFamily: {}", js_string(font_family)),
                format!("fontSize: '{}px'", format_number(*font_size)),
                format!("fontWeight: {}", format_number(*font_weight)),
            ];
            if let Some(lh) = line_height {
                fields.push(format!("lineHeight: '{}px'", format_number(*lh)));
            }
            format!("{{ {} }}", fields.join(", "))
        }
        other => js_string(&other.to_css()),
    }
}

/// Render as a JavaScript theme module with camelCase keys.
pub fn to_js_theme(catalog: &DesignTokenCatalog) -> String {
    let mut lines = vec!["export const theme = {".to_string()];
    for category in TokenCategory::ALL {
        let group = catalog.group(category);
        lines.push(format!("  {}: {{", category.group_name()));
        let mut keys: FxHashSet<String> = FxHashSet::default();
        for token in group.iter() {
            let camel = token.name.to_case(Case::Camel);
            // A taken camelCase key falls back to the quoted token name.
            let key = if keys.insert(camel.clone()) {
                camel
            } else {
                js_string(&token.name)
            };
            lines.push(format!("    {}: {},", key, js_value(token)));
        }
        lines.push("  },".to_string());
    }
    lines.push("};".to_string());
    lines.push(String::new());
    lines.push("export default theme;".to_string());
    format!("{}\n", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::extract_tokens;
    use figura_core::{Color, DesignDocument, DesignTree, NodeSpec, Paint, TreeLimits};
    use pretty_assertions::assert_eq;

    fn sample() -> DesignTokenCatalog {
        let spec = NodeSpec::frame("1", "Login Button")
            .with_size(120.0, 40.0)
            .with_fill(Paint::solid(Color::rgb(0.0, 123.0 / 255.0, 1.0)))
            .with_corner_radius(6.0)
            .with_child(NodeSpec::text("2", "Label", "Login").with_font("Inter", 16.0, 600.0));
        let (tree, _) =
            DesignTree::from_document(DesignDocument::Node(Box::new(spec)), &TreeLimits::default())
                .unwrap();
        extract_tokens(&tree)
    }

    #[test]
    fn test_css_variables() {
        assert_eq!(
            to_css_variables(&sample()),
            [
                ":root {",
                "  --color-007bff: #007bff;",
                "  --text-inter-16-600: 600 16px \"Inter\";",
                "  --spacing-120: 120px;",
                "  --spacing-40: 40px;",
                "  --radius-6: 6px;",
                "}",
                "",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_scss_variables() {
        assert_eq!(
            to_scss_variables(&sample()),
            [
                "$color-007bff: #007bff;",
                "",
                "$text-inter-16-600: 600 16px \"Inter\";",
                "",
                "$spacing-120: 120px;",
                "$spacing-40: 40px;",
                "",
                "$radius-6: 6px;",
                "",
            ]
            .join("\n")
        );
        assert_eq!(to_scss_variables(&DesignTokenCatalog::new()), "");
    }

    #[test]
    fn test_json_structure() {
        let value = to_json_value(&sample());
        let color = &value["colors"]["color-007bff"];
        assert_eq!(color["value"], "#007bff");
        assert_eq!(color["key"], "rgb(0,123,255)");
        assert_eq!(color["usages"][0]["property"], "fill");
        assert_eq!(color["usages"][0]["nodeId"], "1");
        assert!(value["shadows"].as_object().unwrap().is_empty());
        assert!(to_json(&sample()).unwrap().contains("\"radius-6\""));
    }

    #[test]
    fn test_js_theme() {
        let theme = to_js_theme(&sample());
        assert!(theme.starts_with("export const theme = {\n  colors: {\n"));
        assert!(theme.contains("    spacing120: '120px',"));
        assert!(theme.contains("    radius6: '6px',"));
        assert!(theme.contains("fontFamily: 'Inter', fontSize: '16px', fontWeight: 600 }"));
        assert!(theme.ends_with("export default theme;\n"));
    }
}
