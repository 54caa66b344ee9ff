//! Token catalog model.
//!
//! Each category keeps its tokens in first-seen order, keyed by a
//! category-specific dedup key. Names are assigned once, on insertion.

use figura_core::{format_number, Color, NodeId, TextAlignHorizontal};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Token category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Color,
    Typography,
    Spacing,
    Shadow,
    Border,
    Radius,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 6] = [
        Self::Color,
        Self::Typography,
        Self::Spacing,
        Self::Shadow,
        Self::Border,
        Self::Radius,
    ];

    /// Plural group name used in structured renderings.
    pub fn group_name(&self) -> &'static str {
        match self {
            Self::Color => "colors",
            Self::Typography => "typography",
            Self::Spacing => "spacing",
            Self::Shadow => "shadows",
            Self::Border => "borders",
            Self::Radius => "radii",
        }
    }
}

/// Where a token value was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    /// Name of the node carrying the value.
    pub component: String,
    pub node_id: NodeId,
    /// Style property the value was read from, e.g. `fill`.
    pub property: String,
}

/// Canonical value of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TokenValue {
    Color {
        color: Color,
    },
    #[serde(rename_all = "camelCase")]
    Typography {
        font_family: String,
        font_size: f64,
        font_weight: f64,
        line_height: Option<f64>,
        letter_spacing: Option<f64>,
        text_align: Option<TextAlignHorizontal>,
    },
    Spacing {
        px: f64,
    },
    Shadow {
        x: f64,
        y: f64,
        blur: f64,
        spread: f64,
        color: Option<Color>,
        inset: bool,
    },
    Border {
        width: f64,
        style: &'static str,
        color: Option<Color>,
    },
    Radius {
        px: f64,
    },
}

fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

impl TokenValue {
    /// CSS rendering of the value.
    pub fn to_css(&self) -> String {
        match self {
            Self::Color { color } => color.to_css(),
            Self::Typography {
                font_family,
                font_size,
                font_weight,
                line_height,
                ..
            } => {
                let size = match line_height {
                    Some(lh) => format!("{}/{}", px(*font_size), px(*lh)),
                    None => px(*font_size),
                };
                format!("{} {} \"{}\"", format_number(*font_weight), size, font_family)
            }
            Self::Spacing { px: value } | Self::Radius { px: value } => px(*value),
            Self::Shadow {
                x,
                y,
                blur,
                spread,
                color,
                inset,
            } => {
                let color = color.map_or_else(|| Color::BLACK.to_css(), |c| c.to_css());
                let shadow = format!("{} {} {} {} {}", px(*x), px(*y), px(*blur), px(*spread), color);
                if *inset {
                    format!("inset {shadow}")
                } else {
                    shadow
                }
            }
            Self::Border {
                width,
                style,
                color,
            } => {
                let color = color.map_or_else(|| "currentColor".to_string(), |c| c.to_css());
                format!("{} {} {}", px(*width), style, color)
            }
        }
    }
}

/// A deduplicated, named design value with its usage sites.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignToken {
    pub name: String,
    pub category: TokenCategory,
    /// Dedup key, e.g. `rgb(0,123,255)`.
    pub key: String,
    pub value: TokenValue,
    /// Usage sites in traversal order. Only ever appended to.
    pub usages: Vec<TokenUsage>,
}

/// Tokens of one category.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TokenGroup {
    tokens: IndexMap<String, DesignToken>,
    #[serde(skip)]
    names: FxHashSet<String>,
}

impl TokenGroup {
    /// Append a usage to the token with `key`, creating it on first sight.
    ///
    /// `value` and `base_name` are only evaluated for new tokens; a taken
    /// name gets `-2`, `-3`, ... appended.
    pub fn record(
        &mut self,
        category: TokenCategory,
        key: String,
        value: impl FnOnce() -> TokenValue,
        base_name: impl FnOnce() -> String,
        usage: TokenUsage,
    ) {
        if let Some(token) = self.tokens.get_mut(&key) {
            token.usages.push(usage);
            return;
        }

        let base = base_name();
        let mut name = base.clone();
        let mut n = 2;
        while self.names.contains(&name) {
            name = format!("{base}-{n}");
            n += 1;
        }
        self.names.insert(name.clone());

        self.tokens.insert(
            key.clone(),
            DesignToken {
                name,
                category,
                key,
                value: value(),
                usages: vec![usage],
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<&DesignToken> {
        self.tokens.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DesignToken> {
        self.tokens.values()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Every token extracted from one tree.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DesignTokenCatalog {
    pub colors: TokenGroup,
    pub typography: TokenGroup,
    pub spacing: TokenGroup,
    pub shadows: TokenGroup,
    pub borders: TokenGroup,
    pub radii: TokenGroup,
}

impl DesignTokenCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, category: TokenCategory) -> &TokenGroup {
        match category {
            TokenCategory::Color => &self.colors,
            TokenCategory::Typography => &self.typography,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Shadow => &self.shadows,
            TokenCategory::Border => &self.borders,
            TokenCategory::Radius => &self.radii,
        }
    }

    /// All tokens, category by category.
    pub fn iter(&self) -> impl Iterator<Item = &DesignToken> {
        TokenCategory::ALL
            .into_iter()
            .flat_map(move |category| self.group(category).iter())
    }

    pub fn len(&self) -> usize {
        TokenCategory::ALL
            .iter()
            .map(|category| self.group(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(property: &str) -> TokenUsage {
        TokenUsage {
            component: "Box".into(),
            node_id: NodeId::from("1"),
            property: property.into(),
        }
    }

    #[test]
    fn test_record_merges_by_key() {
        let mut group = TokenGroup::default();
        for property in ["fill", "stroke"] {
            group.record(
                TokenCategory::Color,
                "rgb(0,0,0)".into(),
                || TokenValue::Color {
                    color: Color::BLACK,
                },
                || "color-000000".into(),
                usage(property),
            );
        }
        assert_eq!(group.len(), 1);
        let token = group.get("rgb(0,0,0)").unwrap();
        assert_eq!(token.name, "color-000000");
        assert_eq!(token.usages.len(), 2);
        assert_eq!(token.usages[1].property, "stroke");
    }

    #[test]
    fn test_name_collisions_get_suffixes() {
        let mut group = TokenGroup::default();
        for key in ["a", "b", "c"] {
            group.record(
                TokenCategory::Spacing,
                key.into(),
                || TokenValue::Spacing { px: 1.0 },
                || "spacing-1".into(),
                usage("width"),
            );
        }
        let names: Vec<_> = group.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["spacing-1", "spacing-1-2", "spacing-1-3"]);
    }

    #[test]
    fn test_value_css() {
        let typography = TokenValue::Typography {
            font_family: "Inter".into(),
            font_size: 16.0,
            font_weight: 600.0,
            line_height: Some(24.0),
            letter_spacing: None,
            text_align: None,
        };
        assert_eq!(typography.to_css(), "600 16px/24px \"Inter\"");

        let shadow = TokenValue::Shadow {
            x: 0.0,
            y: 4.0,
            blur: 8.0,
            spread: 0.0,
            color: Some(Color::rgba(0.0, 0.0, 0.0, 0.25)),
            inset: true,
        };
        assert_eq!(shadow.to_css(), "inset 0px 4px 8px 0px rgba(0, 0, 0, 0.25)");

        let border = TokenValue::Border {
            width: 1.0,
            style: "solid",
            color: None,
        };
        assert_eq!(border.to_css(), "1px solid currentColor");
    }
}
