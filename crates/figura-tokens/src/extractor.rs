//! Whole-tree design token extraction.

use convert_case::{Case, Casing};
use figura_core::{format_number, Color, CornerRadius, DesignNode, DesignTree, Paint};
use tracing::debug;

use crate::model::{DesignTokenCatalog, TokenCategory, TokenUsage, TokenValue};

const CORNER_PROPERTIES: [&str; 4] = [
    "borderTopLeftRadius",
    "borderTopRightRadius",
    "borderBottomRightRadius",
    "borderBottomLeftRadius",
];

/// Number fragment for token names: `1.5` becomes `1-5`, `-4` becomes `neg-4`.
fn name_number(value: f64) -> String {
    let digits = format_number(value.abs()).replace('.', "-");
    if value < 0.0 {
        format!("neg-{digits}")
    } else {
        digits
    }
}

fn color_name(color: &Color) -> String {
    let hex = color.to_hex();
    let hex = hex.trim_start_matches('#');
    if color.is_opaque() {
        format!("color-{hex}")
    } else {
        format!("color-{hex}-a{}", (color.alpha() * 100.0).round() as i64)
    }
}

/// Extract the token catalog of a tree in pre-order.
pub fn extract_tokens(tree: &DesignTree) -> DesignTokenCatalog {
    let mut extractor = TokenExtractor::default();
    for (_, node) in tree.walk_all() {
        extractor.visit(node);
    }
    debug!(tokens = extractor.catalog.len(), "Extracted design tokens");
    extractor.catalog
}

/// Accumulates tokens node by node.
#[derive(Debug, Default)]
pub struct TokenExtractor {
    catalog: DesignTokenCatalog,
}

impl TokenExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> DesignTokenCatalog {
        self.catalog
    }

    /// Record every token of one node: fill colors, stroke colors, border,
    /// typography, spacing, shadows, radii.
    pub fn visit(&mut self, node: &DesignNode) {
        for fill in node.visible_fills() {
            self.paint_colors(node, fill, "fill", "fillGradient");
        }
        for stroke in node.visible_strokes() {
            self.paint_colors(node, stroke, "stroke", "strokeGradient");
        }
        self.border(node);
        self.typography(node);
        self.spacing(node);
        self.shadows(node);
        self.radii(node);
    }

    fn usage(node: &DesignNode, property: &str) -> TokenUsage {
        TokenUsage {
            component: node.name.clone(),
            node_id: node.id.clone(),
            property: property.to_string(),
        }
    }

    fn color(&mut self, node: &DesignNode, color: Color, property: &str) {
        if !color.is_finite() {
            debug!(node = %node.id, property, "Non-finite color skipped");
            return;
        }
        self.catalog.colors.record(
            TokenCategory::Color,
            color.to_rgb_key(),
            || TokenValue::Color { color },
            || color_name(&color),
            Self::usage(node, property),
        );
    }

    fn paint_colors(&mut self, node: &DesignNode, paint: &Paint, solid: &str, gradient: &str) {
        match paint {
            Paint::Solid { .. } => match paint.solid_color() {
                Some(color) => self.color(node, color, solid),
                None => debug!(node = %node.id, property = solid, "Solid paint without color skipped"),
            },
            Paint::Gradient { stops, .. } => {
                for stop in stops {
                    self.color(node, stop.color, gradient);
                }
            }
            Paint::Image { .. } | Paint::Unknown => {}
        }
    }

    fn border(&mut self, node: &DesignNode) {
        let Some(width) = node.stroke_weight().filter(|w| *w > 0.0) else {
            return;
        };
        let color = node
            .visible_strokes()
            .find(|p| p.is_solid())
            .and_then(Paint::solid_color);
        self.catalog.borders.record(
            TokenCategory::Border,
            format!("{}|solid", format_number(width)),
            || TokenValue::Border {
                width,
                style: "solid",
                color,
            },
            || format!("border-{}", name_number(width)),
            Self::usage(node, "border"),
        );
    }

    fn typography(&mut self, node: &DesignNode) {
        if !node.is_text() {
            return;
        }
        let Some(style) = &node.attrs.style else {
            return;
        };
        let (Some(family), Some(size)) = (
            style.font_family.as_ref().filter(|f| !f.is_empty()),
            style.font_size.filter(|s| s.is_finite()),
        ) else {
            return;
        };
        let weight = style.font_weight.filter(|w| w.is_finite()).unwrap_or(400.0);

        self.catalog.typography.record(
            TokenCategory::Typography,
            format!("{}|{}|{}", family, format_number(size), format_number(weight)),
            || TokenValue::Typography {
                font_family: family.clone(),
                font_size: size,
                font_weight: weight,
                line_height: style.line_height,
                letter_spacing: style.letter_spacing,
                text_align: style.text_align_horizontal,
            },
            || {
                format!(
                    "text-{}-{}-{}",
                    family.to_case(Case::Kebab),
                    name_number(size),
                    name_number(weight)
                )
            },
            Self::usage(node, "typography"),
        );
    }

    fn spacing_value(&mut self, node: &DesignNode, value: f64, property: &str) {
        if !value.is_finite() || value == 0.0 {
            return;
        }
        self.catalog.spacing.record(
            TokenCategory::Spacing,
            format_number(value),
            || TokenValue::Spacing { px: value },
            || format!("spacing-{}", name_number(value)),
            Self::usage(node, property),
        );
    }

    fn spacing(&mut self, node: &DesignNode) {
        if let Some(bounds) = node.bounding_box().copied() {
            self.spacing_value(node, bounds.width, "width");
            self.spacing_value(node, bounds.height, "height");
        }
        if let Some(layout) = node.attrs.auto_layout {
            for (property, value) in layout.paddings() {
                self.spacing_value(node, value, property);
            }
        }
    }

    fn shadows(&mut self, node: &DesignNode) {
        for effect in node.attrs.effects.iter().filter(|e| e.is_visible()) {
            let Some(shadow) = effect.shadow().copied() else {
                continue;
            };
            let numbers = [shadow.offset.x, shadow.offset.y, shadow.radius, shadow.spread];
            if numbers.iter().any(|n| !n.is_finite()) {
                continue;
            }
            let key = numbers.map(format_number).join(",");
            let inset = effect.is_inner();
            self.catalog.shadows.record(
                TokenCategory::Shadow,
                key,
                || TokenValue::Shadow {
                    x: shadow.offset.x,
                    y: shadow.offset.y,
                    blur: shadow.radius,
                    spread: shadow.spread,
                    color: shadow.color,
                    inset,
                },
                || format!("shadow-{}", numbers.map(name_number).join("-")),
                Self::usage(node, "boxShadow"),
            );
        }
    }

    fn radius_value(&mut self, node: &DesignNode, value: f64, property: &str) {
        if !value.is_finite() || value <= 0.0 {
            return;
        }
        self.catalog.radii.record(
            TokenCategory::Radius,
            format_number(value),
            || TokenValue::Radius { px: value },
            || format!("radius-{}", name_number(value)),
            Self::usage(node, property),
        );
    }

    fn radii(&mut self, node: &DesignNode) {
        match node.attrs.corner_radius {
            Some(CornerRadius::Uniform(radius)) => self.radius_value(node, radius, "borderRadius"),
            Some(CornerRadius::PerCorner(corners)) => {
                for (property, radius) in CORNER_PROPERTIES.into_iter().zip(corners) {
                    self.radius_value(node, radius, property);
                }
            }
            None => {}
        }
    }
}
