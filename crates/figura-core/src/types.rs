//! Value types carried by design nodes.
//!
//! These mirror the shapes an authoring tool exports: colors are RGBA with
//! channels in `[0, 1]`, paints and effects are tagged by a `type` field,
//! and every optional attribute decodes to a default when absent.

use serde::{Deserialize, Serialize};

use crate::lenient;

fn default_one() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

/// Format a number the way generated code and token keys expect it:
/// integers without a fraction, everything else with at most three decimals.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let text = format!("{:.3}", rounded);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_one")]
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Whether every channel is a finite number.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Return a copy with alpha multiplied by `opacity`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to 8-bit RGB channels, rounding to the nearest value.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Alpha clamped to `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.a.clamp(0.0, 1.0)
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha() >= 0.999
    }

    /// Lowercase `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// CSS color: hex when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            self.to_hex()
        } else {
            let (r, g, b) = self.to_rgb8();
            format!("rgba({}, {}, {}, {})", r, g, b, format_number(self.alpha()))
        }
    }

    /// Compact key used to deduplicate colors: `rgb(0,123,255)` or
    /// `rgba(0,123,255,0.5)`.
    pub fn to_rgb_key(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("rgb({},{},{})", r, g, b)
        } else {
            format!("rgba({},{},{},{})", r, g, b, format_number(self.alpha()))
        }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// A 2D offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// A 2x3 affine transform, row-major.
pub type Transform = [[f64; 3]; 2];

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Angular,
    Diamond,
}

/// A gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

/// How an image paint fills its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleMode {
    #[default]
    Fill,
    Fit,
    Crop,
    Tile,
}

/// A fill or stroke descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    #[serde(rename_all = "camelCase")]
    Solid {
        #[serde(default, deserialize_with = "lenient::option")]
        color: Option<Color>,
        #[serde(default = "default_one")]
        opacity: f64,
        #[serde(default = "default_true")]
        visible: bool,
    },
    #[serde(rename_all = "camelCase")]
    Gradient {
        #[serde(default)]
        kind: GradientKind,
        #[serde(default, alias = "gradientStops", deserialize_with = "lenient::vec")]
        stops: Vec<ColorStop>,
        #[serde(default, alias = "gradientTransform")]
        transform: Option<Transform>,
        #[serde(default = "default_true")]
        visible: bool,
    },
    #[serde(rename_all = "camelCase")]
    Image {
        #[serde(default, alias = "imageRef")]
        reference: Option<String>,
        #[serde(default)]
        scale_mode: ScaleMode,
        #[serde(default, alias = "imageTransform")]
        transform: Option<Transform>,
        #[serde(default = "default_true")]
        visible: bool,
    },
    /// A paint type this crate does not model.
    #[serde(other)]
    Unknown,
}

impl Paint {
    /// A visible, fully opaque solid paint.
    pub fn solid(color: Color) -> Self {
        Paint::Solid {
            color: Some(color),
            opacity: 1.0,
            visible: true,
        }
    }

    /// A visible linear gradient.
    pub fn linear_gradient(stops: Vec<ColorStop>) -> Self {
        Paint::Gradient {
            kind: GradientKind::Linear,
            stops,
            transform: None,
            visible: true,
        }
    }

    /// A visible image paint.
    pub fn image(reference: impl Into<String>) -> Self {
        Paint::Image {
            reference: Some(reference.into()),
            scale_mode: ScaleMode::Fill,
            transform: None,
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Paint::Solid { visible, .. }
            | Paint::Gradient { visible, .. }
            | Paint::Image { visible, .. } => *visible,
            Paint::Unknown => false,
        }
    }

    pub fn is_solid(&self) -> bool {
        matches!(self, Paint::Solid { .. })
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Paint::Gradient { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Paint::Image { .. })
    }

    /// Effective color of a solid paint, with paint opacity applied.
    ///
    /// Returns `None` for non-solid paints and for solid paints whose color
    /// is missing or not finite.
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            Paint::Solid {
                color: Some(color),
                opacity,
                ..
            } if color.is_finite() => Some(color.with_opacity(*opacity)),
            _ => None,
        }
    }
}

/// A drop or inner shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    #[serde(default, deserialize_with = "lenient::option")]
    pub color: Option<Color>,
    #[serde(default)]
    pub offset: Vector,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub spread: f64,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Shadow {
    pub fn new(x: f64, y: f64, radius: f64, spread: f64, color: Color) -> Self {
        Self {
            color: Some(color),
            offset: Vector { x, y },
            radius,
            spread,
            visible: true,
        }
    }
}

/// A visual effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    LayerBlur {
        #[serde(default)]
        radius: f64,
        #[serde(default = "default_true")]
        visible: bool,
    },
    BackgroundBlur {
        #[serde(default)]
        radius: f64,
        #[serde(default = "default_true")]
        visible: bool,
    },
    #[serde(other)]
    Unknown,
}

impl Effect {
    /// The shadow parameters, for shadow effects.
    pub fn shadow(&self) -> Option<&Shadow> {
        match self {
            Effect::DropShadow(s) | Effect::InnerShadow(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_inner(&self) -> bool {
        matches!(self, Effect::InnerShadow(_))
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Effect::DropShadow(s) | Effect::InnerShadow(s) => s.visible,
            Effect::LayerBlur { visible, .. } | Effect::BackgroundBlur { visible, .. } => *visible,
            Effect::Unknown => false,
        }
    }
}

/// Corner radius: one value, or one per corner `[top-left, top-right,
/// bottom-right, bottom-left]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CornerRadius {
    Uniform(f64),
    PerCorner([f64; 4]),
}

impl CornerRadius {
    pub fn uniform(&self) -> Option<f64> {
        match self {
            CornerRadius::Uniform(r) => Some(*r),
            CornerRadius::PerCorner(_) => None,
        }
    }

    /// Radius for every corner, in `[tl, tr, br, bl]` order.
    pub fn corners(&self) -> [f64; 4] {
        match self {
            CornerRadius::Uniform(r) => [*r; 4],
            CornerRadius::PerCorner(c) => *c,
        }
    }

    pub fn is_rounded(&self) -> bool {
        self.corners().iter().any(|r| r.is_finite() && *r > 0.0)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlignHorizontal {
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justified => "justify",
        }
    }
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    Top,
    Center,
    Bottom,
}

/// Typography attributes of a text node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default, deserialize_with = "lenient::option")]
    pub font_family: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub font_size: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub font_weight: Option<f64>,
    #[serde(default, alias = "lineHeightPx", deserialize_with = "lenient::option")]
    pub line_height: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub letter_spacing: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub text_align_horizontal: Option<TextAlignHorizontal>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub text_align_vertical: Option<TextAlignVertical>,
}

/// Auto-layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutDirection {
    Horizontal,
    Vertical,
}

/// How an auto-layout axis is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SizingMode {
    #[default]
    Fixed,
    Auto,
}

/// Alignment along an auto-layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AxisAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
    Baseline,
}

/// An auto-layout block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayout {
    pub direction: LayoutDirection,
    #[serde(default)]
    pub primary_axis_sizing: SizingMode,
    #[serde(default)]
    pub counter_axis_sizing: SizingMode,
    #[serde(default)]
    pub primary_axis_align: AxisAlign,
    #[serde(default)]
    pub counter_axis_align: AxisAlign,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_right: f64,
    #[serde(default)]
    pub padding_bottom: f64,
    #[serde(default)]
    pub padding_left: f64,
    #[serde(default)]
    pub item_spacing: f64,
}

impl AutoLayout {
    /// A layout block with no padding or spacing.
    pub fn new(direction: LayoutDirection) -> Self {
        Self {
            direction,
            primary_axis_sizing: SizingMode::Fixed,
            counter_axis_sizing: SizingMode::Fixed,
            primary_axis_align: AxisAlign::Min,
            counter_axis_align: AxisAlign::Min,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
            item_spacing: 0.0,
        }
    }

    /// Set the same padding on every side.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_top = padding;
        self.padding_right = padding;
        self.padding_bottom = padding;
        self.padding_left = padding;
        self
    }

    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Padding values with their style property names, in
    /// top/right/bottom/left order.
    pub fn paddings(&self) -> [(&'static str, f64); 4] {
        [
            ("paddingTop", self.padding_top),
            ("paddingRight", self.padding_right),
            ("paddingBottom", self.padding_bottom),
            ("paddingLeft", self.padding_left),
        ]
    }
}
