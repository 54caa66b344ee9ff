//! Design token extraction.
//!
//! Walks a [`figura_core::DesignTree`] and collects repeated style values
//! (colors, typography, spacing, shadows, borders, radii) into a
//! deduplicated, named catalog, with renderings for CSS, SCSS, JSON and JS.

pub mod error;
pub mod extractor;
pub mod model;
pub mod render;

pub use error::{Result, TokenError};
pub use extractor::{extract_tokens, TokenExtractor};
pub use model::{DesignToken, DesignTokenCatalog, TokenCategory, TokenGroup, TokenUsage, TokenValue};
pub use render::{to_css_variables, to_js_theme, to_json, to_json_value, to_scss_variables};
