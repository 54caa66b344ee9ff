//! UI component code generation from Figura design trees.
//!
//! Each root of a validated [`DesignTree`](figura_core::DesignTree) becomes a
//! function component. Styles are extracted per node, props are inferred
//! from the root, and markup is emitted under one of several styling
//! dialects.
//!
//! # Example
//!
//! ```ignore
//! use figura_codegen::{ComponentTransformer, TransformOptions};
//!
//! let transformer = ComponentTransformer::new(TransformOptions::default())?;
//! for outcome in transformer.transform_roots(&tree, &aliases) {
//!     println!("{:?}", outcome.component().map(|c| &c.name));
//! }
//! ```

pub mod error;
pub mod generators;
pub mod jsx;
pub mod model;
pub mod props;
pub mod roles;
pub mod style;
pub mod transform;

pub use error::{CodegenError, Result};
pub use generators::{
    ComponentGenerator, ComponentNames, Dialect, GeneratedSource, TemplateEngine, TransformOptions,
};
pub use jsx::{Decoration, JsxBuilder, MarkupStyler, Unstyled};
pub use model::{
    ComponentMetadata, ComponentType, GeneratedArtifacts, GeneratedFile, LayoutClass, Prop,
    PropSource, PropType, StructureSummary, StylingSupport, TransformFailure, TransformOutcome,
    TransformedComponent,
};
pub use props::infer_props;
pub use roles::ComponentClassifier;
pub use style::{extract_styles, StyleMap, StyleValue};
pub use transform::ComponentTransformer;
