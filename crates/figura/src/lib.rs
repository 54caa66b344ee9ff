//! Figura: design trees in, component code, design tokens and an analysis
//! report out.
//!
//! # Pipeline Overview
//!
//! 1. **Ingest**: decode JSON and validate it into an immutable
//!    [`DesignTree`](figura_core::DesignTree) (unique ids, one parent per
//!    node, no cycles, depth and size limits).
//! 2. **Transform**: generate one UI component per root.
//! 3. **Tokens**: collect deduplicated design tokens from the whole tree.
//! 4. **Analyze**: score components and report patterns and issues.
//!
//! The last three stages read the tree independently.
//!
//! # Example
//!
//! ```ignore
//! use figura::{Pipeline, PipelineConfig};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default())?;
//! let output = pipeline.run(&std::fs::read_to_string("design.json")?)?;
//! for component in output.generated() {
//!     println!("{}", component.artifacts.component.content);
//! }
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::{Ingested, Pipeline, PipelineOutput};

pub use figura_analyze as analyze;
pub use figura_codegen as codegen;
pub use figura_core as core;
pub use figura_tokens as tokens;
