//! Core types for the Figura design pipeline.
//!
//! This crate provides the foundational types used by every other figura crate:
//! - Paint, color, effect and text value types decoded from design payloads
//! - The design node model and its JSON wire shapes
//! - A validated, immutable tree arena with pre-order traversal
//! - The append-only alias table
//! - Name normalization into identifier conventions
//! - Subtree metrics shared by code generation and analysis

pub mod alias;
pub mod errors;
mod lenient;
pub mod metrics;
pub mod naming;
pub mod node;
pub mod tree;
pub mod types;

pub use alias::{AliasEntry, AliasTable};
pub use errors::{NamingError, TreeError};
pub use metrics::SubtreeMetrics;
pub use naming::{normalize_name, NamingConvention};
pub use node::{
    ComponentBinding, DesignDocument, DesignNode, FlatDocument, FlatNode, NodeAttributes,
    NodeId, NodeKind, NodeSpec, VariantValue,
};
pub use tree::{DesignTree, TreeBuilder, TreeLimits, Walk};
pub use types::*;
