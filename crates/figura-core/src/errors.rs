//! Error types for tree ingestion and naming.

use thiserror::Error;

/// Errors raised while decoding or validating a design tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Failed to decode design document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Duplicate node id: {id}")]
    DuplicateId { id: String },

    #[error("Node {parent} references unknown child {child}")]
    DanglingChild { parent: String, child: String },

    #[error("Node {node} is claimed by two parents ({first} and {second})")]
    MultipleParents {
        node: String,
        first: String,
        second: String,
    },

    #[error("Declared root {root} is a child of {parent}")]
    RootHasParent { root: String, parent: String },

    #[error("Declared root {root} does not exist")]
    UnknownRoot { root: String },

    #[error("Cycle detected involving node {node}")]
    Cycle { node: String },

    #[error("Node {node} is not reachable from any root")]
    Unreachable { node: String },

    #[error("Maximum tree depth ({limit}) exceeded at node {node}")]
    DepthLimit { limit: usize, node: String },

    #[error("Maximum node count ({limit}) exceeded")]
    NodeLimit { limit: usize },
}

/// Errors raised by the name normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("Name {raw:?} contains no letters or digits")]
    InvalidName { raw: String },
}
