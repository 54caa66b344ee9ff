//! Error types for code generation.

use figura_core::NamingError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while generating one component.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The component name could not be normalized.
    #[error("Cannot derive a component name: {0}")]
    Naming(#[from] NamingError),

    /// The requested root is not part of the tree.
    #[error("Unknown root node: {0}")]
    UnknownNode(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),
}
