//! Pipeline error types.

use std::path::PathBuf;

use figura_codegen::CodegenError;
use figura_core::TreeError;
use figura_tokens::TokenError;
use thiserror::Error;

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid design tree: {0}")]
    Tree(#[from] TreeError),

    #[error("Code generation error: {0}")]
    Codegen(#[from] CodegenError),

    #[error("Token rendering error: {0}")]
    Tokens(#[from] TokenError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;
