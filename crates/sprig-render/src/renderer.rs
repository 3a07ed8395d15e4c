//! Renderer errors.

use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;
