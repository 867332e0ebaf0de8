//! Render error types

use hypermarch_core::SolveError;

/// Error that aborts a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderError {
    /// A solid's frame cannot be inverted; the scene data is broken
    ///
    /// Solids reject such frames at construction, so a scene built through
    /// the public constructors never produces this.
    MalformedScene(SolveError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::MalformedScene(e) => write!(f, "Malformed scene: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::MalformedScene(e) => Some(e),
        }
    }
}
