use std::error::Error;
use std::fmt;

/// A frame that failed for a reason other than being superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "render {} failed: {}", self.generation, self.message)
    }
}

impl Error for RenderError {}
