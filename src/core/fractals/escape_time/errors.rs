use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeTimeError {
    ZeroMaxIterations,
    ThresholdTooSmall { threshold: f64 },
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::ThresholdTooSmall { threshold } => {
                write!(
                    f,
                    "escape threshold on |z|² must be a finite value of at least 4, got {}",
                    threshold
                )
            }
        }
    }
}

impl Error for EscapeTimeError {}
