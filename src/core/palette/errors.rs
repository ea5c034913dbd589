use std::{error::Error, fmt};

/// Rejected palette configuration. Raised while building gradients or bands, never mid-frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteConfigError {
    TooFewStops { count: usize },
    FirstStopNotZero { position: f64 },
    LastStopNotOne { position: f64 },
    NonIncreasingPositions { index: usize, previous: f64, position: f64 },
    NonFinitePosition { index: usize },
    InvalidColour { value: String },
    BandTooSmall { size: usize },
    EmptyCatalog,
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for PaletteConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewStops { count } => {
                write!(f, "gradient needs at least two stops, got {}", count)
            }
            Self::FirstStopNotZero { position } => {
                write!(f, "first gradient stop must be at 0.0, got {}", position)
            }
            Self::LastStopNotOne { position } => {
                write!(f, "last gradient stop must be at 1.0, got {}", position)
            }
            Self::NonIncreasingPositions {
                index,
                previous,
                position,
            } => {
                write!(
                    f,
                    "gradient stop {} at {} does not follow previous stop at {}",
                    index, position, previous
                )
            }
            Self::NonFinitePosition { index } => {
                write!(f, "gradient stop {} has a non-finite position", index)
            }
            Self::InvalidColour { value } => {
                write!(f, "'{}' is not a #rrggbb or #rgb colour", value)
            }
            Self::BandTooSmall { size } => {
                write!(f, "palette band needs at least two samples, got {}", size)
            }
            Self::EmptyCatalog => write!(f, "palette catalog must contain at least one gradient"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "palette index {} out of range for catalog of {}", index, len)
            }
        }
    }
}

impl Error for PaletteConfigError {}
