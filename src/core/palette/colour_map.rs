use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palette::band::PaletteBand;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColourMapError {
    NonFiniteValue { value: f64 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteValue { value } => {
                write!(f, "escape value must be finite, got {}", value)
            }
        }
    }
}

impl Error for ColourMapError {}

/// Colours escape values through a palette band, sampled at `1 - value`.
///
/// Interior points (value 0) take the band's last colour; the fastest escapes
/// take its first.
#[derive(Debug, Clone)]
pub struct EscapeColourMap {
    band: Arc<PaletteBand>,
}

impl EscapeColourMap {
    #[must_use]
    pub fn new(band: Arc<PaletteBand>) -> Self {
        Self { band }
    }

    #[must_use]
    pub fn band(&self) -> &PaletteBand {
        &self.band
    }
}

impl ColourMap<f64> for EscapeColourMap {
    type Failure = ColourMapError;

    fn map(&self, value: f64) -> Result<Colour, Self::Failure> {
        if !value.is_finite() {
            return Err(ColourMapError::NonFiniteValue { value });
        }

        Ok(self.band.sample(1.0 - value))
    }

    fn display_name(&self) -> &str {
        self.band.name()
    }
}
