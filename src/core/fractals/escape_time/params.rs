use crate::core::fractals::escape_time::errors::EscapeTimeError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
/// Squared escape radius; 256² keeps the smooth-colouring estimate stable.
pub const DEFAULT_ESCAPE_THRESHOLD: f64 = 65536.0;
const MIN_ESCAPE_THRESHOLD: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeParams {
    max_iterations: u32,
    escape_threshold: f64,
}

impl EscapeTimeParams {
    pub fn new(max_iterations: u32, escape_threshold: f64) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        if !escape_threshold.is_finite() || escape_threshold < MIN_ESCAPE_THRESHOLD {
            return Err(EscapeTimeError::ThresholdTooSmall {
                threshold: escape_threshold,
            });
        }

        Ok(Self {
            max_iterations,
            escape_threshold,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_threshold(&self) -> f64 {
        self.escape_threshold
    }
}

impl Default for EscapeTimeParams {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_threshold: DEFAULT_ESCAPE_THRESHOLD,
        }
    }
}
