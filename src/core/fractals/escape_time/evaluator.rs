use std::f64::consts::LN_2;

use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::params::EscapeTimeParams;

/// Where an orbit stopped: the step count and |z|² at that step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Escape {
    pub iterations: u32,
    pub magnitude_squared: f64,
}

impl Escape {
    #[must_use]
    pub fn escaped(&self, params: &EscapeTimeParams) -> bool {
        self.iterations < params.max_iterations()
    }
}

/// Runs the orbit of `coord`. A zero `seed` selects the self-seeded form where the
/// constant is the coordinate itself; any other seed gives the Julia form.
#[must_use]
pub fn escape(coord: Complex, seed: Complex, params: &EscapeTimeParams) -> Escape {
    let constant = if seed.is_zero() { coord } else { seed };
    let max_iterations = params.max_iterations();
    let threshold = params.escape_threshold();

    let mut z = coord;
    let mut magnitude_squared = z.magnitude_squared();
    let mut iterations = 0;

    while iterations < max_iterations && magnitude_squared < threshold {
        z = z.square() + constant;
        magnitude_squared = z.magnitude_squared();
        iterations += 1;
    }

    Escape {
        iterations,
        magnitude_squared,
    }
}

/// Smooth escape coordinate in `[0, 1]`; 0 for orbits that never escape.
#[must_use]
pub fn evaluate(coord: Complex, seed: Complex, params: &EscapeTimeParams) -> f64 {
    smooth_value(escape(coord, seed, params), params)
}

#[must_use]
pub fn smooth_value(escape: Escape, params: &EscapeTimeParams) -> f64 {
    // log(log) is only defined once |z|² has left the unit disc
    if !escape.escaped(params) || !(escape.magnitude_squared > 1.0) {
        return 0.0;
    }

    let max = f64::from(params.max_iterations());
    let i = f64::from(escape.iterations);

    let factor = ((escape.magnitude_squared.ln() / 2.0) / LN_2).ln() / LN_2;
    let c1 = (max - i) / (max + 1.0);
    let c2 = (max - i + 1.0) / (max + 1.0);
    let value = c2 + (c1 - c2) * factor;

    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
