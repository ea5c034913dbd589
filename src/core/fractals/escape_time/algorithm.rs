use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::affine::Affine2;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::evaluator::evaluate;
use crate::core::fractals::escape_time::params::EscapeTimeParams;
use crate::core::util::pixel_to_plane_coords::{PixelToPlaneCoordsError, pixel_to_plane_coords};

/// Per-pixel escape-time evaluation for one viewport under one transform.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    transform: Affine2,
    seed: Complex,
    params: EscapeTimeParams,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        transform: Affine2,
        seed: Complex,
        params: EscapeTimeParams,
    ) -> Self {
        Self {
            viewport,
            transform,
            seed,
            params,
        }
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = f64;
    type Failure = PixelToPlaneCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let coord = pixel_to_plane_coords(pixel, self.viewport, &self.transform)?;

        Ok(evaluate(coord, self.seed, &self.params))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.viewport.pixel_rect()
    }
}
