use std::sync::Arc;

use crate::core::data::affine::Affine2;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::params::EscapeTimeParams;
use crate::core::palette::band::PaletteBand;
use crate::core::palette::colour_map::EscapeColourMap;

/// Everything needed to draw one frame, frozen at the end of `advance`.
#[derive(Debug, Clone)]
pub struct FrameState {
    generation: u64,
    viewport: Viewport,
    transform: Affine2,
    seed: Complex,
    palette: Arc<PaletteBand>,
    params: EscapeTimeParams,
}

impl FrameState {
    #[must_use]
    pub fn new(
        generation: u64,
        viewport: Viewport,
        transform: Affine2,
        seed: Complex,
        palette: Arc<PaletteBand>,
        params: EscapeTimeParams,
    ) -> Self {
        Self {
            generation,
            viewport,
            transform,
            seed,
            palette,
            params,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Maps pixel-centre offsets (y up, origin at the viewport centre) to the fractal plane.
    #[must_use]
    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    /// Transform as a column-major 4x4 `f32` matrix, ready for a shader uniform.
    ///
    /// With [`Self::seed_components`] and [`Self::palette_bytes`] this is the frame
    /// output handed to a GPU presenter; the CPU path reads the typed fields instead.
    #[must_use]
    pub fn matrix4(&self) -> [f32; 16] {
        self.transform.to_mat4_column_major()
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }

    /// `(re, im)` of the active seed, for a shader uniform.
    #[must_use]
    pub fn seed_components(&self) -> (f64, f64) {
        (self.seed.real, self.seed.imag)
    }

    #[must_use]
    pub fn palette(&self) -> &Arc<PaletteBand> {
        &self.palette
    }

    /// Flat RGB bytes of the band, for uploading as a 1-D texture.
    #[must_use]
    pub fn palette_bytes(&self) -> Vec<u8> {
        self.palette.as_rgb_bytes()
    }

    #[must_use]
    pub fn params(&self) -> EscapeTimeParams {
        self.params
    }

    #[must_use]
    pub fn algorithm(&self) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(self.viewport, self.transform, self.seed, self.params)
    }

    #[must_use]
    pub fn colour_map(&self) -> EscapeColourMap {
        EscapeColourMap::new(Arc::clone(&self.palette))
    }

    /// True when both frames would produce identical pixels, ignoring the generation.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.viewport == other.viewport
            && self.transform == other.transform
            && self.seed == other.seed
            && self.params == other.params
            && (Arc::ptr_eq(&self.palette, &other.palette) || self.palette == other.palette)
    }
}
