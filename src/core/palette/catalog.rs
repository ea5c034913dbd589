use std::sync::Arc;

use tracing::debug;

use crate::core::palette::band::{DEFAULT_BAND_SIZE, PaletteBand};
use crate::core::palette::errors::PaletteConfigError;
use crate::core::palette::generator::build_band;
use crate::core::palette::gradient::GradientDefinition;
use crate::core::palette::presets::default_gradients;

/// Cyclic set of gradients with the active one's band built on demand.
#[derive(Debug, Clone)]
pub struct PaletteCatalog {
    gradients: Vec<GradientDefinition>,
    band_size: usize,
    active_index: usize,
    cached: Option<(usize, Arc<PaletteBand>)>,
    regenerations: u64,
}

impl PaletteCatalog {
    /// Builds every band once up front so configuration errors surface here.
    pub fn new(gradients: Vec<GradientDefinition>, band_size: usize) -> Result<Self, PaletteConfigError> {
        if gradients.is_empty() {
            return Err(PaletteConfigError::EmptyCatalog);
        }

        for gradient in &gradients {
            build_band(gradient, band_size)?;
        }

        Ok(Self {
            gradients,
            band_size,
            active_index: 0,
            cached: None,
            regenerations: 0,
        })
    }

    pub fn with_defaults() -> Result<Self, PaletteConfigError> {
        Self::new(default_gradients()?, DEFAULT_BAND_SIZE)
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    #[must_use]
    pub fn band_size(&self) -> usize {
        self.band_size
    }

    #[must_use]
    pub fn gradients(&self) -> &[GradientDefinition] {
        &self.gradients
    }

    #[must_use]
    pub fn active_gradient(&self) -> &GradientDefinition {
        &self.gradients[self.active_index]
    }

    /// Number of times a band has been generated; stays flat while the selection is unchanged.
    #[must_use]
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.gradients.len();
    }

    pub fn prev(&mut self) {
        self.active_index = (self.active_index + self.gradients.len() - 1) % self.gradients.len();
    }

    pub fn select(&mut self, index: usize) -> Option<&GradientDefinition> {
        let gradient = self.gradients.get(index)?;
        self.active_index = index;
        Some(gradient)
    }

    /// The active band, regenerated only when the selection moved since the last call.
    pub fn active_band(&mut self) -> Result<Arc<PaletteBand>, PaletteConfigError> {
        if let Some((index, band)) = &self.cached {
            if *index == self.active_index {
                return Ok(Arc::clone(band));
            }
        }

        let band = Arc::new(build_band(&self.gradients[self.active_index], self.band_size)?);
        self.regenerations += 1;

        debug!(
            palette = band.name(),
            index = self.active_index,
            band_size = self.band_size,
            "palette band regenerated"
        );

        self.cached = Some((self.active_index, Arc::clone(&band)));
        Ok(band)
    }
}
