use std::sync::Arc;

use tracing::{debug, info};

use crate::controllers::compositor::config::CompositorConfig;
use crate::controllers::compositor::errors::CompositorError;
use crate::controllers::compositor::frame_state::FrameState;
use crate::core::camera::controller::CameraController;
use crate::core::camera::state::CameraUpdateReport;
use crate::core::controls::frame_input::{FrameEvents, FrameInput};
use crate::core::data::affine::Affine2;
use crate::core::data::complex::Complex;
use crate::core::data::vec2::Vec2;
use crate::core::data::viewport::{PlaneWindow, Viewport};
use crate::core::fractals::escape_time::params::EscapeTimeParams;
use crate::core::fractals::seeds::catalog::SeedCatalog;
use crate::core::palette::catalog::PaletteCatalog;
use crate::core::palette::errors::PaletteConfigError;

/// Owns all mutable viewer state and turns per-frame input into immutable [`FrameState`]s.
#[derive(Debug)]
pub struct FrameCompositor {
    camera: CameraController,
    seeds: SeedCatalog,
    palettes: PaletteCatalog,
    window: PlaneWindow,
    params: EscapeTimeParams,
    viewport: Viewport,
    generation: u64,
    last_report: CameraUpdateReport,
}

impl FrameCompositor {
    pub fn new(config: CompositorConfig) -> Result<Self, CompositorError> {
        let seeds = SeedCatalog::new(config.seeds)?;
        let palettes = PaletteCatalog::new(config.gradients, config.band_size)?;

        info!(
            seeds = seeds.len(),
            palettes = palettes.len(),
            band_size = palettes.band_size(),
            width = config.viewport.width(),
            height = config.viewport.height(),
            "frame compositor ready"
        );

        Ok(Self {
            camera: CameraController::new(config.camera, config.home, config.viewport),
            seeds,
            palettes,
            window: config.window,
            params: config.params,
            viewport: config.viewport,
            generation: 0,
            last_report: CameraUpdateReport::default(),
        })
    }

    /// Applies one frame of input: selection events first, then camera integration.
    ///
    /// Any seed or palette change resets the camera to home for this frame.
    pub fn advance(&mut self, input: &FrameInput, dt: f64) -> Result<Arc<FrameState>, CompositorError> {
        let selection_changed = self.apply_selection_events(&input.events);
        let reset = input.events.reset_camera || selection_changed;

        self.last_report = self.camera.update(input.camera, reset, dt);
        if let Some(warning) = self.last_report.warning {
            debug!(?warning, state = ?self.camera.state(), "camera update adjusted");
        }

        self.snapshot()
    }

    /// Packages the current state without integrating any input.
    pub fn snapshot(&mut self) -> Result<Arc<FrameState>, CompositorError> {
        let palette = self.palettes.active_band()?;
        self.generation += 1;

        Ok(Arc::new(FrameState::new(
            self.generation,
            self.viewport,
            self.combined_transform(),
            self.seeds.current(),
            palette,
            self.params,
        )))
    }

    /// Fit scale and pan speed follow the new size; camera placement is kept.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }

        debug!(
            width = viewport.width(),
            height = viewport.height(),
            "compositor viewport resized"
        );
        self.viewport = viewport;
        self.camera.set_viewport(viewport);
    }

    /// `translate(window centre) · scale(fit) · camera`.
    #[must_use]
    pub fn combined_transform(&self) -> Affine2 {
        let centre = Vec2::new(self.window.center.real, self.window.center.imag);

        Affine2::translation(centre)
            * Affine2::scaling(self.window.fit_scale(self.viewport))
            * self.camera.transform()
    }

    pub fn select_seed(&mut self, index: usize) -> Result<Complex, CompositorError> {
        let seed = self.seeds.select(index)?;
        self.camera.reset();

        Ok(seed)
    }

    pub fn select_palette(&mut self, index: usize) -> Result<(), CompositorError> {
        let len = self.palettes.len();

        if self.palettes.select(index).is_none() {
            return Err(PaletteConfigError::IndexOutOfRange { index, len }.into());
        }
        self.camera.reset();

        Ok(())
    }

    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    #[must_use]
    pub fn last_camera_report(&self) -> CameraUpdateReport {
        self.last_report
    }

    #[must_use]
    pub fn seeds(&self) -> &SeedCatalog {
        &self.seeds
    }

    #[must_use]
    pub fn palettes(&self) -> &PaletteCatalog {
        &self.palettes
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seeds.current()
    }

    #[must_use]
    pub fn palette_name(&self) -> &str {
        self.palettes.active_gradient().name()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn params(&self) -> EscapeTimeParams {
        self.params
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Next wins over prev when both arrive in one frame. Returns whether the active
    /// seed or palette actually moved.
    fn apply_selection_events(&mut self, events: &FrameEvents) -> bool {
        if !events.changes_selection() {
            return false;
        }

        let before = (self.seeds.active_index(), self.palettes.active_index());

        if events.next_seed {
            self.seeds.next();
        } else if events.prev_seed {
            self.seeds.prev();
        }

        if events.next_palette {
            self.palettes.next();
        } else if events.prev_palette {
            self.palettes.prev();
        }

        let changed = before != (self.seeds.active_index(), self.palettes.active_index());
        if changed {
            info!(
                seed = %self.seeds.current(),
                seed_index = self.seeds.active_index(),
                palette = self.palettes.active_gradient().name(),
                "selection changed"
            );
        }

        changed
    }
}
