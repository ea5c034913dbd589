use crate::core::camera::config::CameraConfig;
use crate::core::camera::state::CameraState;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::{PlaneWindow, Viewport};
use crate::core::fractals::escape_time::params::EscapeTimeParams;
use crate::core::fractals::seeds::presets::default_seeds;
use crate::core::palette::band::DEFAULT_BAND_SIZE;
use crate::core::palette::gradient::GradientDefinition;
use crate::core::palette::presets::default_gradients;

/// Bottom rows covered by the palette preview strip.
pub const PALETTE_STRIP_ROWS: u32 = 25;

#[derive(Debug, Clone, PartialEq)]
pub struct CompositorConfig {
    pub viewport: Viewport,
    pub window: PlaneWindow,
    pub camera: CameraConfig,
    pub home: CameraState,
    pub seeds: Vec<Complex>,
    pub gradients: Vec<GradientDefinition>,
    pub band_size: usize,
    pub params: EscapeTimeParams,
}

impl Default for CompositorConfig {
    /// Preset seeds and gradients; an invalid preset leaves the gradient list
    /// empty, which the compositor rejects at construction.
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            window: PlaneWindow::default(),
            camera: CameraConfig::default(),
            home: CameraState::default(),
            seeds: default_seeds(),
            gradients: default_gradients().unwrap_or_default(),
            band_size: DEFAULT_BAND_SIZE,
            params: EscapeTimeParams::default(),
        }
    }
}
