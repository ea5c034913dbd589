use std::error::Error;
use std::fmt::Write as _;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::compositor::compositor::FrameCompositor;
use crate::controllers::compositor::config::{CompositorConfig, PALETTE_STRIP_ROWS};
use crate::controllers::compositor::render::render_frame;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::params::{DEFAULT_ESCAPE_THRESHOLD, EscapeTimeParams};
use crate::core::fractals::seeds::presets::default_seeds;
use crate::core::palette::errors::PaletteConfigError;
use crate::core::palette::presets::default_gradients;

/// One static frame at camera home.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    pub viewport: Viewport,
    pub seed_index: usize,
    pub palette_index: usize,
    pub max_iterations: u32,
    pub palette_strip: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            seed_index: 0,
            palette_index: 0,
            max_iterations: EscapeTimeParams::default().max_iterations(),
            palette_strip: false,
        }
    }
}

pub struct RasterController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RasterController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, options: &RasterOptions) -> Result<(), Box<dyn Error>> {
        let params = EscapeTimeParams::new(options.max_iterations, DEFAULT_ESCAPE_THRESHOLD)?;
        let mut compositor = FrameCompositor::new(CompositorConfig {
            viewport: options.viewport,
            params,
            ..CompositorConfig::default()
        })?;

        compositor.select_seed(options.seed_index)?;
        compositor.select_palette(options.palette_index)?;
        let frame = compositor.snapshot()?;

        info!(
            width = options.viewport.width(),
            height = options.viewport.height(),
            seed = %frame.seed(),
            palette = compositor.palette_name(),
            max_iterations = options.max_iterations,
            "rendering frame"
        );

        let strip_rows = if options.palette_strip {
            PALETTE_STRIP_ROWS
        } else {
            0
        };

        let start = Instant::now();
        let buffer = render_frame(&frame, strip_rows, &NeverCancel)?;
        info!(duration_ms = start.elapsed().as_secs_f64() * 1000.0, "frame rendered");

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Fails if no frame has been generated yet.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Err(std::io::Error::other("no frame generated to write"));
        };

        self.presenter.present(buffer, &filepath)?;
        info!(path = %filepath.as_ref().display(), "frame written");

        Ok(())
    }
}

/// Human-readable index of the built-in seeds and palettes.
pub fn describe_presets() -> Result<String, PaletteConfigError> {
    let mut listing = String::from("Seeds:\n");

    for (index, seed) in default_seeds().iter().enumerate() {
        let _ = writeln!(listing, "  {}: {}", index, seed);
    }

    listing.push_str("Palettes:\n");
    for (index, gradient) in default_gradients()?.iter().enumerate() {
        let _ = writeln!(listing, "  {}: {}", index, gradient.name());
    }

    Ok(listing)
}
