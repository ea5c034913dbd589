use tracing::trace;

use crate::controllers::compositor::errors::RenderFrameError;
use crate::controllers::compositor::frame_state::FrameState;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    GenerateFractalError, generate_fractal_parallel_rayon,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::palette::band::PaletteBand;

/// CPU raster path: evaluate every pixel of the frame, colour it, then overlay the
/// palette strip over the bottom `strip_rows` rows (0 disables the strip).
pub fn render_frame<C: CancelToken + ?Sized>(
    frame: &FrameState,
    strip_rows: u32,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    let algorithm = frame.algorithm();
    let pixel_rect = frame.viewport().pixel_rect();

    let values = generate_fractal_parallel_rayon(&algorithm, cancel).map_err(|e| match e {
        GenerateFractalError::Cancelled(_) => RenderFrameError::Cancelled,
        GenerateFractalError::Algorithm(err) => RenderFrameError::Coordinates(err),
    })?;

    let mut pixel_buffer = generate_pixel_buffer(&values, &frame.colour_map(), pixel_rect, cancel)
        .map_err(|e| match e {
            GeneratePixelBufferError::Cancelled(_) => RenderFrameError::Cancelled,
            GeneratePixelBufferError::ColourMap(err) => RenderFrameError::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => RenderFrameError::PixelBuffer(err),
        })?;

    if strip_rows > 0 {
        overlay_palette_strip(&mut pixel_buffer, frame.palette(), strip_rows);
    }

    trace!(generation = frame.generation(), "frame rasterised");

    Ok(pixel_buffer)
}

/// Paints the band left to right across the bottom rows.
pub fn overlay_palette_strip(pixel_buffer: &mut PixelBuffer, band: &PaletteBand, rows: u32) {
    let width = pixel_buffer.pixel_rect().width() as usize;
    let height = pixel_buffer.pixel_rect().height();
    let first_row = height.saturating_sub(rows) as usize;

    let strip: Vec<u8> = (0..width)
        .flat_map(|x| band.sample((x as f64 + 0.5) / width as f64).to_array())
        .collect();

    for row in pixel_buffer.rows_mut().skip(first_row) {
        row.copy_from_slice(&strip);
    }
}
