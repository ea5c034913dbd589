use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError<E> {
    /// Superseded before completion; not a failure to display.
    Cancelled(Cancelled),
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<Cancelled> for GeneratePixelBufferError<E> {
    fn from(cancelled: Cancelled) -> Self {
        Self::Cancelled(cancelled)
    }
}

/// Colours a row-major value grid into an RGB buffer, one rayon task per row.
///
/// `input` must hold exactly one value per pixel of `pixel_rect`. Cancellation is
/// polled at each row start and periodically within the row.
pub fn generate_pixel_buffer<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
    C: CancelToken + ?Sized,
{
    let mut pixel_buffer = PixelBuffer::new(pixel_rect);

    if input.len() * BYTES_PER_PIXEL != pixel_buffer.buffer_size() {
        return Err(GeneratePixelBufferError::PixelBuffer(
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: pixel_buffer.buffer_size(),
                buffer_size: input.len() * BYTES_PER_PIXEL,
            },
        ));
    }

    let width = pixel_rect.width() as usize;

    pixel_buffer
        .par_rows_mut()
        .zip(input.par_chunks(width))
        .try_for_each(|(row, values)| -> Result<(), GeneratePixelBufferError<CMap::Failure>> {
            for (column, (bytes, value)) in row
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(values)
                .enumerate()
            {
                cancel.check_at(column)?;

                let colour = mapper
                    .map(*value)
                    .map_err(GeneratePixelBufferError::ColourMap)?;

                bytes.copy_from_slice(&colour.to_array());
            }

            Ok(())
        })?;

    Ok(pixel_buffer)
}
