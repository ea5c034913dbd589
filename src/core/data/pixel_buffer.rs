use rayon::prelude::*;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of bounds {}x{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed row-major RGB image, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = pixel_rect_to_buffer_size(pixel_rect);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.pixel_rect.width() as usize * BYTES_PER_PIXEL
    }

    /// Mutable byte rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let stride = self.row_stride();
        self.buffer.chunks_exact_mut(stride)
    }

    /// Mutable byte rows as a rayon indexed iterator, top to bottom.
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u8> {
        let stride = self.row_stride();
        self.buffer.par_chunks_exact_mut(stride)
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok(relative_y * self.row_stride() + relative_x * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_array());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x: 0, y: 0 },
            Point {
                x: width - 1,
                y: height - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(create_pixel_rect(10, 5));

        assert_eq!(buffer.buffer_size(), 150);
        assert_eq!(buffer.row_stride(), 30);
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_rejects_wrong_length() {
        let result = PixelBuffer::from_data(create_pixel_rect(2, 2), vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_set_pixel_then_read_back() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(3, 3));
        let red = Colour { r: 255, g: 0, b: 0 };

        buffer.set_pixel(Point { x: 1, y: 1 }, red).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 0, 0]);
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }).unwrap(), red);
        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_set_pixel_with_offset_rect() {
        let pixel_rect = PixelRect::new(Point { x: 10, y: 20 }, Point { x: 12, y: 22 }).unwrap();
        let mut buffer = PixelBuffer::new(pixel_rect);
        let white = Colour { r: 255, g: 255, b: 255 };

        buffer.set_pixel(Point { x: 11, y: 21 }, white).unwrap();

        assert_eq!(&buffer.buffer()[12..15], &[255, 255, 255]);
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let pixel_rect = create_pixel_rect(3, 3);
        let mut buffer = PixelBuffer::new(pixel_rect);

        let result = buffer.set_pixel(Point { x: -1, y: 1 }, Colour::BLACK);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                pixel: Point { x: -1, y: 1 },
                pixel_rect
            })
        );
    }

    #[test]
    fn test_rows_mut_yields_one_slice_per_row() {
        let mut buffer = PixelBuffer::new(create_pixel_rect(4, 3));

        for (y, row) in buffer.rows_mut().enumerate() {
            row.fill(y as u8);
        }

        assert_eq!(buffer.pixel(Point { x: 3, y: 2 }).unwrap(), Colour { r: 2, g: 2, b: 2 });
        assert_eq!(buffer.into_data().len(), 36);
    }
}
