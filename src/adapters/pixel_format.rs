//! RGB to RGBA conversion for surfaces that want four bytes per pixel.

use std::error::Error;
use std::fmt;

use rayon::prelude::*;

const RGB: usize = 3;
const RGBA: usize = 4;
/// Below this many pixels the copy stays on the calling thread.
const PARALLEL_MIN_PIXELS: usize = 64 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormatError {
    RaggedSource { len: usize },
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedSource { len } => {
                write!(f, "rgb source length {} is not a multiple of 3", len)
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "rgba destination is {} bytes, expected {}", actual, expected)
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Copies packed RGB into packed RGBA with opaque alpha.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % RGB != 0 {
        return Err(PixelFormatError::RaggedSource { len: src.len() });
    }

    let expected = src.len() / RGB * RGBA;
    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    let copy = |(src_pixel, dst_pixel): (&[u8], &mut [u8])| {
        dst_pixel[..RGB].copy_from_slice(src_pixel);
        dst_pixel[RGB] = 255;
    };

    if src.len() / RGB >= PARALLEL_MIN_PIXELS {
        src.par_chunks_exact(RGB)
            .zip(dst.par_chunks_exact_mut(RGBA))
            .for_each(copy);
    } else {
        src.chunks_exact(RGB).zip(dst.chunks_exact_mut(RGBA)).for_each(copy);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_rgb_to_rgba_known_values() {
        let src = vec![
            255, 0, 0, // red
            0, 255, 0, // green
            0, 0, 255, // blue
        ];
        let mut dst = vec![0; 12];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        assert_eq!(dst, vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_copy_rgb_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        assert_eq!(copy_rgb_to_rgba(&[], &mut dst), Ok(()));
    }

    #[test]
    fn test_ragged_source_is_rejected() {
        let mut dst = vec![0; 4];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4], &mut dst),
            Err(PixelFormatError::RaggedSource { len: 4 })
        );
    }

    #[test]
    fn test_destination_size_mismatch_is_rejected() {
        let mut dst = vec![0; 7];

        assert_eq!(
            copy_rgb_to_rgba(&[1, 2, 3, 4, 5, 6], &mut dst),
            Err(PixelFormatError::LengthMismatch {
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn test_parallel_path_matches_serial_layout() {
        let pixels = PARALLEL_MIN_PIXELS + 3;
        let src: Vec<u8> = (0..pixels * RGB).map(|i| (i % 251) as u8).collect();
        let mut dst = vec![0; pixels * RGBA];

        copy_rgb_to_rgba(&src, &mut dst).unwrap();

        for (i, pixel) in dst.chunks_exact(RGBA).enumerate().step_by(997) {
            assert_eq!(&pixel[..RGB], &src[i * RGB..i * RGB + RGB]);
            assert_eq!(pixel[RGB], 255);
        }
    }
}
