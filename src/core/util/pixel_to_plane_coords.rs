use crate::core::data::affine::Affine2;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::vec2::Vec2;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneCoordsError {
    PointOutsideViewport { point: Point, viewport: Viewport },
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideViewport { point, viewport } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} viewport",
                    point.x,
                    point.y,
                    viewport.width(),
                    viewport.height()
                )
            }
        }
    }
}

impl Error for PixelToPlaneCoordsError {}

/// Offset of a pixel centre from the viewport centre, y pointing up.
#[must_use]
pub fn pixel_centre_offset(pixel: Point, viewport: Viewport) -> Vec2 {
    let half_width = f64::from(viewport.width()) / 2.0;
    let half_height = f64::from(viewport.height()) / 2.0;

    Vec2 {
        x: f64::from(pixel.x) + 0.5 - half_width,
        y: half_height - (f64::from(pixel.y) + 0.5),
    }
}

pub fn pixel_to_plane_coords(
    pixel: Point,
    viewport: Viewport,
    transform: &Affine2,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if !viewport.pixel_rect().contains_point(pixel) {
        return Err(PixelToPlaneCoordsError::PointOutsideViewport {
            point: pixel,
            viewport,
        });
    }

    Ok(transform.apply_to_complex(pixel_centre_offset(pixel, viewport)))
}
