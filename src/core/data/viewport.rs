use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1366;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 768;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "viewport must be between 2x2 and i32::MAX pixels, got {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

/// Output surface size in device pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width < 2 || height < 2 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    /// Falls back to the default size when the surface reports an unusable one.
    #[must_use]
    pub fn new_or_default(width: u32, height: u32) -> Self {
        Self::new(width, height).unwrap_or_default()
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn short_side(&self) -> u32 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        PixelRect::from(*self)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point {
            x: self.width as i32 - 1,
            y: self.height as i32 - 1,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// The region of the fractal plane shown at camera home, before any camera motion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneWindow {
    pub center: Complex,
    pub width: f64,
    pub height: f64,
}

impl PlaneWindow {
    /// Plane units per device pixel so the whole window fits the viewport.
    #[must_use]
    pub fn fit_scale(&self, viewport: Viewport) -> f64 {
        let horizontal = self.width / f64::from(viewport.width());
        let vertical = self.height / f64::from(viewport.height());

        horizontal.max(vertical)
    }
}

impl Default for PlaneWindow {
    fn default() -> Self {
        Self {
            center: Complex::ZERO,
            width: 4.0,
            height: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_degenerate_sizes() {
        assert_eq!(
            Viewport::new(0, 600),
            Err(ViewportError::InvalidSize { width: 0, height: 600 })
        );
        assert_eq!(
            Viewport::new(800, 1),
            Err(ViewportError::InvalidSize { width: 800, height: 1 })
        );
        assert!(Viewport::new(2, 2).is_ok());
    }

    #[test]
    fn new_or_default_falls_back_for_minimised_window() {
        let viewport = Viewport::new_or_default(0, 0);

        assert_eq!(viewport.width(), DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(viewport.height(), DEFAULT_VIEWPORT_HEIGHT);
    }

    #[test]
    fn pixel_rect_covers_whole_viewport() {
        let viewport = Viewport::new(640, 480).unwrap();
        let rect = viewport.pixel_rect();

        assert_eq!(rect.width(), 640);
        assert_eq!(rect.height(), 480);
        assert_eq!(rect.bottom_right(), viewport.bottom_right());
        assert_eq!(viewport.pixel_count(), 640 * 480);
    }

    #[test]
    fn fit_scale_uses_the_tighter_axis() {
        let window = PlaneWindow::default();

        // 4/800 = 0.005 vs 2/600 = 0.00333
        assert_eq!(window.fit_scale(Viewport::new(800, 600).unwrap()), 0.005);
        // 4/1000 = 0.004 vs 2/200 = 0.01
        assert_eq!(window.fit_scale(Viewport::new(1000, 200).unwrap()), 0.01);
    }

    #[test]
    fn short_side_is_min_dimension() {
        assert_eq!(Viewport::new(1366, 768).unwrap().short_side(), 768);
        assert_eq!(Viewport::new(300, 900).unwrap().short_side(), 300);
    }
}
