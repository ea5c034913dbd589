use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::fractals::seeds::catalog::SeedCatalogError;
use crate::core::palette::colour_map::ColourMapError;
use crate::core::palette::errors::PaletteConfigError;
use crate::core::util::pixel_to_plane_coords::PixelToPlaneCoordsError;

#[derive(Debug, Clone, PartialEq)]
pub enum CompositorError {
    Seeds(SeedCatalogError),
    Palette(PaletteConfigError),
}

impl fmt::Display for CompositorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seeds(err) => write!(f, "seed catalog: {}", err),
            Self::Palette(err) => write!(f, "palette: {}", err),
        }
    }
}

impl Error for CompositorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Seeds(err) => Some(err),
            Self::Palette(err) => Some(err),
        }
    }
}

impl From<SeedCatalogError> for CompositorError {
    fn from(err: SeedCatalogError) -> Self {
        Self::Seeds(err)
    }
}

impl From<PaletteConfigError> for CompositorError {
    fn from(err: PaletteConfigError) -> Self {
        Self::Palette(err)
    }
}

/// Failure of the CPU raster path for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrameError {
    Cancelled,
    Coordinates(PixelToPlaneCoordsError),
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "frame cancelled"),
            Self::Coordinates(err) => write!(f, "pixel mapping failed: {}", err),
            Self::ColourMap(err) => write!(f, "colouring failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Coordinates(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}
