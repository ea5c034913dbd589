use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PixelsPresenterError {
    Pixels(pixels::Error),
    Texture(pixels::TextureError),
    /// A previous rebuild failed and left no surface to draw on.
    NoSurface,
}

impl fmt::Display for PixelsPresenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(err) => write!(f, "pixels surface error: {}", err),
            Self::Texture(err) => write!(f, "pixels texture error: {}", err),
            Self::NoSurface => write!(f, "no presentation surface"),
        }
    }
}

impl Error for PixelsPresenterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pixels(err) => Some(err),
            Self::Texture(err) => Some(err),
            Self::NoSurface => None,
        }
    }
}

impl From<pixels::Error> for PixelsPresenterError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<pixels::TextureError> for PixelsPresenterError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}
