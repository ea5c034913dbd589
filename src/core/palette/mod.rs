pub mod band;
pub mod catalog;
pub mod colour_map;
pub mod errors;
pub mod generator;
pub mod gradient;
pub mod hcl;
pub mod hex;
pub mod presets;

pub use band::{DEFAULT_BAND_SIZE, PaletteBand};
pub use catalog::PaletteCatalog;
pub use colour_map::{ColourMapError, EscapeColourMap};
pub use errors::PaletteConfigError;
pub use generator::build_band;
pub use gradient::{GradientDefinition, GradientStop};
