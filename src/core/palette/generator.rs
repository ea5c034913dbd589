use crate::core::palette::band::PaletteBand;
use crate::core::palette::errors::PaletteConfigError;
use crate::core::palette::gradient::GradientDefinition;
use crate::core::palette::hcl::{Rgb, blend_hcl};

/// Samples `gradient` at `band_size` evenly spaced points, blending in HCL space.
pub fn build_band(
    gradient: &GradientDefinition,
    band_size: usize,
) -> Result<PaletteBand, PaletteConfigError> {
    if band_size < 2 {
        return Err(PaletteConfigError::BandTooSmall { size: band_size });
    }

    let last = (band_size - 1) as f64;
    let colours = (0..band_size)
        .map(|i| {
            let (from, to, factor) = gradient.bracket(i as f64 / last);
            blend_hcl(Rgb::from_colour(from.colour), Rgb::from_colour(to.colour), factor).to_colour()
        })
        .collect();

    Ok(PaletteBand::from_colours(gradient.name(), colours))
}
