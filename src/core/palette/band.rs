use crate::core::data::colour::Colour;

pub const DEFAULT_BAND_SIZE: usize = 60;

/// Fixed-length colour lookup strip generated from a gradient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteBand {
    name: String,
    colours: Vec<Colour>,
}

impl PaletteBand {
    /// Callers guarantee at least two colours; see [`build_band`](super::generator::build_band).
    pub(crate) fn from_colours(name: impl Into<String>, colours: Vec<Colour>) -> Self {
        debug_assert!(colours.len() >= 2);

        Self {
            name: name.into(),
            colours,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Flat RGB bytes, three per sample, for texture upload.
    #[must_use]
    pub fn as_rgb_bytes(&self) -> Vec<u8> {
        self.colours.iter().flat_map(|c| c.to_array()).collect()
    }

    /// Linear-filtered lookup with clamp-to-edge addressing, sample centres at `(i + 0.5) / len`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Colour {
        let last = self.colours.len() - 1;
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let texel = (t * self.colours.len() as f64 - 0.5).clamp(0.0, last as f64);

        let lower = texel.floor() as usize;
        let upper = (lower + 1).min(last);

        self.colours[lower].lerp(self.colours[upper], texel - lower as f64)
    }
}
