use crate::core::palette::errors::PaletteConfigError;
use crate::core::palette::gradient::GradientDefinition;

type HexStops = &'static [(&'static str, f64)];

const PRESETS: [(&str, HexStops); 6] = [
    ("Yellow", &[("#000000", 0.0), ("#ffff00", 0.3), ("#000000", 1.0)]),
    (
        "Sage",
        &[
            ("#000000", 0.0),
            ("#7c916f", 0.2),
            ("#e8ffd9", 0.3),
            ("#7c916f", 0.4),
            ("#000000", 1.0),
        ],
    ),
    (
        "Magenta",
        &[
            ("#000000", 0.0),
            ("#df1b8b", 0.2),
            ("#faace6", 0.3),
            ("#df1b8b", 0.4),
            ("#000000", 1.0),
        ],
    ),
    (
        "Lime",
        &[
            ("#000100", 0.0),
            ("#44aa00", 0.2),
            ("#f6ffd5", 0.3),
            ("#44aa00", 0.6),
            ("#000100", 1.0),
        ],
    ),
    (
        "Aqua",
        &[
            ("#000000", 0.0),
            ("#5fd3bc", 0.2),
            ("#aaffee", 0.3),
            ("#5fd3bc", 0.4),
            ("#000000", 1.0),
        ],
    ),
    (
        "Fire",
        &[
            ("#000000", 0.0),
            ("#b80000", 0.1),
            ("#f4ac00", 0.2),
            ("#fcfcf4", 0.3),
            ("#f4ac00", 0.4),
            ("#b80000", 0.5),
            ("#000000", 1.0),
        ],
    ),
];

pub fn default_gradients() -> Result<Vec<GradientDefinition>, PaletteConfigError> {
    PRESETS
        .iter()
        .map(|(name, stops)| GradientDefinition::from_hex(*name, stops))
        .collect()
}
