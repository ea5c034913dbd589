use crate::core::data::colour::Colour;
use crate::core::palette::errors::PaletteConfigError;

/// Parses `#rrggbb` or the short `#rgb` form.
pub fn parse_hex_colour(value: &str) -> Result<Colour, PaletteConfigError> {
    let invalid = || PaletteConfigError::InvalidColour {
        value: value.to_string(),
    };

    let digits = value.strip_prefix('#').ok_or_else(invalid)?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);

    match digits.len() {
        6 => Ok(Colour {
            r: channel(0..2).map_err(|_| invalid())?,
            g: channel(2..4).map_err(|_| invalid())?,
            b: channel(4..6).map_err(|_| invalid())?,
        }),
        3 => {
            // #abc expands to #aabbcc
            let short = |i: usize| channel(i..i + 1).map(|v| v * 17);

            Ok(Colour {
                r: short(0).map_err(|_| invalid())?,
                g: short(1).map_err(|_| invalid())?,
                b: short(2).map_err(|_| invalid())?,
            })
        }
        _ => Err(invalid()),
    }
}
