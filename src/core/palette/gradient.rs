use crate::core::data::colour::Colour;
use crate::core::palette::errors::PaletteConfigError;
use crate::core::palette::hex::parse_hex_colour;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub colour: Colour,
    pub position: f64,
}

/// Validated multi-stop gradient: positions strictly increase from 0.0 to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDefinition {
    name: String,
    stops: Vec<GradientStop>,
}

impl GradientDefinition {
    pub fn new(name: impl Into<String>, stops: Vec<GradientStop>) -> Result<Self, PaletteConfigError> {
        validate_stops(&stops)?;

        Ok(Self {
            name: name.into(),
            stops,
        })
    }

    pub fn from_hex(name: impl Into<String>, stops: &[(&str, f64)]) -> Result<Self, PaletteConfigError> {
        let stops = stops
            .iter()
            .map(|&(hex, position)| {
                Ok(GradientStop {
                    colour: parse_hex_colour(hex)?,
                    position,
                })
            })
            .collect::<Result<Vec<_>, PaletteConfigError>>()?;

        Self::new(name, stops)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// The pair of stops around `t` and how far `t` sits between them.
    #[must_use]
    pub fn bracket(&self, t: f64) -> (GradientStop, GradientStop, f64) {
        let t = t.clamp(0.0, 1.0);
        let last_pair = self.stops.len() - 2;
        let index = self
            .stops
            .windows(2)
            .position(|pair| t <= pair[1].position)
            .unwrap_or(last_pair);

        let from = self.stops[index];
        let to = self.stops[index + 1];
        let factor = (t - from.position) / (to.position - from.position);

        (from, to, factor.clamp(0.0, 1.0))
    }
}

fn validate_stops(stops: &[GradientStop]) -> Result<(), PaletteConfigError> {
    if stops.len() < 2 {
        return Err(PaletteConfigError::TooFewStops { count: stops.len() });
    }

    if let Some(index) = stops.iter().position(|stop| !stop.position.is_finite()) {
        return Err(PaletteConfigError::NonFinitePosition { index });
    }

    let first = stops[0].position;
    if first != 0.0 {
        return Err(PaletteConfigError::FirstStopNotZero { position: first });
    }

    let last = stops[stops.len() - 1].position;
    if last != 1.0 {
        return Err(PaletteConfigError::LastStopNotOne { position: last });
    }

    for (index, pair) in stops.windows(2).enumerate() {
        if pair[1].position <= pair[0].position {
            return Err(PaletteConfigError::NonIncreasingPositions {
                index: index + 1,
                previous: pair[0].position,
                position: pair[1].position,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(position: f64) -> GradientStop {
        GradientStop {
            colour: Colour::BLACK,
            position,
        }
    }

    #[test]
    fn rejects_single_stop() {
        assert_eq!(
            GradientDefinition::new("one", vec![stop(0.0)]),
            Err(PaletteConfigError::TooFewStops { count: 1 })
        );
    }

    #[test]
    fn rejects_open_ends() {
        assert_eq!(
            GradientDefinition::new("late start", vec![stop(0.1), stop(1.0)]),
            Err(PaletteConfigError::FirstStopNotZero { position: 0.1 })
        );
        assert_eq!(
            GradientDefinition::new("early end", vec![stop(0.0), stop(0.9)]),
            Err(PaletteConfigError::LastStopNotOne { position: 0.9 })
        );
    }

    #[test]
    fn rejects_repeated_position() {
        assert_eq!(
            GradientDefinition::new("dup", vec![stop(0.0), stop(0.5), stop(0.5), stop(1.0)]),
            Err(PaletteConfigError::NonIncreasingPositions {
                index: 2,
                previous: 0.5,
                position: 0.5
            })
        );
    }

    #[test]
    fn rejects_nan_position() {
        assert_eq!(
            GradientDefinition::new("nan", vec![stop(0.0), stop(f64::NAN), stop(1.0)]),
            Err(PaletteConfigError::NonFinitePosition { index: 1 })
        );
    }

    #[test]
    fn from_hex_reports_bad_colour() {
        let result = GradientDefinition::from_hex("bad", &[("#000000", 0.0), ("#zz0000", 1.0)]);

        assert_eq!(
            result,
            Err(PaletteConfigError::InvalidColour {
                value: "#zz0000".to_string()
            })
        );
    }

    #[test]
    fn bracket_finds_surrounding_stops() {
        let gradient = GradientDefinition::new("three", vec![stop(0.0), stop(0.2), stop(1.0)]).unwrap();

        let (from, to, factor) = gradient.bracket(0.6);
        assert_eq!((from.position, to.position), (0.2, 1.0));
        assert!((factor - 0.5).abs() < 1e-12);

        let (from, to, factor) = gradient.bracket(0.2);
        assert_eq!((from.position, to.position), (0.0, 0.2));
        assert_eq!(factor, 1.0);

        let (from, _, factor) = gradient.bracket(0.0);
        assert_eq!(from.position, 0.0);
        assert_eq!(factor, 0.0);

        let (_, to, factor) = gradient.bracket(1.0);
        assert_eq!(to.position, 1.0);
        assert_eq!(factor, 1.0);
    }
}
