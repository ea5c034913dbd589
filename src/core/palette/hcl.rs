//! CIE LCh(ab) ("HCL") blending over sRGB with a D65 white point.
//!
//! Lightness is kept on the 0..1 scale rather than 0..100.

use crate::core::data::colour::Colour;

const D65_WHITE: [f64; 3] = [0.95047, 1.00000, 1.08883];
/// Below this chroma the hue angle carries no information.
const ACHROMATIC_CHROMA: f64 = 0.00015;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hcl {
    /// Degrees in `[0, 360)`.
    pub h: f64,
    pub c: f64,
    pub l: f64,
}

impl Rgb {
    #[must_use]
    pub fn from_colour(colour: Colour) -> Self {
        Self {
            r: f64::from(colour.r) / 255.0,
            g: f64::from(colour.g) / 255.0,
            b: f64::from(colour.b) / 255.0,
        }
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn to_colour(self) -> Colour {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;

        Colour {
            r: byte(self.r),
            g: byte(self.g),
            b: byte(self.b),
        }
    }

    #[must_use]
    pub fn to_hcl(self) -> Hcl {
        let [x, y, z] = linear_rgb_to_xyz([linearize(self.r), linearize(self.g), linearize(self.b)]);
        let [l, a, b] = xyz_to_lab([x, y, z]);

        let h = b.atan2(a).to_degrees().rem_euclid(360.0);
        let c = a.hypot(b);

        Hcl { h, c, l }
    }

    #[must_use]
    pub fn from_hcl(hcl: Hcl) -> Self {
        let (sin, cos) = hcl.h.to_radians().sin_cos();
        let lab = [hcl.l, hcl.c * cos, hcl.c * sin];
        let [r, g, b] = xyz_to_linear_rgb(lab_to_xyz(lab));

        Self {
            r: delinearize(r),
            g: delinearize(g),
            b: delinearize(b),
        }
    }
}

/// Blends two colours through HCL space, taking the shorter way round the hue circle.
#[must_use]
pub fn blend_hcl(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let mut start = from.to_hcl();
    let mut end = to.to_hcl();

    if start.c <= ACHROMATIC_CHROMA && end.c >= ACHROMATIC_CHROMA {
        start.h = end.h;
    } else if end.c <= ACHROMATIC_CHROMA && start.c >= ACHROMATIC_CHROMA {
        end.h = start.h;
    }

    Rgb::from_hcl(Hcl {
        h: interpolate_angle(start.h, end.h, t),
        c: start.c + t * (end.c - start.c),
        l: start.l + t * (end.l - start.l),
    })
    .clamped()
}

/// Interpolates degrees along the shortest arc, result in `[0, 360)`.
#[must_use]
pub fn interpolate_angle(from: f64, to: f64, t: f64) -> f64 {
    let delta = ((to - from).rem_euclid(360.0) + 540.0).rem_euclid(360.0) - 180.0;
    (from + t * delta + 360.0).rem_euclid(360.0)
}

fn linearize(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn delinearize(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn linear_rgb_to_xyz([r, g, b]: [f64; 3]) -> [f64; 3] {
    [
        0.41239079926595948 * r + 0.35758433938387796 * g + 0.18048078840183429 * b,
        0.21263900587151036 * r + 0.71516867876775593 * g + 0.072192315360733715 * b,
        0.019330818715591851 * r + 0.11919477979462599 * g + 0.95053215224966058 * b,
    ]
}

fn xyz_to_linear_rgb([x, y, z]: [f64; 3]) -> [f64; 3] {
    [
        3.2409699419045214 * x - 1.5373831775700935 * y - 0.49861076029300328 * z,
        -0.96924363628087983 * x + 1.8759675015077207 * y + 0.041555057407175613 * z,
        0.055630079696993609 * x - 0.20397695888897657 * y + 1.0569715142428786 * z,
    ]
}

fn lab_f(t: f64) -> f64 {
    if t > 6.0 / 29.0 * 6.0 / 29.0 * 6.0 / 29.0 {
        t.cbrt()
    } else {
        t / 3.0 * 29.0 / 6.0 * 29.0 / 6.0 + 4.0 / 29.0
    }
}

fn lab_f_inverse(t: f64) -> f64 {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        3.0 * 6.0 / 29.0 * 6.0 / 29.0 * (t - 4.0 / 29.0)
    }
}

fn xyz_to_lab([x, y, z]: [f64; 3]) -> [f64; 3] {
    let fy = lab_f(y / D65_WHITE[1]);

    [
        1.16 * fy - 0.16,
        5.0 * (lab_f(x / D65_WHITE[0]) - fy),
        2.0 * (fy - lab_f(z / D65_WHITE[2])),
    ]
}

fn lab_to_xyz([l, a, b]: [f64; 3]) -> [f64; 3] {
    let l2 = (l + 0.16) / 1.16;

    [
        D65_WHITE[0] * lab_f_inverse(l2 + a / 5.0),
        D65_WHITE[1] * lab_f_inverse(l2),
        D65_WHITE[2] * lab_f_inverse(l2 - b / 2.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_colour_close(actual: Colour, expected: Colour) {
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;

        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn hcl_round_trip_preserves_colour() {
        for colour in [
            Colour { r: 0xdf, g: 0x1b, b: 0x8b },
            Colour { r: 0x5f, g: 0xd3, b: 0xbc },
            Colour { r: 0xff, g: 0xff, b: 0x00 },
            Colour::BLACK,
        ] {
            let back = Rgb::from_hcl(Rgb::from_colour(colour).to_hcl()).to_colour();
            assert_eq!(back, colour);
        }
    }

    #[test]
    fn white_has_full_lightness_and_no_chroma() {
        let hcl = Rgb::from_colour(Colour { r: 255, g: 255, b: 255 }).to_hcl();

        assert!((hcl.l - 1.0).abs() < 1e-3, "l={}", hcl.l);
        assert!(hcl.c < 1e-3, "c={}", hcl.c);
    }

    #[test]
    fn blend_endpoints_match_inputs() {
        let from = Rgb::from_colour(Colour { r: 0xb8, g: 0, b: 0 });
        let to = Rgb::from_colour(Colour { r: 0xf4, g: 0xac, b: 0 });

        assert_colour_close(blend_hcl(from, to, 0.0).to_colour(), Colour { r: 0xb8, g: 0, b: 0 });
        assert_colour_close(blend_hcl(from, to, 1.0).to_colour(), Colour { r: 0xf4, g: 0xac, b: 0 });
    }

    #[test]
    fn black_to_white_stays_grey() {
        let mid = blend_hcl(
            Rgb::from_colour(Colour::BLACK),
            Rgb::from_colour(Colour { r: 255, g: 255, b: 255 }),
            0.5,
        )
        .to_colour();

        assert!(mid.r.abs_diff(mid.g) <= 1 && mid.g.abs_diff(mid.b) <= 1, "mid={:?}", mid);
        assert!(mid.r > 64 && mid.r < 192, "mid={:?}", mid);
    }

    #[test]
    fn black_endpoint_adopts_partner_hue() {
        let black = Rgb::from_colour(Colour::BLACK);
        let yellow = Rgb::from_colour(Colour { r: 255, g: 255, b: 0 });

        let mid = blend_hcl(black, yellow, 0.5).to_colour();

        // hue comes from yellow, so red and green rise together and blue stays lowest
        assert!(mid.r.abs_diff(mid.g) <= 24, "mid={:?}", mid);
        assert!(mid.b < mid.g, "mid={:?}", mid);
    }

    #[test]
    fn blended_channels_stay_in_gamut() {
        let from = Rgb::from_colour(Colour { r: 0x44, g: 0xaa, b: 0 });
        let to = Rgb::from_colour(Colour { r: 0xdf, g: 0x1b, b: 0x8b });

        for step in 0..=20 {
            let rgb = blend_hcl(from, to, f64::from(step) / 20.0);
            for channel in [rgb.r, rgb.g, rgb.b] {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    #[test]
    fn interpolate_angle_takes_short_arc() {
        assert!((interpolate_angle(350.0, 10.0, 0.5) - 0.0).abs() < 1e-9
            || (interpolate_angle(350.0, 10.0, 0.5) - 360.0).abs() < 1e-9);
        assert!((interpolate_angle(10.0, 350.0, 0.25) - 5.0).abs() < 1e-9);
        assert!((interpolate_angle(90.0, 180.0, 0.5) - 135.0).abs() < 1e-9);
    }
}
