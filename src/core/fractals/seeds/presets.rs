use crate::core::data::complex::Complex;

pub const DEFAULT_SEEDS: [Complex; 7] = [
    Complex::new(-0.4, 0.6),
    Complex::new(0.285, 0.01),
    Complex::new(-0.70176, -0.3842),
    Complex::new(-0.8, 0.156),
    Complex::new(-0.7269, 0.1889),
    Complex::new(0.0, 0.8),
    // self-seeded: the Mandelbrot set
    Complex::ZERO,
];

#[must_use]
pub fn default_seeds() -> Vec<Complex> {
    DEFAULT_SEEDS.to_vec()
}
