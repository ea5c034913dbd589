use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Single-threaded row-major evaluation over the algorithm's whole pixel rect.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let pixel_rect = algorithm.pixel_rect();
    let top_left = pixel_rect.top_left();
    let bottom_right = pixel_rect.bottom_right();

    (top_left.y..=bottom_right.y)
        .flat_map(|y| (top_left.x..=bottom_right.x).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
