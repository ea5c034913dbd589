use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Failure of a cancellable generation: either superseded or the algorithm failed.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Algorithm(e) => Some(e),
        }
    }
}

impl<E> From<Cancelled> for GenerateFractalError<E> {
    fn from(cancelled: Cancelled) -> Self {
        Self::Cancelled(cancelled)
    }
}

/// Evaluates every pixel of the algorithm's rect, one rayon task per row, writing
/// straight into a preallocated row-major buffer.
///
/// `cancel` is polled at each row start and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`](crate::core::actions::cancellation::CANCEL_CHECK_INTERVAL_PIXELS)
/// pixels; a cancelled run returns no partial output.
pub fn generate_fractal_parallel_rayon<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Copy + Default + Send + Sync,
    Alg::Failure: Send,
    C: CancelToken + ?Sized,
{
    let pixel_rect = algorithm.pixel_rect();
    let width = pixel_rect.width() as usize;
    let top_left = pixel_rect.top_left();
    let mut output = vec![Alg::Success::default(); pixel_rect.size() as usize];

    output
        .par_chunks_mut(width)
        .enumerate()
        .try_for_each(|(row, values)| -> Result<(), GenerateFractalError<Alg::Failure>> {
            let y = top_left.y + row as i32;

            for (column, value) in values.iter_mut().enumerate() {
                cancel.check_at(column)?;

                *value = algorithm
                    .compute(Point {
                        x: top_left.x + column as i32,
                        y,
                    })
                    .map_err(GenerateFractalError::Algorithm)?;
            }

            Ok(())
        })?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::pixel_rect::PixelRect;
    use std::error::Error;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubAlgorithm {
        pixel_rect: PixelRect,
        fail_at: Option<Point>,
    }

    impl StubAlgorithm {
        fn new(bottom_right: Point) -> Self {
            Self {
                pixel_rect: PixelRect::new(Point { x: 0, y: 0 }, bottom_right).unwrap(),
                fail_at: None,
            }
        }
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if self.fail_at == Some(pixel) {
                return Err(StubError {});
            }
            Ok((pixel.y * 1000 + pixel.x) as u64)
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[test]
    fn test_rayon_matches_serial_row_major_order() {
        let algorithm = StubAlgorithm::new(Point { x: 10, y: 8 });

        let serial = generate_fractal(&algorithm).unwrap();
        let parallel = generate_fractal_parallel_rayon(&algorithm, &NeverCancel).unwrap();

        assert_eq!(parallel, serial);
        assert_eq!(parallel.len(), 11 * 9);
        assert_eq!(parallel[11], 1000);
    }

    #[test]
    fn test_rayon_with_offset_rect() {
        let algorithm = StubAlgorithm {
            pixel_rect: PixelRect::new(Point { x: 5, y: 5 }, Point { x: 6, y: 6 }).unwrap(),
            fail_at: None,
        };

        let parallel = generate_fractal_parallel_rayon(&algorithm, &NeverCancel).unwrap();

        assert_eq!(parallel, vec![5005, 5006, 6005, 6006]);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubAlgorithm {
            fail_at: Some(Point { x: 2, y: 3 }),
            ..StubAlgorithm::new(Point { x: 3, y: 4 })
        };

        let result = generate_fractal_parallel_rayon(&algorithm, &NeverCancel);

        assert!(matches!(result, Err(GenerateFractalError::Algorithm(StubError {}))));
    }

    #[test]
    fn test_cancelled_token_returns_cancelled() {
        let algorithm = StubAlgorithm::new(Point { x: 10, y: 8 });
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_parallel_rayon(&algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
    }

    #[test]
    fn test_cancellation_after_k_polls() {
        let algorithm = StubAlgorithm::new(Point { x: 5, y: 5 });
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || poll_count.fetch_add(1, Ordering::Relaxed) >= 3;

        let result = generate_fractal_parallel_rayon(&algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
        assert!(poll_count.load(Ordering::Relaxed) >= 3);
    }

    #[test]
    fn test_cancellation_polled_at_every_row_start() {
        let algorithm = StubAlgorithm::new(Point { x: 1, y: 4 });
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        assert!(generate_fractal_parallel_rayon(&algorithm, &cancel_token).is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_cancellation_polled_within_wide_rows() {
        // 3000 wide: polls at 0, 1024, 2048 on each of 2 rows
        let algorithm = StubAlgorithm::new(Point { x: 2999, y: 1 });
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        assert!(generate_fractal_parallel_rayon(&algorithm, &cancel_token).is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_error_display() {
        let cancelled: GenerateFractalError<StubError> = GenerateFractalError::Cancelled(Cancelled);
        let failed: GenerateFractalError<StubError> = GenerateFractalError::Algorithm(StubError {});

        assert_eq!(cancelled.to_string(), "frame cancelled");
        assert_eq!(failed.to_string(), "algorithm error: StubError");
    }
}
