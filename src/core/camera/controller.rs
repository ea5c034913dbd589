use tracing::warn;

use crate::core::camera::config::CameraConfig;
use crate::core::camera::input::CameraInput;
use crate::core::camera::state::{CameraState, CameraUpdateReport, CameraWarning};
use crate::core::data::affine::Affine2;
use crate::core::data::viewport::Viewport;
use crate::core::util::normalize_angle::normalize_angle;

/// Integrates per-frame pan, zoom and rotate input into a continuous transform.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    config: CameraConfig,
    home: CameraState,
    state: CameraState,
    move_speed: f64,
}

impl CameraController {
    #[must_use]
    pub fn new(config: CameraConfig, home: CameraState, viewport: Viewport) -> Self {
        Self {
            config,
            home,
            state: home,
            move_speed: f64::from(viewport.short_side()),
        }
    }

    #[must_use]
    pub fn state(&self) -> CameraState {
        self.state
    }

    #[must_use]
    pub fn home(&self) -> CameraState {
        self.home
    }

    #[must_use]
    pub fn config(&self) -> CameraConfig {
        self.config
    }

    #[must_use]
    pub fn move_speed(&self) -> f64 {
        self.move_speed
    }

    /// Pan speed follows the viewport's short side; the camera itself is untouched.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.move_speed = f64::from(viewport.short_side());
    }

    pub fn reset(&mut self) {
        self.state = self.home;
    }

    pub fn update(&mut self, input: CameraInput, reset: bool, dt: f64) -> CameraUpdateReport {
        let mut report = CameraUpdateReport::default();
        let input = input.normalized();
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        let zoom_rate = if input.scale >= 0.0 {
            self.config.zoom_in_speed
        } else {
            self.config.zoom_out_speed
        };
        let mut scale = self.state.scale - dt * input.scale * self.state.scale * zoom_rate;

        if scale.is_finite() && (scale < self.config.min_scale || scale > self.config.max_scale) {
            scale = scale.clamp(self.config.min_scale, self.config.max_scale);
            report.clamped = true;
            report.warning = Some(CameraWarning::ScaleClamped);
        }
        self.state.scale = scale;

        self.state.angle =
            normalize_angle(self.state.angle - dt * input.rotate * self.config.rotate_speed);

        let step = input.dir * (dt * self.move_speed * self.state.scale);
        self.state.position += step.rotated(self.state.angle);

        if !self.state.is_finite() {
            warn!(state = ?self.state, "camera state became non-finite, resetting to home");
            self.state = self.home;
            report.reset = true;
            report.warning = Some(CameraWarning::NonFiniteReset);
            return report;
        }

        if reset {
            self.state = self.home;
            report.reset = true;
        }

        report
    }

    /// `translate(position) · rotate(angle) · scale(scale)`.
    #[must_use]
    pub fn transform(&self) -> Affine2 {
        Affine2::translation(self.state.position)
            * Affine2::rotation(self.state.angle)
            * Affine2::scaling(self.state.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::vec2::Vec2;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn camera() -> CameraController {
        CameraController::new(
            CameraConfig::default(),
            CameraState::default(),
            Viewport::new(800, 600).unwrap(),
        )
    }

    #[test]
    fn zoom_out_at_full_input_for_one_second() {
        let mut camera = camera();

        camera.update(
            CameraInput {
                scale: -1.0,
                ..Default::default()
            },
            false,
            1.0,
        );

        assert_approx_eq(camera.state().scale, 2.5);
    }

    #[test]
    fn zoom_in_is_exponential() {
        let mut camera = camera();
        let input = CameraInput {
            scale: 1.0,
            ..Default::default()
        };

        camera.update(input, false, 0.5);
        assert_approx_eq(camera.state().scale, 0.75);

        camera.update(input, false, 0.5);
        assert_approx_eq(camera.state().scale, 0.5625);
    }

    #[test]
    fn zoom_in_never_reaches_zero() {
        let mut camera = camera();

        let report = camera.update(
            CameraInput {
                scale: 1.0,
                ..Default::default()
            },
            false,
            4.0,
        );

        assert!(camera.state().scale > 0.0);
        assert_eq!(camera.state().scale, CameraConfig::default().min_scale);
        assert!(report.clamped);
        assert_eq!(report.warning, Some(CameraWarning::ScaleClamped));
    }

    #[test]
    fn rotation_subtracts_and_wraps() {
        let mut camera = camera();

        camera.update(
            CameraInput {
                rotate: 1.0,
                ..Default::default()
            },
            false,
            0.5,
        );
        assert_approx_eq(camera.state().angle, -FRAC_PI_2);

        camera.update(
            CameraInput {
                rotate: 1.0,
                ..Default::default()
            },
            false,
            1.0,
        );
        assert_approx_eq(camera.state().angle, FRAC_PI_2);
    }

    #[test]
    fn pan_moves_by_short_side_per_second() {
        let mut camera = camera();

        camera.update(
            CameraInput {
                dir: Vec2::new(1.0, 0.0),
                ..Default::default()
            },
            false,
            0.25,
        );

        assert_approx_eq(camera.state().position.x, 150.0);
        assert_approx_eq(camera.state().position.y, 0.0);
    }

    #[test]
    fn pan_is_rotated_by_current_angle_and_scaled() {
        let mut camera = CameraController::new(
            CameraConfig::default(),
            CameraState {
                angle: FRAC_PI_2,
                scale: 2.0,
                ..Default::default()
            },
            Viewport::new(100, 100).unwrap(),
        );

        camera.update(
            CameraInput {
                dir: Vec2::new(1.0, 0.0),
                ..Default::default()
            },
            false,
            1.0,
        );

        assert_approx_eq(camera.state().position.x, 0.0);
        assert_approx_eq(camera.state().position.y, 200.0);
    }

    #[test]
    fn oversized_direction_is_normalised() {
        let mut camera = camera();

        camera.update(
            CameraInput {
                dir: Vec2::new(1.0, 1.0),
                ..Default::default()
            },
            false,
            1.0,
        );

        assert_approx_eq(camera.state().position.length(), 600.0);
    }

    #[test]
    fn reset_restores_exact_home() {
        let home = CameraState {
            position: Vec2::new(3.0, -4.0),
            scale: 0.5,
            angle: 0.25,
        };
        let mut camera =
            CameraController::new(CameraConfig::default(), home, Viewport::new(800, 600).unwrap());

        camera.update(
            CameraInput {
                dir: Vec2::new(0.0, 1.0),
                scale: -1.0,
                rotate: 0.3,
            },
            false,
            0.7,
        );
        assert_ne!(camera.state(), home);

        let report = camera.update(
            CameraInput {
                dir: Vec2::new(1.0, 0.0),
                ..Default::default()
            },
            true,
            0.1,
        );

        assert!(report.reset);
        assert_eq!(camera.state(), home);
    }

    #[test]
    fn invalid_dt_is_ignored() {
        let mut camera = camera();
        let input = CameraInput {
            dir: Vec2::new(1.0, 0.0),
            scale: 1.0,
            rotate: 1.0,
        };

        camera.update(input, false, f64::NAN);
        camera.update(input, false, -1.0);
        camera.update(input, false, f64::INFINITY);

        assert_eq!(camera.state(), CameraState::default());
    }

    #[test]
    fn set_viewport_changes_pan_speed_only() {
        let mut camera = camera();
        camera.update(
            CameraInput {
                scale: -1.0,
                ..Default::default()
            },
            false,
            0.2,
        );
        let before = camera.state();

        camera.set_viewport(Viewport::new(1920, 1080).unwrap());

        assert_eq!(camera.state(), before);
        assert_eq!(camera.move_speed(), 1080.0);
    }

    #[test]
    fn transform_composes_translate_rotate_scale() {
        let camera = CameraController::new(
            CameraConfig::default(),
            CameraState {
                position: Vec2::new(10.0, 0.0),
                scale: 2.0,
                angle: FRAC_PI_2,
            },
            Viewport::default(),
        );

        let mapped = camera.transform().apply(Vec2::new(1.0, 0.0));

        assert_approx_eq(mapped.x, 10.0);
        assert_approx_eq(mapped.y, 2.0);
    }

    proptest! {
        #[test]
        fn scale_stays_positive_and_angle_canonical(
            steps in prop::collection::vec(
                (-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0, 0.0f64..0.5),
                1..64,
            )
        ) {
            let mut camera = camera();

            for (dx, dy, scale, rotate, dt) in steps {
                camera.update(
                    CameraInput { dir: Vec2::new(dx, dy), scale, rotate },
                    false,
                    dt,
                );

                let state = camera.state();
                prop_assert!(state.scale > 0.0);
                prop_assert!(state.angle >= -PI && state.angle < PI);
                prop_assert!(state.is_finite());
            }
        }
    }
}
