//! Dynamic translation borders.
//!
//! The model may slide inside a 2D window that grows as it recedes: every
//! `Z_STEP` of depth below `Z_REFERENCE` widens the X/Y bounds by
//! `STEP_SIZE` on each side. Z itself only has an upper bound.

/// Base X bounds at the reference depth.
pub const BASE_X: (f32, f32) = (-0.350, 0.200);
/// Base Y bounds at the reference depth.
pub const BASE_Y: (f32, f32) = (-0.700, 0.350);
/// Z may never come closer than this. There is no far bound.
pub const Z_MAX: f32 = -0.400;
/// Depth at which the base bounds apply.
pub const Z_REFERENCE: f32 = -0.400;
/// Depth decrease required for one expansion step.
pub const Z_STEP: f32 = 0.300;
/// Bound expansion per step, applied symmetrically.
pub const STEP_SIZE: f32 = 0.050;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Borders {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

/// Bounds for the given depth. Completed steps only: a partial `Z_STEP` of
/// extra depth does not widen anything.
pub fn current_borders(z: f32) -> Borders {
    let steps = (-(z - Z_REFERENCE) / Z_STEP).floor().max(0.0);
    let adjustment = steps * STEP_SIZE;

    Borders {
        x_min: BASE_X.0 - adjustment,
        x_max: BASE_X.1 + adjustment,
        y_min: BASE_Y.0 - adjustment,
        y_max: BASE_Y.1 + adjustment,
    }
}

/// Clamp a translation vector into the currently allowed region.
///
/// Z is clamped first so the X/Y bounds are derived from the depth the
/// vector will actually have; this also makes the function idempotent.
pub fn apply_translation_limits(translate: &mut [f32; 3]) {
    translate[2] = translate[2].min(Z_MAX);

    let borders = current_borders(translate[2]);
    translate[0] = translate[0].clamp(borders.x_min, borders.x_max);
    translate[1] = translate[1].clamp(borders.y_min, borders.y_max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_borders_at_reference_depth() {
        let b = current_borders(Z_REFERENCE);
        assert_eq!(b.x_min, BASE_X.0);
        assert_eq!(b.x_max, BASE_X.1);
        assert_eq!(b.y_min, BASE_Y.0);
        assert_eq!(b.y_max, BASE_Y.1);
    }

    #[test]
    fn borders_expand_stepwise() {
        // Comfortably past one full step below the reference.
        let b = current_borders(Z_REFERENCE - Z_STEP * 1.5);
        assert!((b.x_min - (BASE_X.0 - STEP_SIZE)).abs() < 1e-6);
        assert!((b.x_max - (BASE_X.1 + STEP_SIZE)).abs() < 1e-6);

        // A partial step does not widen anything.
        let b = current_borders(Z_REFERENCE - Z_STEP * 0.5);
        assert_eq!(b.x_max, BASE_X.1);
    }

    #[test]
    fn borders_never_shrink_as_z_decreases() {
        let mut previous = current_borders(Z_REFERENCE);
        let mut z = Z_REFERENCE;
        for _ in 0..40 {
            z -= 0.1;
            let b = current_borders(z);
            assert!(b.x_max >= previous.x_max);
            assert!(b.x_min <= previous.x_min);
            assert!(b.y_max >= previous.y_max);
            assert!(b.y_min <= previous.y_min);
            previous = b;
        }
    }

    #[test]
    fn borders_above_reference_stay_at_base() {
        let b = current_borders(0.0);
        assert_eq!(b.x_min, BASE_X.0);
        assert_eq!(b.x_max, BASE_X.1);
    }

    #[test]
    fn clamp_pulls_xy_into_bounds() {
        let mut v = [5.0, -5.0, -0.5];
        apply_translation_limits(&mut v);
        assert_eq!(v[0], BASE_X.1);
        assert_eq!(v[1], BASE_Y.0);
        assert_eq!(v[2], -0.5);
    }

    #[test]
    fn z_only_has_an_upper_bound() {
        let mut v = [0.0, 0.0, 3.0];
        apply_translation_limits(&mut v);
        assert_eq!(v[2], Z_MAX);

        let mut v = [0.0, 0.0, -250.0];
        apply_translation_limits(&mut v);
        assert_eq!(v[2], -250.0);
    }

    #[test]
    fn deep_z_admits_wider_xy() {
        // Comfortably past ten steps down: bounds widen by 0.5 per side.
        let mut v = [5.0, 5.0, Z_REFERENCE - Z_STEP * 10.0 - 0.05];
        apply_translation_limits(&mut v);
        assert!((v[0] - (BASE_X.1 + 0.5)).abs() < 1e-6);
        assert!((v[1] - (BASE_Y.1 + 0.5)).abs() < 1e-6);
    }

    #[test]
    fn apply_is_idempotent() {
        let cases = [
            [0.0, 0.0, 0.0],
            [5.0, -5.0, -0.2],
            [-2.0, 2.0, -4.0],
            [0.1, 0.1, -0.401],
            [100.0, 100.0, -100.0],
        ];

        for case in cases {
            let mut once = case;
            apply_translation_limits(&mut once);
            let mut twice = once;
            apply_translation_limits(&mut twice);
            assert_eq!(once, twice, "not idempotent for {case:?}");
        }
    }
}
