//! Look domain: degree-space angle helpers.

/// Clamp `angle` into the copy of `[min, max]` nearest to it on the
/// circle. The window is shifted by whole turns so that e.g. 350 deg
/// is recognized as -10 deg and left alone by a [-89, 89] clamp,
/// instead of being dragged all the way to 89.
pub fn clamp_angle(angle: f32, min: f32, max: f32) -> f32 {
    let start = (min + max) / 2.0 - 180.0;
    let shift = ((angle - start) / 360.0).floor() * 360.0;
    angle.clamp(min + shift, max + shift)
}

/// Euler readback in radians, normalized into degrees in [0, 360).
pub fn wrap_degrees(radians: f32) -> f32 {
    radians.to_degrees().rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::{clamp_angle, wrap_degrees};

    #[test]
    fn test_angle_inside_window_is_unchanged() {
        assert_eq!(clamp_angle(10.0, -89.0, 89.0), 10.0);
        assert_eq!(clamp_angle(-45.0, -89.0, 89.0), -45.0);
    }

    #[test]
    fn test_high_wraparound_angle_is_kept() {
        // 350 deg is -10 deg on the circle, inside [-89, 89] once the
        // window is shifted up a turn.
        assert_eq!(clamp_angle(350.0, -89.0, 89.0), 350.0);
    }

    #[test]
    fn test_overshoot_clamps_to_near_edge() {
        assert_eq!(clamp_angle(90.0, -89.0, 89.0), 89.0);
        // 271 deg is -89 deg, the low edge of the shifted window, so
        // 180 deg snaps there rather than to the unshifted edge.
        assert_eq!(clamp_angle(180.0, -89.0, 89.0), 271.0);
    }

    #[test]
    fn test_clamp_is_idempotent_over_a_full_turn() {
        let mut angle = 0.0;
        while angle < 360.0 {
            let once = clamp_angle(angle, -89.0, 89.0);
            assert_eq!(clamp_angle(once, -89.0, 89.0), once, "angle {}", angle);
            angle += 7.0;
        }
    }

    #[test]
    fn test_wrap_degrees_normalizes_negatives() {
        assert!((wrap_degrees(-std::f32::consts::FRAC_PI_2) - 270.0).abs() < 1e-3);
        assert!((wrap_degrees(0.0) - 0.0).abs() < 1e-6);
    }
}
