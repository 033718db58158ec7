//! Look domain: mouse look on the body yaw and pivot pitch.

use bevy::prelude::*;

use crate::locomotion::components::Player;
use crate::locomotion::resources::{LocomotionInput, MovementConfig};
use crate::look::angles::{clamp_angle, wrap_degrees};
use crate::look::LookPivot;

/// Apply this frame's mouse delta: yaw rotates the whole body so
/// movement follows the view, pitch rotates only the pivot and is
/// clamped to the configured cone. Both axes are rebuilt from a single
/// Euler angle after each step so no roll can creep in.
pub(crate) fn apply_look(
    config: Res<MovementConfig>,
    input: Res<LocomotionInput>,
    mut pivots: Query<&mut Transform, (With<LookPivot>, Without<Player>)>,
    mut bodies: Query<&mut Transform, With<Player>>,
) {
    if pivots.is_empty() {
        return;
    }
    if input.mouse_delta == Vec2::ZERO {
        return;
    }

    let yaw_delta = input.mouse_delta.x * config.mouse_sensitivity;
    let pitch_delta = -input.mouse_delta.y * config.mouse_sensitivity;

    for mut pivot in &mut pivots {
        pivot.rotate_local_x(pitch_delta.to_radians());
        let (pitch_radians, _, _) = pivot.rotation.to_euler(EulerRot::XYZ);
        let pitch = clamp_angle(
            wrap_degrees(pitch_radians),
            -config.camera_max_angle,
            config.camera_max_angle,
        );
        pivot.rotation = Quat::from_rotation_x(pitch.to_radians());
    }

    for mut body in &mut bodies {
        body.rotate_y(yaw_delta.to_radians());
        let (yaw_radians, _, _) = body.rotation.to_euler(EulerRot::YXZ);
        body.rotation = Quat::from_rotation_y(yaw_radians);
    }
}
