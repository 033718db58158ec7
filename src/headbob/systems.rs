//! Head bob domain: camera offset drive and look stabilization.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::headbob::BobState;
use crate::locomotion::components::{CharacterState, Player};
use crate::locomotion::resources::MovementConfig;
use crate::look::LookPivot;

/// Horizontal speed below which the bob stays quiet.
const BOB_TOGGLE_SPEED: f32 = 0.1;
/// Pull-back rate toward the rest position, per second.
const RESET_RATE: f32 = 25.0;
/// Vertical velocity is clamped to this band before driving the lean.
const FALL_LEAN_CLAMP: f32 = 25.0;
const FALL_LEAN_RATE: f32 = 2.5;
/// Distance ahead of the pivot the camera re-aims at every frame.
const AIM_DISTANCE: f32 = 15.0;

/// Bob the camera while running on the ground, lean it with vertical
/// velocity in the air, and ease it back toward rest every frame. The
/// bob offset is written on top of the captured rest position, so the
/// camera's authored placement is never lost.
pub(crate) fn apply_head_bob(
    time: Res<Time>,
    config: Res<MovementConfig>,
    players: Query<(&Transform, &CharacterState, &LinearVelocity), With<Player>>,
    pivots: Query<&Transform, (With<LookPivot>, Without<Player>, Without<BobState>)>,
    mut cameras: Query<(&mut Transform, &BobState), (Without<Player>, Without<LookPivot>)>,
) {
    if !config.head_bob_enabled {
        return;
    }
    let Ok((body, state, velocity)) = players.single() else {
        return;
    };
    let Ok(pivot) = pivots.single() else {
        return;
    };
    let Ok((mut camera, bob)) = cameras.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let elapsed = time.elapsed_secs();
    let horizontal_speed = Vec2::new(velocity.x, velocity.z).length();

    if state.is_grounded {
        if horizontal_speed >= BOB_TOGGLE_SPEED {
            // Frequency and amplitude scale with the current speed cap,
            // so sprinting bobs faster and wider than walking.
            let frequency = config.bob_frequency / config.move_speed * state.speed;
            let amplitude = config.bob_amplitude / config.move_speed * state.speed;
            camera.translation.y =
                bob.rest_position.y + (elapsed * frequency).sin() * amplitude;
            camera.translation.x =
                bob.rest_position.x + (elapsed * frequency / 2.0).cos() * amplitude * 2.0;
        }
        // Too slow: no new offset, the reset below pulls the camera back.
    } else {
        // Airborne lean accumulates against the clamped vertical velocity.
        let lean = -velocity.y.clamp(-FALL_LEAN_CLAMP, FALL_LEAN_CLAMP);
        camera.translation.y += lean * FALL_LEAN_RATE * dt;
    }

    // Always ease back toward rest; this fights the branches above, so
    // the bob settles instead of drifting once its driver goes quiet.
    if camera.translation != bob.rest_position {
        let t = (RESET_RATE * dt).min(1.0);
        camera.translation = camera.translation.lerp(bob.rest_position, t);
    }

    // Re-aim at a fixed point ahead of the pivot so the bob offsets
    // read as motion of the head, not of the view direction. World
    // pose is composed from this frame's local transforms; the
    // propagated globals are a frame stale at this point.
    let pivot_rotation = body.rotation * pivot.rotation;
    let camera_position = body.translation
        + body.rotation * (pivot.translation + pivot.rotation * camera.translation);
    let aim = camera_position
        + Vec3::Y * pivot.translation.y
        + pivot_rotation * Vec3::NEG_Z * AIM_DISTANCE;
    let world_rotation = Transform::from_translation(camera_position)
        .looking_at(aim, Vec3::Y)
        .rotation;
    camera.rotation = pivot_rotation.inverse() * world_rotation;
}
