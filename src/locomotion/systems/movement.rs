//! Locomotion domain: intent drive, jumping, and velocity application.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::{CharacterState, Player, VelocityIntent};
use crate::locomotion::resources::{LocomotionInput, MovementConfig};
use crate::locomotion::stamina;

/// Build the horizontal intent from held keys. Axes are independent:
/// opposite keys cancel, and diagonal input keeps full speed on both
/// axes rather than being normalized, so diagonals run at speed * sqrt(2).
pub(crate) fn horizontal_intent(
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    speed: f32,
) -> (f32, f32) {
    let axis = |pos, neg| (pos as i32 - neg as i32) as f32;
    // Forward is -Z in the body's local frame.
    (axis(right, left) * speed, axis(backward, forward) * speed)
}

/// Extra vertical velocity from gravity shaping for one frame. Falling
/// is weighted 1.5x so descents feel heavier than ascents; the frame a
/// jump starts, or exactly zero vertical velocity, contributes nothing.
pub(crate) fn fall_shaping(vertical_velocity: f32, jump_pressed: bool, gravity_y: f32, dt: f32) -> f32 {
    if vertical_velocity == 0.0 || jump_pressed {
        return 0.0;
    }
    let multiplier = if vertical_velocity < 0.0 { 1.5 } else { 1.0 };
    gravity_y * multiplier * dt
}

/// Per-frame character drive: sprint gating, stamina, speed cap, and
/// the horizontal intent rewrite.
pub(crate) fn update_character(
    time: Res<Time>,
    config: Res<MovementConfig>,
    input: Res<LocomotionInput>,
    mut players: Query<
        (&mut CharacterState, &mut VelocityIntent, &LinearVelocity),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut state, mut intent, velocity) in &mut players {
        // Moving is judged on last frame's intent; this frame's has not
        // been rebuilt yet.
        state.is_moving = intent.0.x != 0.0 || intent.0.z != 0.0;

        if config.can_sprint {
            let was_sprinting = state.is_sprinting;
            state.is_sprinting = stamina::evaluate_sprint(
                was_sprinting,
                input.sprint_pressed,
                input.sprint_released,
                state.stamina,
                config.sprint_min_stamina,
            );
            if state.is_sprinting != was_sprinting {
                debug!(
                    "sprint {} (stamina {:.1})",
                    if state.is_sprinting { "engaged" } else { "dropped" },
                    state.stamina
                );
            }
        } else {
            state.is_sprinting = false;
        }

        state.speed = if state.is_sprinting {
            config.sprint_speed
        } else {
            config.move_speed
        };

        state.stamina = stamina::advance(
            state.stamina,
            state.is_sprinting,
            state.is_moving,
            dt,
            config.max_stamina,
            config.sprint_duration,
        );

        let (strafe, run) = horizontal_intent(
            input.forward,
            input.backward,
            input.left,
            input.right,
            state.speed,
        );
        intent.0.x = strafe;
        intent.0.z = run;
        intent.0.y = velocity.y;
    }
}

/// Start a jump by writing the launch velocity straight into the
/// physics body, so it takes effect this step instead of waiting for
/// the next intent application.
pub(crate) fn apply_jump(
    config: Res<MovementConfig>,
    input: Res<LocomotionInput>,
    mut players: Query<(&CharacterState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }
    for (state, mut velocity) in &mut players {
        if state.is_grounded {
            velocity.y = config.jump_size;
            debug!("jump at {:.2} m/s", config.jump_size);
        }
    }
}

/// Fixed-step velocity application: rotate the local intent into world
/// space and hand it to the physics body, with fall shaping folded in.
pub(crate) fn apply_velocity(
    time: Res<Time>,
    gravity: Res<Gravity>,
    input: Res<LocomotionInput>,
    mut players: Query<
        (&Transform, &VelocityIntent, &mut LinearVelocity, &GravityScale),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (transform, intent, mut velocity, gravity_scale) in &mut players {
        let mut local = intent.0;
        // The intent snapshot goes stale between Update and the fixed
        // step; prefer the live vertical velocity when the snapshot
        // carries none, so a jump started this frame is not clobbered.
        if local.y == 0.0 {
            local.y = velocity.y;
        }
        local.y += fall_shaping(local.y, input.jump_pressed, gravity.0.y * gravity_scale.0, dt);
        velocity.0 = transform.rotation * local;
    }
}
