//! Locomotion domain: per-frame input sampling.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::locomotion::resources::{KeyBindings, LocomotionInput};

/// Snapshot keyboard and mouse state into `LocomotionInput`. Runs even
/// while paused so key edges are consumed rather than queued, and the
/// mouse delta does not pile up into a snap on resume.
pub(crate) fn sample_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut input: ResMut<LocomotionInput>,
) {
    input.forward = keyboard.pressed(bindings.forward);
    input.backward = keyboard.pressed(bindings.backward);
    input.left = keyboard.pressed(bindings.left);
    input.right = keyboard.pressed(bindings.right);
    input.jump_pressed = keyboard.just_pressed(bindings.jump);
    input.sprint_pressed = keyboard.just_pressed(bindings.sprint);
    input.sprint_released = keyboard.just_released(bindings.sprint);

    input.mouse_delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        input.mouse_delta += motion.delta;
    }
}
