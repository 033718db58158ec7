//! Head bob domain: speed-scaled camera bob and airborne lean.

mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::locomotion::LocomotionSet;

/// Attached to the camera entity; remembers the authored local rest
/// position that every bob offset is measured from.
#[derive(Component, Debug, Default)]
pub struct BobState {
    pub rest_position: Vec3,
}

pub struct HeadBobPlugin;

impl Plugin for HeadBobPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                capture_rest_position.before(systems::apply_head_bob),
                systems::apply_head_bob.run_if(gameplay_active),
            )
                .in_set(LocomotionSet::Bob),
        );
    }
}

/// Record the camera's authored local position the frame it appears.
fn capture_rest_position(mut cameras: Query<(&Transform, &mut BobState), Added<BobState>>) {
    for (transform, mut bob) in &mut cameras {
        bob.rest_position = transform.translation;
    }
}
