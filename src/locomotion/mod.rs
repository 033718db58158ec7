//! Locomotion domain: character movement, sprinting, stamina, jumping.
//!
//! Input is sampled once per frame, the drive systems turn it into a
//! local-space velocity intent, and a fixed-step system rotates the
//! intent into world space for the physics body. Everything but the
//! sampler is gated on the pause flag.

pub mod components;
pub mod resources;
pub mod stamina;

pub(crate) mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::gameplay_active;

/// Ordering for the per-frame locomotion pipeline.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    /// Snapshot keyboard and mouse into `LocomotionInput`.
    Sample,
    /// Ground detection and character state drive.
    Drive,
    /// Mouse look on the body and pivot.
    Look,
    /// Camera bob and stabilization.
    Bob,
    /// Jump launch, after the camera has read this frame's state.
    Jump,
}

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<resources::LocomotionInput>()
            .configure_sets(
                Update,
                (
                    LocomotionSet::Sample,
                    LocomotionSet::Drive,
                    LocomotionSet::Look,
                    LocomotionSet::Bob,
                    LocomotionSet::Jump,
                )
                    .chain(),
            )
            .add_systems(Update, systems::sample_input.in_set(LocomotionSet::Sample))
            .add_systems(
                Update,
                (systems::detect_ground, systems::update_character)
                    .chain()
                    .in_set(LocomotionSet::Drive)
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                systems::apply_jump
                    .in_set(LocomotionSet::Jump)
                    .run_if(gameplay_active),
            )
            .add_systems(
                FixedUpdate,
                systems::apply_velocity.run_if(gameplay_active),
            );
    }
}
