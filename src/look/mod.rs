//! Look domain: mouse-driven view rotation.
//!
//! The player body carries yaw, a child pivot carries pitch, and the
//! camera hangs off the pivot. Pitch is clamped to a configurable cone
//! with wraparound-aware degree math.

pub(crate) mod angles;
mod systems;

use bevy::prelude::*;

use crate::core::gameplay_active;
use crate::locomotion::LocomotionSet;

/// Marker for the pitch pivot entity between body and camera.
#[derive(Component, Debug)]
pub struct LookPivot;

pub struct LookPlugin;

impl Plugin for LookPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::apply_look
                .in_set(LocomotionSet::Look)
                .run_if(gameplay_active),
        );
    }
}
