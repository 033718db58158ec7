//! Locomotion domain: ground detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::{CharacterState, GameLayer, GroundSensor, Player};

/// Radius of the probe sphere cast at the feet.
pub(crate) const PROBE_RADIUS: f32 = 0.25;

/// Distance from the body center down to the probe center. The probe
/// pokes a fifth of its radius past the capsule's foot so resting
/// contact still registers.
pub(crate) fn probe_offset(capsule_height: f32) -> f32 {
    capsule_height / 2.0 - (PROBE_RADIUS - PROBE_RADIUS / 5.0)
}

/// Overlap a small sphere at the feet against world geometry and write
/// the result into `CharacterState::is_grounded`.
pub(crate) fn detect_ground(
    spatial: SpatialQuery,
    mut players: Query<(&Transform, &GroundSensor, &mut CharacterState), With<Player>>,
) {
    let probe = Collider::sphere(PROBE_RADIUS);
    let filter = SpatialQueryFilter::from_mask([GameLayer::Default, GameLayer::World]);

    for (transform, sensor, mut state) in &mut players {
        let center = transform.translation
            - transform.up() * probe_offset(sensor.capsule_height);
        let hits = spatial.shape_intersections(&probe, center, Quat::IDENTITY, &filter);
        state.is_grounded = !hits.is_empty();
    }
}
