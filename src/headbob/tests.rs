//! Head bob domain tests: aim stabilization against the live rig pose.

use avian3d::prelude::LinearVelocity;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::apply_head_bob;
use super::BobState;
use crate::locomotion::components::{CharacterState, Player};
use crate::locomotion::resources::MovementConfig;
use crate::look::LookPivot;

const AIM_DISTANCE: f32 = 15.0;

fn spawn_rig(world: &mut World, pivot_transform: Transform) -> Entity {
    world.init_resource::<Time>();
    world.insert_resource(MovementConfig::default());

    let mut state = CharacterState::from_config(&MovementConfig::default());
    state.is_grounded = true;

    world.spawn((
        Player,
        state,
        LinearVelocity(Vec3::ZERO),
        Transform::IDENTITY,
    ));
    world.spawn((LookPivot, pivot_transform));
    world
        .spawn((Transform::IDENTITY, BobState::default()))
        .id()
}

#[test]
fn test_stabilize_tracks_current_frame_pitch() {
    // The pivot is pitched via its local transform this frame, before
    // any global propagation has run. The camera re-aim has to follow
    // that pitch immediately instead of a stale pose.
    let mut world = World::new();
    let pivot_rotation = Quat::from_rotation_x(-0.4);
    let pivot_transform =
        Transform::from_xyz(0.0, 0.6, 0.0).with_rotation(pivot_rotation);
    let camera = spawn_rig(&mut world, pivot_transform);

    world.run_system_once(apply_head_bob).unwrap();

    let camera_local = world.get::<Transform>(camera).unwrap();
    // Body is identity, camera rest offset is zero, so the camera sits
    // at the pivot and its world rotation is pivot * local.
    let camera_position = pivot_transform.translation;
    let aim = camera_position
        + Vec3::Y * pivot_transform.translation.y
        + pivot_rotation * Vec3::NEG_Z * AIM_DISTANCE;
    let expected_forward = (aim - camera_position).normalize();
    let actual_forward = (pivot_rotation * camera_local.rotation) * Vec3::NEG_Z;

    assert!(
        (actual_forward - expected_forward).length() < 1e-4,
        "forward {:?} vs expected {:?}",
        actual_forward,
        expected_forward
    );
}

#[test]
fn test_level_pivot_keeps_camera_aim_level() {
    let mut world = World::new();
    let camera = spawn_rig(&mut world, Transform::from_xyz(0.0, 0.6, 0.0));

    world.run_system_once(apply_head_bob).unwrap();

    // Unrotated rig: the re-aim point is dead ahead of the pivot
    // (plus the fixed vertical bias), so the camera pitches up by
    // atan(pivot_y / aim_distance) and carries no yaw or roll.
    let camera_local = world.get::<Transform>(camera).unwrap();
    let (pitch, yaw, roll) = camera_local.rotation.to_euler(EulerRot::XYZ);
    assert!((pitch - (0.6_f32 / AIM_DISTANCE).atan()).abs() < 1e-4);
    assert!(yaw.abs() < 1e-5 && roll.abs() < 1e-5);
}
