//! Locomotion domain tests: stamina accounting, sprint gating, intent
//! shaping, the jump gate, and the ground probe geometry.

use avian3d::prelude::LinearVelocity;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::components::{CharacterState, Player};
use super::resources::{LocomotionInput, MovementConfig};
use super::stamina::{advance, evaluate_sprint};
use super::systems::grounded::probe_offset;
use super::systems::movement::{apply_jump, fall_shaping, horizontal_intent};

const EPSILON: f32 = 1e-4;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ---- Stamina pool ----

#[test]
fn test_stamina_drains_at_shared_rate() {
    // rate = 100 / 7 per second, so 0.5s of sprinting costs 50/7.
    let after = advance(100.0, true, true, 0.5, 100.0, 7.0);
    assert!(close(after, 100.0 - 0.5 * 100.0 / 7.0));
}

#[test]
fn test_stamina_regens_at_shared_rate() {
    let after = advance(10.0, false, false, 0.5, 100.0, 7.0);
    assert!(close(after, 10.0 + 0.5 * 100.0 / 7.0));
}

#[test]
fn test_sprinting_in_place_regens() {
    // Sprint flag set but no horizontal movement: pool refills.
    let after = advance(50.0, true, false, 1.0, 100.0, 7.0);
    assert!(after > 50.0);
}

#[test]
fn test_stamina_clamps_at_zero() {
    assert_eq!(advance(0.1, true, true, 10.0, 100.0, 7.0), 0.0);
}

#[test]
fn test_stamina_clamps_at_max() {
    assert_eq!(advance(99.9, false, false, 10.0, 100.0, 7.0), 100.0);
}

#[test]
fn test_full_pool_lasts_sprint_duration() {
    // Integrating the drain over sprint_duration seconds empties a
    // full pool exactly.
    let mut stamina = 100.0;
    let dt = 0.01;
    let steps = (7.0_f32 / dt) as u32;
    for _ in 0..steps {
        stamina = advance(stamina, true, true, dt, 100.0, 7.0);
    }
    assert!(stamina < 0.01);
}

// ---- Sprint gating ----

#[test]
fn test_sprint_engages_on_press_with_stamina() {
    assert!(evaluate_sprint(false, true, false, 50.0, 15.0));
}

#[test]
fn test_sprint_rejected_at_exactly_min_stamina() {
    // Engagement needs stamina strictly above the floor.
    assert!(!evaluate_sprint(false, true, false, 15.0, 15.0));
}

#[test]
fn test_sprint_engages_just_above_min_stamina() {
    assert!(evaluate_sprint(false, true, false, 15.001, 15.0));
}

#[test]
fn test_sprint_drops_on_release() {
    assert!(!evaluate_sprint(true, false, true, 50.0, 15.0));
}

#[test]
fn test_sprint_drops_at_zero_stamina() {
    assert!(!evaluate_sprint(true, false, false, 0.0, 15.0));
}

#[test]
fn test_ongoing_sprint_survives_below_min_stamina() {
    // The floor only gates engagement, never an ongoing sprint.
    assert!(evaluate_sprint(true, false, false, 5.0, 15.0));
}

#[test]
fn test_held_key_does_not_reengage_after_regen() {
    // Key stays held: no press edge, no release edge. Once stamina
    // hit zero and dropped the sprint, regen alone never restarts it.
    let mut sprinting = evaluate_sprint(true, false, false, 0.0, 15.0);
    assert!(!sprinting);
    sprinting = evaluate_sprint(sprinting, false, false, 80.0, 15.0);
    assert!(!sprinting);
}

#[test]
fn test_press_edge_reengages_after_regen() {
    assert!(evaluate_sprint(false, true, false, 80.0, 15.0));
}

// ---- Horizontal intent ----

#[test]
fn test_forward_is_negative_z() {
    let (x, z) = horizontal_intent(true, false, false, false, 3.0);
    assert_eq!((x, z), (0.0, -3.0));
}

#[test]
fn test_opposite_keys_cancel() {
    let (x, z) = horizontal_intent(true, true, true, true, 3.0);
    assert_eq!((x, z), (0.0, 0.0));
}

#[test]
fn test_diagonal_is_not_normalized() {
    let (x, z) = horizontal_intent(true, false, false, true, 5.0);
    assert_eq!((x, z), (5.0, -5.0));
    let magnitude = (x * x + z * z).sqrt();
    assert!(close(magnitude, 5.0 * std::f32::consts::SQRT_2));
}

// ---- Fall shaping ----

#[test]
fn test_falling_is_weighted_heavier() {
    let dt = 1.0 / 60.0;
    let extra = fall_shaping(-3.0, false, -9.81, dt);
    assert!(close(extra, -9.81 * 1.5 * dt));
}

#[test]
fn test_rising_uses_plain_gravity() {
    let dt = 1.0 / 60.0;
    let extra = fall_shaping(3.0, false, -9.81, dt);
    assert!(close(extra, -9.81 * dt));
}

#[test]
fn test_zero_vertical_velocity_gets_no_shaping() {
    assert_eq!(fall_shaping(0.0, false, -9.81, 1.0 / 60.0), 0.0);
}

#[test]
fn test_held_jump_suppresses_shaping() {
    assert_eq!(fall_shaping(3.0, true, -9.81, 1.0 / 60.0), 0.0);
}

// ---- Jump gate ----

/// Run `apply_jump` against a single body and report its vertical
/// velocity afterwards. The body starts falling at -2 m/s so an
/// untouched velocity is distinguishable from a fresh jump.
fn jump_outcome(grounded: bool, jump_pressed: bool) -> f32 {
    let mut world = World::new();
    world.insert_resource(MovementConfig::default());
    world.insert_resource(LocomotionInput {
        jump_pressed,
        ..default()
    });

    let mut state = CharacterState::from_config(&MovementConfig::default());
    state.is_grounded = grounded;
    let body = world
        .spawn((Player, state, LinearVelocity(Vec3::new(1.0, -2.0, 0.0))))
        .id();

    world.run_system_once(apply_jump).unwrap();
    world.get::<LinearVelocity>(body).unwrap().y
}

#[test]
fn test_jump_launches_when_grounded_and_pressed() {
    // Default jump_size is 3, written straight over the old vertical.
    assert_eq!(jump_outcome(true, true), 3.0);
}

#[test]
fn test_jump_ignored_while_airborne() {
    // Pressing (or holding) jump in the air never re-triggers.
    assert_eq!(jump_outcome(false, true), -2.0);
}

#[test]
fn test_jump_needs_the_press_edge() {
    assert_eq!(jump_outcome(true, false), -2.0);
}

// ---- Ground probe ----

#[test]
fn test_probe_offset_pokes_past_the_feet() {
    // 1.8m capsule: probe center sits 0.7m below body center, so the
    // 0.25m sphere reaches 0.05m past the foot plane.
    assert!(close(probe_offset(1.8), 0.7));
    let reach = probe_offset(1.8) + 0.25;
    assert!(close(reach - 1.8 / 2.0, 0.05));
}

#[test]
fn test_probe_offset_for_two_meter_capsule() {
    assert!(close(probe_offset(2.0), 0.8));
}
