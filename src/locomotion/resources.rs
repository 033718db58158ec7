//! Locomotion domain: shared tuning and per-frame input resources.

use bevy::prelude::*;

/// Controller tuning, built once from the loaded definition.
#[derive(Resource, Debug, Clone)]
pub struct MovementConfig {
    pub max_health: i32,
    pub max_stamina: f32,
    /// Upward velocity applied on jump, in m/s.
    pub jump_size: f32,
    pub move_speed: f32,
    pub sprint_speed: f32,
    /// Seconds a full stamina pool lasts at full drain. Regen uses the
    /// same rate, so refilling from empty takes the same time.
    pub sprint_duration: f32,
    /// Stamina floor below which a new sprint cannot start. An ongoing
    /// sprint is allowed to drain past it.
    pub sprint_min_stamina: f32,
    pub gravity_scale: f32,
    pub mouse_sensitivity: f32,
    pub camera_max_angle: f32,
    pub bob_frequency: f32,
    pub bob_amplitude: f32,
    pub starting_health: i32,
    pub starting_stamina: f32,
    pub reset_on_start: bool,
    pub can_sprint: bool,
    pub head_bob_enabled: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            max_stamina: 100.0,
            jump_size: 3.0,
            move_speed: 3.0,
            sprint_speed: 5.0,
            sprint_duration: 7.0,
            sprint_min_stamina: 15.0,
            gravity_scale: 1.0,
            mouse_sensitivity: 1.8,
            camera_max_angle: 89.0,
            bob_frequency: 10.0,
            bob_amplitude: 0.05,
            starting_health: 100,
            starting_stamina: 100.0,
            reset_on_start: true,
            can_sprint: true,
            head_bob_enabled: true,
        }
    }
}

/// Resolved key bindings for locomotion actions.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub sprint: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::Space,
            sprint: KeyCode::ShiftLeft,
        }
    }
}

/// Snapshot of this frame's locomotion input, sampled once per frame so
/// every downstream system sees the same state. Sprint press/release
/// are edges, not levels: holding the key produces a single press.
#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Edge: true only on the frame the jump key goes down.
    pub jump_pressed: bool,
    pub sprint_pressed: bool,
    pub sprint_released: bool,
    /// Accumulated mouse motion for the frame, in counts.
    pub mouse_delta: Vec2,
}
