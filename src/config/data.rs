//! Config domain: serde schema for the controller RON file.

use serde::{Deserialize, Serialize};

/// On-disk controller definition. Every field has a default so partial
/// files stay valid; defaults mirror the shipped tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerDef {
    pub max_health: i32,
    pub max_stamina: f32,
    pub jump_size: f32,
    pub move_speed: f32,
    pub sprint_speed: f32,
    /// Seconds of continuous sprinting a full stamina pool buys. The
    /// drain (and regen) rate is `max_stamina / sprint_duration`.
    pub sprint_duration: f32,
    pub sprint_min_stamina: f32,
    pub gravity_scale: f32,
    /// Degrees of rotation per mouse count.
    pub mouse_sensitivity: f32,
    pub camera_max_angle: f32,
    pub bob_frequency: f32,
    pub bob_amplitude: f32,
    /// Starting values, honored only when `reset_on_start` is false.
    pub starting_health: i32,
    pub starting_stamina: f32,
    pub reset_on_start: bool,
    pub can_sprint: bool,
    pub head_bob_enabled: bool,
    pub bindings: KeyBindingsDef,
}

impl Default for ControllerDef {
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
            bindings: KeyBindingsDef::default(),
        }
    }
}

/// Key names as strings so bindings stay data-driven; resolved against
/// `KeyCode` at load time with a warn-and-fallback for unknown names.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindingsDef {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub jump: String,
    pub sprint: String,
}

impl Default for KeyBindingsDef {
    fn default() -> Self {
        Self {
            forward: "KeyW".to_string(),
            backward: "KeyS".to_string(),
            left: "KeyA".to_string(),
            right: "KeyD".to_string(),
            jump: "Space".to_string(),
            sprint: "ShiftLeft".to_string(),
        }
    }
}

/// Map a binding name onto a `KeyCode`. Covers the keys a locomotion
/// binding plausibly uses; anything else falls back to the default.
pub(crate) fn parse_key(name: &str) -> Option<bevy::input::keyboard::KeyCode> {
    use bevy::input::keyboard::KeyCode::*;

    Some(match name {
        "KeyA" => KeyA,
        "KeyB" => KeyB,
        "KeyC" => KeyC,
        "KeyD" => KeyD,
        "KeyE" => KeyE,
        "KeyF" => KeyF,
        "KeyQ" => KeyQ,
        "KeyR" => KeyR,
        "KeyS" => KeyS,
        "KeyV" => KeyV,
        "KeyW" => KeyW,
        "KeyX" => KeyX,
        "KeyZ" => KeyZ,
        "Space" => Space,
        "ShiftLeft" => ShiftLeft,
        "ShiftRight" => ShiftRight,
        "ControlLeft" => ControlLeft,
        "ControlRight" => ControlRight,
        "AltLeft" => AltLeft,
        "Tab" => Tab,
        "Enter" => Enter,
        "ArrowUp" => ArrowUp,
        "ArrowDown" => ArrowDown,
        "ArrowLeft" => ArrowLeft,
        "ArrowRight" => ArrowRight,
        _ => return None,
    })
}
