//! Config domain: RON-backed controller tuning.
//!
//! Loads `assets/data/controller.ron` at startup, validates it, and
//! publishes the result as the `MovementConfig` and `KeyBindings`
//! resources the gameplay domains read. A missing file falls back to
//! defaults; a malformed or invalid file aborts startup.

pub mod data;
pub mod loader;
pub mod validation;

use std::path::Path;

use bevy::prelude::*;

use crate::locomotion::resources::{KeyBindings, MovementConfig};
use data::{parse_key, ControllerDef, KeyBindingsDef};

const CONTROLLER_FILE: &str = "assets/data/controller.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_config);
    }
}

fn load_config(mut commands: Commands) {
    let path = Path::new(CONTROLLER_FILE);

    let def = if path.exists() {
        match loader::load_controller(path) {
            Ok(def) => {
                info!("Loaded controller definition from {}", CONTROLLER_FILE);
                def
            }
            Err(e) => panic!("{}", e),
        }
    } else {
        warn!("{} not found, using built-in defaults", CONTROLLER_FILE);
        ControllerDef::default()
    };

    let errors = validation::validate(&def);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        panic!("controller definition rejected with {} error(s)", errors.len());
    }

    let bindings = resolve_bindings(&def.bindings);
    let config = MovementConfig {
        max_health: def.max_health,
        max_stamina: def.max_stamina,
        jump_size: def.jump_size,
        move_speed: def.move_speed,
        sprint_speed: def.sprint_speed,
        sprint_duration: def.sprint_duration,
        sprint_min_stamina: def.sprint_min_stamina,
        gravity_scale: def.gravity_scale,
        mouse_sensitivity: def.mouse_sensitivity,
        camera_max_angle: def.camera_max_angle,
        bob_frequency: def.bob_frequency,
        bob_amplitude: def.bob_amplitude,
        starting_health: def.starting_health,
        starting_stamina: def.starting_stamina,
        reset_on_start: def.reset_on_start,
        can_sprint: def.can_sprint,
        head_bob_enabled: def.head_bob_enabled,
    };

    info!(
        "Controller tuning: move {} m/s, sprint {} m/s, jump {} m/s, stamina {} over {}s",
        config.move_speed,
        config.sprint_speed,
        config.jump_size,
        config.max_stamina,
        config.sprint_duration
    );

    commands.insert_resource(config);
    commands.insert_resource(bindings);
}

/// Resolve string binding names to key codes. An unknown name keeps the
/// default binding for that action and logs a warning.
fn resolve_bindings(def: &KeyBindingsDef) -> KeyBindings {
    let defaults = KeyBindings::default();
    let resolve = |name: &str, fallback: KeyCode, action: &str| match parse_key(name) {
        Some(key) => key,
        None => {
            warn!("Unknown key name '{}' for {}, keeping {:?}", name, action, fallback);
            fallback
        }
    };

    KeyBindings {
        forward: resolve(&def.forward, defaults.forward, "forward"),
        backward: resolve(&def.backward, defaults.backward, "backward"),
        left: resolve(&def.left, defaults.left, "left"),
        right: resolve(&def.right, defaults.right, "right"),
        jump: resolve(&def.jump, defaults.jump, "jump"),
        sprint: resolve(&def.sprint, defaults.sprint, "sprint"),
    }
}
