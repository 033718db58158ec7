//! Locomotion domain: player rig components and collision layers.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::resources::MovementConfig;

/// Collision layers. The ground probe only accepts Default and World,
/// so the player never stands on itself.
#[derive(PhysicsLayer, Default, Clone, Copy, Debug)]
pub enum GameLayer {
    #[default]
    Default,
    World,
    Player,
}

/// Marker for the player body entity.
#[derive(Component, Debug)]
pub struct Player;

/// Mutable character state, updated every frame by the drive systems.
#[derive(Component, Debug)]
pub struct CharacterState {
    pub health: i32,
    pub stamina: f32,
    /// Current speed cap, either walk or sprint speed.
    pub speed: f32,
    pub is_grounded: bool,
    pub is_moving: bool,
    pub is_sprinting: bool,
}

impl CharacterState {
    pub fn from_config(config: &MovementConfig) -> Self {
        let (health, stamina) = if config.reset_on_start {
            (config.max_health, config.max_stamina)
        } else {
            (
                config.starting_health.clamp(0, config.max_health),
                config.starting_stamina.clamp(0.0, config.max_stamina),
            )
        };
        Self {
            health,
            stamina,
            speed: config.move_speed,
            is_grounded: false,
            is_moving: false,
            is_sprinting: false,
        }
    }
}

/// Desired velocity in the body's local frame. X is strafe, Z is
/// forward/back, Y carries the vertical velocity through to the
/// physics step. Diagonal input is deliberately not normalized.
#[derive(Component, Debug, Default)]
pub struct VelocityIntent(pub Vec3);

/// Parameters for the ground probe under this body.
#[derive(Component, Debug)]
pub struct GroundSensor {
    /// Full capsule height, foot to crown, in meters.
    pub capsule_height: f32,
}
