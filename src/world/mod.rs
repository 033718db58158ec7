//! World domain: player rig assembly and the test level.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::headbob::BobState;
use crate::locomotion::components::{
    CharacterState, GameLayer, GroundSensor, Player, VelocityIntent,
};
use crate::locomotion::resources::MovementConfig;
use crate::look::LookPivot;

const PLAYER_HEIGHT: f32 = 1.8;
const PLAYER_RADIUS: f32 = 0.4;
/// Pivot height above the body center, roughly eye level.
const EYE_HEIGHT: f32 = 0.6;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_player, spawn_test_level));
    }
}

/// Assemble the player rig: a locked dynamic capsule carrying the
/// character state, a pitch pivot child at eye level, and the camera
/// under the pivot.
fn spawn_player(mut commands: Commands, config: Res<MovementConfig>) {
    let state = CharacterState::from_config(&config);
    info!(
        "Spawning player: {} HP, {:.0} stamina",
        state.health, state.stamina
    );

    commands
        .spawn((
            Player,
            state,
            VelocityIntent::default(),
            GroundSensor {
                capsule_height: PLAYER_HEIGHT,
            },
            Transform::from_xyz(0.0, PLAYER_HEIGHT / 2.0 + 0.5, 0.0),
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_HEIGHT - 2.0 * PLAYER_RADIUS),
            LockedAxes::ROTATION_LOCKED,
            Friction::new(0.0),
            GravityScale(config.gravity_scale),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Default, GameLayer::World]),
        ))
        .with_children(|body| {
            body.spawn((
                LookPivot,
                Transform::from_xyz(0.0, EYE_HEIGHT, 0.0),
                Visibility::default(),
            ))
            .with_children(|pivot| {
                pivot.spawn((Camera3d::default(), BobState::default(), Transform::IDENTITY));
            });
        });
}

/// Static geometry to run around on: a floor slab, a few platforms at
/// jumpable heights, and a pillar to circle while testing mouse look.
fn spawn_test_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let block = |commands: &mut Commands,
                 meshes: &mut Assets<Mesh>,
                 materials: &mut Assets<StandardMaterial>,
                 size: Vec3,
                 position: Vec3,
                 color: Color| {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })),
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            CollisionLayers::new(GameLayer::World, [GameLayer::Player]),
        ));
    };

    block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(80.0, 1.0, 80.0),
        Vec3::new(0.0, -0.5, 0.0),
        Color::srgb(0.35, 0.4, 0.35),
    );
    block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(4.0, 0.5, 4.0),
        Vec3::new(6.0, 0.25, -4.0),
        Color::srgb(0.5, 0.45, 0.4),
    );
    block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(4.0, 1.0, 4.0),
        Vec3::new(10.0, 0.5, -8.0),
        Color::srgb(0.5, 0.45, 0.4),
    );
    block(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(1.5, 6.0, 1.5),
        Vec3::new(-6.0, 3.0, 6.0),
        Color::srgb(0.4, 0.4, 0.5),
    );

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
        ..default()
    });
}
