//! Debug domain: on-screen character state overlay, behind the
//! `dev-tools` feature. F1 toggles it.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::components::{CharacterState, Player};

#[derive(Resource, Debug, Default)]
struct DebugState {
    show_info: bool,
}

#[derive(Component)]
struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, update_overlay).chain());
    }
}

fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    overlays: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }
    state.show_info = !state.show_info;

    if state.show_info {
        commands.spawn((
            DebugInfoOverlay,
            Text::new(""),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.6)),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                left: Val::Px(8.0),
                ..default()
            },
        ));
        info!("Debug overlay on");
    } else {
        for entity in &overlays {
            commands.entity(entity).despawn();
        }
        info!("Debug overlay off");
    }
}

fn update_overlay(
    players: Query<(&Transform, &CharacterState, &LinearVelocity), With<Player>>,
    mut overlays: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlays.single_mut() else {
        return;
    };
    let Ok((transform, state, velocity)) = players.single() else {
        return;
    };

    let p = transform.translation;
    text.0 = format!(
        "pos ({:.1}, {:.1}, {:.1})\nvel ({:.1}, {:.1}, {:.1})\nHP {}  stamina {:.1}\nspeed cap {:.1}\ngrounded {}  moving {}  sprinting {}",
        p.x,
        p.y,
        p.z,
        velocity.x,
        velocity.y,
        velocity.z,
        state.health,
        state.stamina,
        state.speed,
        state.is_grounded,
        state.is_moving,
        state.is_sprinting,
    );
}
