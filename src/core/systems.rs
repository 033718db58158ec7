//! Core domain: pause toggle and cursor capture systems.
//!
//! Cursor grab is a presentation concern; the locomotion core never
//! touches it.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};

use crate::core::resources::GameplayPaused;
use crate::look::LookPivot;

/// Capture the cursor once the world is spawned, but only when a look
/// pivot exists: without mouse look there is nothing to capture for.
pub(crate) fn grab_cursor(
    pivots: Query<(), With<LookPivot>>,
    mut windows: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if pivots.is_empty() {
        return;
    }
    let Ok(mut cursor) = windows.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        paused.0 = !paused.0;
        info!("{}", if paused.0 { "Paused" } else { "Resumed" });
    }
}

/// Mirror the pause flag onto the cursor grab state.
pub(crate) fn sync_cursor(
    paused: Res<GameplayPaused>,
    pivots: Query<(), With<LookPivot>>,
    mut windows: Query<&mut CursorOptions, With<PrimaryWindow>>,
) {
    if !paused.is_changed() || pivots.is_empty() {
        return;
    }
    let Ok(mut cursor) = windows.single_mut() else {
        return;
    };
    if paused.0 {
        cursor.grab_mode = CursorGrabMode::None;
        cursor.visible = true;
    } else {
        cursor.grab_mode = CursorGrabMode::Locked;
        cursor.visible = false;
    }
}
