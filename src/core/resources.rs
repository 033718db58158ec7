//! Core domain: gameplay pause state.

use bevy::prelude::*;

/// Whether gameplay updates should run. The cursor follows this flag:
/// pausing releases the mouse, resuming recaptures it.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused(pub bool);

/// Run condition: returns true only when gameplay is not paused.
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.0
}
