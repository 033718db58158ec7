//! Core domain: pause bookkeeping and presentation-layer cursor capture.

mod resources;
mod systems;

pub use resources::{GameplayPaused, gameplay_active};

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .add_systems(PostStartup, systems::grab_cursor)
            .add_systems(Update, (systems::toggle_pause, systems::sync_cursor).chain());
    }
}
