mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod headbob;
mod locomotion;
mod look;
mod world;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Undercroft".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        locomotion::LocomotionPlugin,
        look::LookPlugin,
        headbob::HeadBobPlugin,
        world::WorldPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
