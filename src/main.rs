mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod parallax;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Rate of the fixed-step integration pass.
const FIXED_HZ: f64 = 50.0;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Ledge Runner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
    .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
    .add_plugins((
        core::CorePlugin,
        movement::MovementPlugin,
        parallax::ParallaxPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
