use bevy::prelude::*;

mod assets;
mod config;
mod controls;
mod frame;
mod map;
mod model;
mod renderer;
mod selection;
mod world;

use controls::ControlsPlugin;
use frame::FramePlugin;
use map::MapViewPlugin;
use renderer::RendererPlugin;
use selection::SelectionCoordinator;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Star Wars World".to_string(),
                ..default()
            }),
            ..default()
        }))
        .init_resource::<SelectionCoordinator>()
        // Config and bitmaps are ready before any UI is built
        .add_systems(
            PreStartup,
            (
                config::load_config,
                assets::load_assets,
                world::start_simulation,
            )
                .chain(),
        )
        .add_plugins((FramePlugin, MapViewPlugin, ControlsPlugin, RendererPlugin))
        .run();
}
