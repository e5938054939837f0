//! The demo world and the simulation thread that drives the renderer.

mod actions;
pub mod driver;
mod sample;

pub use actions::SampleAction;
pub use sample::{Place, SampleWorld, Thing};

use crate::renderer::GuiRenderer;
use crate::selection::SelectionCoordinator;
use bevy::prelude::*;
use std::sync::{Arc, RwLock};
use std::thread;

/// Creates the world and the renderer, then starts the simulation thread
pub fn start_simulation(mut commands: Commands, coordinator: Res<SelectionCoordinator>) {
    let world = Arc::new(RwLock::new(SampleWorld::new()));
    let (mut renderer, bridge) = GuiRenderer::connect(Arc::clone(&world), coordinator.slot());
    commands.insert_resource(bridge);

    let spawned = thread::Builder::new()
        .name("simulation".to_string())
        .spawn(move || driver::run(&world, &mut renderer));

    match spawned {
        Ok(_) => info!("Simulation thread started"),
        Err(err) => error!("Failed to start the simulation thread: {}", err),
    }
}
