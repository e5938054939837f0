mod compositor;
mod systems;
mod tooltip;

pub use compositor::*;
pub use systems::*;
pub use tooltip::*;

use crate::model::MapSnapshot;
use bevy::prelude::*;

/// Plugin for the world map view
pub struct MapViewPlugin;

impl Plugin for MapViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RedrawMap>()
            .add_systems(Startup, setup_tooltip)
            .add_systems(Update, rebuild_map_view);
    }
}

/// Replace the rendered map with a new snapshot
#[derive(Message, Debug, Clone)]
pub struct RedrawMap(pub MapSnapshot);

/// Marker component for the scroll container holding the map
#[derive(Component)]
pub struct MapContent;

/// Marker component for dynamically spawned map tiles
#[derive(Component)]
pub struct MapTile;
