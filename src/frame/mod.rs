//! Root frame: the map on the left, the control column on the right.

mod layout;
mod scroll;
mod ui;

pub use layout::*;
pub use scroll::*;
pub use ui::*;

use bevy::prelude::*;
use bevy::ui_widgets::ScrollbarPlugin;

/// Plugin for the window frame, its sizing and scrolling
pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(ScrollbarPlugin)
            .init_resource::<GridDimensions>()
            .add_systems(Startup, setup_frame)
            .add_systems(
                Update,
                (
                    track_grid_dimensions,
                    apply_frame_layout.after(track_grid_dimensions),
                    clamp_window_height.after(track_grid_dimensions),
                    scroll_hovered_areas,
                    toggle_scrollbars,
                ),
            );
    }
}

/// Size of the most recently drawn map, in tiles
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: usize,
    pub rows: usize,
}

impl GridDimensions {
    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Natural map size in pixels at the given tile size
    pub fn pixel_size(&self, tile_size: u32) -> (u32, u32) {
        (self.columns as u32 * tile_size, self.rows as u32 * tile_size)
    }
}

/// Marker for the left half of the window
#[derive(Component)]
pub struct MapPanel;

/// Marker for the control column
#[derive(Component)]
pub struct ControlPanel;
