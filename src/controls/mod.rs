//! Control column: the message pane, the directional move pad and the
//! list of other commands.

pub(crate) mod layout;
mod messages;
mod systems;

pub use layout::*;
pub use messages::*;
pub use systems::*;

use bevy::prelude::*;

/// Plugin for the message pane and command panel
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MessagePane>()
            .init_resource::<MessageFont>()
            .add_message::<LogUpdate>()
            .add_message::<ShowMenu>()
            .add_systems(Startup, load_message_font)
            .add_systems(
                Update,
                (
                    apply_log_updates,
                    render_message_pane.after(apply_log_updates),
                    rebuild_command_panel,
                    button_feedback,
                ),
            );
    }
}

/// Change to the message log, in the order the simulation produced it
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum LogUpdate {
    Append(String),
    Clear,
}

/// Replace the command panel with a new menu
#[derive(Message, Debug, Clone)]
pub struct ShowMenu(pub CommandMenu);

/// Font used by the message pane
#[derive(Resource, Default)]
pub struct MessageFont(pub Handle<Font>);

/// Marker for the node holding the message lines
#[derive(Component)]
pub struct MessageArea;

/// Marker for the 3x3 move pad
#[derive(Component)]
pub struct MovePad;

/// Marker for the vertical list of non-move commands
#[derive(Component)]
pub struct OtherActions;

/// Empty cell of the move pad
#[derive(Component)]
pub struct PadFiller;

/// Selection token carried by a command button, tagged with its menu's generation
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionToken {
    pub generation: u64,
    pub token: usize,
}
