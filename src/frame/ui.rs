use super::{spawn_scroll_view, ControlPanel, FrameLayout, GridDimensions, MapPanel};
use crate::config::RendererConfig;
use crate::controls::{MessageArea, MovePad, OtherActions};
use crate::map::{MapContent, RedrawMap};
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;
use bevy::window::{Monitor, PrimaryMonitor, PrimaryWindow};

const PANEL_BACKGROUND: Color = Color::srgb(0.1, 0.1, 0.12);
const SECTION_BORDER: Color = Color::srgb(0.25, 0.25, 0.3);

/// Titles and maximizes the window, then spawns the camera and the root frame
pub fn setup_frame(
    mut commands: Commands,
    config: Res<RendererConfig>,
    mut window: Single<&mut Window, With<PrimaryWindow>>,
) {
    window.title.clone_from(&config.window_title);
    window.set_maximized(true);

    commands.spawn(Camera2d);

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            ..default()
        })
        .with_children(|root| {
            // Left: the map, scrollable in both directions
            root.spawn((
                MapPanel,
                Node {
                    width: Val::Px(0.0),
                    height: Val::Percent(100.0),
                    flex_shrink: 0.0,
                    ..default()
                },
            ))
            .with_children(|panel| {
                spawn_scroll_view(
                    panel,
                    fill(),
                    (
                        MapContent,
                        Node {
                            flex_shrink: 0.0,
                            align_items: AlignItems::Start,
                            ..default()
                        },
                    ),
                );
            });

            // Right: messages, move pad and other commands in three equal rows
            root.spawn((
                ControlPanel,
                Node {
                    width: Val::Px(config.controls_width as f32),
                    height: Val::Percent(100.0),
                    flex_shrink: 0.0,
                    display: Display::Grid,
                    grid_template_columns: vec![GridTrack::flex(1.0)],
                    grid_template_rows: RepeatedGridTrack::flex(3, 1.0),
                    ..default()
                },
                BackgroundColor(PANEL_BACKGROUND),
            ))
            .with_children(|panel| {
                spawn_section(
                    panel,
                    MessageArea,
                    Node {
                        flex_direction: FlexDirection::Column,
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        min_height: Val::Percent(100.0),
                        ..default()
                    },
                );
                spawn_section(
                    panel,
                    MovePad,
                    Node {
                        display: Display::Grid,
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        grid_template_columns: RepeatedGridTrack::flex(3, 1.0),
                        grid_template_rows: RepeatedGridTrack::flex(3, 1.0),
                        column_gap: Val::Px(4.0),
                        row_gap: Val::Px(4.0),
                        ..default()
                    },
                );
                spawn_section(
                    panel,
                    OtherActions,
                    Node {
                        flex_direction: FlexDirection::Column,
                        width: Val::Percent(100.0),
                        row_gap: Val::Px(4.0),
                        ..default()
                    },
                );
            });
        });

    info!("Frame ready: {}", config.window_title);
}

/// One of the three control rows: a bordered scroll view around the content node
fn spawn_section(parent: &mut ChildSpawnerCommands, marker: impl Bundle, content: Node) {
    parent
        .spawn((
            Node {
                min_height: Val::Px(0.0),
                padding: UiRect::all(Val::Px(6.0)),
                border: UiRect::bottom(Val::Px(1.0)),
                ..default()
            },
            BorderColor::all(SECTION_BORDER),
        ))
        .with_children(|section| {
            spawn_scroll_view(section, fill(), (marker, content));
        });
}

fn fill() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        min_height: Val::Px(0.0),
        ..default()
    }
}

/// Remembers the size of the latest map
pub fn track_grid_dimensions(
    mut redraws: MessageReader<RedrawMap>,
    mut dimensions: ResMut<GridDimensions>,
) {
    if let Some(RedrawMap(snapshot)) = redraws.read().last() {
        let latest = GridDimensions {
            columns: snapshot.width,
            rows: snapshot.height,
        };
        // Avoid change detection when the size is unchanged
        dimensions.set_if_neq(latest);
    }
}

/// Splits the window width between map and controls
pub fn apply_frame_layout(
    window: Single<&Window, With<PrimaryWindow>>,
    config: Res<RendererConfig>,
    dimensions: Res<GridDimensions>,
    mut map_panel: Single<&mut Node, (With<MapPanel>, Without<ControlPanel>)>,
    mut control_panel: Single<&mut Node, (With<ControlPanel>, Without<MapPanel>)>,
) {
    let (map_width, map_height) = dimensions.pixel_size(config.tile_size);
    let layout = FrameLayout::compute(
        window.width() as u32,
        window.height() as u32,
        map_width,
        map_height,
        config.controls_width,
    );

    let map = Val::Px(layout.map_width as f32);
    if map_panel.width != map {
        map_panel.width = map;
    }

    let controls = Val::Px(layout.controls_width as f32);
    if control_panel.width != controls {
        control_panel.width = controls;
    }
}

/// Shrinks the window to the map height when the monitor is taller than the map.
/// Runs again whenever the map size changes.
pub fn clamp_window_height(
    mut window: Single<&mut Window, With<PrimaryWindow>>,
    monitor: Option<Single<&Monitor, With<PrimaryMonitor>>>,
    config: Res<RendererConfig>,
    dimensions: Res<GridDimensions>,
    mut applied: Local<Option<GridDimensions>>,
) {
    if dimensions.is_empty() || *applied == Some(*dimensions) {
        return;
    }
    // The primary monitor shows up a few frames after startup
    let Some(monitor) = monitor else {
        return;
    };

    let scale = monitor.scale_factor as f32;
    let screen_width = (monitor.physical_width as f32 / scale) as u32;
    let screen_height = (monitor.physical_height as f32 / scale) as u32;
    let (map_width, map_height) = dimensions.pixel_size(config.tile_size);
    let layout = FrameLayout::compute(
        screen_width,
        screen_height,
        map_width,
        map_height,
        config.controls_width,
    );

    if let Some(height) = layout.window_height {
        window.set_maximized(false);
        window
            .resolution
            .set(screen_width as f32, height as f32);
        info!("Window height clamped to {}px", height);
    } else {
        window.set_maximized(true);
    }

    *applied = Some(*dimensions);
}
