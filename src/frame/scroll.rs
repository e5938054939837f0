use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::picking::hover::HoverMap;
use bevy::prelude::*;
use bevy::ui_widgets::{ControlOrientation, CoreScrollbarThumb, Scrollbar};

/// Marker for nodes that scroll with the mouse wheel
#[derive(Component)]
pub struct ScrollArea;

const LINE_HEIGHT: f32 = 21.0;
const SCROLLBAR_WIDTH: f32 = 8.0;
const THUMB_COLOR: Color = Color::srgb(0.45, 0.45, 0.55);

/// Spawn a scroll area holding `content`, framed by a vertical and a
/// horizontal scrollbar. `frame` sizes the whole view.
///
/// Layout is a 2x2 grid: area top-left, vertical bar to its right,
/// horizontal bar below it.
pub fn spawn_scroll_view(parent: &mut ChildSpawnerCommands, frame: Node, content: impl Bundle) {
    parent
        .spawn(Node {
            display: Display::Grid,
            grid_template_columns: vec![RepeatedGridTrack::flex(1, 1.0), RepeatedGridTrack::auto(1)],
            grid_template_rows: vec![RepeatedGridTrack::flex(1, 1.0), RepeatedGridTrack::auto(1)],
            ..frame
        })
        .with_children(|view| {
            let area = view
                .spawn((
                    ScrollArea,
                    Node {
                        grid_row: GridPlacement::start(1),
                        grid_column: GridPlacement::start(1),
                        min_width: Val::Px(0.0),
                        min_height: Val::Px(0.0),
                        overflow: Overflow::scroll(),
                        ..default()
                    },
                ))
                .with_children(|area| {
                    area.spawn(content);
                })
                .id();

            spawn_scrollbar(view, area, ControlOrientation::Vertical);
            spawn_scrollbar(view, area, ControlOrientation::Horizontal);
        });
}

fn spawn_scrollbar(view: &mut ChildSpawnerCommands, target: Entity, orientation: ControlOrientation) {
    let node = match orientation {
        ControlOrientation::Vertical => Node {
            min_width: Val::Px(SCROLLBAR_WIDTH),
            grid_row: GridPlacement::start(1),
            grid_column: GridPlacement::start(2),
            display: Display::None,
            ..default()
        },
        ControlOrientation::Horizontal => Node {
            min_height: Val::Px(SCROLLBAR_WIDTH),
            grid_row: GridPlacement::start(2),
            grid_column: GridPlacement::start(1),
            display: Display::None,
            ..default()
        },
    };

    view.spawn((
        node,
        Scrollbar {
            orientation,
            target,
            min_thumb_length: SCROLLBAR_WIDTH,
        },
    ))
    .with_children(|bar| {
        bar.spawn((
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(THUMB_COLOR),
            BorderRadius::all(Val::Px(4.0)),
            CoreScrollbarThumb,
        ));
    });
}

/// Whether content of `content` size overflows a node of `size` along the bar's axis
pub fn scrollbar_needed(orientation: &ControlOrientation, content: Vec2, size: Vec2) -> bool {
    // Sub-pixel differences come from layout rounding
    match orientation {
        ControlOrientation::Horizontal => content.x > size.x + 0.5,
        ControlOrientation::Vertical => content.y > size.y + 0.5,
    }
}

/// Shows each scrollbar only while its area overflows
pub fn toggle_scrollbars(
    areas: Query<&ComputedNode, With<ScrollArea>>,
    mut bars: Query<(&Scrollbar, &mut Node)>,
) {
    for (bar, mut node) in &mut bars {
        let Ok(area) = areas.get(bar.target) else {
            continue;
        };

        let display = if scrollbar_needed(&bar.orientation, area.content_size, area.size) {
            Display::Grid
        } else {
            Display::None
        };
        if node.display != display {
            node.display = display;
        }
    }
}

/// Scrolls the innermost scroll area under the pointer. Shift swaps the axis.
pub fn scroll_hovered_areas(
    mut wheel: MessageReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    hover_map: Res<HoverMap>,
    parents: Query<&ChildOf>,
    mut areas: Query<&mut ScrollPosition, With<ScrollArea>>,
) {
    for event in wheel.read() {
        let (mut dx, mut dy) = match event.unit {
            MouseScrollUnit::Line => (event.x * LINE_HEIGHT, event.y * LINE_HEIGHT),
            MouseScrollUnit::Pixel => (event.x, event.y),
        };

        if keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight) {
            std::mem::swap(&mut dx, &mut dy);
        }

        let mut targets: Vec<Entity> = Vec::new();
        for hits in hover_map.values() {
            for &hovered in hits.keys() {
                // Walk up until the nearest scroll area
                let mut current = Some(hovered);
                while let Some(entity) = current {
                    if areas.contains(entity) {
                        if !targets.contains(&entity) {
                            targets.push(entity);
                        }
                        break;
                    }
                    current = parents.get(entity).ok().map(ChildOf::parent);
                }
            }
        }

        for target in targets {
            if let Ok(mut position) = areas.get_mut(target) {
                position.x -= dx;
                position.y -= dy;
            }
        }
    }
}
