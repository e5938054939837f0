use super::{
    CommandButton, LogUpdate, MessageArea, MessageFont, MessagePane, MovePad, OtherActions,
    PadFiller, SelectionToken, ShowMenu,
};
use crate::config::RendererConfig;
use crate::selection::SelectionCoordinator;
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::picking::Pickable;
use bevy::prelude::*;

const BUTTON_IDLE: Color = Color::srgb(0.2, 0.2, 0.3);
const BUTTON_HOVERED: Color = Color::srgb(0.3, 0.3, 0.4);
const BUTTON_PRESSED: Color = Color::srgb(0.15, 0.3, 0.15);
const BUTTON_BORDER: Color = Color::srgb(0.4, 0.4, 0.6);
const BUTTON_FONT_SIZE: f32 = 16.0;

pub fn load_message_font(
    config: Res<RendererConfig>,
    assets: Res<AssetServer>,
    mut font: ResMut<MessageFont>,
) {
    if let Some(path) = &config.message_font {
        font.0 = assets.load(path.clone());
        info!("Message pane font: {}", path);
    }
}

/// Applies log changes in arrival order
pub fn apply_log_updates(mut updates: MessageReader<LogUpdate>, mut pane: ResMut<MessagePane>) {
    for update in updates.read() {
        match update {
            LogUpdate::Append(text) => pane.append(text),
            LogUpdate::Clear => pane.clear(),
        }
    }
}

/// Redraws the message lines whenever the pane changed
pub fn render_message_pane(
    mut commands: Commands,
    pane: Res<MessagePane>,
    config: Res<RendererConfig>,
    font: Res<MessageFont>,
    area: Single<Entity, With<MessageArea>>,
) {
    if !pane.is_changed() {
        return;
    }

    let area = *area;
    commands.entity(area).despawn_related::<Children>();
    commands.entity(area).with_children(|parent| {
        for line in pane.lines() {
            parent.spawn((
                Text::new(line),
                TextFont {
                    font: font.0.clone(),
                    font_size: config.message_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        }
    });
}

/// Rebuilds the move pad and the other-commands list from the newest menu
pub fn rebuild_command_panel(
    mut commands: Commands,
    mut menus: MessageReader<ShowMenu>,
    config: Res<RendererConfig>,
    pad: Single<Entity, With<MovePad>>,
    others: Single<Entity, With<OtherActions>>,
) {
    // Only the newest menu matters if several arrived in one frame
    let Some(ShowMenu(menu)) = menus.read().last() else {
        return;
    };

    let (pad, others) = (*pad, *others);
    commands.entity(pad).despawn_related::<Children>();
    commands.entity(others).despawn_related::<Children>();

    commands.entity(pad).with_children(|grid| {
        for slot in menu.pad.iter() {
            match slot {
                Some(button) => spawn_command_button(
                    grid,
                    button,
                    menu.generation,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                ),
                None => {
                    grid.spawn((PadFiller, Node::default()));
                }
            }
        }
    });

    commands.entity(others).with_children(|list| {
        for button in &menu.others {
            spawn_command_button(
                list,
                button,
                menu.generation,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(config.button_height),
                    flex_shrink: 0.0,
                    ..default()
                },
            );
        }
    });

    info!(
        "Command panel: {} moves, {} other commands",
        menu.pad.iter().flatten().count(),
        menu.others.len()
    );
}

fn spawn_command_button(
    parent: &mut ChildSpawnerCommands,
    button: &CommandButton,
    generation: u64,
    node: Node,
) {
    parent
        .spawn((
            Button,
            SelectionToken {
                generation,
                token: button.token,
            },
            Node {
                display: Display::Flex,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(1.0)),
                ..node
            },
            BackgroundColor(BUTTON_IDLE),
            BorderColor::all(BUTTON_BORDER),
            BorderRadius::all(Val::Px(4.0)),
        ))
        .observe(publish_selection)
        .with_children(|label| {
            label.spawn((
                Text::new(button.label.clone()),
                TextFont {
                    font_size: BUTTON_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::WHITE),
                // Clicks land on the button itself
                Pickable::IGNORE,
            ));
        });
}

/// Publishes the pressed button's token to the waiting simulation.
/// The panel empties once a choice is accepted and stays empty until the next menu.
pub fn publish_selection(
    trigger: On<Pointer<Click>>,
    mut commands: Commands,
    tokens: Query<&SelectionToken>,
    coordinator: Res<SelectionCoordinator>,
    pad: Single<Entity, With<MovePad>>,
    others: Single<Entity, With<OtherActions>>,
) {
    let Ok(selection) = tokens.get(trigger.entity) else {
        return;
    };

    if !coordinator.publish(selection.generation, selection.token) {
        debug!(
            "Dropped click on command {} from an old menu",
            selection.token
        );
        return;
    }

    info!("Command {} selected", selection.token);
    commands.entity(*pad).despawn_related::<Children>();
    commands.entity(*others).despawn_related::<Children>();
}

/// Hover and press colours for command buttons
pub fn button_feedback(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<SelectionToken>),
    >,
) {
    for (interaction, mut color) in &mut buttons {
        *color = BackgroundColor(match interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            Interaction::Hovered => BUTTON_HOVERED,
            Interaction::None => BUTTON_IDLE,
        });
    }
}
