use bevy::picking::Pickable;
use bevy::prelude::*;

/// Hover text attached to a map tile
#[derive(Component, Debug, Clone, Deref)]
pub struct Tooltip(pub String);

/// The single floating label used to show tooltips
#[derive(Component)]
pub struct TooltipPopup;

const TOOLTIP_OFFSET: Vec2 = Vec2::new(12.0, 16.0);

/// Spawns the tooltip label (hidden by default)
pub fn setup_tooltip(mut commands: Commands) {
    commands.spawn((
        TooltipPopup,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            padding: UiRect::all(Val::Px(4.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
        Visibility::Hidden,
        GlobalZIndex(1000),
        Pickable::IGNORE,
    ));
}

pub fn show_tooltip(
    trigger: On<Pointer<Over>>,
    tooltips: Query<&Tooltip>,
    popup: Single<(&mut Text, &mut Node, &mut Visibility), With<TooltipPopup>>,
) {
    let Ok(tooltip) = tooltips.get(trigger.entity) else {
        return;
    };

    let (mut text, mut node, mut visibility) = popup.into_inner();
    let position = trigger.pointer_location.position + TOOLTIP_OFFSET;
    text.0.clone_from(&tooltip.0);
    node.left = Val::Px(position.x);
    node.top = Val::Px(position.y);
    *visibility = Visibility::Visible;
}

pub fn hide_tooltip(
    _trigger: On<Pointer<Out>>,
    mut popup: Single<&mut Visibility, With<TooltipPopup>>,
) {
    **popup = Visibility::Hidden;
}
