use super::{compose_tile, MapContent, MapTile, RedrawMap, Tooltip};
use super::tooltip::{hide_tooltip, show_tooltip};
use crate::assets::AssetStore;
use crate::config::RendererConfig;
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::RgbaImage;

/// Rebuilds the whole map from the newest snapshot.
/// Old tiles are despawned; there is no diffing between ticks.
pub fn rebuild_map_view(
    mut commands: Commands,
    mut redraws: MessageReader<RedrawMap>,
    store: Res<AssetStore>,
    config: Res<RendererConfig>,
    mut images: ResMut<Assets<Image>>,
    map_content: Single<Entity, With<MapContent>>,
) {
    let Some(RedrawMap(snapshot)) = redraws.read().last() else {
        return;
    };

    let map_content = *map_content;
    let side = config.tile_size;

    // Clear existing map tiles
    commands.entity(map_content).despawn_related::<Children>();

    commands.entity(map_content).with_children(|parent| {
        parent
            .spawn(Node {
                display: Display::Grid,
                grid_template_columns: vec![GridTrack::px(side as f32); snapshot.width],
                grid_template_rows: vec![GridTrack::px(side as f32); snapshot.height],
                column_gap: Val::Px(0.0),
                row_gap: Val::Px(0.0),
                flex_shrink: 0.0,
                ..default()
            })
            .with_children(|grid| {
                // Snapshot cells are row-major, matching grid auto-placement
                for cell in &snapshot.cells {
                    let tile = images.add(to_ui_image(compose_tile(&store, cell, side)));

                    grid.spawn((
                        MapTile,
                        Tooltip(cell.long_description.clone()),
                        ImageNode::new(tile),
                        Node {
                            width: Val::Px(side as f32),
                            height: Val::Px(side as f32),
                            ..default()
                        },
                    ))
                    .observe(show_tooltip)
                    .observe(hide_tooltip);
                }
            });
    });

    debug!("Map rebuilt: {}x{} tiles", snapshot.width, snapshot.height);
}

/// Upload a composed tile as a Bevy image
fn to_ui_image(tile: RgbaImage) -> Image {
    let (width, height) = tile.dimensions();
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        tile.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
