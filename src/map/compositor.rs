//! Builds the bitmap for one map tile: terrain stretched over the whole
//! square, occupants packed into a square sub-grid on top.

use crate::assets::AssetStore;
use crate::model::CellSnapshot;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Stretch `image` to exactly `width` x `height` with bilinear filtering.
/// Alpha is kept and the aspect ratio is not.
pub fn resize_image(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    imageops::resize(image, width, height, FilterType::Triangle)
}

/// Side of the smallest square grid holding `count` sprites (`ceil(sqrt(count))`)
pub fn sub_grid_size(count: usize) -> u32 {
    let mut side = 0u32;
    while (side as usize) * (side as usize) < count {
        side += 1;
    }
    side
}

/// Compose one cell into a `side` x `side` image.
///
/// Sprites fill the sub-grid row by row in the cell's entity order. Unused
/// sub-cells, and slots whose bitmap failed to load, stay transparent.
pub fn compose_tile(store: &AssetStore, cell: &CellSnapshot, side: u32) -> RgbaImage {
    let mut tile = match store.terrain_for(cell.symbol) {
        Some(terrain) => resize_image(terrain, side, side),
        None => RgbaImage::new(side, side),
    };

    let grid = sub_grid_size(cell.entities.len());
    if grid == 0 {
        return tile;
    }

    let sprite_side = side / grid;
    if sprite_side == 0 {
        return tile;
    }

    for (index, symbol) in cell.entities.iter().enumerate() {
        let Some(sprite) = store.entity_for(symbol) else {
            continue;
        };
        let index = index as u32;
        let x = (index % grid) * sprite_side;
        let y = (index / grid) * sprite_side;
        let sprite = resize_image(sprite, sprite_side, sprite_side);
        imageops::overlay(&mut tile, &sprite, x as i64, y as i64);
    }

    tile
}
