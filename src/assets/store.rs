use super::{AssetError, SpriteKind, Terrain, ENTITIES_DIR, TEXTURES_DIR};
use bevy::prelude::*;
use image::{ImageReader, RgbaImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Terrain textures and entity sprites, decoded once and read-only afterwards.
///
/// A slot holds `None` when its file could not be loaded; the compositor
/// leaves such a slot transparent.
#[derive(Resource, Debug, Default)]
pub struct AssetStore {
    terrain: HashMap<Terrain, Option<RgbaImage>>,
    sprites: HashMap<SpriteKind, Option<RgbaImage>>,
    missing: Vec<PathBuf>,
}

impl AssetStore {
    /// Load every known bitmap from `root/textures` and `root/entities`.
    /// Each failure is logged once and never aborts loading.
    pub fn load(root: &Path) -> Self {
        let mut store = Self::default();

        for terrain in Terrain::ALL {
            let path = root.join(TEXTURES_DIR).join(terrain.file_name());
            let image = store.load_slot(&path);
            store.terrain.insert(terrain, image);
        }

        for sprite in SpriteKind::ALL {
            let path = root.join(ENTITIES_DIR).join(sprite.file_name());
            let image = store.load_slot(&path);
            store.sprites.insert(sprite, image);
        }

        store
    }

    fn load_slot(&mut self, path: &Path) -> Option<RgbaImage> {
        match load_bitmap(path) {
            Ok(image) => {
                debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
                Some(image)
            }
            Err(e) => {
                error!("{}", e);
                self.missing.push(path.to_path_buf());
                None
            }
        }
    }

    /// Texture for a location symbol; unknown symbols resolve to dirt
    pub fn terrain_for(&self, symbol: char) -> Option<&RgbaImage> {
        self.terrain
            .get(&Terrain::from_symbol(symbol))
            .and_then(Option::as_ref)
    }

    /// Sprite for an entity symbol; unknown symbols resolve to the placeholder
    pub fn entity_for(&self, symbol: &str) -> Option<&RgbaImage> {
        self.sprites
            .get(&SpriteKind::from_symbol(symbol))
            .and_then(Option::as_ref)
    }

    /// Files that failed to load
    pub fn missing(&self) -> &[PathBuf] {
        &self.missing
    }

    /// Store built from in-memory bitmaps, for tests that don't touch the disk
    #[cfg(test)]
    pub fn from_images(
        terrain: impl IntoIterator<Item = (Terrain, RgbaImage)>,
        sprites: impl IntoIterator<Item = (SpriteKind, RgbaImage)>,
    ) -> Self {
        Self {
            terrain: terrain.into_iter().map(|(k, v)| (k, Some(v))).collect(),
            sprites: sprites.into_iter().map(|(k, v)| (k, Some(v))).collect(),
            missing: Vec::new(),
        }
    }
}

fn load_bitmap(path: &Path) -> Result<RgbaImage, AssetError> {
    let reader = ImageReader::open(path).map_err(|source| AssetError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = reader.decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::env;
    use std::fs;

    fn solid(color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(2, 2, Rgba(color))
    }

    #[test]
    fn test_unknown_symbols_resolve_to_defaults() {
        let store = AssetStore::from_images(
            [
                (Terrain::Dirt, solid([120, 80, 40, 255])),
                (Terrain::Grass, solid([0, 200, 0, 255])),
            ],
            [
                (SpriteKind::Ring, solid([255, 215, 0, 255])),
                (SpriteKind::Unknown, solid([255, 255, 0, 255])),
            ],
        );

        let dirt = store.terrain_for('S').expect("dirt");
        assert!(std::ptr::eq(store.terrain_for('?').expect("fallback"), dirt));

        let placeholder = store.entity_for("unheard-of").expect("placeholder");
        assert_eq!(placeholder.get_pixel(0, 0), &Rgba([255, 255, 0, 255]));
        assert_eq!(store.entity_for("o").expect("ring").get_pixel(0, 0), &Rgba([255, 215, 0, 255]));
    }

    #[test]
    fn test_missing_files_become_empty_slots() {
        let root = env::temp_dir().join("hobbit_grid_missing_assets");
        let _ = fs::remove_dir_all(&root);

        let store = AssetStore::load(&root);

        assert_eq!(store.missing().len(), Terrain::ALL.len() + SpriteKind::ALL.len());
        assert!(store.terrain_for('S').is_none());
        assert!(store.entity_for("@").is_none());
    }

    #[test]
    fn test_load_reads_png_files() {
        let root = env::temp_dir().join("hobbit_grid_partial_assets");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join(TEXTURES_DIR)).expect("create dir");
        solid([0, 200, 0, 255])
            .save(root.join(TEXTURES_DIR).join("grass.png"))
            .expect("write grass");
        // A file that exists but is not a PNG
        fs::write(root.join(TEXTURES_DIR).join("water.png"), b"not a png").expect("write water");

        let store = AssetStore::load(&root);

        assert_eq!(store.terrain_for('.').map(|img| img.dimensions()), Some((2, 2)));
        assert!(store.terrain_for('R').is_none());
        assert!(store
            .missing()
            .contains(&root.join(TEXTURES_DIR).join("water.png")));

        let _ = fs::remove_dir_all(root);
    }
}
