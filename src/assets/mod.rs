mod constants;
mod store;

pub use constants::*;
pub use store::*;

use crate::config::RendererConfig;
use bevy::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load one bitmap. The store keeps going without it.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing asset {path}: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unreadable asset {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Loads every terrain and entity bitmap once, before anything is drawn
pub fn load_assets(mut commands: Commands, config: Res<RendererConfig>) {
    let store = AssetStore::load(&config.asset_root);
    info!(
        "Asset store ready from {} ({} missing)",
        config.asset_root.display(),
        store.missing().len()
    );
    commands.insert_resource(store);
}
