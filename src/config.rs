//! Renderer configuration.
//!
//! Reads `config.toml` from the executable's directory (or CWD).
//! Falls back to defaults if the file is missing or incomplete.

use bevy::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";

/// Sizes and paths used by every part of the renderer
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct RendererConfig {
    pub window_title: String,
    /// Side of one map tile in pixels (locWidth = locHeight)
    pub tile_size: u32,
    /// Recommended width of the control column
    pub controls_width: u32,
    /// Height of each button in the non-move list
    pub button_height: f32,
    pub message_font_size: f32,
    /// Font for the message pane, relative to Bevy's asset folder.
    /// `None` falls back to Bevy's built-in font.
    pub message_font: Option<String>,
    /// Folder holding `textures/` and `entities/`
    pub asset_root: PathBuf,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            window_title: default_title(),
            tile_size: default_tile_size(),
            controls_width: default_controls_width(),
            button_height: default_button_height(),
            message_font_size: default_font_size(),
            message_font: Some(default_message_font()),
            asset_root: default_asset_root(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    window: TomlWindow,
    #[serde(default)]
    layout: TomlLayout,
    #[serde(default)]
    messages: TomlMessages,
    #[serde(default)]
    assets: TomlAssets,
}

#[derive(Deserialize, Debug)]
struct TomlWindow {
    #[serde(default = "default_title")]
    title: String,
}

#[derive(Deserialize, Debug)]
struct TomlLayout {
    #[serde(default = "default_tile_size")]
    tile_size: u32,
    #[serde(default = "default_controls_width")]
    controls_width: u32,
    #[serde(default = "default_button_height")]
    button_height: f32,
}

#[derive(Deserialize, Debug)]
struct TomlMessages {
    #[serde(default = "default_font_size")]
    font_size: f32,
    #[serde(default = "default_message_font_option")]
    font: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct TomlAssets {
    #[serde(default)]
    root: Option<PathBuf>,
}

// ── Defaults ──

fn default_title() -> String { "Star Wars World".into() }
fn default_tile_size() -> u32 { 100 }
fn default_controls_width() -> u32 { 600 }
fn default_button_height() -> f32 { 50.0 }
fn default_font_size() -> f32 { 18.0 }
fn default_message_font() -> String { "fonts/DejaVuSansMono-Bold.ttf".into() }
fn default_message_font_option() -> Option<String> { Some(default_message_font()) }

impl Default for TomlWindow {
    fn default() -> Self {
        TomlWindow { title: default_title() }
    }
}

impl Default for TomlLayout {
    fn default() -> Self {
        TomlLayout {
            tile_size: default_tile_size(),
            controls_width: default_controls_width(),
            button_height: default_button_height(),
        }
    }
}

impl Default for TomlMessages {
    fn default() -> Self {
        TomlMessages {
            font_size: default_font_size(),
            font: default_message_font_option(),
        }
    }
}

/// `assets/` next to the executable, else the crate's own `assets/`
fn default_asset_root() -> PathBuf {
    exe_dir()
        .map(|dir| dir.join("assets"))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"))
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

// ── Loading ──

impl RendererConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let raw: TomlConfig = toml::from_str(text)?;
        Ok(Self {
            window_title: raw.window.title,
            tile_size: raw.layout.tile_size.max(1),
            controls_width: raw.layout.controls_width,
            button_height: raw.layout.button_height,
            message_font_size: raw.messages.font_size,
            message_font: raw.messages.font,
            asset_root: raw.assets.root.unwrap_or_else(default_asset_root),
        })
    }

    /// Read `path`. A missing file yields `Ok(None)`.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Look for `config.toml` next to the executable, then in the CWD
    pub fn load() -> Self {
        let candidates = exe_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)));

        for path in candidates {
            match Self::from_file(&path) {
                Ok(Some(config)) => {
                    info!("Loaded renderer config from {}", path.display());
                    return config;
                }
                Ok(None) => continue,
                Err(e) => {
                    warn!("{}, using defaults", e);
                    return Self::default();
                }
            }
        }

        Self::default()
    }
}

/// Startup system installing the configuration resource
pub fn load_config(mut commands: Commands) {
    commands.insert_resource(RendererConfig::load());
}
