// SPDX-License-Identifier: MIT OR Apache-2.0

//! UI Configuration for the tic-tac-toe views
//!
//! Covers window setup, board cell geometry and colors, player row
//! styling, and the players mounted at startup. Stored as JSON.

use anyhow::{Context, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "ui.json";

/// Complete UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Board visual configuration
    pub board: BoardConfig,
    /// Player row styling
    pub player: PlayerConfig,
    /// Players mounted at startup, in display order
    pub players: Vec<PlayerSeed>,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window size (width, height)
    pub initial_size: (f32, f32),
    /// Minimum window size
    pub min_size: (f32, f32),
    /// Padding around the central panel
    pub padding: f32,
    /// Background color
    pub background_color: SerializableColor,
}

/// Board visual configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Edge length of one square cell in pixels
    pub cell_size: f32,
    /// Gap between neighbouring cells
    pub cell_gap: f32,
    /// Cell corner rounding
    pub corner_radius: f32,
    /// Color behind the cells (shows through the gaps)
    pub background_color: SerializableColor,
    /// Empty cell color
    pub cell_color: SerializableColor,
    /// Cell color under the pointer
    pub hover_color: SerializableColor,
    /// Placed symbol color
    pub symbol_color: SerializableColor,
    /// Placed symbol font size
    pub symbol_font_size: f32,
}

/// Player row styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name_font_size: f32,
    pub symbol_font_size: f32,
    pub name_color: SerializableColor,
    pub symbol_color: SerializableColor,
    /// Outline drawn around an empty name field
    pub required_color: SerializableColor,
    /// Width of the name text field
    pub input_width: f32,
    /// Minimum Edit/Save button size
    pub button_min_size: (f32, f32),
}

/// Creation values for one player view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeed {
    pub initial_name: String,
    pub symbol: String,
}

impl PlayerSeed {
    pub fn new(initial_name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            initial_name: initial_name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Serializable color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color32> for SerializableColor {
    fn from(color: Color32) -> Self {
        let [r, g, b, a] = color.to_array();
        Self { r, g, b, a }
    }
}

impl From<SerializableColor> for Color32 {
    fn from(color: SerializableColor) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: "Tic-Tac-Toe".to_string(),
                initial_size: (480.0, 560.0),
                min_size: (360.0, 440.0),
                padding: 24.0,
                background_color: Color32::from_gray(18).into(),
            },

            board: BoardConfig {
                cell_size: 96.0,
                cell_gap: 8.0,
                corner_radius: 6.0,
                background_color: Color32::from_gray(26).into(),
                cell_color: Color32::from_rgb(60, 58, 70).into(),
                hover_color: Color32::from_rgb(84, 80, 100).into(),
                symbol_color: Color32::from_rgb(252, 211, 77).into(),
                symbol_font_size: 56.0,
            },

            player: PlayerConfig {
                name_font_size: 18.0,
                symbol_font_size: 18.0,
                name_color: Color32::from_gray(240).into(),
                symbol_color: Color32::from_rgb(252, 211, 77).into(),
                required_color: Color32::from_rgb(239, 68, 68).into(),
                input_width: 140.0,
                button_min_size: (64.0, 28.0),
            },

            players: vec![
                PlayerSeed::new("Player 1", "X"),
                PlayerSeed::new("Player 2", "O"),
            ],
        }
    }
}

impl UiConfig {
    /// Load config from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}

/// Default config location, e.g. `~/.config/tictactoe/ui.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tictactoe").join(CONFIG_FILE_NAME))
}

/// Pick the config to run with.
///
/// An explicit path must load. Without one, the default location is used
/// when it exists, otherwise built-in defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<UiConfig> {
    if let Some(path) = explicit {
        return UiConfig::load_from_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "Loading config from default location");
            UiConfig::load_from_file(&path)
        }
        _ => Ok(UiConfig::default()),
    }
}
