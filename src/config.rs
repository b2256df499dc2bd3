//! Tool configuration and persistence

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ToolColor {
    /// Convert to RGBA bytes (opaque)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

/// Stroke styling for the selection outline overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineStyle {
    /// Solid background-contrast pass
    pub base: ToolColor,
    /// Dashed accent pass drawn on top
    pub accent: ToolColor,
    /// Dash/gap lengths in pixels for the accent pass
    pub dash: Vec<f32>,
    /// Stroke width in pixels
    pub width: f32,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            base: ToolColor {
                r: 1.0,
                g: 1.0,
                b: 1.0,
            },
            accent: ToolColor {
                r: 0.4157,
                g: 0.3020,
                b: 0.9059,
            },
            dash: vec![2.0, 5.0],
            width: 1.0,
        }
    }
}

/// Fill color and opacity the host applies when filling the selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillStyle {
    pub color: ToolColor,
    pub alpha: f32,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: ToolColor {
                r: 0.0,
                g: 0.0,
                b: 0.0,
            },
            alpha: 1.0,
        }
    }
}

/// On-disk configuration document for the tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    pub outline: OutlineStyle,
    pub fill: FillStyle,
}

impl ToolConfig {
    /// Platform config path (`<config dir>/lassokit/config.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lassokit").join("config.json"))
    }

    /// Load from a path, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                warn!("config at {} is invalid ({err}), using defaults", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save to a path, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("writing config to {}", path.display()))
    }
}
