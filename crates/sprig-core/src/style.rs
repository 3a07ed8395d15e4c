//! Button style configuration.

use crate::shapes::SerializableColor;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Style configuration errors.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Invalid style: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for style loading.
pub type StyleResult<T> = Result<T, StyleError>;

/// Colors and label settings applied to a widget, loadable from JSON.
///
/// Missing fields fall back to [`ButtonStyle::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Fill when the pointer is elsewhere.
    pub idle: SerializableColor,
    /// Fill while hovered.
    pub hovered: SerializableColor,
    /// Fill while pressed.
    pub pressed: SerializableColor,
    pub label_color: SerializableColor,
    /// Label character size in pixels.
    pub character_size: f64,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            idle: SerializableColor::new(229, 231, 235, 255),
            hovered: SerializableColor::new(209, 213, 219, 255),
            pressed: SerializableColor::new(156, 163, 175, 255),
            label_color: SerializableColor::black(),
            character_size: 30.0,
        }
    }
}

impl ButtonStyle {
    /// Parse a style from JSON.
    pub fn from_json(json: &str) -> StyleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> StyleResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let style = Self::from_json(&json)?;
        log::debug!("loaded button style from {}", path.display());
        Ok(style)
    }

    /// Idle, hovered and pressed colors, in state order.
    pub fn colors(&self) -> [Color; 3] {
        [self.idle.into(), self.hovered.into(), self.pressed.into()]
    }
}
