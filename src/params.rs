//! Tunable parameter set and JSON preset persistence.
//!
//! The presentation layer owns a [`Params`] value and hands the core a
//! clamped snapshot once per frame. Colors are carried as hex strings and
//! only matter to the renderer; the core never reads them.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The full parameter set, serialized as-is to the preset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    pub seed: u32,
    pub fg: String,
    pub stroke: String,
    pub bg: String,
    pub count: u32,
    pub spawn: u32,
    pub offset: f64,
    pub fills: f64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            seed: 3,
            fg: "#FFF".to_string(),
            stroke: "#FFF".to_string(),
            bg: "#000".to_string(),
            count: 50,
            spawn: 50,
            offset: 100.0,
            fills: 0.95,
        }
    }
}

impl Params {
    /// Clamps every numeric field into its documented range. The core only
    /// ever sees values that went through this.
    pub fn clamped(&self) -> Params {
        Params {
            seed: self.seed.min(64),
            fg: self.fg.clone(),
            stroke: self.stroke.clone(),
            bg: self.bg.clone(),
            count: self.count.clamp(1, 100),
            spawn: self.spawn.clamp(1, 100),
            offset: self.offset.clamp(1.0, 500.0),
            fills: self.fills.clamp(0.75, 1.0),
        }
    }

    /// Loads a preset, clamping whatever the file held.
    pub fn load(path: &Path) -> Result<Params, PresetError> {
        let text = fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&text)?;
        Ok(params.clamped())
    }

    /// Writes the preset as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), PresetError> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

/// Errors from preset load/save.
#[derive(Debug)]
pub enum PresetError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Io(err) => write!(f, "preset file error: {}", err),
            PresetError::Format(err) => write!(f, "preset format error: {}", err),
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetError::Io(err) => Some(err),
            PresetError::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PresetError {
    fn from(err: std::io::Error) -> Self {
        PresetError::Io(err)
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        PresetError::Format(err)
    }
}

/// Parses `#RGB` or `#RRGGBB` into RGBA components in `[0, 1]`.
pub fn parse_hex_color(text: &str) -> Option<[f32; 4]> {
    let hex = text.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let (r, g, b) = match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let r = digits.next()??;
            let g = digits.next()??;
            let b = digits.next()??;
            (r * 17, g * 17, b * 17)
        }
        6 => {
            let r = u32::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u32::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u32::from_str_radix(&hex[4..6], 16).ok()?;
            (r, g, b)
        }
        _ => return None,
    };
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
}
