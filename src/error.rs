// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphTintError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to load font {path}: {reason}")]
    FontLoad { path: PathBuf, reason: String },
    #[error("no glyphs in text")]
    EmptyText,
    #[error("unexpected glyph index {0}")]
    UnexpectedGlyph(String),
    #[error("unexpected frequency value {0}")]
    FrequencyOutOfRange(f32),
    #[error("color map needs at least 2 colors, got {0}")]
    ColorMapTooSmall(usize),
}

pub type Result<T> = std::result::Result<T, GlyphTintError>;
