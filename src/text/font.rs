// src/text/font.rs

use log::info;
use nannou::text::{self, Font};
use std::path::{Path, PathBuf};

use crate::error::{GlyphTintError, Result};

/// Loads the font at `path`, or nannou's embedded Noto Sans when no path is given.
pub fn load_font(path: Option<&Path>) -> Result<Font> {
    let Some(path) = path else {
        return Ok(text::font::default_notosans());
    };

    let font = text::font::from_file(path).map_err(|err| GlyphTintError::FontLoad {
        path: PathBuf::from(path),
        reason: format!("{:?}", err),
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!("custom font loaded: {}", name);

    Ok(font)
}
