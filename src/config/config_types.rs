// src/config/config_types.rs
//
// Config types for the demos

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Canvas pixels per window pixel.
    pub supersample: f32,
    pub texture_samples: u32,
    pub ticks_per_second: u32,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub output_directory: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    pub font_file: Option<String>,
}

/// One value per color channel.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PhaseConfig {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

#[derive(Debug, Deserialize)]
pub struct ColorfulConfig {
    pub text: String,
    pub font_size: u32,
    pub background: [u8; 3],
    pub start_phase: PhaseConfig,
    pub speed: PhaseConfig,
    pub glyph_shift: f64,
}

/// How glyph counts are turned into frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// Divide by the count of the most common glyph.
    #[default]
    Max,
    /// Divide by a third of the total glyph count, clamping at 1.
    ThirdOfTotal,
}

#[derive(Debug, Deserialize)]
pub struct FrequencyConfig {
    pub font_size: u32,
    pub margin: f32,
    pub num_colors: usize,
    #[serde(default)]
    pub normalization: Normalization,
    pub cold: [u8; 3],
    pub mid: [u8; 3],
    pub hot: [u8; 3],
    pub background: [u8; 3],
    pub swatch_width: f32,
    pub swatch_height: f32,
}
