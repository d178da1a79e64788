// src/text/mod.rs

pub mod font;
pub mod frequency;
pub mod sample;

pub use font::load_font;
pub use frequency::{GlyphFrequencies, GlyphLookup};
pub use sample::SAMPLE_TEXT;
