// src/lib.rs
//
// Per-glyph text coloring demos on nannou

pub mod clock;
pub mod color;
pub mod config;
pub mod demos;
pub mod error;
pub mod logging;
pub mod render;
pub mod text;

pub use error::{GlyphTintError, Result};
