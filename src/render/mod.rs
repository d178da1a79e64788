// src/render/mod.rs
// Drawing helpers shared by the demos

pub mod canvas;
pub mod painter;
pub mod swatch;

pub use canvas::Canvas;
pub use painter::{draw_painted_text, paint_glyphs, GlyphPainter, TextBlock};
pub use swatch::{draw_swatches, swatch_rects};
