// src/demos/mod.rs

pub mod colorful;
pub mod frequency;

pub use colorful::{ColorfulDemo, HueCycle};
pub use frequency::{FrequencyDemo, FrequencyPainter};
