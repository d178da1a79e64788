// src/color/mod.rs
//
// Color math behind the demos: sine phases, Oklab gradients, color maps

pub mod gradient;
pub mod phase;

pub use gradient::{oklab_gradient, ColorMap};
pub use phase::{channel_value, ColorPhase};

use nannou::color::{rgb8, Rgb8};

pub fn rgb8_from_array(channels: [u8; 3]) -> Rgb8 {
    rgb8(channels[0], channels[1], channels[2])
}
