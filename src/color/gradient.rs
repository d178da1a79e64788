// src/color/gradient.rs
//
// Perceptual gradients and the discrete color map used by the frequency demo

use nannou::color::{rgb8, Rgb8};
use palette::{Clamp, IntoColor, LinSrgb, Mix, Oklab, Srgb};

use crate::error::{GlyphTintError, Result};

// nannou's colors come from an older palette, so channels cross over by hand
fn to_oklab(color: Rgb8) -> Oklab {
    let linear: LinSrgb = Srgb::new(color.red, color.green, color.blue)
        .into_format::<f32>()
        .into_linear();
    linear.into_color()
}

fn from_oklab(color: Oklab) -> Rgb8 {
    let linear: LinSrgb = color.into_color();
    let srgb: Srgb<u8> = Srgb::<f32>::from_linear(linear).clamp().into_format();
    rgb8(srgb.red, srgb.green, srgb.blue)
}

/// Fills `count` colors going from `start` to `end` in Oklab space.
/// Both endpoints are included.
pub fn oklab_gradient(start: Rgb8, end: Rgb8, count: usize) -> Vec<Rgb8> {
    let from = to_oklab(start);
    let to = to_oklab(end);
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..count)
            .map(|i| {
                let t = i as f32 / (count - 1) as f32;
                from_oklab(from.mix(to, t))
            })
            .collect(),
    }
}

/// An ordered sequence of colors indexed by frequency buckets.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: Vec<Rgb8>,
}

impl ColorMap {
    /// Cold to mid over the first half, mid to hot over the second half.
    pub fn three_stop(count: usize, cold: Rgb8, mid: Rgb8, hot: Rgb8) -> Result<Self> {
        if count < 2 {
            return Err(GlyphTintError::ColorMapTooSmall(count));
        }
        let half = count / 2;
        let mut colors = oklab_gradient(cold, mid, half);
        colors.extend(oklab_gradient(mid, hot, count - half));
        Ok(Self { colors })
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Bucket index of a frequency in (0, 1].
    pub fn bucket(&self, freq: f32) -> Result<usize> {
        if freq <= 0.0 || freq > 1.0 || freq.is_nan() {
            return Err(GlyphTintError::FrequencyOutOfRange(freq));
        }
        let index = (freq * self.colors.len() as f32) as usize;
        Ok(index.saturating_sub(1))
    }

    pub fn color_for(&self, freq: f32) -> Result<Rgb8> {
        let index = self.bucket(freq)?;
        Ok(self.colors[index])
    }
}
