// src/demos/colorful.rs
//
// Hue cycling text: every glyph gets a color from three sine waves, and each
// following glyph is shifted a bit further along the waves.

use nannou::color::Rgb8;
use nannou::prelude::*;
use nannou::text::{Font, GlyphId};

use crate::color::{rgb8_from_array, ColorPhase};
use crate::config::{ColorfulConfig, PhaseConfig};
use crate::error::Result;
use crate::render::{draw_painted_text, GlyphPainter, TextBlock};

/// Color state handed to the text renderer as its glyph painter.
#[derive(Debug, Clone)]
pub struct HueCycle {
    pub phase: ColorPhase,
    speed: PhaseConfig,
    shift_step: f64,
    shift: f64,
}

impl HueCycle {
    pub fn new(start: PhaseConfig, speed: PhaseConfig, shift_step: f64) -> Self {
        Self {
            phase: start.into(),
            speed,
            shift_step,
            shift: 0.0,
        }
    }

    pub fn tick(&mut self) {
        self.phase.advance(&self.speed);
    }

    /// Restarts the glyph shift, called before each text draw.
    pub fn reset_shift(&mut self) {
        self.shift = 0.0;
    }
}

impl GlyphPainter for HueCycle {
    fn paint_glyph(&mut self, _glyph: GlyphId, _bounds: Rect) -> Result<Rgb8> {
        let color = self.phase.color_at(self.shift);
        self.shift += self.shift_step;
        Ok(color)
    }
}

pub struct ColorfulDemo {
    pub cycle: HueCycle,
    text: String,
    font_size: u32,
    background: Rgb8,
}

impl ColorfulDemo {
    pub fn new(config: &ColorfulConfig) -> Self {
        Self {
            cycle: HueCycle::new(config.start_phase, config.speed, config.glyph_shift),
            text: config.text.clone(),
            font_size: config.font_size,
            background: rgb8_from_array(config.background),
        }
    }

    pub fn update(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.cycle.tick();
        }
    }

    pub fn draw(&mut self, draw: &Draw, canvas: Rect, font: &Font) -> Result<()> {
        draw.background().color(self.background.into_format::<f32>());

        self.cycle.reset_shift();
        let block = TextBlock {
            text: &self.text,
            font,
            font_size: self.font_size,
            rect: canvas,
            wrap: false,
        };
        draw_painted_text(draw, &block, &mut self.cycle)
    }
}
