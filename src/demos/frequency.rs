// src/demos/frequency.rs
//
// Colors each glyph of the sample text by how common its character is in
// that same text, using a cold -> hot color map.

use log::info;
use nannou::color::Rgb8;
use nannou::prelude::*;
use nannou::text::{Font, GlyphId};

use crate::color::{rgb8_from_array, ColorMap};
use crate::config::FrequencyConfig;
use crate::error::Result;
use crate::render::{draw_painted_text, draw_swatches, GlyphPainter, TextBlock};
use crate::text::{GlyphFrequencies, SAMPLE_TEXT};

pub struct FrequencyPainter {
    freqs: GlyphFrequencies<GlyphId>,
    color_map: ColorMap,
}

impl FrequencyPainter {
    pub fn new(freqs: GlyphFrequencies<GlyphId>, color_map: ColorMap) -> Self {
        Self { freqs, color_map }
    }

    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }
}

impl GlyphPainter for FrequencyPainter {
    fn paint_glyph(&mut self, glyph: GlyphId, _bounds: Rect) -> Result<Rgb8> {
        let freq = self.freqs.get(glyph)?;
        self.color_map.color_for(freq)
    }
}

/// Area the sample text wraps in: the canvas minus `margin` of width.
pub fn text_rect(canvas: Rect, margin: f32) -> Rect {
    Rect::from_xy_wh(canvas.xy(), pt2(canvas.w() - margin, canvas.h()))
}

pub struct FrequencyDemo {
    pub painter: FrequencyPainter,
    font: Font,
    font_size: u32,
    margin: f32,
    background: Rgb8,
    swatch_size: (f32, f32),
}

impl FrequencyDemo {
    pub fn new(config: &FrequencyConfig, font: Font) -> Result<Self> {
        let freqs = GlyphFrequencies::from_text(SAMPLE_TEXT, &font, config.normalization)?;
        info!("sample text uses {} distinct glyphs", freqs.len());

        let color_map = ColorMap::three_stop(
            config.num_colors,
            rgb8_from_array(config.cold),
            rgb8_from_array(config.mid),
            rgb8_from_array(config.hot),
        )?;

        Ok(Self {
            painter: FrequencyPainter::new(freqs, color_map),
            font,
            font_size: config.font_size,
            margin: config.margin,
            background: rgb8_from_array(config.background),
            swatch_size: (config.swatch_width, config.swatch_height),
        })
    }

    pub fn draw(&mut self, draw: &Draw, canvas: Rect) -> Result<()> {
        draw.background().color(self.background.into_format::<f32>());

        let (swatch_w, swatch_h) = self.swatch_size;
        draw_swatches(
            draw,
            canvas,
            self.painter.color_map().colors(),
            swatch_w,
            swatch_h,
        );

        let block = TextBlock {
            text: SAMPLE_TEXT,
            font: &self.font,
            font_size: self.font_size,
            rect: text_rect(canvas, self.margin),
            wrap: true,
        };
        draw_painted_text(draw, &block, &mut self.painter)
    }
}
