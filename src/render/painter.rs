// src/render/painter.rs
//
// Per-glyph color override for text drawn through nannou.
// The text is laid out once per draw, every positioned glyph is handed to a
// GlyphPainter in layout order, and the resulting colors are applied glyph by glyph.

use nannou::color::Rgb8;
use nannou::prelude::*;
use nannou::text::{self, Font, GlyphId};

use crate::error::Result;

pub trait GlyphPainter {
    /// Picks the color of one glyph. `bounds` is the glyph's laid-out rect.
    fn paint_glyph(&mut self, glyph: GlyphId, bounds: Rect) -> Result<Rgb8>;
}

/// A block of text laid out inside `rect`, centered on both axes.
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub font: &'a Font,
    pub font_size: u32,
    pub rect: Rect,
    pub wrap: bool,
}

impl<'a> TextBlock<'a> {
    pub fn layout(&self) -> text::Text<'a> {
        let builder = text::text(self.text)
            .font(self.font.clone())
            .font_size(self.font_size)
            .center_justify()
            .align_middle_y();
        let builder = if self.wrap {
            builder.wrap_by_word()
        } else {
            builder.no_line_wrap()
        };
        builder.build(self.rect)
    }
}

/// Runs the painter over every glyph of the laid-out text.
pub fn paint_glyphs<P: GlyphPainter>(layout: &text::Text, painter: &mut P) -> Result<Vec<Rgb8>> {
    layout
        .glyphs()
        .map(|(glyph, bounds)| painter.paint_glyph(glyph.id(), bounds))
        .collect()
}

pub fn draw_painted_text<P: GlyphPainter>(
    draw: &Draw,
    block: &TextBlock,
    painter: &mut P,
) -> Result<()> {
    // The draw primitive lays the text out again in points with the same font,
    // size, width, wrap and justification, so it yields the same glyphs in the
    // same order. The renderer's scale factor only applies at rasterization.
    let layout = block.layout();
    let colors = paint_glyphs(&layout, painter)?;

    let drawing = draw
        .text(block.text)
        .font(block.font.clone())
        .font_size(block.font_size)
        .center_justify()
        .align_text_middle_y()
        .xy(block.rect.xy())
        .wh(block.rect.wh());
    let drawing = if block.wrap {
        drawing.wrap_by_word()
    } else {
        drawing.no_line_wrap()
    };
    drawing.glyph_colors(colors.into_iter().map(|color| color.into_format::<f32>()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlyphTintError;
    use nannou::color::rgb8;

    struct CountingPainter {
        calls: usize,
    }

    impl GlyphPainter for CountingPainter {
        fn paint_glyph(&mut self, _glyph: GlyphId, _bounds: Rect) -> Result<Rgb8> {
            self.calls += 1;
            Ok(rgb8(self.calls as u8, 0, 0))
        }
    }

    struct FailingPainter;

    impl GlyphPainter for FailingPainter {
        fn paint_glyph(&mut self, glyph: GlyphId, _bounds: Rect) -> Result<Rgb8> {
            Err(GlyphTintError::UnexpectedGlyph(format!("{:?}", glyph)))
        }
    }

    fn block<'a>(text: &'a str, font: &'a Font) -> TextBlock<'a> {
        TextBlock {
            text,
            font,
            font_size: 24,
            rect: Rect::from_w_h(800.0, 600.0),
            wrap: false,
        }
    }

    #[test]
    fn test_painter_sees_every_glyph_in_order() {
        let font = text::font::default_notosans();
        let block = block("Colorful!\nWonderful!", &font);
        let layout = block.layout();
        let glyph_count = layout.glyphs().count();
        assert!(glyph_count >= 18);

        let mut painter = CountingPainter { calls: 0 };
        let colors = paint_glyphs(&layout, &mut painter).unwrap();
        assert_eq!(painter.calls, glyph_count);
        assert_eq!(colors.len(), glyph_count);
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(color.red as usize, i + 1);
        }
    }

    #[test]
    fn test_glyph_order_only_depends_on_layout_inputs() {
        let font = text::font::default_notosans();
        let ids = |rect: Rect| {
            let block = TextBlock {
                rect,
                ..block("Colorful!\nWonderful!", &font)
            };
            block
                .layout()
                .glyphs()
                .map(|(glyph, _)| glyph.id())
                .collect::<Vec<_>>()
        };
        let centered = ids(Rect::from_w_h(800.0, 600.0));
        let moved = ids(Rect::from_x_y_w_h(-120.0, 75.0, 800.0, 600.0));
        assert_eq!(centered, moved);

        let font_ids: Vec<GlyphId> = "Colorful!Wonderful!"
            .chars()
            .map(|ch| font.glyph(ch).id())
            .collect();
        assert_eq!(centered, font_ids);
    }

    #[test]
    fn test_painter_errors_propagate() {
        let font = text::font::default_notosans();
        let block = block("abc", &font);
        let layout = block.layout();
        assert!(paint_glyphs(&layout, &mut FailingPainter).is_err());
    }
}
