// src/render/swatch.rs
//
// Color map preview: a row of swatches along the bottom of the canvas

use nannou::color::Rgb8;
use nannou::prelude::*;

/// Rects of `count` swatches of `w` x `h`, centered horizontally, with the row
/// centered `h` above the bottom of `canvas`.
pub fn swatch_rects(canvas: Rect, count: usize, w: f32, h: f32) -> Vec<Rect> {
    let row_width = w * count as f32;
    let left = canvas.x() - row_width / 2.0;
    let y = canvas.bottom() + h;
    (0..count)
        .map(|i| Rect::from_x_y_w_h(left + w * (i as f32 + 0.5), y, w, h))
        .collect()
}

pub fn draw_swatches(draw: &Draw, canvas: Rect, colors: &[Rgb8], w: f32, h: f32) {
    for (rect, color) in swatch_rects(canvas, colors.len(), w, h).iter().zip(colors) {
        draw.rect()
            .xy(rect.xy())
            .wh(rect.wh())
            .color(color.into_format::<f32>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_row_layout() {
        let canvas = Rect::from_w_h(960.0, 540.0);
        let rects = swatch_rects(canvas, 32, 8.0, 18.0);
        assert_eq!(rects.len(), 32);

        // row is centered and contiguous
        assert_eq!(rects[0].left(), -128.0);
        assert_eq!(rects[31].right(), 128.0);
        for pair in rects.windows(2) {
            assert_eq!(pair[0].right(), pair[1].left());
        }

        // bottom edge sits half a swatch above the canvas bottom
        assert_eq!(rects[0].bottom(), -270.0 + 9.0);
        assert_eq!(rects[0].top(), -270.0 + 27.0);
    }

    #[test]
    fn test_offset_canvas() {
        let canvas = Rect::from_x_y_w_h(100.0, 50.0, 200.0, 100.0);
        let rects = swatch_rects(canvas, 2, 10.0, 4.0);
        assert_eq!(rects[0].left(), 90.0);
        assert_eq!(rects[1].right(), 110.0);
        assert_eq!(rects[0].y(), 4.0);
    }
}
