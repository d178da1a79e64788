// src/render/canvas.rs
//
// Off-screen canvas the demos draw into. The texture covers the window at its
// scale factor (times a supersampling factor), is reshaped onto the window each
// frame, and can be saved as a PNG.

use log::{debug, error, info};
use nannou::prelude::*;
use nannou::window::Window;
use std::fs;
use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::error::Result;

pub struct Canvas {
    pub draw: nannou::Draw,
    target: RenderTarget,
    texture_capturer: wgpu::TextureCapturer,
    texture_samples: u32,
    supersample: f32,

    // points -> texture pixels
    scale_factor: f32,
    rect: Rect,

    screenshot_dir: PathBuf,
    screenshot_prefix: String,
    screenshot_requested: bool,
    screenshot_count: u32,
}

// Texture plus the pipelines bound to its size
struct RenderTarget {
    texture: wgpu::Texture,
    draw_renderer: nannou::draw::Renderer,
    texture_reshaper: wgpu::TextureReshaper,
}

impl RenderTarget {
    fn new(window: &Window, size: [u32; 2], sample_count: u32) -> Self {
        let device = window.device();
        let texture = wgpu::TextureBuilder::new()
            .size(size)
            // Drawn into by the renderer, sampled by the reshaper and the capturer
            .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
            .sample_count(sample_count)
            .format(wgpu::TextureFormat::Rgba16Float)
            .build(device);

        let draw_renderer = nannou::draw::RendererBuilder::new()
            .build_from_texture_descriptor(device, texture.descriptor());

        let texture_view = texture.view().build();
        let texture_reshaper = wgpu::TextureReshaper::new(
            device,
            &texture_view,
            texture.sample_count(),
            texture.sample_type(),
            window.msaa_samples(),
            Frame::TEXTURE_FORMAT,
        );

        Self {
            texture,
            draw_renderer,
            texture_reshaper,
        }
    }
}

/// Pixel size of a texture covering `wh` points at `scale_factor` pixels per point.
pub fn texture_size(wh: Vec2, scale_factor: f32) -> [u32; 2] {
    let pixels = |points: f32| ((points * scale_factor).ceil() as u32).max(1);
    [pixels(wh.x), pixels(wh.y)]
}

impl Canvas {
    pub fn new(
        window: &Window,
        render_config: &RenderConfig,
        screenshot_dir: PathBuf,
        screenshot_prefix: &str,
    ) -> Self {
        let rect = window.rect();
        let scale_factor = window.scale_factor() * render_config.supersample;
        let target = RenderTarget::new(
            window,
            texture_size(rect.wh(), scale_factor),
            render_config.texture_samples,
        );

        Self {
            draw: nannou::Draw::new(),
            target,
            texture_capturer: wgpu::TextureCapturer::default(),
            texture_samples: render_config.texture_samples,
            supersample: render_config.supersample,
            scale_factor,
            rect,
            screenshot_dir,
            screenshot_prefix: screenshot_prefix.to_string(),
            screenshot_requested: false,
            screenshot_count: 0,
        }
    }

    /// Follows the window's size and scale factor, rebuilding the texture when
    /// its pixel size changes.
    pub fn fit_to_window(&mut self, window: &Window) {
        self.rect = window.rect();
        self.scale_factor = window.scale_factor() * self.supersample;

        let size = texture_size(self.rect.wh(), self.scale_factor);
        if size != self.target.texture.size() {
            debug!("resizing canvas texture to {}x{}", size[0], size[1]);
            self.target = RenderTarget::new(window, size, self.texture_samples);
        }
    }

    /// Drawable area in points, centered on the origin.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Clears last frame's draw commands.
    pub fn begin_frame(&self) {
        self.draw.reset();
    }

    /// Saves the next rendered frame into the screenshot directory.
    pub fn request_screenshot(&mut self) -> Result<()> {
        fs::create_dir_all(&self.screenshot_dir)?;
        self.screenshot_requested = true;
        Ok(())
    }

    pub fn render(&mut self, window: &Window) {
        let device = window.device();
        let ce_desc = wgpu::CommandEncoderDescriptor {
            label: Some("Canvas renderer"),
        };
        let mut encoder = device.create_command_encoder(&ce_desc);
        let texture = &self.target.texture;
        let texture_view = texture.view().build();

        self.target.draw_renderer.encode_render_pass(
            device,
            &mut encoder,
            &self.draw,
            self.scale_factor,
            texture.size(),
            &texture_view,
            None,
        );

        if !self.screenshot_requested {
            window.queue().submit(Some(encoder.finish()));
            return;
        }

        self.screenshot_requested = false;
        self.screenshot_count += 1;
        let path = self.screenshot_dir.join(format!(
            "{}-{:04}.png",
            self.screenshot_prefix, self.screenshot_count
        ));

        let snapshot = self
            .texture_capturer
            .capture(device, &mut encoder, texture);
        window.queue().submit(Some(encoder.finish()));

        let read = snapshot.read(move |result| match result {
            Ok(image) => match image.to_owned().save(&path) {
                Ok(()) => info!("screenshot saved to {}", path.display()),
                Err(err) => error!("failed to save {}: {}", path.display(), err),
            },
            Err(err) => error!("failed to map screenshot memory: {:?}", err),
        });
        if let Err(err) = read {
            error!("failed to read screenshot: {:?}", err);
        }
    }

    pub fn view(&self, frame: Frame) {
        let mut encoder = frame.command_encoder();
        self.target
            .texture_reshaper
            .encode_render_pass(frame.texture_view(), &mut encoder);
    }

    /// Waits for screenshots still being written.
    pub fn finish(&self, window: &Window) {
        let device = window.device();
        device.poll(wgpu::Maintain::Wait);
        if let Err(err) = self.texture_capturer.await_active_snapshots(device) {
            error!("screenshots still pending at exit: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_size_follows_points_and_scale() {
        assert_eq!(texture_size(vec2(960.0, 540.0), 1.0), [960, 540]);
        assert_eq!(texture_size(vec2(960.0, 540.0), 2.0), [1920, 1080]);
        // partial pixels round up
        assert_eq!(texture_size(vec2(100.5, 10.0), 1.5), [151, 15]);
    }

    #[test]
    fn test_texture_size_never_zero() {
        assert_eq!(texture_size(vec2(0.0, 0.0), 2.0), [1, 1]);
    }
}
