// src/bin/colorful.rs
use nannou::prelude::*;
use nannou::text::Font;

use glyphtint::{
    clock::TickClock,
    config::Config,
    demos::ColorfulDemo,
    logging::{self, fail},
    render::Canvas,
    text::load_font,
};

struct Model {
    window_id: WindowId,
    demo: ColorfulDemo,
    font: Font,
    canvas: Canvas,
    clock: TickClock,
}

fn main() {
    logging::init();
    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().unwrap_or_else(|err| fail("failed to load config", err));
    let font = load_font(config.resolve_font_file().as_deref())
        .unwrap_or_else(|err| fail("failed to load font", err));

    // Create window
    let window_id = app
        .new_window()
        .title("glyphtint - colorful")
        .size(config.window.width, config.window.height)
        .resizable(false)
        .msaa_samples(1)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .expect("failed to build window");
    let window = app.window(window_id).expect("window closed during setup");

    let canvas = Canvas::new(
        &window,
        &config.rendering,
        config.resolve_output_dir(),
        "colorful",
    );

    Model {
        window_id,
        demo: ColorfulDemo::new(&config.colorful),
        font,
        canvas,
        clock: TickClock::new(config.rendering.ticks_per_second),
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Q {
        if let Err(err) = model.canvas.request_screenshot() {
            log::error!("screenshot skipped: {}", err);
        }
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    let ticks = model.clock.advance(update.since_last);
    model.demo.update(ticks);

    let Some(window) = app.window(model.window_id) else {
        return;
    };
    model.canvas.fit_to_window(&window);
    model.canvas.begin_frame();
    let canvas_rect = model.canvas.rect();
    if let Err(err) = model
        .demo
        .draw(&model.canvas.draw, canvas_rect, &model.font)
    {
        fail("failed to draw text", err);
    }

    model.canvas.render(&window);
}

fn view(_app: &App, model: &Model, frame: Frame) {
    model.canvas.view(frame);
}

fn exit(app: &App, model: Model) {
    if let Some(window) = app.window(model.window_id) {
        model.canvas.finish(&window);
    }
}
