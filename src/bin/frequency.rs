// src/bin/frequency.rs
use clap::{builder::ValueParser, Arg, Command};
use nannou::prelude::*;
use std::path::PathBuf;

use glyphtint::{
    config::Config,
    demos::FrequencyDemo,
    logging::{self, fail},
    render::Canvas,
    text::load_font,
};

struct Model {
    window_id: WindowId,
    demo: FrequencyDemo,
    canvas: Canvas,
}

fn cli() -> Command {
    Command::new("frequency")
        .about("colors the glyphs of a sample text by how often they appear in it")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("font")
                .help("font file to draw the sample text with")
                .value_parser(ValueParser::path_buf())
                .required(false),
        )
}

fn main() {
    logging::init();
    nannou::app(model).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    let matches = cli().get_matches();
    let config = Config::load().unwrap_or_else(|err| fail("failed to load config", err));

    // the command line font wins over the configured one
    let font_path = matches
        .get_one::<PathBuf>("font")
        .cloned()
        .or_else(|| config.resolve_font_file());
    let font = load_font(font_path.as_deref())
        .unwrap_or_else(|err| fail("failed to load font", err));

    let demo = FrequencyDemo::new(&config.frequency, font)
        .unwrap_or_else(|err| fail("failed to prepare sample text", err));

    // Create window
    let window_id = app
        .new_window()
        .title("glyphtint - frequency")
        .size(config.window.width, config.window.height)
        .resizable(true)
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
        "frequency",
    );

    Model {
        window_id,
        demo,
        canvas,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Q {
        if let Err(err) = model.canvas.request_screenshot() {
            log::error!("screenshot skipped: {}", err);
        }
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let Some(window) = app.window(model.window_id) else {
        return;
    };
    model.canvas.fit_to_window(&window);
    model.canvas.begin_frame();
    let canvas_rect = model.canvas.rect();
    if let Err(err) = model.demo.draw(&model.canvas.draw, canvas_rect) {
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
