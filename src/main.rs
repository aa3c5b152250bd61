#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use simple_paint::layout::{SURFACE_HEIGHT, SURFACE_WIDTH};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Simple Paint")
            .with_inner_size([SURFACE_WIDTH, SURFACE_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Simple Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(simple_paint::PaintApp::new(cc)))),
    )
}
