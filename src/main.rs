#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // Optional first argument: path to a JSON capture config
    let config = match std::env::args().nth(1) {
        Some(path) => eframe_sketch::CaptureConfig::load_or_default(path),
        None => eframe_sketch::CaptureConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };
    eframe::run_native(
        "eframe sketch",
        native_options,
        Box::new(|cc| Ok(Box::new(eframe_sketch::SketchApp::new(cc, config)))),
    )
}

// The capture core runs on the web too, but this binary only targets native.
#[cfg(target_arch = "wasm32")]
fn main() {}
