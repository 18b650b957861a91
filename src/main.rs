#![cfg_attr(feature = "windows_gui", windows_subsystem = "windows")]

use countdowner::common::file_dialog::NativeFilePicker;
use countdowner::gui::CountdownerApp;
use countdowner::logging;
use countdowner::settings::{Settings, SETTINGS_FILE};
use countdowner::sound::RodioPlayer;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let (settings, load_error) = match Settings::load(SETTINGS_FILE) {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    logging::init(settings.debug_logging, settings.log_file.clone());
    if let Some(e) = load_error {
        tracing::error!("{e:#}");
    }
    tracing::info!("starting CountDowner");

    let (w, h) = settings.window_size.unwrap_or((400, 500));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CountDowner")
            .with_inner_size([w as f32, h as f32])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CountDowner",
        native_options,
        Box::new(move |_cc| {
            Box::new(CountdownerApp::new(
                settings,
                Box::new(NativeFilePicker),
                Box::new(RodioPlayer),
            ))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the main window: {e}"))
}
