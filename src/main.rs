mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::LaunchDashApp;
use eframe::egui;
use state::AppState;

/// Dataset loaded when no path is given on the command line.
const DEFAULT_DATASET: &str = "launch_records.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // Dataset path: first CLI argument, else the default next to the
    // working directory.  A missing default is not fatal; the app starts
    // with the "no dataset" placeholder and File → Open still works.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    let mut app_state = AppState::default();
    match data::loader::load_file(&path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} launch records from {}",
                dataset.len(),
                path.display()
            );
            app_state.set_dataset(dataset);
        }
        Err(e) => {
            log::warn!("Could not load {}: {e:#}", path.display());
            app_state.status_message = Some(format!("Could not load {}: {e:#}", path.display()));
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(app_state)))),
    )
}
