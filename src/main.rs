use eframe::{egui, NativeOptions};
use egui::ViewportBuilder;
use std::error::Error;

use raid_squares::gui::SquaresApp;
use raid_squares::provider::SimulatedRaid;
use raid_squares::utils::{get_settings_file_path, load_grid_settings};

const DEFAULT_RAID_SIZE: usize = 25;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_grid_settings(&get_settings_file_path());

    // Optional first argument: number of simulated group members
    let raid_size = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(DEFAULT_RAID_SIZE);
    let raid = SimulatedRaid::demo(raid_size);

    let (width, height) = settings.layout().total_size();
    let native_options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([width + 16.0, height + 16.0])
            .with_resizable(false)
            .with_decorations(false) // Hold Shift and drag to move
            .with_transparent(true)
            .with_always_on_top(),
        ..Default::default()
    };

    let app = SquaresApp::new(&settings, raid);

    eframe::run_native(
        "Raid Squares",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
