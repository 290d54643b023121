mod app;
mod config;
mod draw;
mod input;
mod texture;

pub use app::App;
pub use config::Config;

use crate::{Error, LifeConfig};
use eframe::egui::{vec2, ViewportBuilder};

/// Opens the window and runs the simulation until it is closed.
pub fn run(config: LifeConfig) -> Result<(), Error> {
    let [width, height] = config.window_size;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size(vec2(width, height))
            .with_min_inner_size(vec2(width / 2., height / 2.)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    log::info!(
        "opening {width}x{height} window, {:?} rendering, {side}x{side} field",
        config.render_mode,
        side = config.side,
    );
    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, &config)))),
    )?;
    Ok(())
}
