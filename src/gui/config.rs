use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const MAX_FPS: f64 = 60.;

    pub const FRAME_MARGIN: f32 = 10.;
    pub const STATUS_HEIGHT: f32 = 24.;
    pub const TEXT_SIZE: f32 = 14.;
    pub const TEXT_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;

    pub const ALIVE_COLOR: Color32 = Color32::BLACK;
    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    /// Share of the available square the field occupies.
    pub const FIELD_SCALE: f32 = 0.85;
}
