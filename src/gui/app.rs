use super::{input::poll_events, Config};
use crate::{FpsLimiter, LifeConfig, RenderMode, Simulation};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Margin, TextureHandle, TextureOptions,
    ViewportCommand,
};

pub struct App {
    pub(super) simulation: Simulation,       // Field, frame divider and run state.
    pub(super) render_mode: RenderMode,      // Quads or a single texture.
    pub(super) texture: TextureHandle,       // Texture of the field, used in `RenderMode::Texture`.
    pub(super) rgb_buf: Vec<u8>,             // Scratch pixels uploaded into `texture`.
    pub(super) fps_limiter: FpsLimiter,      // Limits the frame rate to `Config::MAX_FPS`.
    close_sent: bool,
}

impl App {
    pub fn new(ctx: &Context, config: &LifeConfig) -> Self {
        Self {
            simulation: Simulation::new(config),
            render_mode: config.render_mode,
            texture: ctx.load_texture(
                "cellular field",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            rgb_buf: vec![],
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
            close_sent: false,
        }
    }

    fn update_simulation(&mut self, ctx: &Context) {
        for event in ctx.input(poll_events) {
            self.simulation.handle(event);
        }

        if !self.simulation.is_running() {
            if !self.close_sent {
                log::info!("quit after {} generations", self.simulation.generation());
                ctx.send_viewport_cmd(ViewportCommand::Close);
                self.close_sent = true;
            }
            return;
        }

        self.simulation.advance_frame();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // the step completes before the front grid is drawn
        self.update_simulation(ctx);

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| self.draw(ui));

        ctx.request_repaint();
        self.fps_limiter.delay();
    }
}
