use super::{texture::fill_rgb, App, Config};
use crate::{NiceInt, RenderMode};
use eframe::egui::{
    load::SizedTexture, vec2, ColorImage, Image, Rect, RichText, Sense, TextureOptions, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
            .monospace()
    }

    fn draw_status(&self, ui: &mut Ui) {
        let sim = &self.simulation;
        let state = if sim.is_paused() { "paused" } else { "running" };
        ui.label(Self::new_text(&format!(
            "Generation: {}  Population: {}  FPS: {:3}  [{}]",
            NiceInt::from(sim.generation()),
            NiceInt::from_usize(sim.population()),
            self.fps_limiter.fps().round() as u32,
            state,
        )));
    }

    /// One filled rectangle per interior cell.
    fn draw_quads(&self, ui: &mut Ui, size_px: f32) {
        let (response, painter) = ui.allocate_painter(Vec2::splat(size_px), Sense::hover());
        let grid = self.simulation.front();
        let n = grid.side();
        let cell = size_px / n as f32;
        let origin = response.rect.min;

        for y in 1..n - 1 {
            for x in 1..n - 1 {
                let rect = Rect::from_min_size(
                    origin + vec2(x as f32 * cell, y as f32 * cell),
                    Vec2::splat(cell),
                );
                let color = if grid.get(x, y) {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                painter.rect_filled(rect, 0., color);
            }
        }
    }

    /// The interior cells as one texture on one image.
    fn draw_texture(&mut self, ui: &mut Ui, size_px: f32) {
        let side = fill_rgb(self.simulation.front(), &mut self.rgb_buf);
        let image = ColorImage::from_rgb([side; 2], &self.rgb_buf);
        self.texture.set(image, TextureOptions::NEAREST);

        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        ui.add(Image::from_texture(source));
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        self.draw_status(ui);

        let area = ui.available_size();
        let size_px = (area.x.min(area.y - Config::STATUS_HEIGHT) * Config::FIELD_SCALE).max(1.);
        ui.vertical_centered(|ui| match self.render_mode {
            RenderMode::Quads => self.draw_quads(ui, size_px),
            RenderMode::Texture => self.draw_texture(ui, size_px),
        });
    }
}
