use crate::media::Backdrop;
use eframe::egui::{self, Color32, Pos2, Rect, TextureHandle, TextureOptions};
use std::time::Instant;

/// Full-window background layer drawn below the digits.
pub struct BackdropView {
    backdrop: Backdrop,
    textures: Vec<Option<TextureHandle>>,
    started: Instant,
}

impl BackdropView {
    pub fn new(backdrop: Backdrop, started: Instant) -> Self {
        let textures = vec![None; backdrop.frames.len()];
        Self {
            backdrop,
            textures,
            started,
        }
    }

    /// Paint the current frame stretched over `rect`.
    pub fn paint(&mut self, ui: &egui::Ui, rect: Rect) {
        let elapsed = self.started.elapsed();
        let idx = self.backdrop.frame_at(elapsed);
        let Some(frame) = self.backdrop.frames.get(idx) else {
            return;
        };
        let tex = self.textures[idx].get_or_insert_with(|| {
            let size = [frame.width() as usize, frame.height() as usize];
            let image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
            ui.ctx()
                .load_texture(format!("backdrop-{idx}"), image, TextureOptions::LINEAR)
        });
        ui.painter().image(
            tex.id(),
            rect,
            Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
        if self.backdrop.is_animated() {
            let delay = self.backdrop.delays[idx];
            ui.ctx().request_repaint_after(delay);
        }
    }
}
