use super::backdrop::BackdropView;
use super::fonts::FontRegistry;
use crate::display::ActiveDisplay;
use crate::draggable::numeral_font_size;
use crate::preset::DigitGroup;
use crate::tray::DisplayTray;
use eframe::egui::{self, Align2, Color32, Sense, Vec2};

/// Borderless window showing one running countdown.
pub struct DisplayWindow {
    display: ActiveDisplay,
    backdrop: Option<BackdropView>,
    tray: Option<DisplayTray>,
}

impl DisplayWindow {
    pub fn new(
        display: ActiveDisplay,
        backdrop: Option<BackdropView>,
        tray: Option<DisplayTray>,
    ) -> Self {
        Self {
            display,
            backdrop,
            tray,
        }
    }

    pub fn display(&self) -> &ActiveDisplay {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut ActiveDisplay {
        &mut self.display
    }

    pub fn has_tray(&self) -> bool {
        self.tray.is_some()
    }

    pub fn sync_tray(&self) {
        if let Some(tray) = &self.tray {
            tray.set_tooltip(&self.display.tooltip());
        }
    }

    pub fn viewport_id(&self) -> egui::ViewportId {
        egui::ViewportId::from_hash_of(("countdowner_display", self.display.id()))
    }

    /// Draw the window. Hidden displays keep counting but get no viewport.
    pub fn show(&mut self, ctx: &egui::Context, fonts: &FontRegistry, always_on_top: bool) {
        if !self.display.is_visible() || self.display.is_closed() {
            return;
        }
        let size = self.display.window_size();
        let mut builder = egui::ViewportBuilder::default()
            .with_title(self.display.preset().name.clone())
            .with_inner_size([size.w as f32, size.h as f32])
            .with_decorations(false)
            .with_resizable(false);
        if always_on_top {
            builder = builder.with_always_on_top();
        }
        let id = self.viewport_id();
        ctx.show_viewport_immediate(id, builder, |ctx, _class| {
            let mut hide = false;
            let mut stop = ctx.input(|i| i.viewport().close_requested());
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(Color32::BLACK))
                .show(ctx, |ui| {
                    let rect = ui.max_rect();
                    let response = ui.interact(rect, ui.id().with("display_surface"), Sense::click_and_drag());
                    if response.drag_started() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                    }
                    response.context_menu(|ui| {
                        if ui.button("Hide").clicked() {
                            hide = true;
                            ui.close_menu();
                        }
                        if ui.button("Stop Timer").clicked() {
                            stop = true;
                            ui.close_menu();
                        }
                    });
                    if let Some(backdrop) = &mut self.backdrop {
                        backdrop.paint(ui, rect);
                    }
                    let text = self.display.text();
                    for group in DigitGroup::ALL {
                        let Some(label) = text.label(group) else {
                            continue;
                        };
                        let layout = self.display.preset().layout(group);
                        let font = fonts.font_id(&layout.font, numeral_font_size(&layout.font, layout.size));
                        let pos = rect.min + Vec2::new(layout.position.x as f32, layout.position.y as f32);
                        ui.painter()
                            .text(pos, Align2::LEFT_TOP, label, font, Color32::WHITE);
                    }
                });
            if hide {
                self.display.hide();
            }
            if stop {
                self.display.stop();
            }
        });
    }
}
