use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    None,
    Submitted(String),
    Cancelled,
}

/// Modal asking for a preset name before the first save.
#[derive(Debug, Clone, Default)]
pub struct NamePrompt {
    open: bool,
    text: String,
    focus_requested: bool,
}

impl NamePrompt {
    pub fn open(&mut self) {
        self.text.clear();
        self.open = true;
        self.focus_requested = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> PromptResult {
        if !self.open {
            return PromptResult::None;
        }
        let mut result = PromptResult::None;
        let mut open = true;
        egui::Window::new("Save Timer")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label("Name (leave empty to use the duration)");
                let resp = ui.text_edit_singleline(&mut self.text);
                if self.focus_requested {
                    resp.request_focus();
                    self.focus_requested = false;
                }
                let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || enter {
                        result = PromptResult::Submitted(self.text.clone());
                    }
                    if ui.button("Cancel").clicked() {
                        result = PromptResult::Cancelled;
                    }
                });
            });
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && result == PromptResult::None {
            result = PromptResult::Cancelled;
        }
        if result != PromptResult::None {
            self.open = false;
        }
        if !open {
            self.open = false;
            if result == PromptResult::None {
                result = PromptResult::Cancelled;
            }
        }
        result
    }
}
