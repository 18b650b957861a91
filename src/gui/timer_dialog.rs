use crate::display::COMPLETION_TITLE;
use eframe::egui;

/// Lists countdowns that finished since the dialog was last dismissed.
#[derive(Default)]
pub struct TimerCompletionDialog {
    pub open: bool,
    messages: Vec<String>,
}

impl TimerCompletionDialog {
    pub fn open_message(&mut self, msg: String) {
        self.messages.push(msg);
        self.open = true;
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }
        let mut open_val = self.open;
        let mut close = false;
        egui::Window::new(COMPLETION_TITLE)
            .collapsible(false)
            .resizable(false)
            .open(&mut open_val)
            .show(ctx, |ui| {
                for msg in &self.messages {
                    ui.label(msg);
                }
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if close {
            open_val = false;
        }
        if !open_val {
            self.messages.clear();
        }
        self.open = open_val;
    }
}
