use super::backdrop::BackdropView;
use super::digit_input;
use super::fonts::FontRegistry;
use super::name_prompt::{NamePrompt, PromptResult};
use crate::common::file_dialog::{FilePicker, FONT_FILTER};
use crate::editor::{EditorState, SaveRequest};
use crate::media;
use crate::preset::{DigitGroup, FontChoice, Preset};
use eframe::egui;
use std::time::Instant;

pub const EDITOR_SIZE: [f32; 2] = [700.0, 600.0];
pub const EDITOR_MIN_SIZE: [f32; 2] = [400.0, 300.0];

/// Requests from the editor window to the main view.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    Run(Preset),
    /// `replace` is set when the editor is bound to an existing preset.
    Save { preset: Preset, replace: bool },
    Warning(String),
    Close,
}

pub struct EditorWindow {
    state: EditorState,
    prompt: NamePrompt,
    backdrop: Option<BackdropView>,
    focus: bool,
}

impl EditorWindow {
    /// Open an editor over `state`. Problems restoring fonts or the
    /// background are returned as warnings; the editor opens regardless.
    pub fn new(state: EditorState, fonts: &mut FontRegistry) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        for group in DigitGroup::ALL {
            if let FontChoice::File(path) = &state.input(group).font().choice {
                if let Err(e) = fonts.load(path) {
                    warnings.push(format!("Font not loaded: {e:#}"));
                }
            }
        }
        let mut window = Self {
            state,
            prompt: NamePrompt::default(),
            backdrop: None,
            focus: false,
        };
        if let Some(msg) = window.reload_backdrop() {
            warnings.push(msg);
        }
        (window, warnings)
    }

    pub fn viewport_id() -> egui::ViewportId {
        egui::ViewportId::from_hash_of("countdowner_editor")
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn request_focus(&mut self) {
        self.focus = true;
    }

    fn reload_backdrop(&mut self) -> Option<String> {
        self.backdrop = None;
        let background = self.state.background()?;
        match media::load_background(background) {
            Ok(b) => {
                self.backdrop = Some(BackdropView::new(b, Instant::now()));
                None
            }
            Err(e) => Some(format!("Background not shown: {e:#}")),
        }
    }

    fn title(&self) -> String {
        match self.state.bound_name() {
            Some(name) => format!("CountDowner Creator - {name}"),
            None => "CountDowner Creator".into(),
        }
    }

    fn viewport(&self) -> egui::ViewportBuilder {
        egui::ViewportBuilder::default()
            .with_title(self.title())
            .with_inner_size(EDITOR_SIZE)
            .with_min_inner_size(EDITOR_MIN_SIZE)
    }

    fn toolbar(
        &mut self,
        ui: &mut egui::Ui,
        fonts: &mut FontRegistry,
        picker: &dyn FilePicker,
        font_point_size: f32,
        actions: &mut Vec<EditorAction>,
    ) {
        ui.horizontal(|ui| {
            if ui.button("Run Timer").clicked() {
                actions.push(EditorAction::Run(self.state.live_preset()));
            }
            if ui.button("Save").clicked() {
                match self.state.save_request() {
                    SaveRequest::NeedsName => self.prompt.open(),
                    SaveRequest::Replace(preset) => actions.push(EditorAction::Save {
                        preset,
                        replace: true,
                    }),
                }
            }
            ui.separator();
            if ui.button("Background...").clicked() && self.state.pick_background(picker) {
                if let Some(msg) = self.reload_backdrop() {
                    actions.push(EditorAction::Warning(msg));
                }
            }
            if self.state.background().is_some() && ui.button("Clear background").clicked() {
                self.state.clear_background();
                self.backdrop = None;
            }
            ui.separator();
            if ui.button("Alarm...").clicked() {
                self.state.pick_alarm(picker);
            }
            if self.state.alarm().is_some() && ui.button("Clear alarm").clicked() {
                self.state.clear_alarm();
            }
        });
        ui.horizontal(|ui| {
            for group in DigitGroup::ALL {
                ui.label(group.label());
                let current = self.state.input(group).font().choice.label();
                let mut picked = None;
                let mut from_file = false;
                egui::ComboBox::from_id_source(("font_select", group))
                    .selected_text(current)
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(false, "Proportional").clicked() {
                            picked = Some(FontChoice::Proportional);
                        }
                        if ui.selectable_label(false, "Monospace").clicked() {
                            picked = Some(FontChoice::Monospace);
                        }
                        if ui.selectable_label(false, "From file...").clicked() {
                            from_file = true;
                        }
                    });
                if from_file {
                    if let Some(path) = picker.pick_file("Choose font", FONT_FILTER) {
                        match fonts.load(&path) {
                            Ok(()) => picked = Some(FontChoice::File(path)),
                            Err(e) => {
                                actions.push(EditorAction::Warning(format!("Font not loaded: {e:#}")))
                            }
                        }
                    }
                }
                if let Some(choice) = picked {
                    self.state.set_font(group, choice, font_point_size);
                }
            }
        });
        let describe = |p: Option<&std::path::PathBuf>| {
            p.map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".into())
        };
        ui.label(format!(
            "Background: {}   Alarm: {}",
            describe(self.state.background().map(|b| &b.path)),
            describe(self.state.alarm()),
        ));
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        fonts: &mut FontRegistry,
        picker: &dyn FilePicker,
        font_point_size: f32,
    ) -> Vec<EditorAction> {
        ctx.show_viewport_immediate(Self::viewport_id(), self.viewport(), |ctx, _class| {
            let mut actions = Vec::new();
            if self.focus {
                ctx.send_viewport_cmd(egui::ViewportCommand::Focus);
                self.focus = false;
            }
            egui::TopBottomPanel::top("editor_toolbar").show(ctx, |ui| {
                self.toolbar(ui, fonts, picker, font_point_size, &mut actions);
            });
            egui::CentralPanel::default()
                .frame(egui::Frame::none().fill(egui::Color32::from_gray(24)))
                .show(ctx, |ui| {
                    let rect = ui.max_rect();
                    if let Some(backdrop) = &mut self.backdrop {
                        backdrop.paint(ui, rect);
                    }
                    for input in self.state.inputs_mut() {
                        let font = fonts.font_id(input.font(), input.numeral_font_size());
                        digit_input::show(ui, input, rect.min, font);
                    }
                });
            match self.prompt.ui(ctx) {
                PromptResult::Submitted(name) => {
                    if let Some(preset) = self.state.named_snapshot(Some(&name)) {
                        actions.push(EditorAction::Save {
                            preset,
                            replace: false,
                        });
                    }
                }
                PromptResult::Cancelled => tracing::debug!("save cancelled"),
                PromptResult::None => {}
            }
            if ctx.input(|i| i.viewport().close_requested()) {
                actions.push(EditorAction::Close);
            }
            actions
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_can_shrink_below_its_initial_size() {
        let (window, warnings) = EditorWindow::new(EditorState::new(), &mut FontRegistry::default());
        assert!(warnings.is_empty());
        let builder = window.viewport();
        assert_eq!(builder.inner_size, Some(egui::vec2(700.0, 600.0)));
        assert_eq!(builder.min_inner_size, Some(egui::vec2(400.0, 300.0)));
    }
}
