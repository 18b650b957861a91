mod backdrop;
mod digit_input;
mod display_window;
mod editor_window;
mod fonts;
mod name_prompt;
mod timer_dialog;

pub use backdrop::BackdropView;
pub use display_window::DisplayWindow;
pub use editor_window::{EditorAction, EditorWindow};
pub use fonts::FontRegistry;
pub use name_prompt::{NamePrompt, PromptResult};
pub use timer_dialog::TimerCompletionDialog;

use crate::common::file_dialog::FilePicker;
use crate::display::{ActiveDisplay, DisplayEvent, COMPLETION_MESSAGE, COMPLETION_TITLE};
use crate::editor::EditorState;
use crate::media;
use crate::preset::{DigitGroup, FontChoice, Preset};
use crate::registry::Registry;
use crate::settings::Settings;
use crate::sound::AlarmPlayer;
use crate::tray::{self, DisplayTray, TrayCommand};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Outcome of [`CountdownerApp::open_editor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOpen {
    Opened,
    /// An editor was already open; it gets focus instead.
    AlreadyOpen,
    /// The row index no longer refers to a preset.
    StaleIndex,
}

/// Main window: the preset list plus every window launched from it.
pub struct CountdownerApp {
    settings: Settings,
    registry: Registry,
    selected: Option<usize>,
    editor: Option<EditorWindow>,
    displays: Vec<DisplayWindow>,
    next_display_id: u64,
    completion_dialog: TimerCompletionDialog,
    toasts: Toasts,
    fonts: FontRegistry,
    picker: Box<dyn FilePicker>,
    player: Box<dyn AlarmPlayer>,
}

impl CountdownerApp {
    pub fn new(
        settings: Settings,
        picker: Box<dyn FilePicker>,
        player: Box<dyn AlarmPlayer>,
    ) -> Self {
        Self {
            settings,
            registry: Registry::new(),
            selected: None,
            editor: None,
            displays: Vec::new(),
            next_display_id: 1,
            completion_dialog: TimerCompletionDialog::default(),
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            fonts: FontRegistry::default(),
            picker,
            player,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    pub fn editor(&self) -> Option<&EditorWindow> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EditorWindow> {
        self.editor.as_mut()
    }

    pub fn displays(&self) -> &[DisplayWindow] {
        &self.displays
    }

    pub fn completion_messages(&self) -> &[String] {
        self.completion_dialog.messages()
    }

    fn add_toast(&mut self, kind: ToastKind, text: String) {
        if self.settings.enable_toasts {
            self.toasts.add(Toast {
                text: text.into(),
                kind,
                options: ToastOptions::default()
                    .duration_in_seconds(self.settings.toast_duration as f64),
            });
        }
    }

    fn warn(&mut self, msg: String) {
        tracing::warn!("{msg}");
        self.add_toast(ToastKind::Warning, msg);
    }

    /// Open the editor, fresh (`None`) or on the preset at `index`.
    pub fn open_editor(&mut self, index: Option<usize>) -> EditorOpen {
        if let Some(editor) = &mut self.editor {
            editor.request_focus();
            self.add_toast(ToastKind::Info, "An editor is already open".into());
            return EditorOpen::AlreadyOpen;
        }
        let state = match index {
            None => EditorState::new(),
            Some(idx) => match self.registry.get(idx) {
                Some(preset) => EditorState::from_preset(preset),
                None => {
                    tracing::debug!(idx, "ignoring open for stale row");
                    return EditorOpen::StaleIndex;
                }
            },
        };
        let (editor, warnings) = EditorWindow::new(state, &mut self.fonts);
        self.editor = Some(editor);
        for msg in warnings {
            self.warn(msg);
        }
        EditorOpen::Opened
    }

    pub fn open_selected(&mut self) -> EditorOpen {
        match self.selected {
            Some(idx) => self.open_editor(Some(idx)),
            None => EditorOpen::StaleIndex,
        }
    }

    /// Delete the selected row. A stale selection is a no-op.
    pub fn delete_selected(&mut self) -> Option<Preset> {
        let idx = self.selected.take()?;
        self.registry.delete(idx)
    }

    fn load_fonts_for(&mut self, preset: &Preset) {
        for group in DigitGroup::ALL {
            if let FontChoice::File(path) = &preset.layout(group).font.choice {
                if let Err(e) = self.fonts.load(path) {
                    self.warn(format!("Font not loaded: {e:#}"));
                }
            }
        }
    }

    /// Start a display from a preset snapshot and return its id.
    pub fn launch(&mut self, preset: Preset, now: Instant) -> Option<u64> {
        if let Err(e) = preset.validate() {
            self.warn(format!("Cannot start timer: {e}"));
            return None;
        }
        self.load_fonts_for(&preset);
        let backdrop = match preset.background.as_ref().map(media::load_background) {
            Some(Ok(b)) => Some(BackdropView::new(b, now)),
            Some(Err(e)) => {
                self.warn(format!("Background not shown: {e:#}"));
                None
            }
            None => None,
        };
        if let Some(alarm) = &preset.alarm {
            if !alarm.exists() {
                self.warn(format!("Alarm file {} not found", alarm.display()));
            }
        }
        let id = self.next_display_id;
        self.next_display_id += 1;
        let display = ActiveDisplay::new(id, preset, now);
        let tray = if self.settings.show_tray_icon && tray::is_supported() {
            match DisplayTray::new(id, &display.tooltip()) {
                Ok(t) => Some(t),
                Err(e) => {
                    self.warn(format!("Tray icon unavailable: {e:#}"));
                    None
                }
            }
        } else {
            None
        };
        self.displays.push(DisplayWindow::new(display, backdrop, tray));
        Some(id)
    }

    pub fn handle_editor_action(&mut self, action: EditorAction, now: Instant) {
        match action {
            EditorAction::Run(preset) => {
                self.launch(preset, now);
            }
            EditorAction::Save { preset, replace } => {
                if let Err(e) = preset.validate() {
                    self.warn(format!("Cannot save timer: {e}"));
                    return;
                }
                let name = if replace {
                    let name = preset.name.clone();
                    self.registry.replace_or_add(preset);
                    name
                } else {
                    self.registry.add(preset)
                };
                if let Some(editor) = &mut self.editor {
                    editor.state_mut().bind(name.clone());
                }
                self.selected = None;
                self.add_toast(ToastKind::Success, format!("Saved {name}"));
            }
            EditorAction::Warning(msg) => self.warn(msg),
            EditorAction::Close => {
                tracing::debug!("editor closed");
                self.editor = None;
            }
        }
    }

    pub fn handle_tray_command(&mut self, command: TrayCommand) {
        let (id, show) = match command {
            TrayCommand::Show(id) => (id, true),
            TrayCommand::Stop(id) => (id, false),
        };
        let Some(window) = self.displays.iter_mut().find(|w| w.display().id() == id) else {
            tracing::debug!(id, "tray command for a closed display");
            return;
        };
        if show {
            window.display_mut().show();
        } else {
            window.display_mut().stop();
        }
    }

    fn on_completed(&mut self, name: String, alarm: Option<PathBuf>) {
        self.completion_dialog
            .open_message(format!("{name}: {COMPLETION_MESSAGE}"));
        self.add_toast(ToastKind::Info, format!("{COMPLETION_TITLE}: {name}"));
        if let Some(path) = alarm {
            if let Err(e) = self.player.play(&path) {
                self.warn(format!("Alarm not played: {e:#}"));
            }
        }
    }

    /// Advance every running display and drop the closed ones.
    pub fn poll_displays(&mut self, now: Instant) {
        let mut completed = Vec::new();
        for window in &mut self.displays {
            match window.display_mut().poll(now) {
                Some(DisplayEvent::Ticked(_)) => window.sync_tray(),
                Some(DisplayEvent::Completed { alarm }) => {
                    window.sync_tray();
                    completed.push((window.display().preset().name.clone(), alarm));
                }
                None => {}
            }
        }
        for (name, alarm) in completed {
            self.on_completed(name, alarm);
        }
        self.displays.retain(|w| !w.display().is_closed());
    }

    fn next_repaint(&self, now: Instant) -> Duration {
        self.displays
            .iter()
            .filter_map(|w| w.display().until_next_tick(now))
            .min()
            .unwrap_or(Duration::from_secs(1))
    }

    fn preset_list(&mut self, ui: &mut egui::Ui) {
        let mut open = None;
        egui::ScrollArea::vertical()
            .max_height(ui.available_height() - 160.0)
            .show(ui, |ui| {
                for (idx, label) in self.registry.rows().into_iter().enumerate() {
                    let resp = ui.selectable_label(self.selected == Some(idx), label);
                    if resp.clicked() {
                        self.selected = Some(idx);
                    }
                    if resp.double_clicked() {
                        open = Some(idx);
                    }
                }
            });
        if let Some(idx) = open {
            self.open_editor(Some(idx));
        }
        ui.horizontal(|ui| {
            if ui.button("Create New Timer").clicked() {
                self.open_editor(None);
            }
            if ui
                .add_enabled(self.selected.is_some(), egui::Button::new("Open"))
                .clicked()
            {
                self.open_selected();
            }
            if ui
                .add_enabled(self.selected.is_some(), egui::Button::new("Delete"))
                .clicked()
            {
                self.delete_selected();
            }
        });
    }

    fn running_list(&mut self, ui: &mut egui::Ui) {
        if self.displays.is_empty() {
            return;
        }
        ui.separator();
        ui.label("Running");
        for window in &mut self.displays {
            let display = window.display();
            let id = display.id();
            let text = format!("{} - {}", display.preset().name, display.tooltip());
            let visible = display.is_visible();
            ui.horizontal(|ui| {
                ui.label(text);
                if !visible && ui.button("Show Timer").clicked() {
                    window.display_mut().show();
                }
                if visible && ui.button("Hide").clicked() {
                    window.display_mut().hide();
                }
                if ui.button("Stop Timer").clicked() {
                    tracing::debug!(id, "stop requested from main window");
                    window.display_mut().stop();
                }
            });
        }
    }
}

impl eframe::App for CountdownerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.fonts.apply(ctx);
        for cmd in tray::poll_commands() {
            self.handle_tray_command(cmd);
        }
        self.poll_displays(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("COUNTDOWNER").size(30.0));
                ui.label("MY TIMERS");
            });
            self.preset_list(ui);
            self.running_list(ui);
        });

        if let Some(editor) = &mut self.editor {
            let actions = editor.show(
                ctx,
                &mut self.fonts,
                self.picker.as_ref(),
                self.settings.font_point_size,
            );
            for action in actions {
                self.handle_editor_action(action, now);
            }
        }

        let always_on_top = self.settings.display_always_on_top;
        for window in &mut self.displays {
            window.show(ctx, &self.fonts, always_on_top);
        }

        self.completion_dialog.ui(ctx);
        if self.settings.enable_toasts {
            self.toasts.show(ctx);
        }
        ctx.request_repaint_after(self.next_repaint(now));
    }
}
