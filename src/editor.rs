//! State behind the editor window.
//!
//! The editor either starts fresh or is bound to an existing preset by name.
//! All values live in the three [`DraggableInput`]s plus the optional
//! background and alarm; [`EditorState::snapshot`] turns them into a
//! [`Preset`].

use crate::common::file_dialog::{FilePicker, AUDIO_FILTER, IMAGE_FILTER};
use crate::countdown::Hms;
use crate::draggable::DraggableInput;
use crate::preset::{Background, DigitGroup, FontChoice, FontSpec, Preset};
use std::path::PathBuf;

/// What pressing "Save" requires from the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    /// The editor is not bound to a preset yet; ask the user for a name and
    /// pass the answer to [`EditorState::named_snapshot`].
    NeedsName,
    /// Overwrite the registry entry with this preset's name.
    Replace(Preset),
}

#[derive(Debug, Clone)]
pub struct EditorState {
    inputs: [DraggableInput; 3],
    background: Option<Background>,
    alarm: Option<PathBuf>,
    bound_name: Option<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Fresh editor with all values at zero and default positions.
    pub fn new() -> Self {
        Self {
            inputs: DigitGroup::ALL.map(DraggableInput::new),
            background: None,
            alarm: None,
            bound_name: None,
        }
    }

    /// Editor restoring every field of `preset` and bound to its name.
    pub fn from_preset(preset: &Preset) -> Self {
        Self {
            inputs: DigitGroup::ALL
                .map(|g| DraggableInput::from_layout(g, g.pick(preset.duration), preset.layout(g))),
            background: preset.background.clone(),
            alarm: preset.alarm.clone(),
            bound_name: Some(preset.name.clone()),
        }
    }

    pub fn input(&self, group: DigitGroup) -> &DraggableInput {
        &self.inputs[group.index()]
    }

    pub fn input_mut(&mut self, group: DigitGroup) -> &mut DraggableInput {
        &mut self.inputs[group.index()]
    }

    pub fn inputs_mut(&mut self) -> impl Iterator<Item = &mut DraggableInput> {
        self.inputs.iter_mut()
    }

    pub fn duration(&self) -> Hms {
        Hms::new(
            self.input(DigitGroup::Hours).value(),
            self.input(DigitGroup::Minutes).value(),
            self.input(DigitGroup::Seconds).value(),
        )
    }

    pub fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    pub fn alarm(&self) -> Option<&PathBuf> {
        self.alarm.as_ref()
    }

    pub fn bound_name(&self) -> Option<&str> {
        self.bound_name.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.bound_name.is_some()
    }

    /// Bind the editor to `name` so later saves replace that entry.
    pub fn bind(&mut self, name: impl Into<String>) {
        self.bound_name = Some(name.into());
    }

    pub fn set_background(&mut self, path: impl Into<PathBuf>) {
        self.background = Some(Background::from_path(path));
    }

    pub fn clear_background(&mut self) {
        self.background = None;
    }

    pub fn set_alarm(&mut self, path: impl Into<PathBuf>) {
        self.alarm = Some(path.into());
    }

    pub fn clear_alarm(&mut self) {
        self.alarm = None;
    }

    /// Apply a font to one digit group at a fixed point size.
    pub fn set_font(&mut self, group: DigitGroup, choice: FontChoice, point_size: f32) {
        self.input_mut(group)
            .set_font(FontSpec::picked(choice, point_size));
    }

    /// Ask `picker` for an alarm sound. Cancelling keeps the current alarm.
    pub fn pick_alarm(&mut self, picker: &dyn FilePicker) -> bool {
        match picker.pick_file("Choose alarm sound", AUDIO_FILTER) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "alarm selected");
                self.set_alarm(path);
                true
            }
            None => false,
        }
    }

    /// Ask `picker` for a background image or GIF. Cancelling keeps the
    /// current background.
    pub fn pick_background(&mut self, picker: &dyn FilePicker) -> bool {
        match picker.pick_file("Choose background", IMAGE_FILTER) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "background selected");
                self.set_background(path);
                true
            }
            None => false,
        }
    }

    /// Preset built from the current values under `name`.
    pub fn snapshot(&self, name: impl Into<String>) -> Preset {
        Preset {
            name: name.into(),
            duration: self.duration(),
            layouts: self.inputs.each_ref().map(|i| i.layout()),
            background: self.background.clone(),
            alarm: self.alarm.clone(),
        }
    }

    /// Preset for launching a display straight from the editor.
    pub fn live_preset(&self) -> Preset {
        let name = match &self.bound_name {
            Some(name) => name.clone(),
            None => self.duration().to_string(),
        };
        self.snapshot(name)
    }

    pub fn save_request(&self) -> SaveRequest {
        match &self.bound_name {
            Some(name) => SaveRequest::Replace(self.snapshot(name.clone())),
            None => SaveRequest::NeedsName,
        }
    }

    /// Resolve the answer of the name prompt.
    ///
    /// `None` means the prompt was cancelled and nothing is saved. A blank
    /// name falls back to the `HH:MM:SS` form of the duration.
    pub fn named_snapshot(&self, answer: Option<&str>) -> Option<Preset> {
        let answer = answer?.trim();
        let name = if answer.is_empty() {
            self.duration().to_string()
        } else {
            answer.to_string()
        };
        Some(self.snapshot(name))
    }
}
