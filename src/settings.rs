use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Enable toast notifications in the main window.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Initial size of the main window. If absent, a default size is used.
    #[serde(default)]
    pub window_size: Option<(i32, i32)>,
    /// Keep countdown displays above other windows.
    #[serde(default = "default_true")]
    pub display_always_on_top: bool,
    /// Create a tray icon for each running countdown where supported.
    #[serde(default = "default_true")]
    pub show_tray_icon: bool,
    /// Point size applied when a font is picked for a digit group.
    #[serde(default = "default_font_point_size")]
    pub font_point_size: f32,
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_true() -> bool {
    true
}

fn default_font_point_size() -> f32 {
    30.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            window_size: None,
            display_always_on_top: true,
            show_tray_icon: true,
            font_point_size: default_font_point_size(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(settings.sanitized())
    }

    fn sanitized(mut self) -> Self {
        if !(self.toast_duration.is_finite() && self.toast_duration > 0.0) {
            self.toast_duration = default_toast_duration();
        }
        if !(self.font_point_size.is_finite() && self.font_point_size > 0.0) {
            self.font_point_size = default_font_point_size();
        }
        self
    }
}
