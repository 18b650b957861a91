//! Timer preset data model.
//!
//! A [`Preset`] is a plain value: the editor produces snapshots of it, the
//! registry stores them and every running display keeps its own frozen copy.

use crate::countdown::Hms;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MAX_HOURS: u32 = 999;
pub const MAX_MINUTES: u32 = 59;
pub const MAX_SECONDS: u32 = 59;

/// Smallest size a digit control can be resized to.
pub const MIN_SIZE: Size = Size { w: 50, h: 40 };
pub const DEFAULT_SIZE: Size = Size { w: 100, h: 60 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    pub fn clamp_min(self) -> Self {
        Self {
            w: self.w.max(MIN_SIZE.w),
            h: self.h.max(MIN_SIZE.h),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        DEFAULT_SIZE
    }
}

/// One of the three digit groups of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitGroup {
    Hours,
    Minutes,
    Seconds,
}

impl DigitGroup {
    pub const ALL: [DigitGroup; 3] = [DigitGroup::Hours, DigitGroup::Minutes, DigitGroup::Seconds];

    pub fn label(self) -> &'static str {
        match self {
            DigitGroup::Hours => "Hours",
            DigitGroup::Minutes => "Minutes",
            DigitGroup::Seconds => "Seconds",
        }
    }

    pub fn max_value(self) -> u32 {
        match self {
            DigitGroup::Hours => MAX_HOURS,
            DigitGroup::Minutes => MAX_MINUTES,
            DigitGroup::Seconds => MAX_SECONDS,
        }
    }

    pub fn default_position(self) -> Point {
        match self {
            DigitGroup::Hours => Point::new(50, 100),
            DigitGroup::Minutes => Point::new(200, 100),
            DigitGroup::Seconds => Point::new(350, 100),
        }
    }

    pub fn index(self) -> usize {
        match self {
            DigitGroup::Hours => 0,
            DigitGroup::Minutes => 1,
            DigitGroup::Seconds => 2,
        }
    }

    /// Value of this group within `hms`.
    pub fn pick(self, hms: Hms) -> u32 {
        match self {
            DigitGroup::Hours => hms.hours,
            DigitGroup::Minutes => hms.minutes,
            DigitGroup::Seconds => hms.seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FontChoice {
    #[default]
    Proportional,
    Monospace,
    /// A `.ttf`/`.otf` font loaded from disk.
    File(PathBuf),
}

impl FontChoice {
    pub fn label(&self) -> String {
        match self {
            FontChoice::Proportional => "Proportional".into(),
            FontChoice::Monospace => "Monospace".into(),
            FontChoice::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// Font of a digit group.
///
/// `point_size` is `None` until a font is explicitly picked; until then the
/// numeral size follows the control height.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontSpec {
    pub choice: FontChoice,
    pub point_size: Option<f32>,
}

impl FontSpec {
    pub fn picked(choice: FontChoice, point_size: f32) -> Self {
        Self {
            choice,
            point_size: Some(point_size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Static,
    Animated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub path: PathBuf,
    pub kind: BackgroundKind,
}

impl Background {
    /// Classify `path` by extension: `.gif` (any case) plays as an animation,
    /// everything else renders as a static image.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = if is_gif(&path) {
            BackgroundKind::Animated
        } else {
            BackgroundKind::Static
        };
        Self { path, kind }
    }
}

fn is_gif(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("gif"))
        .unwrap_or(false)
}

/// Position, size and font of one digit group.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitLayout {
    pub position: Point,
    pub size: Size,
    pub font: FontSpec,
}

impl DigitLayout {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            size: DEFAULT_SIZE,
            font: FontSpec::default(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PresetError {
    #[error("hours must be between 0 and 999, got {0}")]
    HoursOutOfRange(u32),
    #[error("minutes must be between 0 and 59, got {0}")]
    MinutesOutOfRange(u32),
    #[error("seconds must be between 0 and 59, got {0}")]
    SecondsOutOfRange(u32),
    #[error("{group:?} control is {}x{}, smaller than the minimum 50x40", .size.w, .size.h)]
    SizeBelowMinimum { group: DigitGroup, size: Size },
    #[error("preset name must not be empty")]
    EmptyName,
}

/// A named timer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub duration: Hms,
    pub layouts: [DigitLayout; 3],
    pub background: Option<Background>,
    pub alarm: Option<PathBuf>,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            name: String::new(),
            duration: Hms::default(),
            layouts: DigitGroup::ALL.map(|g| DigitLayout::at(g.default_position())),
            background: None,
            alarm: None,
        }
    }
}

impl Preset {
    pub fn layout(&self, group: DigitGroup) -> &DigitLayout {
        &self.layouts[group.index()]
    }

    pub fn layout_mut(&mut self, group: DigitGroup) -> &mut DigitLayout {
        &mut self.layouts[group.index()]
    }

    pub fn total_secs(&self) -> u64 {
        self.duration.total_secs()
    }

    /// Name used when the user confirms an empty name.
    pub fn default_name(&self) -> String {
        self.duration.to_string()
    }

    /// Text shown for this preset in the main list.
    pub fn row_label(&self) -> String {
        format!("{} ({})", self.name, self.duration)
    }

    pub fn validate(&self) -> Result<(), PresetError> {
        if self.name.trim().is_empty() {
            return Err(PresetError::EmptyName);
        }
        if self.duration.hours > MAX_HOURS {
            return Err(PresetError::HoursOutOfRange(self.duration.hours));
        }
        if self.duration.minutes > MAX_MINUTES {
            return Err(PresetError::MinutesOutOfRange(self.duration.minutes));
        }
        if self.duration.seconds > MAX_SECONDS {
            return Err(PresetError::SecondsOutOfRange(self.duration.seconds));
        }
        for group in DigitGroup::ALL {
            let size = self.layout(group).size;
            if size.w < MIN_SIZE.w || size.h < MIN_SIZE.h {
                return Err(PresetError::SizeBelowMinimum { group, size });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gif_detection_ignores_case() {
        assert_eq!(Background::from_path("a/b.GIF").kind, BackgroundKind::Animated);
        assert_eq!(Background::from_path("a/b.gif").kind, BackgroundKind::Animated);
        assert_eq!(Background::from_path("a/b.png").kind, BackgroundKind::Static);
        assert_eq!(Background::from_path("gif").kind, BackgroundKind::Static);
    }

    #[test]
    fn default_layout_positions() {
        let p = Preset::default();
        assert_eq!(p.layout(DigitGroup::Hours).position, Point::new(50, 100));
        assert_eq!(p.layout(DigitGroup::Minutes).position, Point::new(200, 100));
        assert_eq!(p.layout(DigitGroup::Seconds).position, Point::new(350, 100));
    }
}
