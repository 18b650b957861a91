//! Numeric spinner that can be moved and resized on the editor canvas.
//!
//! The control keeps a small drag state machine:
//!
//! * `Idle` until the pointer is pressed inside its bounds,
//! * `Moving` when the press landed in the interior,
//! * `Resizing` when the press landed on the right or bottom edge strip,
//!
//! and returns to `Idle` on release. Pointer deltas are measured in global
//! coordinates from the press position, so the result does not depend on how
//! often drag events arrive.

use crate::preset::{DigitGroup, DigitLayout, FontSpec, Point, Size, MIN_SIZE};

/// Width of the strips along the right and bottom edges that start a resize.
pub const EDGE_MARGIN: i32 = 10;
/// Numeral font size as a fraction of the control height.
pub const FONT_HEIGHT_RATIO: f32 = 0.6;

/// Font size used to draw a numeral: the picked point size if any, otherwise
/// a fixed fraction of the control height.
pub fn numeral_font_size(font: &FontSpec, size: Size) -> f32 {
    font.point_size.unwrap_or(size.h as f32 * FONT_HEIGHT_RATIO)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Bottom-right corner, resizes both axes.
    Corner,
    Right,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Move,
    Resize(ResizeEdge),
}

/// Classify a point given relative to the control's top-left corner.
///
/// Returns `None` when the point lies outside the control. Where the right and
/// bottom strips overlap the corner wins.
pub fn classify_hit(size: Size, local: Point) -> Option<Hit> {
    if local.x < 0 || local.y < 0 || local.x > size.w || local.y > size.h {
        return None;
    }
    let on_right = local.x >= size.w - EDGE_MARGIN;
    let on_bottom = local.y >= size.h - EDGE_MARGIN;
    let hit = if on_right && on_bottom {
        Hit::Resize(ResizeEdge::Corner)
    } else if on_right {
        Hit::Resize(ResizeEdge::Right)
    } else if on_bottom {
        Hit::Resize(ResizeEdge::Bottom)
    } else {
        Hit::Move
    };
    Some(hit)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    #[default]
    Idle,
    Moving,
    Resizing(ResizeEdge),
}

/// Pointer cursor the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Move,
    ResizeHorizontal,
    ResizeVertical,
    ResizeDiagonal,
}

impl From<Hit> for CursorHint {
    fn from(hit: Hit) -> Self {
        match hit {
            Hit::Move => CursorHint::Move,
            Hit::Resize(ResizeEdge::Corner) => CursorHint::ResizeDiagonal,
            Hit::Resize(ResizeEdge::Right) => CursorHint::ResizeHorizontal,
            Hit::Resize(ResizeEdge::Bottom) => CursorHint::ResizeVertical,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Grab {
    pointer: Point,
    position: Point,
    size: Size,
}

#[derive(Debug, Clone)]
pub struct DraggableInput {
    group: DigitGroup,
    value: u32,
    position: Point,
    size: Size,
    font: FontSpec,
    mode: DragMode,
    grab: Option<Grab>,
}

impl DraggableInput {
    pub fn new(group: DigitGroup) -> Self {
        Self::from_layout(group, 0, &DigitLayout::at(group.default_position()))
    }

    pub fn from_layout(group: DigitGroup, value: u32, layout: &DigitLayout) -> Self {
        Self {
            group,
            value: value.min(group.max_value()),
            position: layout.position,
            size: layout.size.clamp_min(),
            font: layout.font.clone(),
            mode: DragMode::Idle,
            grab: None,
        }
    }

    pub fn group(&self) -> DigitGroup {
        self.group
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Set the value, clamped to the group's range.
    pub fn set_value(&mut self, value: u32) {
        self.value = value.min(self.group.max_value());
    }

    pub fn max_value(&self) -> u32 {
        self.group.max_value()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size.clamp_min();
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    pub fn layout(&self) -> DigitLayout {
        DigitLayout {
            position: self.position,
            size: self.size,
            font: self.font.clone(),
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn numeral_font_size(&self) -> f32 {
        numeral_font_size(&self.font, self.size)
    }

    /// Cursor for a pointer hovering at `local` while no drag is active.
    pub fn hover_cursor(&self, local: Point) -> CursorHint {
        match self.mode {
            DragMode::Idle => classify_hit(self.size, local)
                .map(CursorHint::from)
                .unwrap_or_default(),
            _ => self.cursor(),
        }
    }

    /// Cursor for the current drag mode.
    pub fn cursor(&self) -> CursorHint {
        match self.mode {
            DragMode::Idle => CursorHint::Default,
            DragMode::Moving => CursorHint::Move,
            DragMode::Resizing(edge) => Hit::Resize(edge).into(),
        }
    }

    /// Start a drag. `local` is relative to the control's top-left corner,
    /// `global` is the same pointer position in screen coordinates.
    pub fn press(&mut self, local: Point, global: Point) -> DragMode {
        let Some(hit) = classify_hit(self.size, local) else {
            return self.mode;
        };
        self.mode = match hit {
            Hit::Move => DragMode::Moving,
            Hit::Resize(edge) => DragMode::Resizing(edge),
        };
        self.grab = Some(Grab {
            pointer: global,
            position: self.position,
            size: self.size,
        });
        tracing::debug!(group = ?self.group, mode = ?self.mode, "drag started");
        self.mode
    }

    /// Apply the pointer movement since [`press`](Self::press).
    pub fn drag_to(&mut self, global: Point) {
        let Some(grab) = self.grab else {
            return;
        };
        let dx = global.x.saturating_sub(grab.pointer.x);
        let dy = global.y.saturating_sub(grab.pointer.y);
        match self.mode {
            DragMode::Idle => {}
            DragMode::Moving => {
                self.position = Point::new(
                    grab.position.x.saturating_add(dx),
                    grab.position.y.saturating_add(dy),
                );
            }
            DragMode::Resizing(edge) => {
                let mut size = grab.size;
                if matches!(edge, ResizeEdge::Corner | ResizeEdge::Right) {
                    size.w = grab.size.w.saturating_add(dx).max(MIN_SIZE.w);
                }
                if matches!(edge, ResizeEdge::Corner | ResizeEdge::Bottom) {
                    size.h = grab.size.h.saturating_add(dy).max(MIN_SIZE.h);
                }
                self.size = size;
            }
        }
    }

    pub fn release(&mut self) {
        if self.mode != DragMode::Idle {
            tracing::debug!(
                group = ?self.group,
                x = self.position.x,
                y = self.position.y,
                w = self.size.w,
                h = self.size.h,
                "drag finished"
            );
        }
        self.mode = DragMode::Idle;
        self.grab = None;
    }
}
