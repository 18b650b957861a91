use crate::draggable::{CursorHint, DragMode, DraggableInput, EDGE_MARGIN};
use crate::preset::Point;
use eframe::egui::{self, Align2, Color32, CursorIcon, Pos2, Rect, Sense, Stroke, Vec2};

fn cursor_icon(hint: CursorHint) -> Option<CursorIcon> {
    match hint {
        CursorHint::Default => None,
        CursorHint::Move => Some(CursorIcon::Move),
        CursorHint::ResizeHorizontal => Some(CursorIcon::ResizeHorizontal),
        CursorHint::ResizeVertical => Some(CursorIcon::ResizeVertical),
        CursorHint::ResizeDiagonal => Some(CursorIcon::ResizeNwSe),
    }
}

fn to_point(v: Vec2) -> Point {
    Point::new(v.x.round() as i32, v.y.round() as i32)
}

/// Translate a viewport-local position into screen coordinates.
fn global(ctx: &egui::Context, pos: Pos2) -> Point {
    let origin = ctx
        .input(|i| i.viewport().inner_rect.map(|r| r.min))
        .unwrap_or(Pos2::ZERO);
    to_point(pos.to_vec2() + origin.to_vec2())
}

/// Rects of the decrement and increment buttons inside `inner`.
fn step_button_rects(inner: Rect) -> (Rect, Rect) {
    let w = (inner.width() / 4.0).min(24.0);
    let minus = Rect::from_min_size(inner.min, Vec2::new(w, inner.height()));
    let plus = Rect::from_min_size(
        Pos2::new(inner.max.x - w, inner.min.y),
        Vec2::new(w, inner.height()),
    );
    (minus, plus)
}

fn control_rect(input: &DraggableInput, origin: Pos2) -> Rect {
    let pos = input.position();
    let size = input.size();
    Rect::from_min_size(
        origin + Vec2::new(pos.x as f32, pos.y as f32),
        Vec2::new(size.w as f32, size.h as f32),
    )
}

/// Draw `input` on the editor canvas whose top-left corner is `origin`.
///
/// The whole control is one drag surface: the edge strips resize it and the
/// interior moves it. The value is changed with the `-`/`+` buttons, which
/// only sense clicks and sit above the drag surface, or with the scroll wheel.
pub fn show(ui: &mut egui::Ui, input: &mut DraggableInput, origin: Pos2, font: egui::FontId) {
    let ctx = ui.ctx().clone();
    let rect = control_rect(input, origin);
    let id = ui.id().with(("digit_input", input.group()));
    let response = ui.interact(rect, id, Sense::drag());

    if response.drag_started() {
        if let Some(press) = ctx.input(|i| i.pointer.press_origin()) {
            input.press(to_point(press - rect.min), global(&ctx, press));
        }
    }
    if response.dragged() {
        if let Some(p) = ctx.input(|i| i.pointer.interact_pos()) {
            input.drag_to(global(&ctx, p));
        }
    }
    if response.drag_stopped() {
        input.release();
    }

    let hint = if input.mode() != DragMode::Idle {
        input.cursor()
    } else if response.hovered() {
        ctx.input(|i| i.pointer.hover_pos())
            .map(|p| input.hover_cursor(to_point(p - rect.min)))
            .unwrap_or_default()
    } else {
        CursorHint::Default
    };
    if let Some(icon) = cursor_icon(hint) {
        ctx.set_cursor_icon(icon);
    }

    if response.hovered() && input.mode() == DragMode::Idle {
        let scroll = ctx.input(|i| i.raw_scroll_delta.y);
        if scroll > 0.0 {
            input.set_value(input.value().saturating_add(1));
        } else if scroll < 0.0 {
            input.set_value(input.value().saturating_sub(1));
        }
    }

    // Position and size may have changed above.
    let rect = control_rect(input, origin);
    let stroke = if input.mode() == DragMode::Idle {
        Stroke::new(1.0, Color32::GRAY)
    } else {
        Stroke::new(2.0, Color32::LIGHT_BLUE)
    };
    ui.painter()
        .rect(rect, 4.0, Color32::from_black_alpha(96), stroke);

    let inner = rect.shrink(EDGE_MARGIN as f32);
    ui.painter().text(
        inner.center(),
        Align2::CENTER_CENTER,
        format!("{:02}", input.value()),
        font,
        Color32::WHITE,
    );

    let (minus, plus) = step_button_rects(inner);
    if ui
        .put(minus, egui::Button::new("-").min_size(minus.size()))
        .clicked()
    {
        input.set_value(input.value().saturating_sub(1));
    }
    if ui
        .put(plus, egui::Button::new("+").min_size(plus.size()))
        .clicked()
    {
        input.set_value(input.value().saturating_add(1));
    }
    response.on_hover_text(input.group().label());
}
