use countdowner::draggable::{
    classify_hit, CursorHint, DragMode, DraggableInput, Hit, ResizeEdge, EDGE_MARGIN,
};
use countdowner::preset::{DigitGroup, FontChoice, FontSpec, Point, Size, MIN_SIZE};

fn input_at(x: i32, y: i32, w: i32, h: i32) -> DraggableInput {
    let mut input = DraggableInput::new(DigitGroup::Minutes);
    input.set_position(Point::new(x, y));
    input.set_size(Size::new(w, h));
    input
}

#[test]
fn classifies_edges_and_interior() {
    let size = Size::new(100, 60);
    assert_eq!(classify_hit(size, Point::new(50, 30)), Some(Hit::Move));
    assert_eq!(classify_hit(size, Point::new(0, 0)), Some(Hit::Move));
    assert_eq!(
        classify_hit(size, Point::new(95, 30)),
        Some(Hit::Resize(ResizeEdge::Right))
    );
    assert_eq!(
        classify_hit(size, Point::new(50, 55)),
        Some(Hit::Resize(ResizeEdge::Bottom))
    );
    assert_eq!(
        classify_hit(size, Point::new(95, 55)),
        Some(Hit::Resize(ResizeEdge::Corner))
    );
    assert_eq!(classify_hit(size, Point::new(101, 30)), None);
    assert_eq!(classify_hit(size, Point::new(-1, 30)), None);
}

#[test]
fn overlapping_strips_resolve_to_corner() {
    let size = Size::new(100, 60);
    let corner = Point::new(size.w - EDGE_MARGIN, size.h - EDGE_MARGIN);
    assert_eq!(
        classify_hit(size, corner),
        Some(Hit::Resize(ResizeEdge::Corner))
    );
}

#[test]
fn interior_drag_moves_control() {
    let mut input = input_at(50, 100, 100, 60);
    assert_eq!(
        input.press(Point::new(20, 20), Point::new(500, 500)),
        DragMode::Moving
    );
    input.drag_to(Point::new(530, 480));
    assert_eq!(input.position(), Point::new(80, 80));
    assert_eq!(input.size(), Size::new(100, 60));
    input.drag_to(Point::new(510, 505));
    assert_eq!(input.position(), Point::new(60, 105));
    input.release();
    assert_eq!(input.mode(), DragMode::Idle);
    assert_eq!(input.cursor(), CursorHint::Default);
}

#[test]
fn right_edge_resizes_width_only() {
    let mut input = input_at(0, 0, 100, 60);
    input.press(Point::new(95, 20), Point::new(95, 20));
    assert_eq!(input.mode(), DragMode::Resizing(ResizeEdge::Right));
    assert_eq!(input.cursor(), CursorHint::ResizeHorizontal);
    input.drag_to(Point::new(135, 80));
    assert_eq!(input.size(), Size::new(140, 60));
    assert_eq!(input.position(), Point::new(0, 0));
}

#[test]
fn corner_resizes_both_axes_and_scales_numerals() {
    let mut input = input_at(0, 0, 100, 60);
    input.press(Point::new(98, 58), Point::new(98, 58));
    assert_eq!(input.cursor(), CursorHint::ResizeDiagonal);
    input.drag_to(Point::new(118, 98));
    assert_eq!(input.size(), Size::new(120, 100));
    assert!((input.numeral_font_size() - 60.0).abs() < f32::EPSILON);
}

#[test]
fn resize_never_goes_below_minimum() {
    let mut input = input_at(10, 10, 100, 60);
    input.press(Point::new(99, 59), Point::new(0, 0));
    // Deterministic zig-zag of large and small deltas.
    let mut x: i32 = 0;
    let mut y: i32 = 0;
    for step in 0..200 {
        x += if step % 3 == 0 { -97 } else { 41 };
        y += if step % 5 == 0 { 63 } else { -88 };
        input.drag_to(Point::new(x, y));
        let size = input.size();
        assert!(size.w >= MIN_SIZE.w, "width {} at step {step}", size.w);
        assert!(size.h >= MIN_SIZE.h, "height {} at step {step}", size.h);
    }
    input.drag_to(Point::new(-10_000, -10_000));
    assert_eq!(input.size(), MIN_SIZE);
}

#[test]
fn press_outside_keeps_idle() {
    let mut input = input_at(0, 0, 100, 60);
    assert_eq!(input.press(Point::new(150, 10), Point::new(150, 10)), DragMode::Idle);
    input.drag_to(Point::new(300, 300));
    assert_eq!(input.position(), Point::new(0, 0));
}

#[test]
fn picked_font_overrides_height_based_size() {
    let mut input = input_at(0, 0, 100, 80);
    assert!((input.numeral_font_size() - 48.0).abs() < f32::EPSILON);
    input.set_font(FontSpec::picked(FontChoice::Monospace, 30.0));
    input.press(Point::new(50, 75), Point::new(50, 75));
    input.drag_to(Point::new(50, 175));
    assert_eq!(input.size().h, 180);
    assert_eq!(input.numeral_font_size(), 30.0);
}

#[test]
fn values_are_clamped_per_group() {
    let mut hours = DraggableInput::new(DigitGroup::Hours);
    hours.set_value(5000);
    assert_eq!(hours.value(), 999);
    let mut secs = DraggableInput::new(DigitGroup::Seconds);
    secs.set_value(75);
    assert_eq!(secs.value(), 59);
}

#[test]
fn hover_cursor_follows_zones() {
    let input = input_at(0, 0, 100, 60);
    assert_eq!(input.hover_cursor(Point::new(40, 20)), CursorHint::Move);
    assert_eq!(input.hover_cursor(Point::new(40, 55)), CursorHint::ResizeVertical);
    assert_eq!(input.hover_cursor(Point::new(400, 55)), CursorHint::Default);
}

#[test]
fn extreme_pointer_values_saturate() {
    let mut input = input_at(0, 0, 100, 60);
    input.press(Point::new(20, 20), Point::new(i32::MIN, i32::MIN));
    input.drag_to(Point::new(i32::MAX, i32::MAX));
    assert_eq!(input.position(), Point::new(i32::MAX, i32::MAX));
    input.release();

    let mut input = input_at(0, 0, 100, 60);
    input.press(Point::new(98, 58), Point::new(i32::MAX, i32::MAX));
    input.drag_to(Point::new(i32::MIN, i32::MIN));
    assert_eq!(input.size(), MIN_SIZE);
    input.release();

    let mut input = input_at(0, 0, 100, 60);
    input.press(Point::new(98, 58), Point::new(i32::MIN, i32::MIN));
    input.drag_to(Point::new(i32::MAX, i32::MAX));
    assert_eq!(input.size(), Size::new(i32::MAX, i32::MAX));
}
