use countdowner::countdown::{CountdownState, Hms};
use countdowner::display::{ActiveDisplay, DisplayEvent, DisplayText, MIN_WINDOW};
use countdowner::preset::{DigitGroup, Point, Preset, Size};
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn preset(secs: u32, alarm: Option<&str>) -> Preset {
    Preset {
        name: "t".into(),
        duration: Hms::new(0, 0, secs),
        alarm: alarm.map(PathBuf::from),
        ..Preset::default()
    }
}

#[test]
fn ten_second_display_completes_once() {
    let t0 = Instant::now();
    let mut d = ActiveDisplay::new(1, preset(10, Some("bell.wav")), t0);
    assert_eq!(d.text(), DisplayText::Digits(Hms::new(0, 0, 10)));
    let mut completions = 0;
    for k in 1..=12u64 {
        match d.poll(t0 + Duration::from_secs(k)) {
            Some(DisplayEvent::Completed { alarm }) => {
                assert_eq!(k, 10);
                assert_eq!(alarm, Some(PathBuf::from("bell.wav")));
                completions += 1;
            }
            Some(DisplayEvent::Ticked(hms)) => assert_eq!(hms.total_secs(), 10 - k),
            None => assert!(k > 10),
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(d.text(), DisplayText::Done);
    assert_eq!(d.tooltip(), "Timer: Done!");
    assert!(d.until_next_tick(t0).is_none());
}

#[test]
fn done_text_uses_hours_slot_only() {
    assert_eq!(DisplayText::Done.label(DigitGroup::Hours).as_deref(), Some("Done!"));
    assert!(DisplayText::Done.label(DigitGroup::Minutes).is_none());
    assert!(DisplayText::Done.label(DigitGroup::Seconds).is_none());
    let digits = DisplayText::Digits(Hms::new(1, 2, 3));
    assert_eq!(digits.label(DigitGroup::Minutes).as_deref(), Some("02"));
}

#[test]
fn zero_duration_completes_on_first_tick() {
    let t0 = Instant::now();
    let mut d = ActiveDisplay::new(1, preset(0, None), t0);
    assert!(d.poll(t0).is_none());
    assert_eq!(
        d.poll(t0 + Duration::from_secs(1)),
        Some(DisplayEvent::Completed { alarm: None })
    );
}

#[test]
fn stop_cancels_without_completion() {
    let t0 = Instant::now();
    let mut d = ActiveDisplay::new(3, preset(5, Some("bell.wav")), t0);
    d.poll(t0 + Duration::from_secs(1));
    d.stop();
    assert!(d.is_closed());
    assert_eq!(d.countdown().state(), CountdownState::Cancelled);
    assert!(d.poll(t0 + Duration::from_secs(10)).is_none());
}

#[test]
fn hidden_display_keeps_counting() {
    let t0 = Instant::now();
    let mut d = ActiveDisplay::new(1, preset(5, None), t0);
    d.hide();
    assert!(!d.is_visible());
    d.poll(t0 + Duration::from_secs(1));
    d.poll(t0 + Duration::from_secs(2));
    assert_eq!(d.tooltip(), "Timer: 00:00:03");
    d.show();
    assert!(d.is_visible());
}

#[test]
fn display_is_independent_of_later_preset_edits() {
    let t0 = Instant::now();
    let mut p = preset(5, None);
    let d = ActiveDisplay::new(1, p.clone(), t0);
    p.duration = Hms::new(1, 0, 0);
    p.layout_mut(DigitGroup::Hours).position = Point::new(0, 0);
    assert_eq!(d.preset().duration, Hms::new(0, 0, 5));
    assert_eq!(d.preset().layout(DigitGroup::Hours).position, Point::new(50, 100));
}

#[test]
fn window_covers_digit_groups() {
    let t0 = Instant::now();
    let d = ActiveDisplay::new(1, preset(5, None), t0);
    // Seconds at (350, 100) with size 100x60.
    assert_eq!(d.window_size(), Size::new(470, 200));

    let mut p = preset(5, None);
    for g in DigitGroup::ALL {
        p.layout_mut(g).position = Point::new(0, 0);
    }
    let d = ActiveDisplay::new(2, p, t0);
    assert_eq!(d.window_size(), MIN_WINDOW);
}

#[test]
fn window_size_saturates_for_far_away_groups() {
    let mut p = preset(5, None);
    p.layout_mut(DigitGroup::Seconds).position = Point::new(i32::MAX - 10, i32::MAX);
    let d = ActiveDisplay::new(1, p, Instant::now());
    assert_eq!(d.window_size(), Size::new(i32::MAX, i32::MAX));
}
