use countdowner::countdown::Hms;
use countdowner::preset::{DigitGroup, Point, Preset};
use countdowner::registry::Registry;

fn preset(name: &str, h: u32, m: u32, s: u32) -> Preset {
    Preset {
        name: name.into(),
        duration: Hms::new(h, m, s),
        ..Preset::default()
    }
}

#[test]
fn save_new_appends_row() {
    let mut reg = Registry::new();
    let stored = reg.add(preset("tea", 0, 3, 0));
    assert_eq!(stored, "tea");
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.rows(), vec!["tea (00:03:00)".to_string()]);
}

#[test]
fn empty_name_falls_back_to_duration() {
    let mut reg = Registry::new();
    let mut p = preset("", 0, 30, 0);
    p.name = p.default_name();
    reg.add(p);
    assert_eq!(reg.get(0).map(|p| p.name.as_str()), Some("00:30:00"));
}

#[test]
fn saving_edited_preset_moves_it_to_the_end() {
    let mut reg = Registry::new();
    reg.add(preset("A", 0, 1, 0));
    reg.add(preset("B", 0, 2, 0));
    reg.add(preset("C", 0, 3, 0));
    reg.replace_or_add(preset("A", 0, 5, 0));
    let names: Vec<_> = reg.iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, ["B", "C", "A"]);
    assert_eq!(reg.get(2).map(|p| p.duration), Some(Hms::new(0, 5, 0)));
}

#[test]
fn repeated_save_is_idempotent() {
    let mut reg = Registry::new();
    reg.add(preset("A", 0, 1, 0));
    let mut edited = preset("A", 1, 0, 0);
    edited.layout_mut(DigitGroup::Seconds).position = Point::new(5, 6);
    reg.replace_or_add(edited.clone());
    let once: Vec<_> = reg.iter().cloned().collect();
    reg.replace_or_add(edited);
    let twice: Vec<_> = reg.iter().cloned().collect();
    assert_eq!(once, twice);
    assert_eq!(reg.len(), 1);
}

#[test]
fn replace_without_match_appends() {
    let mut reg = Registry::new();
    reg.add(preset("A", 0, 1, 0));
    reg.replace_or_add(preset("Z", 0, 1, 0));
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.position("Z"), Some(1));
}

#[test]
fn delete_selected_row_keeps_order() {
    let mut reg = Registry::new();
    reg.add(preset("A", 0, 1, 0));
    reg.add(preset("B", 0, 2, 0));
    reg.add(preset("C", 0, 3, 0));
    let removed = reg.delete(1);
    assert_eq!(removed.map(|p| p.name), Some("B".to_string()));
    let names: Vec<_> = reg.iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, ["A", "C"]);
    assert_eq!(reg.rows().len(), reg.len());
}

#[test]
fn stale_index_is_ignored() {
    let mut reg = Registry::new();
    reg.add(preset("A", 0, 1, 0));
    assert!(reg.delete(3).is_none());
    assert!(reg.get(3).is_none());
    assert_eq!(reg.len(), 1);
}

#[test]
fn duplicate_names_are_disambiguated() {
    let mut reg = Registry::new();
    assert_eq!(reg.add(preset("tea", 0, 3, 0)), "tea");
    assert_eq!(reg.add(preset("tea", 0, 4, 0)), "tea (2)");
    assert_eq!(reg.add(preset("tea", 0, 5, 0)), "tea (3)");
    assert!(reg.contains("tea (2)"));
    assert_eq!(reg.len(), 3);
}

#[test]
fn lunch_save_edit_delete() {
    let mut reg = Registry::new();
    let lunch = preset("Lunch", 0, 30, 0);
    assert_eq!(lunch.layout(DigitGroup::Hours).position, Point::new(50, 100));
    reg.add(lunch);
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.get(0).map(Preset::total_secs), Some(1800));

    reg.replace_or_add(preset("Lunch", 0, 45, 0));
    assert_eq!(reg.len(), 1);
    assert_eq!(reg.rows().len(), 1);
    assert_eq!(reg.get(0).map(Preset::total_secs), Some(2700));

    assert!(reg.delete(0).is_some());
    assert!(reg.is_empty());
    assert!(reg.rows().is_empty());
    assert!(reg.get(0).is_none());
    assert!(reg.delete(0).is_none());
}
