use mushaf::prefs::Preferences;
use mushaf::reading::{
    AutoScroll, FontScale, ScrollDirection, ScrollSpeed, TextCategory,
};
use mushaf::share::verse_share_text;
use mushaf::source::Ayah;
use std::time::Duration;
use tempfile::TempDir;

fn full_ayah() -> Ayah {
    Ayah {
        surah: 1,
        ayah: 1,
        arabic: "بِسْمِ اللَّهِ".to_string(),
        transliteration: Some("Bismillahi".to_string()),
        translation: Some("In the name of God".to_string()),
        notes: None,
        juz: 1,
        page: 1,
    }
}

#[test]
fn test_font_scale_steps_in_exact_tenths() {
    let mut scale = FontScale::new();
    assert!(scale.is_default());
    assert_eq!(scale.multiplier(), 1.0);

    scale.increase();
    assert_eq!(scale.tenths(), 11);
    assert_eq!(scale.size_for(TextCategory::Translation), 16.0 * 1.1);
}

#[test]
fn test_font_scale_clamps_at_both_ends() {
    let mut scale = FontScale::new();
    for _ in 0..50 {
        scale.increase();
    }
    assert_eq!(scale.multiplier(), 2.0);
    for _ in 0..50 {
        scale.decrease();
    }
    assert_eq!(scale.multiplier(), 0.6);
    scale.reset();
    assert!(scale.is_default());
}

#[test]
fn test_font_scale_from_tenths_clamps() {
    assert_eq!(FontScale::from_tenths(0).tenths(), 6);
    assert_eq!(FontScale::from_tenths(99).tenths(), 20);
    assert_eq!(FontScale::from_tenths(14).tenths(), 14);
}

#[test]
fn test_all_categories_scale_by_the_same_multiplier() {
    let scale = FontScale::from_tenths(15);
    for cat in [
        TextCategory::Arabic,
        TextCategory::Translation,
        TextCategory::Transliteration,
        TextCategory::Annotation,
    ] {
        assert_eq!(scale.size_for(cat), cat.base_size() * 1.5);
        assert_eq!(scale.line_height_for(cat), cat.base_line_height() * 1.5);
    }
}

#[test]
fn test_autoscroll_toggle_and_cycle() {
    let mut auto = AutoScroll::new();
    assert!(!auto.playing);
    assert_eq!(auto.speed, ScrollSpeed::Medium);
    assert_eq!(auto.direction, ScrollDirection::Down);

    auto.toggle();
    assert!(auto.playing);

    auto.cycle_speed();
    assert_eq!(auto.speed, ScrollSpeed::Fast);
    auto.cycle_speed();
    assert_eq!(auto.speed, ScrollSpeed::Slow);
    auto.cycle_speed();
    assert_eq!(auto.speed, ScrollSpeed::Medium);

    auto.toggle_direction();
    assert_eq!(auto.direction, ScrollDirection::Up);

    auto.reset();
    assert_eq!(auto, AutoScroll::new());
}

#[test]
fn test_scroll_speed_intervals_are_ordered() {
    assert!(ScrollSpeed::Fast.interval() < ScrollSpeed::Medium.interval());
    assert!(ScrollSpeed::Medium.interval() < ScrollSpeed::Slow.interval());
    assert_eq!(ScrollSpeed::Medium.interval(), Duration::from_millis(300));
}

#[test]
fn test_share_text_includes_all_present_sections() {
    let text = verse_share_text(&full_ayah(), "Al-Fatihah");
    let sections: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(sections.len(), 4);
    assert_eq!(sections[1], "Bismillahi");
    assert_eq!(sections[3], "(Al-Fatihah, Ayat 1)");
}

#[test]
fn test_share_text_omits_absent_sections() {
    let mut ayah = full_ayah();
    ayah.transliteration = None;
    ayah.translation = None;
    let text = verse_share_text(&ayah, "Al-Fatihah");
    let sections: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(sections.len(), 2);
    assert!(!text.contains("\n\n\n"));
}

#[test]
fn test_preferences_roundtrip_through_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");

    let prefs = Preferences {
        font_scale_tenths: Some(14),
        scroll_speed: Some(ScrollSpeed::Fast),
        scroll_direction: Some(ScrollDirection::Up),
        sidebar_collapsed: Some(true),
    };
    prefs.save_to(&path);
    assert_eq!(Preferences::load_from(&path), prefs);
}

#[test]
fn test_preferences_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let prefs = Preferences::load_from(&dir.path().join("nope.toml"));
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn test_preferences_malformed_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "font_scale_tenths = \"loud\"").unwrap();
    assert_eq!(Preferences::load_from(&path), Preferences::default());
}
