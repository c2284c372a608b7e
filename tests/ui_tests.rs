use mushaf::prefs::Preferences;
use mushaf::reading::{ScrollDirection, ScrollSpeed};
use mushaf::resolver::{FetchSpec, NavigationMode, RawParams, resolve};
use mushaf::search::VerseMatch;
use mushaf::source::{Ayah, JsonVerseSource, Theme, VerseSource};
use mushaf::ui::{App, DisplayState};
use mushaf::{NavError, SourceError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn make_ayah(surah: u16, ayah: u16, juz: u8, page: u16) -> Ayah {
    Ayah {
        surah,
        ayah,
        arabic: format!("آية {}", ayah),
        transliteration: Some(format!("ayat {} surat {}", ayah, surah)),
        translation: Some(format!("verse {} of chapter {}", ayah, surah)),
        notes: None,
        juz,
        page,
    }
}

fn test_source() -> JsonVerseSource {
    let mut verses = Vec::new();
    for a in 1..=7 {
        verses.push(make_ayah(1, a, 1, 1));
    }
    for a in 1..=5 {
        verses.push(make_ayah(2, a, 1, 2));
    }
    for a in 1..=6 {
        verses.push(make_ayah(114, a, 30, 604));
    }
    let themes = vec![Theme {
        id: 12,
        name: "Doa".to_string(),
        description: None,
        verses: vec![(1, 6), (1, 7)],
    }];
    JsonVerseSource::from_records(verses, themes).unwrap()
}

fn test_app() -> App<JsonVerseSource> {
    App::with_preferences(test_source(), Preferences::default())
}

/// Delegates fetches but fails every theme lookup, counting the attempts.
struct BrokenThemeSource {
    inner: JsonVerseSource,
    theme_calls: Arc<AtomicUsize>,
}

impl VerseSource for BrokenThemeSource {
    fn fetch(&self, spec: &FetchSpec) -> Result<Vec<Ayah>, SourceError> {
        self.inner.fetch(spec)
    }

    fn themes(&self) -> Result<Vec<Theme>, SourceError> {
        self.theme_calls.fetch_add(1, Ordering::SeqCst);
        Err(SourceError::InvalidRecord("theme index unavailable".to_string()))
    }

    fn search_text(&self, query: &str) -> Result<Vec<VerseMatch>, SourceError> {
        self.inner.search_text(query)
    }
}

#[test]
fn test_app_loads_the_default_position_on_startup() {
    let app = test_app();
    assert_eq!(*app.display_state(), DisplayState::Content);
    assert_eq!(app.nav().mode(), NavigationMode::Surah);
    assert_eq!((app.nav().surah(), app.nav().ayah()), (1, 1));
    assert_eq!(
        app.verses().iter().map(|v| v.ayah).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn test_next_steps_the_ayah_and_refetches() {
    let mut app = test_app();
    app.navigate_next();
    assert_eq!(app.nav().ayah(), 2);
    assert_eq!(
        app.verses().iter().map(|v| v.ayah).collect::<Vec<_>>(),
        vec![2, 3, 4, 5, 6]
    );
}

#[test]
fn test_span_clamps_at_the_surah_end() {
    let mut app = test_app();
    for _ in 0..6 {
        app.navigate_next();
    }
    assert_eq!(app.nav().ayah(), 7);
    assert_eq!(
        app.verses().iter().map(|v| v.ayah).collect::<Vec<_>>(),
        vec![7]
    );
}

#[test]
fn test_previous_at_the_start_leaves_everything_unchanged() {
    let mut app = test_app();
    let before = app.verses().to_vec();
    app.navigate_previous();
    assert_eq!((app.nav().surah(), app.nav().ayah()), (1, 1));
    assert_eq!(app.verses(), &before[..]);
}

#[test]
fn test_mode_switch_resets_to_the_mode_floor() {
    let mut app = test_app();
    app.select_mode(NavigationMode::Page);
    assert_eq!(app.nav().page(), 1);
    assert_eq!(*app.display_state(), DisplayState::Content);
    assert_eq!(app.verses().len(), 7);
    assert!(app.verses().iter().all(|v| v.page == 1));
}

#[test]
fn test_cli_resolution_is_applied_verbatim() {
    let mut app = test_app();
    let raw = RawParams { page: Some("604".into()), ..RawParams::default() };
    let res = resolve(NavigationMode::Page, &raw).unwrap();
    app.select_mode(NavigationMode::Page);
    app.apply_resolution(&res);
    assert_eq!(app.nav().page(), 604);
    assert_eq!(app.verses().len(), 6);
    assert!(app.verses().iter().all(|v| v.surah == 114));
}

#[test]
fn test_theme_fetch_follows_the_index_order() {
    let mut app = test_app();
    let raw = RawParams { theme: Some("12".into()), ..RawParams::default() };
    let res = resolve(NavigationMode::Theme, &raw).unwrap();
    app.select_mode(NavigationMode::Theme);
    app.apply_resolution(&res);
    assert_eq!(
        app.verses().iter().map(|v| (v.surah, v.ayah)).collect::<Vec<_>>(),
        vec![(1, 6), (1, 7)]
    );
}

#[test]
fn test_missing_content_renders_the_no_data_state() {
    let mut app = test_app();
    let raw = RawParams { page: Some("10".into()), ..RawParams::default() };
    let res = resolve(NavigationMode::Page, &raw).unwrap();
    app.select_mode(NavigationMode::Page);
    app.apply_resolution(&res);
    assert_eq!(*app.display_state(), DisplayState::NoData);
    assert!(app.verses().is_empty());

    // Reload against the same position stays in the no-data state.
    app.reload();
    assert_eq!(*app.display_state(), DisplayState::NoData);
}

#[test]
fn test_failed_theme_fetch_is_retried_on_the_next_search() {
    let theme_calls = Arc::new(AtomicUsize::new(0));
    let source = BrokenThemeSource {
        inner: test_source(),
        theme_calls: Arc::clone(&theme_calls),
    };
    let mut app = App::with_preferences(source, Preferences::default());

    app.open_search_pane();
    assert_eq!(theme_calls.load(Ordering::SeqCst), 1);

    // The failure must not be cached as an empty theme list.
    app.open_search_pane();
    assert_eq!(theme_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_explicit_preferences_are_applied() {
    let prefs = Preferences {
        font_scale_tenths: Some(14),
        scroll_speed: Some(ScrollSpeed::Fast),
        scroll_direction: Some(ScrollDirection::Up),
        sidebar_collapsed: Some(true),
    };
    let app = App::with_preferences(test_source(), prefs);
    assert_eq!(app.font_scale().tenths(), 14);
    assert_eq!(app.auto_scroll().speed, ScrollSpeed::Fast);
    assert_eq!(app.auto_scroll().direction, ScrollDirection::Up);
}

#[test]
fn test_scrolling_is_bounded_and_rebounds_on_reload() {
    let mut app = test_app();
    for _ in 0..100 {
        app.scroll_down();
    }
    let stopped = app.scroll_offset();
    assert!(stopped > 0, "content taller than a page should scroll");
    app.scroll_down();
    assert_eq!(app.scroll_offset(), stopped);

    app.scroll_up();
    assert_eq!(app.scroll_offset(), stopped - 1);

    // A shorter page recomputes the bound; no leftover scroll range.
    let raw = RawParams { page: Some("10".into()), ..RawParams::default() };
    let res = resolve(NavigationMode::Page, &raw).unwrap();
    app.select_mode(NavigationMode::Page);
    app.apply_resolution(&res);
    assert_eq!(*app.display_state(), DisplayState::NoData);
    for _ in 0..10 {
        app.scroll_down();
    }
    assert_eq!(app.scroll_offset(), 0);
}

#[test]
fn test_validation_errors_render_instead_of_failing() {
    let mut app = test_app();
    app.show_validation_error(NavError::PageOutOfRange(605));
    assert_eq!(
        *app.display_state(),
        DisplayState::Invalid(NavError::PageOutOfRange(605))
    );
    assert!(app.verses().is_empty());

    // Navigation out of the invalid state recovers normally.
    app.reload();
    assert_eq!(*app.display_state(), DisplayState::Content);
}
