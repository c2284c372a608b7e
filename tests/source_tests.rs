use mushaf::SourceError;
use mushaf::resolver::FetchSpec;
use mushaf::search::MatchField;
use mushaf::source::{Ayah, JsonVerseSource, Theme, VerseSource};
use std::path::PathBuf;
use tempfile::TempDir;

fn make_ayah(surah: u16, ayah: u16, juz: u8, page: u16) -> Ayah {
    Ayah {
        surah,
        ayah,
        arabic: format!("آية {} من سورة {}", ayah, surah),
        transliteration: Some(format!("ayat {} surat {}", ayah, surah)),
        translation: Some(format!("verse {} of chapter {}", ayah, surah)),
        notes: None,
        juz,
        page,
    }
}

fn sample_verses() -> Vec<Ayah> {
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
    verses
}

fn sample_themes() -> Vec<Theme> {
    vec![
        Theme {
            id: 1,
            name: "Sabar".to_string(),
            description: Some("Patience".to_string()),
            verses: vec![(2, 3), (1, 5)],
        },
        Theme {
            id: 12,
            name: "Doa".to_string(),
            description: None,
            verses: vec![(1, 6), (1, 7)],
        },
    ]
}

fn sample_source() -> JsonVerseSource {
    JsonVerseSource::from_records(sample_verses(), sample_themes()).unwrap()
}

fn write_data_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("quran.json");
    let doc = serde_json::json!({
        "verses": sample_verses(),
        "themes": sample_themes(),
    });
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();
    path
}

#[test]
fn test_open_loads_verses_and_themes_from_file() {
    let dir = TempDir::new().unwrap();
    let source = JsonVerseSource::open(&write_data_file(&dir)).unwrap();
    assert_eq!(source.verse_count(), 18);
    assert_eq!(source.themes().unwrap().len(), 2);
}

#[test]
fn test_open_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quran.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        JsonVerseSource::open(&path),
        Err(SourceError::Json(_))
    ));
}

#[test]
fn test_open_reports_missing_file_as_io_error() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        JsonVerseSource::open(&dir.path().join("absent.json")),
        Err(SourceError::Io(_))
    ));
}

#[test]
fn test_records_with_out_of_range_placement_are_rejected() {
    let mut verses = sample_verses();
    verses[0].juz = 0;
    assert!(matches!(
        JsonVerseSource::from_records(verses, vec![]),
        Err(SourceError::InvalidRecord(_))
    ));

    let mut verses = sample_verses();
    verses[0].page = 605;
    assert!(JsonVerseSource::from_records(verses, vec![]).is_err());

    let mut verses = sample_verses();
    verses[0].surah = 115;
    assert!(JsonVerseSource::from_records(verses, vec![]).is_err());
}

#[test]
fn test_fetch_surah_span_returns_verses_in_order() {
    let source = sample_source();
    let verses = source
        .fetch(&FetchSpec::SurahSpan { surah: 1, start: 2, len: 3 })
        .unwrap();
    assert_eq!(
        verses.iter().map(|v| v.ayah).collect::<Vec<_>>(),
        vec![2, 3, 4]
    );
}

#[test]
fn test_fetch_by_page_and_juz() {
    let source = sample_source();

    let page = source.fetch(&FetchSpec::Page(604)).unwrap();
    assert_eq!(page.len(), 6);
    assert!(page.iter().all(|v| v.surah == 114));

    let juz = source.fetch(&FetchSpec::Juz(1)).unwrap();
    assert_eq!(juz.len(), 12);
    assert!(juz.iter().all(|v| v.juz == 1));
}

#[test]
fn test_fetch_theme_follows_the_index_order() {
    let source = sample_source();
    let verses = source.fetch(&FetchSpec::Theme(1)).unwrap();
    assert_eq!(
        verses.iter().map(|v| (v.surah, v.ayah)).collect::<Vec<_>>(),
        vec![(2, 3), (1, 5)]
    );
}

#[test]
fn test_fetch_empty_selection_is_no_data() {
    let source = sample_source();
    assert!(matches!(
        source.fetch(&FetchSpec::Page(10)),
        Err(SourceError::NoData)
    ));
    assert!(matches!(
        source.fetch(&FetchSpec::Theme(999)),
        Err(SourceError::NoData)
    ));
}

#[test]
fn test_repeated_fetch_serves_identical_verses() {
    let source = sample_source();
    let spec = FetchSpec::SurahSpan { surah: 2, start: 1, len: 5 };
    let first = source.fetch(&spec).unwrap();
    let second = source.fetch(&spec).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_search_text_scans_the_whole_corpus() {
    let source = sample_source();
    let matches = source.search_text("chapter 114").unwrap();
    assert_eq!(matches.len(), 6);
    assert!(matches.iter().all(|m| m.field == MatchField::Translation));

    assert!(source.search_text("nothing here").unwrap().is_empty());
    assert!(source.search_text("   ").unwrap().is_empty());
}
