use mushaf::SURAHS;
use mushaf::search::{
    Debouncer, MatchField, RelevanceTier, clean_surah_name, match_verse, score_surah_name,
    search_surahs, tier_for,
};
use mushaf::source::Ayah;
use std::time::{Duration, Instant};

fn test_ayah() -> Ayah {
    Ayah {
        surah: 1,
        ayah: 1,
        arabic: "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ".to_string(),
        transliteration: Some("Bismillahi rahmani rahim".to_string()),
        translation: Some("In the name of God, the Merciful".to_string()),
        notes: None,
        juz: 1,
        page: 1,
    }
}

#[test]
fn test_clean_strips_article_prefix() {
    assert_eq!(clean_surah_name("Al-Baqarah"), clean_surah_name("baqarah"));
    assert_eq!(clean_surah_name("An-Nisa'"), "nisa");
    assert_eq!(clean_surah_name("  AL-FATIHAH  "), "fatihah");
}

#[test]
fn test_clean_collapses_digraphs_and_doubled_vowels() {
    assert_eq!(clean_surah_name("Thaahaa"), clean_surah_name("Ta-Ha"));
    assert_eq!(clean_surah_name("Yaasiin"), clean_surah_name("Ya-Sin"));
    assert_eq!(clean_surah_name("Ash-Shu'ara'"), "suara");
}

#[test]
fn test_every_surah_name_matches_itself_exactly() {
    for s in SURAHS.iter() {
        assert_eq!(
            score_surah_name(s.name, s.name, s.number),
            100,
            "self-match failed for {}",
            s.name
        );
    }
}

#[test]
fn test_numeric_query_scores_95() {
    assert_eq!(score_surah_name("36", "Ya-Sin", 36), 95);
    assert_eq!(score_surah_name(" 36 ", "Ya-Sin", 36), 95);
    assert_ne!(score_surah_name("36", "Al-Baqarah", 2), 95);
}

#[test]
fn test_substring_position_penalty() {
    // "qar" sits at position 2 in the cleaned "baqarah".
    assert_eq!(score_surah_name("qar", "Al-Baqarah", 2), 86);
    // Position 0 is the strongest substring hit.
    assert_eq!(score_surah_name("baq", "Al-Baqarah", 2), 90);
}

#[test]
fn test_short_nonmatching_queries_score_zero() {
    assert_eq!(score_surah_name("xy", "Al-Baqarah", 2), 0);
    assert_eq!(score_surah_name("", "Al-Baqarah", 2), 0);
}

#[test]
fn test_scrambled_spelling_is_discounted_below_threshold() {
    // "baqoroh" shares most characters with "baqarah" but is not a
    // substring; the overlap rule discounts it under the cutoff.
    let score = score_surah_name("baqoroh", "Al-Baqarah", 2);
    assert!(score < 30, "got {}", score);
    assert!(tier_for(score).is_none());
    assert!(
        !search_surahs("baqoroh").iter().any(|m| m.surah.number == 2)
    );
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(tier_for(100), Some(RelevanceTier::High));
    assert_eq!(tier_for(80), Some(RelevanceTier::High));
    assert_eq!(tier_for(79), Some(RelevanceTier::Mid));
    assert_eq!(tier_for(60), Some(RelevanceTier::Mid));
    assert_eq!(tier_for(59), Some(RelevanceTier::Low));
    assert_eq!(tier_for(30), Some(RelevanceTier::Low));
    assert_eq!(tier_for(29), None);
}

#[test]
fn test_results_ranked_by_tier_then_score_then_ordinal() {
    let results = search_surahs("al");
    assert!(!results.is_empty());
    assert!(results.len() <= 20);
    for pair in results.windows(2) {
        let order = pair[1]
            .tier
            .cmp(&pair[0].tier)
            .then(pair[1].score.cmp(&pair[0].score))
            .then(pair[0].surah.number.cmp(&pair[1].surah.number));
        assert_ne!(order, std::cmp::Ordering::Greater);
    }
}

#[test]
fn test_exact_name_ranks_first() {
    let results = search_surahs("Ya-Sin");
    assert_eq!(results[0].surah.number, 36);
    assert_eq!(results[0].score, 100);
}

#[test]
fn test_verse_match_prefers_transliteration() {
    let ayah = test_ayah();
    let (field, span) = match_verse("bismi", &ayah).unwrap();
    assert_eq!(field, MatchField::Transliteration);
    assert_eq!(span, 0..5);
}

#[test]
fn test_verse_match_falls_through_to_translation() {
    let ayah = test_ayah();
    let (field, _) = match_verse("merciful", &ayah).unwrap();
    assert_eq!(field, MatchField::Translation);
}

#[test]
fn test_verse_match_none_when_absent() {
    let ayah = test_ayah();
    assert!(match_verse("zzz", &ayah).is_none());
    assert!(match_verse("   ", &ayah).is_none());
}

#[test]
fn test_debouncer_collapses_a_burst_into_one_firing() {
    let start = Instant::now();
    let mut deb = Debouncer::with_window(Duration::from_millis(300));

    deb.submit("b", start);
    deb.submit("ba", start + Duration::from_millis(100));
    deb.submit("baq", start + Duration::from_millis(200));

    assert!(deb.take_ready(start + Duration::from_millis(350)).is_none());
    assert_eq!(
        deb.take_ready(start + Duration::from_millis(500)),
        Some("baq".to_string())
    );
    // Fires at most once per burst.
    assert!(deb.take_ready(start + Duration::from_millis(900)).is_none());
    assert!(!deb.is_pending());
}

#[test]
fn test_debouncer_cancel_discards_pending_query() {
    let start = Instant::now();
    let mut deb = Debouncer::with_window(Duration::from_millis(300));
    deb.submit("nisa", start);
    deb.cancel();
    assert!(deb.take_ready(start + Duration::from_millis(500)).is_none());
}
