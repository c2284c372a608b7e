use crate::constants::{
    DEBOUNCE_MS, MAX_SEARCH_RESULTS, MIN_OVERLAP_QUERY_LEN, OVERLAP_DISCOUNT, OVERLAP_FLOOR,
    SCORE_THRESHOLD, TIER_HIGH, TIER_MID,
};
use crate::metadata::{SURAHS, Surah};
use crate::source::Ayah;
use std::collections::HashSet;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Transliteration prefixes stripped once at the start of a name. Order
/// matters only for documentation; the trailing hyphen keeps "ash-" from
/// colliding with "as-".
const ARTICLE_PREFIXES: [&str; 8] = ["al-", "an-", "ar-", "as-", "at-", "az-", "ash-", "ad-"];

/// Digraphs and doubled vowels collapsed globally so common spelling
/// variants ("Taha"/"Thaahaa") normalize to the same string.
const COLLAPSES: [(&str, &str); 9] = [
    ("aa", "a"),
    ("ii", "i"),
    ("uu", "u"),
    ("kh", "h"),
    ("gh", "g"),
    ("sh", "s"),
    ("th", "t"),
    ("dh", "d"),
    ("zh", "z"),
];

/// Normalize a surah name (or a query against one) for comparison:
/// lowercase, strip one leading article prefix, drop apostrophes and
/// hyphens, collapse digraphs.
pub fn clean_surah_name(name: &str) -> String {
    let mut s = name.trim().to_lowercase();

    for prefix in ARTICLE_PREFIXES {
        if let Some(rest) = s.strip_prefix(prefix) {
            s = rest.to_string();
            break;
        }
    }

    s.retain(|c| !matches!(c, '\'' | '`' | '\u{2019}' | '-'));

    for (from, to) in COLLAPSES {
        s = s.replace(from, to);
    }

    s.trim().to_string()
}

/// Layered surah-name scorer, 0-100. The first applicable rule wins;
/// rules are never combined. This single function backs both the
/// as-you-type pane and the submitted search, so the two paths cannot
/// diverge.
pub fn score_surah_name(query: &str, name: &str, number: u16) -> u8 {
    let q = clean_surah_name(query);
    let n = clean_surah_name(name);

    if q.is_empty() {
        return 0;
    }
    if q == n {
        return 100;
    }
    if query.trim() == number.to_string() {
        return 95;
    }
    if let Some(pos) = n.find(&q) {
        // Earlier occurrences score higher; deep matches bottom out at 0
        // and fall under the relevance threshold.
        return (90i32 - 2 * pos as i32).max(0) as u8;
    }
    if n.starts_with(&q) {
        return 85;
    }
    if n.split_whitespace().any(|word| word.starts_with(q.as_str())) {
        return 75;
    }

    let q_len = q.chars().count();
    if q_len < 3 {
        return 0;
    }
    if q_len >= MIN_OVERLAP_QUERY_LEN {
        let distinct: HashSet<char> = q.chars().collect();
        let found = distinct.iter().filter(|c| n.contains(**c)).count();
        let overlap = found as f32 / q_len as f32 * 100.0;
        if overlap > OVERLAP_FLOOR {
            // A weak signal, deliberately discounted.
            return (overlap * OVERLAP_DISCOUNT) as u8;
        }
    }

    0
}

/// Relevance tiers order results before raw score does: a 79 in the mid
/// tier never outranks an 80 in the high tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelevanceTier {
    Low,
    Mid,
    High,
}

pub fn tier_for(score: u8) -> Option<RelevanceTier> {
    if score >= TIER_HIGH {
        Some(RelevanceTier::High)
    } else if score >= TIER_MID {
        Some(RelevanceTier::Mid)
    } else if score >= SCORE_THRESHOLD {
        Some(RelevanceTier::Low)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct SurahMatch {
    pub surah: &'static Surah,
    pub score: u8,
    pub tier: RelevanceTier,
}

/// Score the query against all 114 surah names, filter below threshold,
/// and rank by tier, then score, then ordinal.
pub fn search_surahs(query: &str) -> Vec<SurahMatch> {
    let mut matches: Vec<SurahMatch> = SURAHS
        .iter()
        .filter_map(|s| {
            let score = score_surah_name(query, s.name, s.number);
            tier_for(score).map(|tier| SurahMatch { surah: s, score, tier })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.tier
            .cmp(&a.tier)
            .then(b.score.cmp(&a.score))
            .then(a.surah.number.cmp(&b.surah.number))
    });
    matches.truncate(MAX_SEARCH_RESULTS);
    matches
}

/// Which verse field a plain-text match landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Transliteration,
    Translation,
    Arabic,
}

#[derive(Debug, Clone)]
pub struct VerseMatch {
    pub ayah: Ayah,
    pub field: MatchField,
    pub span: Range<usize>,
}

fn find_ci(haystack: &str, needle_lower: &str) -> Option<Range<usize>> {
    let lower = haystack.to_lowercase();
    // Byte offsets in the lowercased copy only index the original safely
    // when lowercasing is length-preserving, which holds for the Latin
    // and Arabic text handled here; fall back to the whole field if not.
    let pos = lower.find(needle_lower)?;
    if lower.len() == haystack.len() {
        Some(pos..pos + needle_lower.len())
    } else {
        Some(0..haystack.len())
    }
}

/// Case-insensitive substring containment over a verse's text fields.
/// Independent of the fuzzy surah-name scorer; returns the first matching
/// field with the byte range to highlight.
pub fn match_verse(query: &str, ayah: &Ayah) -> Option<(MatchField, Range<usize>)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(t) = &ayah.transliteration {
        if let Some(span) = find_ci(t, &needle) {
            return Some((MatchField::Transliteration, span));
        }
    }
    if let Some(t) = &ayah.translation {
        if let Some(span) = find_ci(t, &needle) {
            return Some((MatchField::Translation, span));
        }
    }
    if let Some(span) = find_ci(&ayah.arabic, &needle) {
        return Some((MatchField::Arabic, span));
    }
    None
}

/// Collapses a burst of keystrokes into one scoring pass. The clock is
/// passed in, so the window logic is testable without sleeping.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_window(window: Duration) -> Self {
        Self { window, pending: None }
    }

    /// Record a keystroke; any earlier pending query is discarded.
    pub fn submit(&mut self, query: &str, now: Instant) {
        self.pending = Some((query.to_string(), now));
    }

    /// Yield the final query once its window has elapsed.
    pub fn take_ready(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, at)) if now.duration_since(*at) >= self.window => {
                self.pending.take().map(|(q, _)| q)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
