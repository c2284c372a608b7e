use crate::constants::{MAX_DATA_FILE_SIZE, SPAN_CACHE_SIZE};
use crate::error::SourceError;
use crate::resolver::FetchSpec;
use crate::search::{self, VerseMatch};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::BufReader,
    num::NonZeroUsize,
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::{debug, info, warn};

/// One verse as served by the data provider. `juz` and `page` place the
/// verse in the two whole-text division schemes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ayah {
    pub surah: u16,
    pub ayah: u16,
    pub arabic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub juz: u8,
    pub page: u16,
}

/// A thematic index entry mapping to related verses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: u16,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub verses: Vec<(u16, u16)>,
}

#[derive(Debug, Deserialize)]
struct Corpus {
    verses: Vec<Ayah>,
    #[serde(default)]
    themes: Vec<Theme>,
}

/// The content provider contract. The reader core only consumes verse
/// records; where they come from is the implementor's business.
pub trait VerseSource {
    /// Fetch verses for a resolved address. An empty result is reported as
    /// `SourceError::NoData` so callers can render an explicit no-data
    /// state instead of a blank page.
    fn fetch(&self, spec: &FetchSpec) -> Result<Vec<Ayah>, SourceError>;

    /// Theme reference list, consumed lazily by search autocomplete.
    /// Callers treat failure as non-fatal.
    fn themes(&self) -> Result<Vec<Theme>, SourceError>;

    /// Plain substring search over verse text fields.
    fn search_text(&self, query: &str) -> Result<Vec<VerseMatch>, SourceError>;
}

/// File-backed verse source: one JSON document holding the verse corpus
/// and the theme index, loaded once at startup. Span lookups are cached.
#[derive(Debug)]
pub struct JsonVerseSource {
    verses: Vec<Ayah>,
    themes: Vec<Theme>,
    span_cache: Arc<Mutex<LruCache<FetchSpec, Vec<Ayah>>>>,
}

impl JsonVerseSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        info!("Opening verse data file: {:?}", path);

        let metadata = std::fs::metadata(path)?;
        if metadata.len() > MAX_DATA_FILE_SIZE {
            return Err(SourceError::FileTooLarge {
                size: metadata.len(),
                max: MAX_DATA_FILE_SIZE,
            });
        }

        let file = File::open(path)?;
        let corpus: Corpus = serde_json::from_reader(BufReader::new(file))?;
        Self::from_corpus(corpus.verses, corpus.themes)
    }

    /// Build a source from records already in memory. Used by tests and by
    /// anything that fetches the corpus some other way.
    pub fn from_records(verses: Vec<Ayah>, themes: Vec<Theme>) -> Result<Self, SourceError> {
        Self::from_corpus(verses, themes)
    }

    fn from_corpus(verses: Vec<Ayah>, themes: Vec<Theme>) -> Result<Self, SourceError> {
        for v in &verses {
            if v.surah == 0 || v.surah > 114 {
                return Err(SourceError::InvalidRecord(format!(
                    "surah {} out of range",
                    v.surah
                )));
            }
            if v.juz == 0 || v.juz > 30 || v.page == 0 || v.page > 604 {
                return Err(SourceError::InvalidRecord(format!(
                    "verse {}:{} has juz {} page {}",
                    v.surah, v.ayah, v.juz, v.page
                )));
            }
        }

        info!("Loaded {} verses, {} themes", verses.len(), themes.len());

        let cache_size = NonZeroUsize::new(SPAN_CACHE_SIZE).unwrap();
        Ok(Self {
            verses,
            themes,
            span_cache: Arc::new(Mutex::new(LruCache::new(cache_size))),
        })
    }

    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }

    fn select(&self, spec: &FetchSpec) -> Vec<Ayah> {
        match spec {
            FetchSpec::SurahSpan { surah, start, len } => {
                let end = start + len - 1;
                self.verses
                    .iter()
                    .filter(|v| v.surah == *surah && v.ayah >= *start && v.ayah <= end)
                    .cloned()
                    .collect()
            }
            FetchSpec::Page(page) => {
                self.verses.iter().filter(|v| v.page == *page).cloned().collect()
            }
            FetchSpec::Juz(juz) => {
                self.verses.iter().filter(|v| v.juz == *juz).cloned().collect()
            }
            FetchSpec::Theme(id) => {
                let Some(theme) = self.themes.iter().find(|t| t.id == *id) else {
                    return Vec::new();
                };
                theme
                    .verses
                    .iter()
                    .filter_map(|(s, a)| {
                        self.verses.iter().find(|v| v.surah == *s && v.ayah == *a).cloned()
                    })
                    .collect()
            }
        }
    }
}

impl VerseSource for JsonVerseSource {
    fn fetch(&self, spec: &FetchSpec) -> Result<Vec<Ayah>, SourceError> {
        {
            let mut cache = self
                .span_cache
                .lock()
                .map_err(|_| SourceError::CacheLockError)?;
            if let Some(hit) = cache.get(spec) {
                debug!("Span {:?} served from cache", spec);
                return Ok(hit.clone());
            }
        }

        let verses = self.select(spec);
        if verses.is_empty() {
            warn!("No verses for {:?}", spec);
            return Err(SourceError::NoData);
        }

        let mut cache = self
            .span_cache
            .lock()
            .map_err(|_| SourceError::CacheLockError)?;
        cache.put(spec.clone(), verses.clone());
        Ok(verses)
    }

    fn themes(&self) -> Result<Vec<Theme>, SourceError> {
        Ok(self.themes.clone())
    }

    fn search_text(&self, query: &str) -> Result<Vec<VerseMatch>, SourceError> {
        let matches: Vec<VerseMatch> = self
            .verses
            .iter()
            .filter_map(|v| {
                search::match_verse(query, v).map(|(field, span)| VerseMatch {
                    ayah: v.clone(),
                    field,
                    span,
                })
            })
            .collect();
        Ok(matches)
    }
}
