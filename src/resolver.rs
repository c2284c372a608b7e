use crate::constants::{DEFAULT_SPAN, JUZ_COUNT, MAX_SPAN, PAGE_COUNT, THEME_COUNT};
use crate::error::NavError;
use crate::metadata;

/// The four mutually exclusive display modes. Search is a separate flow
/// that redirects into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationMode {
    Surah,
    Page,
    Juz,
    Theme,
}

impl NavigationMode {
    pub fn label(&self) -> &'static str {
        match self {
            NavigationMode::Surah => "Surat",
            NavigationMode::Page => "Page",
            NavigationMode::Juz => "Juz",
            NavigationMode::Theme => "Tema",
        }
    }
}

/// Raw, untyped navigation parameters as they arrive from the outside
/// (CLI flags, goto prompt). Parsing failures fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct RawParams {
    pub surah: Option<String>,
    pub ayah: Option<String>,
    pub span: Option<String>,
    pub page: Option<String>,
    pub juz: Option<String>,
    pub theme: Option<String>,
}

/// What the verse source is asked to return. Hashable so span results can
/// be cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FetchSpec {
    SurahSpan { surah: u16, start: u16, len: u16 },
    Page(u16),
    Juz(u8),
    Theme(u16),
}

/// Derived per request for display headers and prev/next bounds. A pure
/// function of (mode, params, reference tables); never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    pub mode: NavigationMode,
    pub surah: Option<u16>,
    pub ayah_start: Option<u16>,
    pub ayah_count: Option<u16>,
    pub page: Option<u16>,
    pub juz: Option<u8>,
    pub theme: Option<u16>,
    pub total_for_mode: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub context: NavigationContext,
    pub fetch: FetchSpec,
}

fn coerce(raw: &Option<String>, default: u16) -> u16 {
    raw.as_deref()
        .and_then(|v| v.trim().parse::<u16>().ok())
        .unwrap_or(default)
}

/// Validate raw parameters for the given mode and derive the display
/// context plus the fetch specification. Out-of-range values are rejected
/// rather than clamped so the caller can surface the error inline.
pub fn resolve(mode: NavigationMode, params: &RawParams) -> Result<Resolution, NavError> {
    match mode {
        NavigationMode::Surah => {
            let surah = coerce(&params.surah, 1);
            let ayah = coerce(&params.ayah, 1);
            let span = coerce(&params.span, DEFAULT_SPAN);

            let meta = metadata::surah(surah).ok_or(NavError::SurahOutOfRange(surah))?;
            if ayah == 0 || ayah > meta.ayah_count {
                return Err(NavError::AyahOutOfRange { surah, ayah, max: meta.ayah_count });
            }
            if span == 0 || span > MAX_SPAN {
                return Err(NavError::SpanOutOfRange(span));
            }
            if ayah + span - 1 > meta.ayah_count {
                return Err(NavError::SpanPastEnd { surah, ayah, span, max: meta.ayah_count });
            }

            Ok(Resolution {
                context: NavigationContext {
                    mode,
                    surah: Some(surah),
                    ayah_start: Some(ayah),
                    ayah_count: Some(span),
                    page: None,
                    juz: None,
                    theme: None,
                    total_for_mode: meta.ayah_count,
                },
                fetch: FetchSpec::SurahSpan { surah, start: ayah, len: span },
            })
        }
        NavigationMode::Page => {
            let page = coerce(&params.page, 1);
            if page == 0 || page > PAGE_COUNT {
                return Err(NavError::PageOutOfRange(page));
            }
            Ok(Resolution {
                context: NavigationContext {
                    mode,
                    surah: None,
                    ayah_start: None,
                    ayah_count: None,
                    page: Some(page),
                    juz: None,
                    theme: None,
                    total_for_mode: PAGE_COUNT,
                },
                fetch: FetchSpec::Page(page),
            })
        }
        NavigationMode::Juz => {
            let juz = coerce(&params.juz, 1);
            if juz == 0 || juz > JUZ_COUNT as u16 {
                return Err(NavError::JuzOutOfRange(juz.min(255) as u8));
            }
            let juz = juz as u8;
            Ok(Resolution {
                context: NavigationContext {
                    mode,
                    surah: None,
                    ayah_start: None,
                    ayah_count: None,
                    page: None,
                    juz: Some(juz),
                    theme: None,
                    total_for_mode: JUZ_COUNT as u16,
                },
                fetch: FetchSpec::Juz(juz),
            })
        }
        NavigationMode::Theme => {
            let theme = coerce(&params.theme, 1);
            if theme == 0 || theme > THEME_COUNT {
                return Err(NavError::ThemeOutOfRange(theme));
            }
            Ok(Resolution {
                context: NavigationContext {
                    mode,
                    surah: None,
                    ayah_start: None,
                    ayah_count: None,
                    page: None,
                    juz: None,
                    theme: Some(theme),
                    total_for_mode: THEME_COUNT,
                },
                fetch: FetchSpec::Theme(theme),
            })
        }
    }
}
