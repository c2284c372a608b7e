use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    SurahOutOfRange(u16),
    AyahOutOfRange { surah: u16, ayah: u16, max: u16 },
    SpanOutOfRange(u16),
    SpanPastEnd { surah: u16, ayah: u16, span: u16, max: u16 },
    PageOutOfRange(u16),
    JuzOutOfRange(u8),
    ThemeOutOfRange(u16),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::SurahOutOfRange(n) => {
                write!(f, "Surah {} is out of range (1-114)", n)
            }
            NavError::AyahOutOfRange { surah, ayah, max } => {
                write!(f, "Ayah {} is out of range for surah {} (1-{})", ayah, surah, max)
            }
            NavError::SpanOutOfRange(span) => {
                write!(f, "Span {} is out of range (1-30)", span)
            }
            NavError::SpanPastEnd { surah, ayah, span, max } => {
                write!(
                    f,
                    "Ayat {}-{} run past the end of surah {} ({} ayat)",
                    ayah,
                    ayah + span - 1,
                    surah,
                    max
                )
            }
            NavError::PageOutOfRange(p) => {
                write!(f, "Page {} is out of range (1-604)", p)
            }
            NavError::JuzOutOfRange(j) => {
                write!(f, "Juz {} is out of range (1-30)", j)
            }
            NavError::ThemeOutOfRange(t) => {
                write!(f, "Theme {} is out of range (1-1121)", t)
            }
        }
    }
}

impl std::error::Error for NavError {}

#[derive(Debug)]
pub enum SourceError {
    Io(std::io::Error),
    Json(serde_json::Error),
    FileTooLarge { size: u64, max: u64 },
    InvalidRecord(String),
    NoData,
    CacheLockError,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io(err) => write!(f, "IO error: {}", err),
            SourceError::Json(err) => write!(f, "JSON parsing error: {}", err),
            SourceError::FileTooLarge { size, max } => {
                write!(f, "Data file too large: {} bytes (max: {} bytes)", size, max)
            }
            SourceError::InvalidRecord(detail) => {
                write!(f, "Invalid verse record: {}", detail)
            }
            SourceError::NoData => write!(f, "No verses found for the requested range"),
            SourceError::CacheLockError => write!(f, "Failed to acquire cache lock"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(err) => Some(err),
            SourceError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        SourceError::Io(err)
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Json(err)
    }
}

#[derive(Debug)]
pub enum ShareError {
    ClipboardUnavailable(String),
    WriteFailed(std::io::Error),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::ClipboardUnavailable(detail) => {
                write!(f, "Clipboard unavailable: {}", detail)
            }
            ShareError::WriteFailed(err) => write!(f, "Copy fallback failed: {}", err),
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShareError::WriteFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShareError {
    fn from(err: std::io::Error) -> Self {
        ShareError::WriteFailed(err)
    }
}

#[derive(Debug)]
pub enum UiError {
    Terminal(Box<dyn std::error::Error + Send + Sync>),
    Source(SourceError),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Terminal(err) => write!(f, "Terminal error: {}", err),
            UiError::Source(err) => write!(f, "Source error: {}", err),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::Terminal(err) => Some(err.as_ref()),
            UiError::Source(err) => Some(err),
        }
    }
}

impl From<SourceError> for UiError {
    fn from(err: SourceError) -> Self {
        UiError::Source(err)
    }
}

impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        UiError::Terminal(Box::new(err))
    }
}
