pub mod constants;
pub mod error;
pub mod metadata;
pub mod navigation;
pub mod prefs;
pub mod reading;
pub mod resolver;
pub mod search;
pub mod share;
pub mod source;
pub mod ui;

pub use error::{NavError, ShareError, SourceError, UiError};
pub use metadata::{RevelationPlace, SURAHS, Surah};
pub use navigation::NavigationState;
pub use resolver::{FetchSpec, NavigationContext, NavigationMode, RawParams, Resolution, resolve};
pub use source::{Ayah, JsonVerseSource, Theme, VerseSource};
pub use ui::App;
