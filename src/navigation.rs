use crate::constants::{DEFAULT_SPAN, JUZ_COUNT, PAGE_COUNT, SURAH_COUNT, THEME_COUNT};
use crate::metadata;
use crate::resolver::{FetchSpec, NavigationMode};

/// Explicit navigation state. Transitions are plain methods on this value,
/// so prev/next/mode-switch logic is testable without a terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    mode: NavigationMode,
    surah: u16,
    ayah: u16,
    span: u16,
    page: u16,
    juz: u8,
    theme: u16,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            mode: NavigationMode::Surah,
            surah: 1,
            ayah: 1,
            span: DEFAULT_SPAN,
            page: 1,
            juz: 1,
            theme: 1,
        }
    }

    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    pub fn surah(&self) -> u16 {
        self.surah
    }

    pub fn ayah(&self) -> u16 {
        self.ayah
    }

    pub fn page(&self) -> u16 {
        self.page
    }

    pub fn juz(&self) -> u8 {
        self.juz
    }

    pub fn theme(&self) -> u16 {
        self.theme
    }

    /// Switching modes resets the entering mode's position to its floor.
    /// Positions are deliberately not preserved across modes.
    pub fn switch_mode(&mut self, mode: NavigationMode) {
        self.mode = mode;
        match mode {
            NavigationMode::Surah => {
                self.surah = 1;
                self.ayah = 1;
            }
            NavigationMode::Page => self.page = 1,
            NavigationMode::Juz => self.juz = 1,
            NavigationMode::Theme => self.theme = 1,
        }
    }

    /// Jump to an absolute position in the current mode, clamping into
    /// range. Used after a search selection or a validated goto.
    pub fn jump_to_surah(&mut self, surah: u16, ayah: u16) {
        self.mode = NavigationMode::Surah;
        self.surah = surah.clamp(1, SURAH_COUNT);
        let max = metadata::ayah_count(self.surah).unwrap_or(1);
        self.ayah = ayah.clamp(1, max);
    }

    pub fn jump_to_page(&mut self, page: u16) {
        self.mode = NavigationMode::Page;
        self.page = page.clamp(1, PAGE_COUNT);
    }

    pub fn jump_to_juz(&mut self, juz: u8) {
        self.mode = NavigationMode::Juz;
        self.juz = juz.clamp(1, JUZ_COUNT);
    }

    pub fn jump_to_theme(&mut self, theme: u16) {
        self.mode = NavigationMode::Theme;
        self.theme = theme.clamp(1, THEME_COUNT);
    }

    pub fn set_span(&mut self, span: u16) {
        self.span = span.clamp(1, crate::constants::MAX_SPAN);
    }

    /// Step backwards. In surah mode this walks ayah by ayah, rolling into
    /// the previous surah's last ayah; other modes decrement their single
    /// scalar. At the floor this is a silent no-op.
    pub fn previous(&mut self) {
        match self.mode {
            NavigationMode::Surah => {
                if self.ayah > 1 {
                    self.ayah -= 1;
                } else if self.surah > 1 {
                    self.surah -= 1;
                    self.ayah = metadata::ayah_count(self.surah).unwrap_or(1);
                }
            }
            NavigationMode::Page => {
                if self.page > 1 {
                    self.page -= 1;
                }
            }
            NavigationMode::Juz => {
                if self.juz > 1 {
                    self.juz -= 1;
                }
            }
            NavigationMode::Theme => {
                if self.theme > 1 {
                    self.theme -= 1;
                }
            }
        }
    }

    /// Step forwards; symmetric with `previous`, rolling at surah ends and
    /// stopping silently at 114:last / 604 / 30 / 1121.
    pub fn next(&mut self) {
        match self.mode {
            NavigationMode::Surah => {
                let max = metadata::ayah_count(self.surah).unwrap_or(1);
                if self.ayah < max {
                    self.ayah += 1;
                } else if self.surah < SURAH_COUNT {
                    self.surah += 1;
                    self.ayah = 1;
                }
            }
            NavigationMode::Page => {
                if self.page < PAGE_COUNT {
                    self.page += 1;
                }
            }
            NavigationMode::Juz => {
                if self.juz < JUZ_COUNT {
                    self.juz += 1;
                }
            }
            NavigationMode::Theme => {
                if self.theme < THEME_COUNT {
                    self.theme += 1;
                }
            }
        }
    }

    pub fn can_go_prev(&self) -> bool {
        match self.mode {
            NavigationMode::Surah => self.surah > 1 || self.ayah > 1,
            NavigationMode::Page => self.page > 1,
            NavigationMode::Juz => self.juz > 1,
            NavigationMode::Theme => self.theme > 1,
        }
    }

    pub fn can_go_next(&self) -> bool {
        match self.mode {
            NavigationMode::Surah => {
                let max = metadata::ayah_count(self.surah).unwrap_or(1);
                self.surah < SURAH_COUNT || self.ayah < max
            }
            NavigationMode::Page => self.page < PAGE_COUNT,
            NavigationMode::Juz => self.juz < JUZ_COUNT,
            NavigationMode::Theme => self.theme < THEME_COUNT,
        }
    }

    /// Fetch specification for the current position. Unlike the resolver's
    /// raw-parameter path this clamps the surah span to the surah's end,
    /// so interactive stepping near a boundary never errors.
    pub fn fetch_spec(&self) -> FetchSpec {
        match self.mode {
            NavigationMode::Surah => {
                let max = metadata::ayah_count(self.surah).unwrap_or(1);
                let len = self.span.min(max - self.ayah + 1);
                FetchSpec::SurahSpan { surah: self.surah, start: self.ayah, len }
            }
            NavigationMode::Page => FetchSpec::Page(self.page),
            NavigationMode::Juz => FetchSpec::Juz(self.juz),
            NavigationMode::Theme => FetchSpec::Theme(self.theme),
        }
    }

    /// Display header for the current position, e.g. "Al-Baqarah 2:1".
    pub fn position_label(&self) -> String {
        match self.mode {
            NavigationMode::Surah => {
                let name = metadata::surah(self.surah).map(|s| s.name).unwrap_or("?");
                format!("{} {}:{}", name, self.surah, self.ayah)
            }
            NavigationMode::Page => format!("Page {}/{}", self.page, PAGE_COUNT),
            NavigationMode::Juz => format!("Juz {}/{}", self.juz, JUZ_COUNT),
            NavigationMode::Theme => format!("Tema {}/{}", self.theme, THEME_COUNT),
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
