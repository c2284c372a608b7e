use crate::constants::{
    FONT_SCALE_DEFAULT_TENTHS, FONT_SCALE_MAX_TENTHS, FONT_SCALE_MIN_TENTHS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The four text categories scaled independently of each other's content
/// but by the same multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCategory {
    Arabic,
    Translation,
    Transliteration,
    Annotation,
}

impl TextCategory {
    pub fn base_size(&self) -> f32 {
        match self {
            TextCategory::Arabic => 28.0,
            TextCategory::Translation => 16.0,
            TextCategory::Transliteration => 15.0,
            TextCategory::Annotation => 13.0,
        }
    }

    pub fn base_line_height(&self) -> f32 {
        match self {
            TextCategory::Arabic => 2.2,
            TextCategory::Translation => 1.6,
            TextCategory::Transliteration => 1.6,
            TextCategory::Annotation => 1.4,
        }
    }
}

/// Single scalar multiplier in [0.6, 2.0], step 0.1. Stored as integer
/// tenths so repeated stepping stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    tenths: u8,
}

impl FontScale {
    pub fn new() -> Self {
        Self { tenths: FONT_SCALE_DEFAULT_TENTHS }
    }

    pub fn from_tenths(tenths: u8) -> Self {
        Self { tenths: tenths.clamp(FONT_SCALE_MIN_TENTHS, FONT_SCALE_MAX_TENTHS) }
    }

    pub fn tenths(&self) -> u8 {
        self.tenths
    }

    pub fn multiplier(&self) -> f32 {
        self.tenths as f32 / 10.0
    }

    pub fn increase(&mut self) {
        if self.tenths < FONT_SCALE_MAX_TENTHS {
            self.tenths += 1;
        }
    }

    pub fn decrease(&mut self) {
        if self.tenths > FONT_SCALE_MIN_TENTHS {
            self.tenths -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.tenths = FONT_SCALE_DEFAULT_TENTHS;
    }

    pub fn is_default(&self) -> bool {
        self.tenths == FONT_SCALE_DEFAULT_TENTHS
    }

    pub fn size_for(&self, category: TextCategory) -> f32 {
        category.base_size() * self.multiplier()
    }

    pub fn line_height_for(&self, category: TextCategory) -> f32 {
        category.base_line_height() * self.multiplier()
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollSpeed {
    Slow,
    Medium,
    Fast,
}

impl ScrollSpeed {
    pub fn interval(&self) -> Duration {
        match self {
            ScrollSpeed::Slow => Duration::from_millis(600),
            ScrollSpeed::Medium => Duration::from_millis(300),
            ScrollSpeed::Fast => Duration::from_millis(120),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ScrollSpeed::Slow => ScrollSpeed::Medium,
            ScrollSpeed::Medium => ScrollSpeed::Fast,
            ScrollSpeed::Fast => ScrollSpeed::Slow,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScrollSpeed::Slow => "slow",
            ScrollSpeed::Medium => "medium",
            ScrollSpeed::Fast => "fast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    pub fn flipped(&self) -> Self {
        match self {
            ScrollDirection::Up => ScrollDirection::Down,
            ScrollDirection::Down => ScrollDirection::Up,
        }
    }
}

/// Togglable continuous scroll. UI-local state; the event loop asks
/// `interval()` how often to step and `direction` which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoScroll {
    pub playing: bool,
    pub speed: ScrollSpeed,
    pub direction: ScrollDirection,
}

impl AutoScroll {
    pub fn new() -> Self {
        Self {
            playing: false,
            speed: ScrollSpeed::Medium,
            direction: ScrollDirection::Down,
        }
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.flipped();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn interval(&self) -> Duration {
        self.speed.interval()
    }
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::new()
    }
}
