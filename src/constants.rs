// Reference bounds
pub const SURAH_COUNT: u16 = 114;
pub const PAGE_COUNT: u16 = 604;
pub const JUZ_COUNT: u8 = 30;
pub const THEME_COUNT: u16 = 1121;

// Addressing defaults and limits
pub const DEFAULT_SPAN: u16 = 5;
pub const MAX_SPAN: u16 = 30;

// Fuzzy search
pub const SCORE_THRESHOLD: u8 = 30;
pub const TIER_MID: u8 = 60;
pub const TIER_HIGH: u8 = 80;
pub const MIN_OVERLAP_QUERY_LEN: usize = 4;
pub const OVERLAP_FLOOR: f32 = 60.0;
pub const OVERLAP_DISCOUNT: f32 = 0.3;
pub const DEBOUNCE_MS: u64 = 300;
pub const MAX_SEARCH_RESULTS: usize = 20;

// Font scaling, stored as integer tenths of the multiplier
pub const FONT_SCALE_MIN_TENTHS: u8 = 6;
pub const FONT_SCALE_MAX_TENTHS: u8 = 20;
pub const FONT_SCALE_DEFAULT_TENTHS: u8 = 10;

// UI
pub const HEADER_HEIGHT: usize = 3;
pub const FOOTER_HEIGHT: usize = 1;
pub const UI_RESERVED_HEIGHT: usize = HEADER_HEIGHT + FOOTER_HEIGHT + 1;
pub const DEFAULT_TERMINAL_HEIGHT: usize = 24;
pub const EVENT_POLL_MS: u64 = 50;
pub const ACK_MS: u64 = 1800;
pub const MAX_DISPLAY_LINE_LENGTH: usize = 80;
pub const ARABIC_BASE_WIDTH: usize = 72;

// Validation and limits
pub const MAX_DATA_FILE_SIZE: u64 = 64 * 1024 * 1024; // 64MB

// Caching
pub const SPAN_CACHE_SIZE: usize = 16;
