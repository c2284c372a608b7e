use crate::constants::{
    ACK_MS, ARABIC_BASE_WIDTH, DEFAULT_TERMINAL_HEIGHT, EVENT_POLL_MS, MAX_DISPLAY_LINE_LENGTH,
    UI_RESERVED_HEIGHT,
};
use crate::error::{NavError, SourceError, UiError};
use crate::metadata::{self, SURAHS};
use crate::navigation::NavigationState;
use crate::prefs::Preferences;
use crate::reading::{AutoScroll, FontScale, ScrollDirection, TextCategory};
use crate::resolver::{self, FetchSpec, NavigationMode, RawParams, Resolution};
use crate::search::{Debouncer, MatchField, VerseMatch, search_surahs};
use crate::share;
use crate::source::{Ayah, Theme, VerseSource};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph,
        Wrap,
    },
};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

/// What the content panel is currently showing. Every failure degrades to
/// one of these rendered states; nothing is fatal to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Content,
    NoData,
    Invalid(NavError),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchScope {
    SurahNames,
    VerseText,
}

#[derive(Debug)]
enum SearchHit {
    Surah { number: u16, name: &'static str, score: Option<u8> },
    Theme { id: u16, name: String },
    Verse(VerseMatch),
}

#[derive(Debug)]
enum FloatingPane {
    None,
    Search {
        scope: SearchScope,
        query: String,
        debouncer: Debouncer,
        hits: Vec<SearchHit>,
        selected_index: usize,
    },
    Goto {
        input: String,
        error: Option<NavError>,
    },
    Help,
}

#[derive(Debug)]
struct Ack {
    message: String,
    ok: bool,
    at: Instant,
}

pub struct App<S: VerseSource> {
    source: S,
    nav: NavigationState,
    verses: Vec<Ayah>,
    display: DisplayState,
    selected_verse: usize,
    highlighted_term: Option<String>,
    font: FontScale,
    autoscroll: AutoScroll,
    scroll_offset: usize,
    content_line_count: usize,
    floating_pane: FloatingPane,
    themes: Option<Vec<Theme>>,
    ack: Option<Ack>,
    sidebar_collapsed: bool,
    prefs: Preferences,
    last_scroll_tick: Instant,
    terminal_height: usize,
    terminal: Option<Terminal<CrosstermBackend<io::Stdout>>>,
}

impl<S: VerseSource> App<S> {
    pub fn new(source: S) -> Self {
        Self::with_preferences(source, Preferences::load())
    }

    /// Build an app with explicit preferences instead of reading the
    /// config directory.
    pub fn with_preferences(source: S, prefs: Preferences) -> Self {
        let mut app = Self {
            source,
            nav: NavigationState::new(),
            verses: Vec::new(),
            display: DisplayState::NoData,
            selected_verse: 0,
            highlighted_term: None,
            font: prefs
                .font_scale_tenths
                .map(FontScale::from_tenths)
                .unwrap_or_default(),
            autoscroll: AutoScroll::new(),
            scroll_offset: 0,
            content_line_count: 0,
            floating_pane: FloatingPane::None,
            themes: None,
            ack: None,
            sidebar_collapsed: prefs.sidebar_collapsed.unwrap_or(false),
            prefs,
            last_scroll_tick: Instant::now(),
            terminal_height: DEFAULT_TERMINAL_HEIGHT,
            terminal: None,
        };
        if let Some(speed) = app.prefs.scroll_speed {
            app.autoscroll.speed = speed;
        }
        if let Some(direction) = app.prefs.scroll_direction {
            app.autoscroll.direction = direction;
        }
        app.reload();
        app
    }

    // Public accessors and transitions, used by the key handler and tests
    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn verses(&self) -> &[Ayah] {
        &self.verses
    }

    pub fn display_state(&self) -> &DisplayState {
        &self.display
    }

    pub fn font_scale(&self) -> &FontScale {
        &self.font
    }

    pub fn auto_scroll(&self) -> &AutoScroll {
        &self.autoscroll
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Fetch verses for the current position and recompute the display
    /// state. Also the `r` reload affordance on NoData/Failed.
    pub fn reload(&mut self) {
        let spec = self.nav.fetch_spec();
        match self.source.fetch(&spec) {
            Ok(verses) => {
                self.verses = verses;
                self.display = DisplayState::Content;
            }
            Err(SourceError::NoData) => {
                self.verses.clear();
                self.display = DisplayState::NoData;
            }
            Err(e) => {
                warn!("Fetch failed for {:?}: {}", spec, e);
                self.verses.clear();
                self.display = DisplayState::Failed(e.to_string());
            }
        }
        self.selected_verse = 0;
        self.scroll_offset = 0;
        self.refresh_line_count();
    }

    pub fn navigate_next(&mut self) {
        if self.nav.can_go_next() {
            self.nav.next();
            self.highlighted_term = None;
            self.reload();
        }
    }

    pub fn navigate_previous(&mut self) {
        if self.nav.can_go_prev() {
            self.nav.previous();
            self.highlighted_term = None;
            self.reload();
        }
    }

    pub fn select_mode(&mut self, mode: NavigationMode) {
        if self.nav.mode() != mode {
            self.nav.switch_mode(mode);
            self.highlighted_term = None;
            self.reload();
        }
    }

    /// Show a validation failure as a rendered state instead of failing
    /// the app; the request is never sent to the source.
    pub fn show_validation_error(&mut self, error: NavError) {
        self.verses.clear();
        self.display = DisplayState::Invalid(error);
        self.selected_verse = 0;
        self.scroll_offset = 0;
        self.refresh_line_count();
    }

    /// Apply an externally resolved address (CLI flags routed through the
    /// resolver's raw-parameter path).
    pub fn apply_resolution(&mut self, res: &Resolution) {
        match res.fetch {
            FetchSpec::SurahSpan { surah, start, len } => {
                self.nav.jump_to_surah(surah, start);
                self.nav.set_span(len);
            }
            FetchSpec::Page(p) => self.nav.jump_to_page(p),
            FetchSpec::Juz(j) => self.nav.jump_to_juz(j),
            FetchSpec::Theme(t) => self.nav.jump_to_theme(t),
        }
        self.reload();
    }

    pub fn run(&mut self) -> Result<(), UiError> {
        self.setup_terminal()?;

        loop {
            if let Some(mut terminal) = self.terminal.take() {
                self.terminal_height = terminal.size()?.height as usize;
                terminal.draw(|f| self.draw_ui(f))?;
                self.terminal = Some(terminal);
            }

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_floating_pane_input(key) {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                }
            }

            self.tick(Instant::now());
        }

        self.cleanup_terminal()?;
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => self.navigate_next(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => self.navigate_previous(),
            KeyCode::Char('1') => self.select_mode(NavigationMode::Surah),
            KeyCode::Char('2') => self.select_mode(NavigationMode::Page),
            KeyCode::Char('3') => self.select_mode(NavigationMode::Juz),
            KeyCode::Char('4') => self.select_mode(NavigationMode::Theme),
            KeyCode::Char(']') => {
                if self.selected_verse + 1 < self.verses.len() {
                    self.selected_verse += 1;
                }
            }
            KeyCode::Char('[') => {
                self.selected_verse = self.selected_verse.saturating_sub(1);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.font.increase();
                self.persist_font_scale();
                self.refresh_line_count();
            }
            KeyCode::Char('-') => {
                self.font.decrease();
                self.persist_font_scale();
                self.refresh_line_count();
            }
            KeyCode::Char('0') => {
                self.font.reset();
                self.prefs.font_scale_tenths = None;
                self.prefs.save();
                self.refresh_line_count();
            }
            KeyCode::Char('a') => self.autoscroll.toggle(),
            KeyCode::Char('s') => {
                self.autoscroll.cycle_speed();
                self.persist_autoscroll();
            }
            KeyCode::Char('d') => {
                self.autoscroll.toggle_direction();
                self.persist_autoscroll();
            }
            KeyCode::Char('A') => {
                self.autoscroll.reset();
                self.persist_autoscroll();
            }
            KeyCode::Char('y') => self.copy_selected_verse(),
            KeyCode::Char('b') => {
                self.sidebar_collapsed = !self.sidebar_collapsed;
                self.prefs.sidebar_collapsed = Some(self.sidebar_collapsed);
                self.prefs.save();
            }
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('/') => self.open_search_pane(),
            KeyCode::Char('g') => {
                self.floating_pane = FloatingPane::Goto { input: String::new(), error: None };
            }
            KeyCode::Char('?') => self.floating_pane = FloatingPane::Help,
            _ => {}
        }
        false
    }

    fn tick(&mut self, now: Instant) {
        if self.autoscroll.playing && now.duration_since(self.last_scroll_tick) >= self.autoscroll.interval() {
            self.last_scroll_tick = now;
            match self.autoscroll.direction {
                ScrollDirection::Down => self.scroll_down(),
                ScrollDirection::Up => self.scroll_up(),
            }
        }

        if let Some(ack) = &self.ack {
            if now.duration_since(ack.at) >= Duration::from_millis(ACK_MS) {
                self.ack = None;
            }
        }

        let ready = match &mut self.floating_pane {
            FloatingPane::Search { debouncer, scope, .. } => {
                debouncer.take_ready(now).map(|q| (*scope, q))
            }
            _ => None,
        };
        if let Some((scope, query)) = ready {
            let new_hits = Self::build_search_hits(&self.source, &self.themes, scope, &query);
            if let FloatingPane::Search { hits, selected_index, .. } = &mut self.floating_pane {
                *hits = new_hits;
                *selected_index = 0;
            }
        }
    }

    fn persist_font_scale(&mut self) {
        self.prefs.font_scale_tenths = Some(self.font.tenths());
        self.prefs.save();
    }

    fn persist_autoscroll(&mut self) {
        self.prefs.scroll_speed = Some(self.autoscroll.speed);
        self.prefs.scroll_direction = Some(self.autoscroll.direction);
        self.prefs.save();
    }

    fn copy_selected_verse(&mut self) {
        let Some(verse) = self.verses.get(self.selected_verse) else {
            return;
        };
        let name = metadata::surah(verse.surah).map(|s| s.name).unwrap_or("?");
        let text = share::verse_share_text(verse, name);
        match share::copy_text(&text) {
            Ok(()) => self.acknowledge("Copied".to_string(), true),
            Err(e) => {
                warn!("Copy failed: {}", e);
                self.acknowledge("Copy failed".to_string(), false);
            }
        }
    }

    fn acknowledge(&mut self, message: String, ok: bool) {
        self.ack = Some(Ack { message, ok, at: Instant::now() });
    }

    pub fn open_search_pane(&mut self) {
        if self.themes.is_none() {
            // A failed theme fetch only empties autocomplete for this
            // pane; keeping `themes` unset retries on the next open.
            match self.source.themes() {
                Ok(themes) => self.themes = Some(themes),
                Err(e) => warn!("Theme list unavailable: {}", e),
            }
        }
        let hits =
            Self::build_search_hits(&self.source, &self.themes, SearchScope::SurahNames, "");
        self.floating_pane = FloatingPane::Search {
            scope: SearchScope::SurahNames,
            query: String::new(),
            debouncer: Debouncer::new(),
            hits,
            selected_index: 0,
        };
    }

    fn build_search_hits(
        source: &S,
        themes: &Option<Vec<Theme>>,
        scope: SearchScope,
        query: &str,
    ) -> Vec<SearchHit> {
        match scope {
            SearchScope::SurahNames => {
                let trimmed = query.trim();
                if trimmed.is_empty() {
                    return SURAHS
                        .iter()
                        .map(|s| SearchHit::Surah { number: s.number, name: s.name, score: None })
                        .collect();
                }
                let mut hits: Vec<SearchHit> = search_surahs(trimmed)
                    .into_iter()
                    .map(|m| SearchHit::Surah {
                        number: m.surah.number,
                        name: m.surah.name,
                        score: Some(m.score),
                    })
                    .collect();
                if let Some(themes) = themes {
                    let needle = trimmed.to_lowercase();
                    hits.extend(
                        themes
                            .iter()
                            .filter(|t| t.name.to_lowercase().contains(&needle))
                            .map(|t| SearchHit::Theme { id: t.id, name: t.name.clone() }),
                    );
                }
                hits
            }
            SearchScope::VerseText => match source.search_text(query) {
                Ok(matches) => matches.into_iter().map(SearchHit::Verse).collect(),
                Err(e) => {
                    warn!("Verse search failed: {}", e);
                    Vec::new()
                }
            },
        }
    }

    fn handle_floating_pane_input(&mut self, key: crossterm::event::KeyEvent) -> bool {
        let floating_pane = std::mem::replace(&mut self.floating_pane, FloatingPane::None);

        match floating_pane {
            FloatingPane::None => false,
            FloatingPane::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => true,
                _ => {
                    self.floating_pane = FloatingPane::Help;
                    true
                }
            },
            FloatingPane::Goto { mut input, error } => match key.code {
                KeyCode::Esc => true,
                KeyCode::Char(c) if c.is_ascii_digit() || c == ':' => {
                    input.push(c);
                    self.floating_pane = FloatingPane::Goto { input, error: None };
                    true
                }
                KeyCode::Backspace => {
                    input.pop();
                    self.floating_pane = FloatingPane::Goto { input, error: None };
                    true
                }
                KeyCode::Enter => {
                    let params = Self::goto_params(self.nav.mode(), &input);
                    match resolver::resolve(self.nav.mode(), &params) {
                        Ok(res) => {
                            self.apply_resolution(&res);
                        }
                        Err(e) => {
                            // User-correctable; keep the pane open with the
                            // error inline and nothing fetched.
                            self.floating_pane = FloatingPane::Goto { input, error: Some(e) };
                        }
                    }
                    true
                }
                _ => {
                    self.floating_pane = FloatingPane::Goto { input, error };
                    true
                }
            },
            FloatingPane::Search { scope, mut query, mut debouncer, hits, mut selected_index } => {
                match key.code {
                    KeyCode::Esc => true,
                    KeyCode::Tab => {
                        let scope = match scope {
                            SearchScope::SurahNames => SearchScope::VerseText,
                            SearchScope::VerseText => SearchScope::SurahNames,
                        };
                        let hits =
                            Self::build_search_hits(&self.source, &self.themes, scope, &query);
                        self.floating_pane = FloatingPane::Search {
                            scope,
                            query,
                            debouncer,
                            hits,
                            selected_index: 0,
                        };
                        true
                    }
                    KeyCode::Char(c) => {
                        query.push(c);
                        debouncer.submit(&query, Instant::now());
                        self.floating_pane = FloatingPane::Search {
                            scope,
                            query,
                            debouncer,
                            hits,
                            selected_index,
                        };
                        true
                    }
                    KeyCode::Backspace => {
                        query.pop();
                        debouncer.submit(&query, Instant::now());
                        self.floating_pane = FloatingPane::Search {
                            scope,
                            query,
                            debouncer,
                            hits,
                            selected_index,
                        };
                        true
                    }
                    KeyCode::Up => {
                        selected_index = selected_index.saturating_sub(1);
                        self.floating_pane = FloatingPane::Search {
                            scope,
                            query,
                            debouncer,
                            hits,
                            selected_index,
                        };
                        true
                    }
                    KeyCode::Down => {
                        if selected_index < hits.len().saturating_sub(1) {
                            selected_index += 1;
                        }
                        self.floating_pane = FloatingPane::Search {
                            scope,
                            query,
                            debouncer,
                            hits,
                            selected_index,
                        };
                        true
                    }
                    KeyCode::Enter => {
                        // Submit path: same scoring functions the debounced
                        // pane uses, recomputed authoritatively.
                        debouncer.cancel();
                        let hits =
                            Self::build_search_hits(&self.source, &self.themes, scope, &query);
                        if let Some(hit) = hits.get(selected_index) {
                            self.jump_to_hit(hit, &query);
                        } else {
                            self.floating_pane = FloatingPane::Search {
                                scope,
                                query,
                                debouncer,
                                hits,
                                selected_index: 0,
                            };
                        }
                        true
                    }
                    _ => {
                        self.floating_pane = FloatingPane::Search {
                            scope,
                            query,
                            debouncer,
                            hits,
                            selected_index,
                        };
                        true
                    }
                }
            }
        }
    }

    fn jump_to_hit(&mut self, hit: &SearchHit, query: &str) {
        match hit {
            SearchHit::Surah { number, .. } => {
                self.nav.jump_to_surah(*number, 1);
                self.reload();
            }
            SearchHit::Theme { id, .. } => {
                self.nav.jump_to_theme(*id);
                self.reload();
            }
            SearchHit::Verse(m) => {
                self.nav.jump_to_surah(m.ayah.surah, m.ayah.ayah);
                self.reload();
                if !query.trim().is_empty() {
                    self.highlighted_term = Some(query.trim().to_string());
                }
            }
        }
    }

    fn goto_params(mode: NavigationMode, input: &str) -> RawParams {
        let mut params = RawParams::default();
        match mode {
            NavigationMode::Surah => {
                let mut parts = input.split(':');
                params.surah = parts.next().map(String::from);
                params.ayah = parts.next().map(String::from);
                params.span = parts.next().map(String::from);
            }
            NavigationMode::Page => params.page = Some(input.to_string()),
            NavigationMode::Juz => params.juz = Some(input.to_string()),
            NavigationMode::Theme => params.theme = Some(input.to_string()),
        }
        params
    }

    fn setup_terminal(&mut self) -> Result<(), UiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);
        Ok(())
    }

    fn cleanup_terminal(&mut self) -> Result<(), UiError> {
        if let Some(mut terminal) = self.terminal.take() {
            disable_raw_mode()?;
            execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )?;
            terminal.show_cursor()?;
        }
        Ok(())
    }

    // Scrolling

    fn page_size(&self) -> usize {
        self.terminal_height.saturating_sub(UI_RESERVED_HEIGHT)
    }

    /// Content lines are rebuilt only when the verses or the wrap width
    /// change; scroll bounds read the cached count.
    fn refresh_line_count(&mut self) {
        self.content_line_count = self.build_content_lines().len();
    }

    fn max_scroll(&self) -> usize {
        self.content_line_count.saturating_sub(self.page_size())
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset < self.max_scroll() {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    // Rendering

    fn arabic_wrap_width(&self) -> usize {
        // Terminal analog of font size: a larger multiplier narrows the
        // Arabic column.
        ((ARABIC_BASE_WIDTH as f32 / self.font.multiplier()) as usize).max(16)
    }

    fn draw_ui(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(3), // Footer with progress
            ])
            .split(f.area());

        self.draw_header(f, chunks[0]);
        self.draw_content(f, chunks[1]);
        self.draw_footer(f, chunks[2]);
        self.render_floating_pane(f);
    }

    fn draw_header(&self, f: &mut Frame, area: Rect) {
        let mut mode_spans: Vec<Span> = vec![Span::styled(
            "📖 Mushaf  ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        for (i, mode) in [
            NavigationMode::Surah,
            NavigationMode::Page,
            NavigationMode::Juz,
            NavigationMode::Theme,
        ]
        .iter()
        .enumerate()
        {
            let style = if *mode == self.nav.mode() {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            mode_spans.push(Span::styled(format!(" {} {} ", i + 1, mode.label()), style));
            mode_spans.push(Span::raw(" "));
        }

        let prev_style = if self.nav.can_go_prev() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let next_style = if self.nav.can_go_next() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let position_line = Line::from(vec![
            Span::styled("◀ ", prev_style),
            Span::styled(
                self.nav.position_label(),
                Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", next_style),
        ]);

        let header = Paragraph::new(vec![Line::from(mode_spans), position_line])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan))
                    .padding(Padding::horizontal(1)),
            )
            .alignment(Alignment::Left);
        f.render_widget(header, area);
    }

    fn draw_content(&self, f: &mut Frame, area: Rect) {
        let content_area = if self.nav.mode() == NavigationMode::Surah && !self.sidebar_collapsed {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(22), Constraint::Min(0)])
                .split(area);
            self.draw_sidebar(f, halves[0]);
            halves[1]
        } else {
            area
        };

        let lines: Vec<Line> = self
            .build_content_lines()
            .into_iter()
            .skip(self.scroll_offset)
            .take(self.page_size())
            .collect();

        let border_color = match &self.display {
            DisplayState::Content => Color::Blue,
            DisplayState::NoData => Color::Yellow,
            DisplayState::Invalid(_) => Color::Yellow,
            DisplayState::Failed(_) => Color::Red,
        };

        let content = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .padding(Padding::new(2, 1, 0, 0)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(content, content_area);
    }

    fn draw_sidebar(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = SURAHS
            .iter()
            .map(|s| ListItem::new(format!("{:3} {}", s.number, s.name)))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Surat"),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default().bg(Color::Cyan).fg(Color::Black).add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default();
        state.select(Some((self.nav.surah().saturating_sub(1)) as usize));
        f.render_stateful_widget(list, area, &mut state);
    }

    fn build_content_lines(&self) -> Vec<Line<'static>> {
        match &self.display {
            DisplayState::NoData => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No verses found for this position.",
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(Span::styled(
                    "Press r to reload.",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            DisplayState::Invalid(e) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("Invalid request: {}", e),
                    Style::default().fg(Color::Yellow),
                )),
            ],
            DisplayState::Failed(msg) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("Could not load verses: {}", msg),
                    Style::default().fg(Color::Red),
                )),
                Line::from(Span::styled(
                    "Press r to retry.",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            DisplayState::Content => {
                let wrap_width = self.arabic_wrap_width();
                let mut lines = Vec::new();
                for (i, verse) in self.verses.iter().enumerate() {
                    let selected = i == self.selected_verse;
                    self.push_verse_lines(&mut lines, verse, selected, wrap_width);
                }
                lines
            }
        }
    }

    fn push_verse_lines(
        &self,
        lines: &mut Vec<Line<'static>>,
        verse: &Ayah,
        selected: bool,
        wrap_width: usize,
    ) {
        let marker_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}:{}", if selected { "▶ " } else { "  " }, verse.surah, verse.ayah),
            marker_style,
        )));

        let arabic_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        for wrapped in wrap_text(&verse.arabic, wrap_width) {
            lines.push(Line::from(Span::styled(wrapped, arabic_style)));
        }
        if self.font.line_height_for(TextCategory::Arabic) >= 3.0 {
            lines.push(Line::from(""));
        }

        if let Some(text) = &verse.transliteration {
            lines.push(self.body_line(
                text,
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            ));
        }
        if let Some(text) = &verse.translation {
            lines.push(self.body_line(text, Style::default().fg(Color::White)));
        }
        if let Some(text) = &verse.notes {
            lines.push(self.body_line(text, Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(""));
    }

    /// Body text line with optional search-term highlighting.
    fn body_line(&self, text: &str, base_style: Style) -> Line<'static> {
        if let Some(term) = &self.highlighted_term {
            let lower = text.to_lowercase();
            let needle = term.to_lowercase();
            if lower.len() == text.len() {
                if let Some(pos) = lower.find(&needle) {
                    let end = (pos + needle.len()).min(text.len());
                    let mut spans = Vec::new();
                    if pos > 0 {
                        spans.push(Span::styled(text[..pos].to_string(), base_style));
                    }
                    spans.push(Span::styled(
                        text[pos..end].to_string(),
                        Style::default().bg(Color::Yellow).fg(Color::Black),
                    ));
                    if end < text.len() {
                        spans.push(Span::styled(text[end..].to_string(), base_style));
                    }
                    return Line::from(spans);
                }
            }
        }
        Line::from(Span::styled(text.to_string(), base_style))
    }

    fn draw_footer(&self, f: &mut Frame, area: Rect) {
        let footer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(2)])
            .split(area);

        let (position, total) = self.progress();
        let label = format!("{}/{}", position, total);
        let percent = if total > 0 {
            ((position as f64 / total as f64) * 100.0) as u16
        } else {
            0
        };
        let progress = Gauge::default()
            .block(Block::default())
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .percent(percent.min(100))
            .label(label);
        f.render_widget(progress, footer_chunks[0]);

        let mut help_spans = vec![
            Span::styled(" q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(":quit ", Style::default().fg(Color::DarkGray)),
            Span::styled("←→", Style::default().fg(Color::Green)),
            Span::styled(":prev/next ", Style::default().fg(Color::DarkGray)),
            Span::styled("1-4", Style::default().fg(Color::Cyan)),
            Span::styled(":mode ", Style::default().fg(Color::DarkGray)),
            Span::styled("/", Style::default().fg(Color::Magenta)),
            Span::styled(":search ", Style::default().fg(Color::DarkGray)),
            Span::styled("g", Style::default().fg(Color::Blue)),
            Span::styled(":goto ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(":help ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(" Aa ×{:.1} ", self.font.multiplier()),
                Style::default().fg(Color::LightBlue),
            ),
            Span::styled(
                format!(
                    " {} {} {} ",
                    if self.autoscroll.playing { "▶" } else { "⏸" },
                    self.autoscroll.speed.label(),
                    match self.autoscroll.direction {
                        ScrollDirection::Down => "↓",
                        ScrollDirection::Up => "↑",
                    }
                ),
                Style::default().fg(Color::Gray),
            ),
        ];

        if let Some(ack) = &self.ack {
            let (symbol, color) = if ack.ok { ("✓ ", Color::Green) } else { ("✗ ", Color::Red) };
            help_spans.push(Span::styled(
                format!(" {}{} ", symbol, ack.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }

        let footer = Paragraph::new(vec![Line::from(help_spans)])
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Center);
        f.render_widget(footer, footer_chunks[1]);
    }

    fn progress(&self) -> (u32, u32) {
        match self.nav.mode() {
            NavigationMode::Surah => {
                let total = metadata::ayah_count(self.nav.surah()).unwrap_or(1);
                (self.nav.ayah() as u32, total as u32)
            }
            NavigationMode::Page => (self.nav.page() as u32, 604),
            NavigationMode::Juz => (self.nav.juz() as u32, 30),
            NavigationMode::Theme => (self.nav.theme() as u32, 1121),
        }
    }

    fn render_floating_pane(&self, f: &mut Frame) {
        match &self.floating_pane {
            FloatingPane::None => {}
            FloatingPane::Search { scope, query, hits, selected_index, .. } => {
                self.render_search_pane(f, *scope, query, hits, *selected_index);
            }
            FloatingPane::Goto { input, error } => {
                self.render_goto_pane(f, input, error.as_ref());
            }
            FloatingPane::Help => render_help_pane(f),
        }
    }

    fn render_search_pane(
        &self,
        f: &mut Frame,
        scope: SearchScope,
        query: &str,
        hits: &[SearchHit],
        selected_index: usize,
    ) {
        let popup_area = centered_popup(f.area(), 80, 60);
        render_shadow(f, popup_area);
        f.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(popup_area);

        let scope_label = match scope {
            SearchScope::SurahNames => "Surat & Tema",
            SearchScope::VerseText => "Ayat Text",
        };
        let input = Paragraph::new(format!("🔍 {}: {}█", scope_label, query))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title("Search (Tab switches scope)")
                    .style(Style::default().fg(Color::Yellow)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(input, chunks[0]);

        let items: Vec<ListItem> = hits.iter().map(|h| ListItem::new(hit_label(h))).collect();
        let results_list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(
                        "Results ({}/{})",
                        if hits.is_empty() { 0 } else { selected_index + 1 },
                        hits.len()
                    )),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default().bg(Color::Yellow).fg(Color::Black).add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(if hits.is_empty() { None } else { Some(selected_index) });
        f.render_stateful_widget(results_list, chunks[1], &mut list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Yellow)),
            Span::raw(" navigate  "),
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" open  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" close"),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }

    fn render_goto_pane(&self, f: &mut Frame, input: &str, error: Option<&NavError>) {
        let popup_area = centered_popup(f.area(), 50, 20);
        render_shadow(f, popup_area);
        f.render_widget(Clear, popup_area);

        let hint = match self.nav.mode() {
            NavigationMode::Surah => "surat[:ayat[:panjang]]",
            NavigationMode::Page => "page 1-604",
            NavigationMode::Juz => "juz 1-30",
            NavigationMode::Theme => "tema 1-1121",
        };

        let mut lines = vec![Line::from(format!("Go to ({}): {}█", hint, input))];
        if let Some(e) = error {
            lines.push(Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(Color::Red),
            )));
        }

        let pane = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Blue))
                    .title(format!("Goto — {}", self.nav.mode().label())),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(pane, popup_area);
    }
}

fn hit_label(hit: &SearchHit) -> String {
    match hit {
        SearchHit::Surah { number, name, score: Some(score) } => {
            format!("{:3} {}  ({})", number, name, score)
        }
        SearchHit::Surah { number, name, score: None } => format!("{:3} {}", number, name),
        SearchHit::Theme { id, name } => format!("Tema {}: {}", id, name),
        SearchHit::Verse(m) => {
            let field_text = match m.field {
                MatchField::Transliteration => m.ayah.transliteration.as_deref().unwrap_or(""),
                MatchField::Translation => m.ayah.translation.as_deref().unwrap_or(""),
                MatchField::Arabic => m.ayah.arabic.as_str(),
            };
            let snippet = truncate_graphemes(field_text, MAX_DISPLAY_LINE_LENGTH - 10);
            format!("{}:{} {}", m.ayah.surah, m.ayah.ayah, snippet)
        }
    }
}

fn truncate_graphemes(text: &str, max: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() > max {
        format!("{}...", graphemes[..max.saturating_sub(3)].concat())
    } else {
        text.to_string()
    }
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.graphemes(true).count();
        if current_len > 0 && current_len + 1 + word_len > width {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn centered_popup(area: Rect, width_pct: u16, height_pct: u16) -> Rect {
    let popup_width = area.width.saturating_mul(width_pct).saturating_div(100);
    let popup_height = area.height.saturating_mul(height_pct).saturating_div(100);
    let x = area.width.saturating_sub(popup_width).saturating_div(2);
    let y = area.height.saturating_sub(popup_height).saturating_div(2);
    Rect { x, y, width: popup_width, height: popup_height }
}

fn render_shadow(f: &mut Frame, popup_area: Rect) {
    let shadow_area = Rect {
        x: popup_area.x + 1,
        y: popup_area.y + 1,
        width: popup_area.width,
        height: popup_area.height,
    };
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), shadow_area);
}

fn render_help_pane(f: &mut Frame) {
    let popup_area = centered_popup(f.area(), 60, 70);
    render_shadow(f, popup_area);
    f.render_widget(Clear, popup_area);

    let rows = [
        ("←/→ h/l p/n", "previous / next"),
        ("↑/↓ j/k", "scroll"),
        ("1-4", "mode: surat / page / juz / tema"),
        ("[ ]", "select verse"),
        ("y", "copy selected verse"),
        ("+ - 0", "font scale up / down / reset"),
        ("a s d A", "auto-scroll: play, speed, direction, reset"),
        ("b", "toggle surah sidebar"),
        ("g", "go to position"),
        ("/", "search (Tab: surat names / ayat text)"),
        ("r", "reload"),
        ("q", "quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:12}", key), Style::default().fg(Color::Cyan)),
                Span::styled((*desc).to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let pane = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title("Keys"),
    );
    f.render_widget(pane, popup_area);
}
