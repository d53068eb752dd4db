//! Application state for the TUI.

mod chat;
mod community;
mod detail;
mod home;
mod profile;
mod publish;
mod ranking;

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::widgets::TableState;
use yongyong_core::catalog::{DiscussionFilter, FeaturedCarousel, RankingBoard};
use yongyong_core::config::{LayoutPreference, UiConfig};
use yongyong_core::{
    AppDetail, Catalog, ChatSession, Config, NavContext, NavOutcome, Navigator, Page, Persona,
    PublishDraft, ReplyDelay,
};

/// How long a notice stays in the status line.
const NOTICE_TTL: Duration = Duration::from_secs(2);

/// Single-column or two-column page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Compact,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient status message (toast).
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

/// Field with focus on the publish form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublishField {
    #[default]
    Title,
    Description,
    Kind,
    Url,
    Tags,
    Submit,
}

impl PublishField {
    pub const ALL: [PublishField; 6] = [
        PublishField::Title,
        PublishField::Description,
        PublishField::Kind,
        PublishField::Url,
        PublishField::Tags,
        PublishField::Submit,
    ];

    fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application state
pub struct App {
    /// In-memory catalog for this session
    pub catalog: Catalog,
    /// Page state machine
    pub navigator: Navigator,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Current status line message
    pub notice: Option<Notice>,

    persona: Persona,
    reply_delay: ReplyDelay,
    rng: StdRng,
    ui_config: UiConfig,

    // ========== Home ==========
    pub home_table: TableState,
    pub carousel: FeaturedCarousel,

    // ========== Ranking ==========
    pub ranking_board: RankingBoard,
    pub ranking_table: TableState,

    // ========== Community ==========
    pub community_filter: DiscussionFilter,
    pub community_table: TableState,

    // ========== Detail ==========
    /// State of the current detail visit
    pub detail: Option<AppDetail>,
    /// Comment being typed, `None` when not editing
    pub comment_input: Option<String>,

    // ========== Profile ==========
    pub profile_table: TableState,

    // ========== Agent chat ==========
    pub chat: Option<ChatSession>,
    pub chat_input: String,

    // ========== Publish ==========
    pub draft: PublishDraft,
    pub publish_field: PublishField,
    pub tag_input: String,
}

impl App {
    /// Create a new app on the home page.
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        Self {
            catalog,
            navigator: Navigator::new(),
            should_quit: false,
            notice: None,
            persona: config.agent.persona,
            reply_delay: config.agent.reply_delay(),
            rng: StdRng::from_entropy(),
            ui_config: config.ui.clone(),
            home_table: TableState::default().with_selected(Some(0)),
            carousel: FeaturedCarousel::default(),
            ranking_board: RankingBoard::default(),
            ranking_table: TableState::default().with_selected(Some(0)),
            community_filter: DiscussionFilter::default(),
            community_table: TableState::default().with_selected(Some(0)),
            detail: None,
            comment_input: None,
            profile_table: TableState::default().with_selected(Some(0)),
            chat: None,
            chat_input: String::new(),
            draft: PublishDraft::new(),
            publish_field: PublishField::default(),
            tag_input: String::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.navigator.page()
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Pick the layout for a terminal `width` columns wide.
    pub fn layout_mode(&self, width: u16) -> LayoutMode {
        match self.ui_config.layout {
            LayoutPreference::Compact => LayoutMode::Compact,
            LayoutPreference::Wide => LayoutMode::Wide,
            LayoutPreference::Auto if width < self.ui_config.compact_width => LayoutMode::Compact,
            LayoutPreference::Auto => LayoutMode::Wide,
        }
    }

    /// Advance time: deliver due chat replies and expire the notice.
    pub fn tick(&mut self, now: Instant) {
        if let Some(chat) = self.chat.as_mut() {
            if let Some(reply) = chat.poll(now) {
                tracing::debug!(chars = reply.text.chars().count(), "Agent reply delivered");
            }
        }

        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.duration_since(n.shown_at) >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    pub fn show_notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.notice = Some(Notice {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    // ========== Key Handling ==========

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if !self.is_typing() && self.handle_global_key(key) {
            return;
        }

        match self.navigator.page() {
            Page::Home => self.handle_home_key(key),
            Page::Ranking => self.handle_ranking_key(key),
            Page::Community => self.handle_community_key(key),
            Page::Detail => self.handle_detail_key(key),
            Page::Profile => self.handle_profile_key(key),
            Page::AgentChat => self.handle_chat_key(key),
            Page::Publish => self.handle_publish_key(key),
        }
    }

    /// Whether keystrokes go to a text field instead of shortcuts.
    pub fn is_typing(&self) -> bool {
        match self.navigator.page() {
            Page::AgentChat | Page::Publish => true,
            Page::Detail => self.comment_input.is_some(),
            _ => false,
        }
    }

    /// Bottom navigation (`1`-`5`) and quit. Returns whether the key was used.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.navigate_to(Page::NAV_BAR[idx], NavContext::default());
                true
            }
            _ => false,
        }
    }

    // ========== Navigation ==========

    pub(super) fn navigate_to(&mut self, page: Page, context: NavContext) {
        let outcome = self.navigator.navigate_to(page, context, &self.catalog);
        self.after_navigation(outcome);
    }

    pub(super) fn open_app(&mut self, app_id: &str) {
        let outcome = self
            .navigator
            .select_app_and_show_detail(app_id, &self.catalog);
        self.after_navigation(outcome);
    }

    pub(super) fn open_profile(&mut self, user_id: &str) {
        let outcome = self
            .navigator
            .select_user_and_show_profile(user_id, &self.catalog);
        self.after_navigation(outcome);
    }

    pub(super) fn go_home(&mut self) {
        self.navigator.go_back_to_home();
        self.enter_page();
    }

    /// Reset page-local state after a transition that was applied.
    pub(super) fn after_navigation(&mut self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Applied => self.enter_page(),
            NavOutcome::Rejected(reason) => {
                tracing::debug!(%reason, page = %self.navigator.page(), "Navigation ignored");
            }
        }
    }

    fn enter_page(&mut self) {
        let page = self.navigator.page();
        // Leaving a chat drops it along with any pending reply
        if page != Page::AgentChat {
            self.chat = None;
        }
        if page != Page::Detail {
            self.detail = None;
            self.comment_input = None;
        }

        match page {
            Page::Home => {
                self.home_table.select(Some(0));
            }
            Page::Ranking => {
                self.ranking_table.select(Some(0));
            }
            Page::Community => {
                self.community_table.select(Some(0));
            }
            Page::Detail => {
                self.detail = self
                    .navigator
                    .state()
                    .selected_app
                    .as_deref()
                    .map(|id| AppDetail::open(id, &self.catalog));
                self.comment_input = None;
            }
            Page::Profile => {
                self.profile_table.select(Some(0));
            }
            Page::AgentChat => {
                let creator = self
                    .navigator
                    .state()
                    .selected_user
                    .as_deref()
                    .and_then(|id| self.catalog.user(id))
                    .cloned();
                self.chat = creator.map(|c| ChatSession::open(c, self.persona));
                self.chat_input.clear();
            }
            Page::Publish => {
                self.draft = PublishDraft::new();
                self.publish_field = PublishField::default();
                self.tag_input.clear();
            }
        }
    }

    /// Sample the next reply delay.
    pub(super) fn next_reply_delay(&mut self) -> Duration {
        self.reply_delay.sample(&mut self.rng)
    }
}

// ========== List selection helpers ==========

/// Move a table selection down by one, clamped to `len`.
pub(super) fn select_next(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = state.selected().map_or(0, |i| (i + 1).min(len - 1));
    state.select(Some(i));
}

/// Move a table selection up by one.
pub(super) fn select_previous(state: &mut TableState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let i = state.selected().map_or(0, |i| i.saturating_sub(1).min(len - 1));
    state.select(Some(i));
}

/// Edit a single-line text buffer. Returns whether the key was consumed.
pub(super) fn edit_text(buffer: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.push(c);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        _ => false,
    }
}
