//! Page navigation state machine.
//!
//! [`NavState`] is the single source of truth for what is on screen. It is
//! an owned value: [`transition`] maps `(state, event)` to a new state and
//! an outcome, and [`resolve`] turns a state into the entities a view needs.
//! [`Navigator`] wraps both for callers that just want to hold the state.
//!
//! Pages that show a specific entity (`Detail`, `Profile`, `AgentChat`)
//! are only entered when their id resolves in the catalog. A transition
//! whose id doesn't resolve is rejected and the page stays where it was;
//! it never panics and never surfaces an error to the user.

use std::fmt;

use crate::catalog::{visible_catalog, Catalog, HomeTab};
use crate::types::{CatalogApp, User};

/// A top-level page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Ranking,
    Community,
    Detail,
    Profile,
    AgentChat,
    Publish,
}

impl Page {
    /// Pages on the bottom navigation bar, in display order.
    pub const NAV_BAR: [Page; 5] = [
        Page::Home,
        Page::Ranking,
        Page::Publish,
        Page::Community,
        Page::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Ranking => "ranking",
            Page::Community => "community",
            Page::Detail => "detail",
            Page::Profile => "profile",
            Page::AgentChat => "agent-chat",
            Page::Publish => "publish",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "首页",
            Page::Ranking => "榜单",
            Page::Community => "讨论",
            Page::Detail => "详情",
            Page::Profile => "我的",
            Page::AgentChat => "AI助手",
            Page::Publish => "发布",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Page::Home),
            "ranking" => Ok(Page::Ranking),
            "community" => Ok(Page::Community),
            "detail" => Ok(Page::Detail),
            "profile" => Ok(Page::Profile),
            "agent-chat" => Ok(Page::AgentChat),
            "publish" => Ok(Page::Publish),
            _ => Err(format!("unknown page: {}", s)),
        }
    }
}

/// Navigation state for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub selected_app: Option<String>,
    pub selected_user: Option<String>,
    pub home_tab: HomeTab,
}

/// Optional ids accompanying a navigation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavContext {
    pub app_id: Option<String>,
    pub user_id: Option<String>,
}

impl NavContext {
    pub fn app(id: impl Into<String>) -> Self {
        Self {
            app_id: Some(id.into()),
            user_id: None,
        }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self {
            app_id: None,
            user_id: Some(id.into()),
        }
    }
}

/// Something the view layer asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Go to a page, optionally naming the entity to show
    Navigate { target: Page, context: NavContext },
    /// An app card was clicked
    ShowApp(String),
    /// An author or avatar was clicked
    ShowUser(String),
    /// "Chat with agent" on a profile
    ChatWithAgent,
    /// Back button on the agent chat
    BackFromChat,
    /// Back button anywhere else
    BackToHome,
    /// The publish form submitted successfully
    Published,
    SetHomeTab(HomeTab),
}

/// The id that failed to resolve. `None` means there was no selection at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    App(Option<String>),
    User(Option<String>),
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unresolved::App(Some(id)) => write!(f, "app {}", id),
            Unresolved::App(None) => f.write_str("no selected app"),
            Unresolved::User(Some(id)) => write!(f, "user {}", id),
            Unresolved::User(None) => f.write_str("no selected user"),
        }
    }
}

/// Result of applying a [`NavEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Applied,
    /// Guard refused the transition; state is unchanged
    Rejected(Unresolved),
}

impl NavOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, NavOutcome::Applied)
    }
}

/// Apply `event` to `state`.
///
/// Pure: the returned state depends only on the inputs. On rejection the
/// returned state equals `state`.
pub fn transition(state: &NavState, event: &NavEvent, catalog: &Catalog) -> (NavState, NavOutcome) {
    let mut next = state.clone();

    let outcome = match event {
        NavEvent::Navigate { target, context } => navigate(&mut next, *target, context, catalog),
        NavEvent::ShowApp(id) => navigate(&mut next, Page::Detail, &NavContext::app(id.as_str()), catalog),
        NavEvent::ShowUser(id) => {
            navigate(&mut next, Page::Profile, &NavContext::user(id.as_str()), catalog)
        }
        NavEvent::ChatWithAgent => {
            navigate(&mut next, Page::AgentChat, &NavContext::default(), catalog)
        }
        NavEvent::BackFromChat => match next.selected_user.clone() {
            Some(user_id) => navigate(&mut next, Page::Profile, &NavContext::user(user_id), catalog),
            None => NavOutcome::Rejected(Unresolved::User(None)),
        },
        NavEvent::BackToHome => navigate(&mut next, Page::Home, &NavContext::default(), catalog),
        NavEvent::Published => {
            next.page = Page::Home;
            NavOutcome::Applied
        }
        NavEvent::SetHomeTab(tab) => {
            next.home_tab = *tab;
            NavOutcome::Applied
        }
    };

    match outcome {
        NavOutcome::Applied => (next, outcome),
        NavOutcome::Rejected(_) => (state.clone(), outcome),
    }
}

fn navigate(state: &mut NavState, target: Page, context: &NavContext, catalog: &Catalog) -> NavOutcome {
    match target {
        Page::Home => {
            state.selected_app = None;
            state.selected_user = None;
        }
        Page::Ranking | Page::Community | Page::Publish => {}
        Page::Detail => {
            let app_id = context.app_id.clone().or_else(|| state.selected_app.clone());
            match app_id {
                Some(id) if catalog.app(&id).is_some() => state.selected_app = Some(id),
                other => return NavOutcome::Rejected(Unresolved::App(other)),
            }
        }
        Page::Profile => {
            let user_id = context
                .user_id
                .clone()
                .unwrap_or_else(|| catalog.current_user().id.clone());
            if catalog.user(&user_id).is_none() {
                return NavOutcome::Rejected(Unresolved::User(Some(user_id)));
            }
            state.selected_user = Some(user_id);
        }
        Page::AgentChat => {
            let user_id = context.user_id.clone().or_else(|| state.selected_user.clone());
            match user_id {
                Some(id) if catalog.user(&id).is_some() => state.selected_user = Some(id),
                other => return NavOutcome::Rejected(Unresolved::User(other)),
            }
        }
    }

    state.page = target;
    NavOutcome::Applied
}

/// What a view should render, with its entities resolved.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Home(HomeTab),
    Ranking,
    Community,
    Detail(&'a CatalogApp),
    Profile(&'a User),
    AgentChat(&'a User),
    Publish,
}

impl View<'_> {
    pub fn page(&self) -> Page {
        match self {
            View::Home(_) => Page::Home,
            View::Ranking => Page::Ranking,
            View::Community => Page::Community,
            View::Detail(_) => Page::Detail,
            View::Profile(_) => Page::Profile,
            View::AgentChat(_) => Page::AgentChat,
            View::Publish => Page::Publish,
        }
    }
}

/// Resolve `state` against `catalog`.
///
/// Entity pages whose selection no longer resolves fall through to home.
pub fn resolve<'a>(state: &NavState, catalog: &'a Catalog) -> View<'a> {
    let home = View::Home(state.home_tab);
    match state.page {
        Page::Home => home,
        Page::Ranking => View::Ranking,
        Page::Community => View::Community,
        Page::Publish => View::Publish,
        Page::Detail => state
            .selected_app
            .as_deref()
            .and_then(|id| catalog.app(id))
            .map_or(home, View::Detail),
        Page::Profile => state
            .selected_user
            .as_deref()
            .and_then(|id| catalog.user(id))
            .map_or(home, View::Profile),
        Page::AgentChat => state
            .selected_user
            .as_deref()
            .and_then(|id| catalog.user(id))
            .map_or(home, View::AgentChat),
    }
}

/// Owns a [`NavState`] and applies events to it.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn page(&self) -> Page {
        self.state.page
    }

    pub fn home_tab(&self) -> HomeTab {
        self.state.home_tab
    }

    /// Apply an event, keeping the new state on success.
    pub fn apply(&mut self, event: NavEvent, catalog: &Catalog) -> NavOutcome {
        let (next, outcome) = transition(&self.state, &event, catalog);
        match &outcome {
            NavOutcome::Applied => {
                if next.page != self.state.page {
                    tracing::debug!(from = %self.state.page, to = %next.page, "Navigated");
                }
                self.state = next;
            }
            NavOutcome::Rejected(unresolved) => {
                tracing::debug!(
                    page = %self.state.page,
                    event = ?event,
                    unresolved = %unresolved,
                    "Navigation rejected"
                );
            }
        }
        outcome
    }

    pub fn navigate_to(&mut self, target: Page, context: NavContext, catalog: &Catalog) -> NavOutcome {
        self.apply(NavEvent::Navigate { target, context }, catalog)
    }

    pub fn select_app_and_show_detail(&mut self, app_id: &str, catalog: &Catalog) -> NavOutcome {
        self.apply(NavEvent::ShowApp(app_id.to_string()), catalog)
    }

    pub fn select_user_and_show_profile(&mut self, user_id: &str, catalog: &Catalog) -> NavOutcome {
        self.apply(NavEvent::ShowUser(user_id.to_string()), catalog)
    }

    pub fn chat_with_agent(&mut self, catalog: &Catalog) -> NavOutcome {
        self.apply(NavEvent::ChatWithAgent, catalog)
    }

    pub fn back_from_chat(&mut self, catalog: &Catalog) -> NavOutcome {
        self.apply(NavEvent::BackFromChat, catalog)
    }

    /// Clear both selections and return home. Always succeeds.
    pub fn go_back_to_home(&mut self) {
        self.state.page = Page::Home;
        self.state.selected_app = None;
        self.state.selected_user = None;
    }

    pub fn published(&mut self, catalog: &Catalog) -> NavOutcome {
        self.apply(NavEvent::Published, catalog)
    }

    pub fn set_home_tab(&mut self, tab: HomeTab) {
        self.state.home_tab = tab;
    }

    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> View<'a> {
        resolve(&self.state, catalog)
    }

    /// Apps under the active home tab.
    pub fn visible_catalog<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogApp> {
        visible_catalog(catalog.apps(), self.state.home_tab)
    }
}
