//! # yongyong-core
//!
//! Core library for 用用 - a showcase where people browse, publish, rank and
//! discuss small web apps, and chat with a scripted agent that stands in for
//! a creator.
//!
//! This library provides:
//! - Domain types and the static, in-memory catalog
//! - The page navigation state machine
//! - The rule-based agent responder and chat sessions
//! - The publish form and app detail state
//! - Configuration management
//! - Logging infrastructure
//!
//! Nothing here touches a network or persists anything. All state lives for
//! one session.
//!
//! ## Example
//!
//! ```rust
//! use yongyong_core::{Catalog, NavContext, Navigator, Page};
//!
//! let catalog = Catalog::bundled().expect("bundled catalog is valid");
//! let mut nav = Navigator::new();
//!
//! // Unknown ids are refused without leaving the current page
//! assert!(!nav.select_app_and_show_detail("missing", &catalog).is_applied());
//! assert_eq!(nav.page(), Page::Home);
//!
//! nav.navigate_to(Page::Profile, NavContext::default(), &catalog);
//! assert_eq!(nav.state().selected_user.as_deref(), Some(catalog.current_user().id.as_str()));
//! ```

// Re-export commonly used items at the crate root
pub use agent::{classify, respond, Intent, Persona, PersonaProfile};
pub use catalog::{Catalog, HomeTab};
pub use chat::{ChatMessage, ChatSession, ReplyDelay, Sender, SubmitOutcome};
pub use config::Config;
pub use detail::AppDetail;
pub use error::{Error, Result};
pub use navigation::{NavContext, NavEvent, NavOutcome, NavState, Navigator, Page, View};
pub use publish::{PublishDraft, PublishError};
pub use types::*;

// Public modules
pub mod agent;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod detail;
pub mod error;
pub mod format;
pub mod logging;
pub mod navigation;
pub mod publish;
pub mod types;
