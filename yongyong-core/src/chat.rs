//! Chat session with a creator's agent.
//!
//! The session owns the message log. Sending appends the visitor's message
//! right away and schedules the agent's reply for a later instant; the
//! caller drives time by calling [`ChatSession::poll`] from its event loop.
//! Only one reply can be pending, and sends are refused until it lands.
//! Dropping the session drops any pending reply with it.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::agent::{self, Persona};
use crate::types::User;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: String, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Bounds of the simulated reply latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    pub min: Duration,
    pub max: Duration,
}

impl Default for ReplyDelay {
    fn default() -> Self {
        Self::from_millis(1000, 2000)
    }
}

impl ReplyDelay {
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        }
    }

    /// A delay drawn uniformly from `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rng.gen_range(min_ms..=max_ms))
    }
}

#[derive(Debug, Clone)]
struct PendingReply {
    utterance: String,
    due: Instant,
}

/// What happened to a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Message appended; the reply lands at `reply_due`
    Sent { reply_due: Instant },
    /// Nothing but whitespace; no message, no reply
    Blank,
    /// A reply is still being composed
    Busy,
}

/// One open chat with a creator's agent.
#[derive(Debug, Clone)]
pub struct ChatSession {
    creator: User,
    persona: Persona,
    messages: Vec<ChatMessage>,
    pending: Option<PendingReply>,
}

impl ChatSession {
    /// Open a chat; the agent speaks first.
    pub fn open(creator: User, persona: Persona) -> Self {
        let greeting = ChatMessage::new(persona.opening(&creator.name), Sender::Agent);
        tracing::debug!(creator = %creator.id, persona = persona.as_str(), "Chat opened");
        Self {
            creator,
            persona,
            messages: vec![greeting],
            pending: None,
        }
    }

    pub fn creator(&self) -> &User {
        &self.creator
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is pending (the composing indicator).
    pub fn is_composing(&self) -> bool {
        self.pending.is_some()
    }

    /// Send `input`, with the reply due `delay` after `now`.
    pub fn submit(&mut self, input: &str, now: Instant, delay: Duration) -> SubmitOutcome {
        if input.trim().is_empty() {
            return SubmitOutcome::Blank;
        }
        if self.pending.is_some() {
            return SubmitOutcome::Busy;
        }

        self.messages
            .push(ChatMessage::new(input.to_string(), Sender::User));
        let due = now + delay;
        self.pending = Some(PendingReply {
            utterance: input.to_string(),
            due,
        });
        SubmitOutcome::Sent { reply_due: due }
    }

    /// Deliver the pending reply if it is due. Returns the appended message.
    pub fn poll(&mut self, now: Instant) -> Option<&ChatMessage> {
        if !self.pending.as_ref().is_some_and(|p| now >= p.due) {
            return None;
        }
        let pending = self.pending.take()?;
        let reply = agent::respond(self.persona, &self.creator, &pending.utterance);
        self.messages.push(ChatMessage::new(reply, Sender::Agent));
        self.messages.last()
    }
}
