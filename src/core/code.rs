//! Shared game code.
//!
//! One code is shared by everyone talking to the bot. It is stored as a single
//! [`GameCode`] value so the raw and spelled forms can never disagree, and the
//! slot is guarded by a lock because command handlers run concurrently.

use tokio::sync::RwLock;

/// A game code in raw and spelled form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameCode {
    raw: String,
    spelled: String,
}

impl GameCode {
    /// Builds the code and its spelled form.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let spelled = spell(&raw);
        Self { raw, spelled }
    }

    /// The code as typed.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The code's letters joined with `", "`, for text-to-speech.
    #[must_use]
    pub fn spelled(&self) -> &str {
        &self.spelled
    }

    /// Spoken announcement of the code.
    #[must_use]
    pub fn announcement(&self) -> String {
        format!("Il codice è {}", self.spelled)
    }

    /// What `code` sends, in order: the spoken announcement, then the raw code.
    #[must_use]
    pub fn replies(&self) -> [CodeReply; 2] {
        [
            CodeReply::Spoken(self.announcement()),
            CodeReply::Plain(self.raw.clone()),
        ]
    }
}

/// One message sent for a game code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeReply {
    /// Sent with text-to-speech.
    Spoken(String),
    /// Sent as a normal message.
    Plain(String),
}

/// Joins every character of `raw` with `", "`.
#[must_use]
pub fn spell(raw: &str) -> String {
    raw.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Process-wide holder of the current game code.
#[derive(Debug, Default)]
pub struct GameCodeSlot {
    current: RwLock<Option<GameCode>>,
}

impl GameCodeSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `new` when given, then returns whatever is stored.
    ///
    /// Both steps happen under one write lock.
    pub async fn update(&self, new: Option<String>) -> Option<GameCode> {
        let mut current = self.current.write().await;
        if let Some(raw) = new {
            *current = Some(GameCode::new(raw));
        }
        current.clone()
    }
}
