//! Message filters: the scolding rule applied to every message and the
//! selection used by `clean`.

use crate::config::settings::{ModerationSettings, Settings};

/// Reply posted after a scolded message is removed.
pub const SCOLD_REPLY: &str = "❌ **You have to be _ciccione_ to use this command!**";

/// Notice sent when `clean` cannot bulk-delete in a channel.
pub const CLEAN_UNSUPPORTED: &str = "Questo comando non è supportato in questo canale";

/// Removes messages starting with `symbol` that were written by `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoldRule {
    symbol: String,
    user_id: u64,
}

impl ScoldRule {
    /// Scolds `user_id` for messages starting with `symbol`.
    #[must_use]
    pub fn new(symbol: impl Into<String>, user_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            user_id,
        }
    }

    /// Rule configured in `[moderation]`.
    #[must_use]
    pub fn from_settings(settings: &ModerationSettings) -> Self {
        Self::new(settings.scold_symbol.clone(), settings.scold_user_id)
    }

    /// Whether a message must be deleted and scolded.
    #[must_use]
    pub fn applies(&self, content: &str, author_id: u64) -> bool {
        author_id == self.user_id && !self.symbol.is_empty() && content.starts_with(&self.symbol)
    }
}

/// Selects messages swept by `clean`: commands and the cleanup user's messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupFilter {
    prefix: String,
    author_id: u64,
}

impl CleanupFilter {
    /// Matches commands using `prefix` and anything written by `author_id`.
    #[must_use]
    pub fn new(prefix: impl Into<String>, author_id: u64) -> Self {
        Self {
            prefix: prefix.into(),
            author_id,
        }
    }

    /// Filter for the configured prefix and cleanup user.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.prefix.clone(), settings.moderation.cleanup_user_id)
    }

    /// Whether a message should be deleted.
    #[must_use]
    pub fn matches(&self, content: &str, author_id: u64) -> bool {
        author_id == self.author_id || content.starts_with(&self.prefix)
    }
}
