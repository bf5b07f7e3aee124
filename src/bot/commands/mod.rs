//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Clip playback commands and `leave`
pub mod audio;

/// Shared game code command
pub mod code;

/// Dice, coin, jokes, help and the weight meter
pub mod general;

/// Jester game mode commands
pub mod jester;

/// Channel cleanup command
pub mod moderation;

/// Helpers shared by the command handlers
pub mod utils;

// Export commands
pub use audio::*;
pub use code::*;
pub use general::*;
pub use jester::*;
pub use moderation::*;

use crate::{bot::BotData, errors::Error};

/// The full command table, registered once at startup.
#[must_use]
pub fn list() -> Vec<poise::Command<BotData, Error>> {
    vec![
        roll(),
        flip(),
        ciccione(),
        tendinfame(),
        kgb(),
        help(),
        code(),
        jester(),
        rules_jester(),
        clean(),
        seee(),
        ame(),
        cht(),
        demo(),
        ess(),
        spranga(),
        war(),
        cassa(),
        leave(),
    ]
}
