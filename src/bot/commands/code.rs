//! Game code command - stores the room code and reads it out loud.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::utils},
        core::code::CodeReply,
        errors::Result,
    };

    /// Salva e detta il codice della partita
    ///
    /// `?code ABCDEF` stores a new code; `?code` repeats the stored one.
    /// The code is spoken letter by letter, then sent as plain text.
    #[poise::command(prefix_command)]
    pub async fn code(ctx: Context<'_>, #[rest] new_code: Option<String>) -> Result<()> {
        let new_code = utils::first_token(new_code.as_deref()).map(str::to_string);
        let Some(current) = ctx.data().game_code.update(new_code).await else {
            return Ok(());
        };

        for reply in current.replies() {
            match reply {
                CodeReply::Spoken(text) => utils::say_tts(ctx, text).await?,
                CodeReply::Plain(text) => {
                    ctx.say(text).await?;
                }
            }
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
