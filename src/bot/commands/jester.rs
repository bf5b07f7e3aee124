//! Jester game mode commands.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, voice},
        core::jester as jester_mode,
        errors::{Error, Result},
    };
    use tracing::info;

    /// Avvia la modalità jester
    ///
    /// Privately tells one random player in your voice channel that they are the jester.
    #[poise::command(prefix_command)]
    pub async fn jester(ctx: Context<'_>) -> Result<()> {
        let (_, channel_id) = voice::author_voice_channel(ctx).ok_or(Error::NotInVoiceChannel)?;
        let players = voice::channel_members(ctx, channel_id);

        let chosen = {
            let mut rng = rand::thread_rng();
            jester_mode::pick_jester(&players, &mut rng).copied()
        };
        let chosen = chosen.ok_or(Error::NotInVoiceChannel)?;

        info!("Picked {} as jester in channel {}", chosen, channel_id);
        let dm = chosen.create_dm_channel(ctx).await?;
        dm.say(ctx, jester_mode::JESTER_NOTICE).await?;
        Ok(())
    }

    /// Mostra le regole della modalità jester
    #[poise::command(prefix_command)]
    pub async fn rules_jester(ctx: Context<'_>) -> Result<()> {
        ctx.say(jester_mode::RULES_JESTER).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
