//! Channel cleanup command.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::Context,
        core::moderation::{CLEAN_UNSUPPORTED, CleanupFilter},
        errors::Result,
    };
    use poise::serenity_prelude as serenity;
    use tracing::{info, warn};

    /// Deletes the matching messages among the most recent `limit` ones.
    async fn purge(ctx: Context<'_>, filter: &CleanupFilter, limit: u8) -> serenity::Result<usize> {
        let channel = ctx.channel_id();
        let messages = channel
            .messages(ctx, serenity::GetMessages::new().limit(limit))
            .await?;

        let ids: Vec<serenity::MessageId> = messages
            .iter()
            .filter(|msg| filter.matches(&msg.content, msg.author.id.get()))
            .map(|msg| msg.id)
            .collect();

        if ids.is_empty() {
            return Ok(0);
        }

        // Bulk delete rejects fewer than two ids.
        let count = ids.len();
        if let [id] = ids.as_slice() {
            channel.delete_message(ctx, *id).await?;
        } else {
            channel.delete_messages(ctx, ids).await?;
        }
        Ok(count)
    }

    /// Togli un po' di schifo
    ///
    /// Deletes recent commands and the bot's own replies in this channel.
    #[poise::command(prefix_command)]
    pub async fn clean(ctx: Context<'_>) -> Result<()> {
        let settings = &ctx.data().settings;
        let filter = CleanupFilter::from_settings(settings);

        match purge(ctx, &filter, settings.moderation.cleanup_limit).await {
            Ok(count) => info!("Cleaned {} messages in channel {}", count, ctx.channel_id()),
            Err(e) => {
                warn!("Bulk delete failed in channel {}: {}", ctx.channel_id(), e);
                ctx.say(CLEAN_UNSUPPORTED).await?;
            }
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
