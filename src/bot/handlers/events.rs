//! Gateway event handler.
//!
//! Runs for every event next to poise's own command dispatch, so a message
//! removed here is still processed as a command.

use crate::{
    bot::BotData,
    core::moderation::{SCOLD_REPLY, ScoldRule},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tracing::info;

/// Entry point registered in the framework options.
pub async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, BotData, Error>,
    data: &BotData,
) -> Result<()> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            info!(
                "Connected as {} ({}) to {} guilds",
                data_about_bot.user.name,
                data_about_bot.user.id,
                data_about_bot.guilds.len()
            );
        }
        serenity::FullEvent::Message { new_message } => {
            let rule = ScoldRule::from_settings(&data.settings.moderation);
            scold(ctx, new_message, &rule).await?;
        }
        _ => {}
    }
    Ok(())
}

/// Deletes a message matching `rule` and posts the scolding reply.
async fn scold(ctx: &serenity::Context, msg: &serenity::Message, rule: &ScoldRule) -> Result<()> {
    if !rule.applies(&msg.content, msg.author.id.get()) {
        return Ok(());
    }

    info!("Scolding {} in channel {}", msg.author.name, msg.channel_id);
    msg.delete(ctx).await?;
    msg.channel_id.say(ctx, SCOLD_REPLY).await?;
    Ok(())
}
