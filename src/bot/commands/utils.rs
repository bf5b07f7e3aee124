use crate::bot::Context;
use crate::errors::Result;
use poise::serenity_prelude as serenity;

/// Sends `text` to the invoking channel with text-to-speech enabled.
pub async fn say_tts(ctx: Context<'_>, text: impl Into<String>) -> Result<()> {
    ctx.channel_id()
        .send_message(ctx, serenity::CreateMessage::new().content(text).tts(true))
        .await?;
    Ok(())
}

/// First whitespace-separated token of a command's argument text.
#[must_use]
pub fn first_token(args: Option<&str>) -> Option<&str> {
    args.and_then(|text| text.split_whitespace().next())
}
