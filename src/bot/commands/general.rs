//! General Discord commands - dice, coin, jokes, help and the weight meter.
//! These commands need no voice connection and no shared state.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::utils},
        core::{coin, dice, weight},
        errors::Result,
    };

    /// Lancia un dado
    ///
    /// Usage: `?roll 3d10` throws three ten-sided dice.
    #[poise::command(prefix_command)]
    pub async fn roll(ctx: Context<'_>, #[rest] expression: Option<String>) -> Result<()> {
        let reply = {
            let mut rng = rand::thread_rng();
            dice::roll_reply(utils::first_token(expression.as_deref()), &mut rng)
        };
        ctx.say(reply).await?;
        Ok(())
    }

    /// Lancia una moneta
    #[poise::command(prefix_command)]
    pub async fn flip(ctx: Context<'_>) -> Result<()> {
        let side = coin::flip(&mut rand::thread_rng());
        ctx.say(side.message()).await?;
        Ok(())
    }

    /// È ciccione
    #[poise::command(prefix_command)]
    pub async fn ciccione(ctx: Context<'_>) -> Result<()> {
        let name = match ctx.author_member().await {
            Some(member) => member.display_name().to_string(),
            None => ctx.author().display_name().to_string(),
        };
        utils::say_tts(ctx, format!("{name} è ciccione")).await
    }

    /// Tend Infame
    #[poise::command(prefix_command)]
    pub async fn tendinfame(ctx: Context<'_>) -> Result<()> {
        utils::say_tts(ctx, "Tend Infame").await
    }

    /// Quanto è ciccione il ciccione bot
    ///
    /// Counts the non-whitespace characters of the bot's own source.
    #[poise::command(prefix_command)]
    pub async fn kgb(ctx: Context<'_>) -> Result<()> {
        let settings = &ctx.data().settings.weight;
        let characters = weight::measure(&settings.source_dir, &settings.extensions).await?;
        ctx.say(weight::weight_message(characters)).await?;
        Ok(())
    }

    /// Mostra i comandi disponibili
    #[poise::command(prefix_command)]
    pub async fn help(
        ctx: Context<'_>,
        #[description = "Comando specifico"] command: Option<String>,
    ) -> Result<()> {
        let config = poise::builtins::HelpConfiguration {
            extra_text_at_bottom: "Scrivi ?help <comando> per i dettagli di un comando.",
            ..Default::default()
        };
        poise::builtins::help(ctx, command.as_deref(), config).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
