//! Bot layer - Discord-specific interface and command handlers
//!
//! This module wires the poise framework together: shared data, the command
//! table, the event handler, error reporting and songbird registration.

/// Discord command implementations (general, code, jester, moderation, audio)
pub mod commands;
/// Gateway event handlers (ready log, message filter)
pub mod handlers;
/// Songbird-backed voice playback
pub mod voice;

use crate::{
    config::settings::Settings,
    core::code::GameCodeSlot,
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use songbird::SerenityInit;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Shared data available to all bot commands.
///
/// Holds the settings, the game code shared by every invocation of `code` and
/// the clips playing in each guild.
#[derive(Debug)]
pub struct BotData {
    /// Settings loaded at startup
    pub settings: Arc<Settings>,
    /// The current game code, if any
    pub game_code: GameCodeSlot,
    /// Clips currently playing, per guild
    pub active_tracks: Arc<voice::ActiveTracks>,
}

impl BotData {
    /// Creates the shared data with an empty game code slot.
    #[must_use]
    pub fn new(settings: Arc<Settings>) -> Self {
        Self {
            settings,
            game_code: GameCodeSlot::new(),
            active_tracks: Arc::new(voice::ActiveTracks::new()),
        }
    }
}

/// Context type used by every command.
pub type Context<'a> = poise::Context<'a, BotData, Error>;

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        // Logged only: command failures never produce a reply.
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {}", ctx.command().name, error);
        }
        poise::FrameworkError::UnknownCommand { msg_content, .. } => {
            debug!("Ignoring unknown command: {:?}", msg_content);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!("Error handling {:?} event: {:?}", event.snake_case_name(), error);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Builds the framework and runs the client until it stops.
#[instrument(skip(token, settings))]
pub async fn run_bot(token: String, settings: Settings) -> Result<()> {
    let settings = Arc::new(settings);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(settings.prefix.clone()),
                ..Default::default()
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::events::handle_event(ctx, event, framework, data))
            },
            pre_command: |ctx| {
                Box::pin(async move {
                    debug!(
                        "Received `{}` from {} ({})",
                        ctx.command().name,
                        ctx.author().name,
                        ctx.author().id
                    );
                })
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |_ctx, ready, _framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                Ok(BotData::new(settings))
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_VOICE_STATES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .register_songbird()
        .await;

    match client {
        Ok(mut c) => {
            info!("Starting bot client...");
            if let Err(why) = c.start().await {
                error!("Client error: {:?}", why);
                return Err(why.into());
            }
        }
        Err(e) => {
            error!("Error creating client: {:?}", e);
            return Err(e.into());
        }
    }
    Ok(())
}
