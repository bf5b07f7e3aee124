//! Clip playback commands.
//!
//! Every clip command takes an optional track number and plays the clip into
//! the caller's voice channel. Callers outside a voice channel get no reply.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, commands::utils, voice},
        core::{
            playback,
            sound::{self, SoundClip},
        },
        errors::Result,
    };
    use tracing::debug;

    /// Resolves the clip and plays it through songbird.
    async fn play_clip(ctx: Context<'_>, clip: &SoundClip, track: Option<String>) -> Result<()> {
        let Some((guild_id, channel_id)) = voice::author_voice_channel(ctx) else {
            debug!("{} is not in a voice channel, ignoring `{}`", ctx.author().name, clip.name);
            return Ok(());
        };

        let voice_settings = &ctx.data().settings.voice;
        let path = {
            let mut rng = rand::thread_rng();
            clip.resolve(
                &voice_settings.sounds_dir,
                utils::first_token(track.as_deref()),
                &mut rng,
            )
        };

        let backend = voice::SongbirdVoice::from_context(ctx, guild_id).await?;
        let outcome = playback::play_sound(
            &backend,
            Some(channel_id.get()),
            &path,
            voice_settings.poll_interval(),
        )
        .await;
        debug!("Clip `{}` ({:?}) ended: {:?}", clip.name, path, outcome);
        Ok(())
    }

    /// Seeeeeeee
    #[poise::command(prefix_command)]
    pub async fn seee(ctx: Context<'_>, #[rest] track: Option<String>) -> Result<()> {
        play_clip(ctx, &sound::SEEE, track).await
    }

    /// A me non m'interessa
    #[poise::command(prefix_command)]
    pub async fn ame(ctx: Context<'_>, #[rest] track: Option<String>) -> Result<()> {
        play_clip(ctx, &sound::AME, track).await
    }

    /// Hollywood
    #[poise::command(prefix_command)]
    pub async fn cht(ctx: Context<'_>, #[rest] track: Option<String>) -> Result<()> {
        play_clip(ctx, &sound::CHT, track).await
    }

    /// Inni Democratici
    #[poise::command(prefix_command)]
    pub async fn demo(ctx: Context<'_>, #[rest] track: Option<String>) -> Result<()> {
        play_clip(ctx, &sound::DEMO, track).await
    }

    /// Modalità Estinzione
    #[poise::command(prefix_command)]
    pub async fn ess(ctx: Context<'_>, #[rest] track: Option<String>) -> Result<()> {
        play_clip(ctx, &sound::ESS, track).await
    }

    /// Ecco come risolvere qualsiasi problema
    #[poise::command(prefix_command)]
    pub async fn spranga(ctx: Context<'_>, #[rest] track: Option<String>) -> Result<()> {
        play_clip(ctx, &sound::SPRANGA, track).await
    }

    /// Warzonata
    #[poise::command(prefix_command)]
    pub async fn war(ctx: Context<'_>, #[rest] track: Option<String>) -> Result<()> {
        play_clip(ctx, &sound::WAR, track).await
    }

    /// Salvini e la cassa integrazione
    #[poise::command(prefix_command)]
    pub async fn cassa(ctx: Context<'_>, #[rest] track: Option<String>) -> Result<()> {
        play_clip(ctx, &sound::CASSA, track).await
    }

    /// Lascia il canale vocale
    #[poise::command(prefix_command)]
    pub async fn leave(ctx: Context<'_>) -> Result<()> {
        let Some(guild_id) = ctx.guild_id() else {
            return Ok(());
        };

        let backend = voice::SongbirdVoice::from_context(ctx, guild_id).await?;
        if playback::VoiceBackend::is_connected(&backend).await {
            playback::VoiceBackend::disconnect(&backend).await?;
            ctx.say("Adios!").await?;
        } else {
            ctx.say("Non sono in nessun canale").await?;
        }
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
