//! Songbird-backed voice playback.
//!
//! Clips are decoded by an ffmpeg child process into raw 48 kHz stereo f32 PCM
//! and handed to songbird's mixer.

use crate::{
    bot::Context,
    core::playback::VoiceBackend,
    errors::{Error, Result},
};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use songbird::{
    Songbird,
    input::{ChildContainer, Input, RawAdapter, core::io::ReadOnlySource},
    tracks::{PlayMode, TrackHandle},
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use tokio::sync::Mutex;

const SAMPLE_RATE: u32 = 48_000;
const CHANNELS: u32 = 2;

/// The clip the bot last started in each guild.
///
/// `play_only_input` stops whatever the call was playing, so a new clip is
/// only started once the previous one is over.
#[derive(Debug, Default)]
pub struct ActiveTracks {
    tracks: Mutex<HashMap<serenity::GuildId, TrackHandle>>,
}

impl ActiveTracks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Voice connection of one guild, driven through songbird.
pub struct SongbirdVoice {
    manager: Arc<Songbird>,
    active: Arc<ActiveTracks>,
    guild_id: serenity::GuildId,
    ffmpeg: PathBuf,
}

impl SongbirdVoice {
    /// Wraps the guild's connection in `manager`, playing clips through `ffmpeg`.
    #[must_use]
    pub const fn new(
        manager: Arc<Songbird>,
        active: Arc<ActiveTracks>,
        guild_id: serenity::GuildId,
        ffmpeg: PathBuf,
    ) -> Self {
        Self {
            manager,
            active,
            guild_id,
            ffmpeg,
        }
    }

    /// Builds the backend from the client's songbird manager and the ffmpeg setting.
    pub async fn from_context(ctx: Context<'_>, guild_id: serenity::GuildId) -> Result<Self> {
        let manager = songbird::get(ctx.serenity_context())
            .await
            .ok_or_else(|| Error::Voice {
                message: "songbird is not registered on the client".to_string(),
            })?;
        Ok(Self::new(
            manager,
            Arc::clone(&ctx.data().active_tracks),
            guild_id,
            ctx.data().settings.voice.ffmpeg_path.clone(),
        ))
    }
}

fn voice_error(e: impl std::fmt::Display) -> Error {
    Error::Voice {
        message: e.to_string(),
    }
}

/// Spawns ffmpeg decoding `path` to raw PCM on its stdout.
fn ffmpeg_input(ffmpeg: &Path, path: &Path) -> Result<Input> {
    let child = Command::new(ffmpeg)
        .args(["-hide_banner", "-loglevel", "error", "-i"])
        .arg(path)
        .args(["-f", "f32le", "-ac", "2", "-ar", "48000", "-"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let source = ReadOnlySource::new(ChildContainer::from(child));
    Ok(RawAdapter::new(source, SAMPLE_RATE, CHANNELS).into())
}

async fn track_is_live(track: &TrackHandle) -> bool {
    // A track the driver already dropped reports an error: it is done.
    track
        .get_info()
        .await
        .is_ok_and(|state| matches!(state.playing, PlayMode::Play | PlayMode::Pause))
}

#[async_trait]
impl VoiceBackend for SongbirdVoice {
    type Track = TrackHandle;

    async fn is_connected(&self) -> bool {
        self.manager.get(self.guild_id).is_some()
    }

    async fn connect(&self, channel_id: u64) -> Result<()> {
        self.manager
            .join(self.guild_id, serenity::ChannelId::new(channel_id))
            .await
            .map(|_| ())
            .map_err(voice_error)
    }

    async fn start(&self, path: &Path) -> Result<Option<TrackHandle>> {
        let call = self.manager.get(self.guild_id).ok_or_else(|| Error::Voice {
            message: "no voice connection in this guild".to_string(),
        })?;

        // Held until the new track is registered so two clips cannot both pass the check.
        let mut active = self.active.tracks.lock().await;
        if let Some(current) = active.get(&self.guild_id) {
            if track_is_live(current).await {
                return Ok(None);
            }
        }

        let input = ffmpeg_input(&self.ffmpeg, path)?;
        let track = call.lock().await.play_only_input(input);
        active.insert(self.guild_id, track.clone());
        Ok(Some(track))
    }

    async fn is_playing(&self, track: &TrackHandle) -> bool {
        track_is_live(track).await
    }

    async fn disconnect(&self) -> Result<()> {
        self.active.tracks.lock().await.remove(&self.guild_id);
        self.manager.remove(self.guild_id).await.map_err(voice_error)
    }
}

/// The caller's guild and current voice channel, read from the cache.
pub fn author_voice_channel(ctx: Context<'_>) -> Option<(serenity::GuildId, serenity::ChannelId)> {
    let guild = ctx.guild()?;
    let channel_id = guild.voice_states.get(&ctx.author().id)?.channel_id?;
    Some((guild.id, channel_id))
}

/// Users currently connected to `channel_id`, read from the cache.
pub fn channel_members(ctx: Context<'_>, channel_id: serenity::ChannelId) -> Vec<serenity::UserId> {
    ctx.guild()
        .map(|guild| {
            guild
                .voice_states
                .values()
                .filter(|state| state.channel_id == Some(channel_id))
                .map(|state| state.user_id)
                .collect()
        })
        .unwrap_or_default()
}
