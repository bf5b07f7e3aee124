//! Voice playback flow, independent of the voice library.
//!
//! The bot layer implements [`VoiceBackend`] on top of songbird; tests use a
//! scripted backend. [`play_sound`] owns the connection for one playback:
//! join if needed, play, wait for the engine to go idle, leave. A clip
//! requested while another one is playing is dropped, and the connection is
//! left to the playback that owns it.

use crate::errors::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// Narrow view of one guild's voice connection and audio engine.
#[async_trait]
pub trait VoiceBackend: Send + Sync {
    /// Handle to a started clip.
    type Track: Send + Sync;

    /// Whether the bot already has a connection in this guild.
    async fn is_connected(&self) -> bool;

    /// Joins the given voice channel.
    async fn connect(&self, channel_id: u64) -> Result<()>;

    /// Starts playing the file on the current connection.
    ///
    /// Returns `None` without touching the engine while another clip is still
    /// playing on this connection.
    async fn start(&self, path: &Path) -> Result<Option<Self::Track>>;

    /// Whether the engine is still busy with the track.
    async fn is_playing(&self, track: &Self::Track) -> bool;

    /// Tears the connection down.
    async fn disconnect(&self) -> Result<()>;
}

/// How a playback attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The caller was not in a voice channel; nothing happened.
    NotInVoice,
    /// Joining the caller's channel failed.
    ConnectFailed,
    /// The engine refused the clip.
    StartFailed,
    /// Another clip was still playing; this one was dropped.
    Busy,
    /// The clip played until the engine went idle.
    Finished,
}

/// Plays `path` into the caller's voice channel and leaves afterwards.
///
/// `user_channel` is the caller's current voice channel. An existing
/// connection is reused as-is. Failures are logged, never surfaced to the
/// caller, and the connection is torn down however the attempt ended, except
/// when the engine was busy: the playing clip keeps the connection.
pub async fn play_sound<B>(
    backend: &B,
    user_channel: Option<u64>,
    path: &Path,
    poll_interval: Duration,
) -> PlaybackOutcome
where
    B: VoiceBackend + ?Sized,
{
    let Some(channel_id) = user_channel else {
        debug!("Caller is not in a voice channel, skipping playback");
        return PlaybackOutcome::NotInVoice;
    };

    let outcome = play_connected(backend, channel_id, path, poll_interval).await;
    if outcome == PlaybackOutcome::Busy {
        debug!("Another clip is playing, dropping {:?}", path);
        return outcome;
    }

    if let Err(e) = backend.disconnect().await {
        warn!("Failed to leave voice channel: {}", e);
    }
    outcome
}

async fn play_connected<B>(
    backend: &B,
    channel_id: u64,
    path: &Path,
    poll_interval: Duration,
) -> PlaybackOutcome
where
    B: VoiceBackend + ?Sized,
{
    if !backend.is_connected().await {
        if let Err(e) = backend.connect(channel_id).await {
            warn!("Failed to join voice channel {}: {}", channel_id, e);
            return PlaybackOutcome::ConnectFailed;
        }
        debug!("Joined voice channel {}", channel_id);
    }

    let track = match backend.start(path).await {
        Ok(Some(track)) => track,
        Ok(None) => return PlaybackOutcome::Busy,
        Err(e) => {
            warn!("Failed to start {:?}: {}", path, e);
            return PlaybackOutcome::StartFailed;
        }
    };

    while backend.is_playing(&track).await {
        tokio::time::sleep(poll_interval).await;
    }

    debug!("Finished playing {:?}", path);
    PlaybackOutcome::Finished
}
