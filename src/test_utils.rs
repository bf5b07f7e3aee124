//! Shared test utilities for Ciccione Bot.
//!
//! Deterministic randomness, throwaway directories and a scripted voice
//! backend for exercising the playback flow without Discord.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{
    core::playback::VoiceBackend,
    errors::{Error, Result},
};
use async_trait::async_trait;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A fixed-seed RNG so randomized tests are reproducible.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x00C1_CC10)
}

/// A directory under the system temp dir, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    /// Creates a fresh, empty directory whose name starts with `label`.
    pub fn new(label: &str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let unique = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "ciccione-{label}-{}-{unique}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let file = self.path.join(relative);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&file, contents).expect("write temp file");
        file
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Calls recorded by [`MockVoice`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceCall {
    Connect(u64),
    Start(PathBuf),
    Disconnect,
}

/// Scripted [`VoiceBackend`].
///
/// Reports "playing" for a configurable number of polls, then idle. Like the
/// real engine, it refuses a new clip while the previous one is live.
#[derive(Debug, Default)]
pub struct MockVoice {
    connected: Mutex<bool>,
    live: Mutex<bool>,
    busy_polls: AtomicUsize,
    polls: AtomicUsize,
    fail_connect: bool,
    fail_start: bool,
    fail_disconnect: bool,
    calls: Mutex<Vec<VoiceCall>>,
}

impl MockVoice {
    pub fn new() -> Self {
        Self::default()
    }

    /// The engine answers "playing" this many times before going idle.
    pub fn playing_for(self, polls: usize) -> Self {
        self.busy_polls.store(polls, Ordering::SeqCst);
        self
    }

    pub fn already_connected(self) -> Self {
        *self.connected.lock().unwrap() = true;
        self
    }

    /// Connected, with a clip that never stops playing.
    pub fn already_playing(self) -> Self {
        *self.live.lock().unwrap() = true;
        self.playing_for(usize::MAX).already_connected()
    }

    pub fn failing_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    pub fn failing_start(mut self) -> Self {
        self.fail_start = true;
        self
    }

    pub fn failing_disconnect(mut self) -> Self {
        self.fail_disconnect = true;
        self
    }

    pub fn calls(&self) -> Vec<VoiceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    fn record(&self, call: VoiceCall) {
        self.calls.lock().unwrap().push(call);
    }
}

fn mock_error(what: &str) -> Error {
    Error::Voice {
        message: format!("mock {what} failure"),
    }
}

#[async_trait]
impl VoiceBackend for MockVoice {
    type Track = PathBuf;

    async fn is_connected(&self) -> bool {
        *self.connected.lock().unwrap()
    }

    async fn connect(&self, channel_id: u64) -> Result<()> {
        self.record(VoiceCall::Connect(channel_id));
        if self.fail_connect {
            return Err(mock_error("connect"));
        }
        *self.connected.lock().unwrap() = true;
        Ok(())
    }

    async fn start(&self, path: &Path) -> Result<Option<PathBuf>> {
        self.record(VoiceCall::Start(path.to_path_buf()));
        if self.fail_start {
            return Err(mock_error("start"));
        }
        let mut live = self.live.lock().unwrap();
        if *live {
            return Ok(None);
        }
        *live = true;
        Ok(Some(path.to_path_buf()))
    }

    async fn is_playing(&self, _track: &PathBuf) -> bool {
        self.polls.fetch_add(1, Ordering::SeqCst);
        let playing = self
            .busy_polls
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if !playing {
            *self.live.lock().unwrap() = false;
        }
        playing
    }

    async fn disconnect(&self) -> Result<()> {
        self.record(VoiceCall::Disconnect);
        *self.connected.lock().unwrap() = false;
        if self.fail_disconnect {
            return Err(mock_error("disconnect"));
        }
        Ok(())
    }
}
