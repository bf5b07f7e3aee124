//! Bot settings loaded from an optional TOML file.
//!
//! Every field has a default, so the bot runs without any settings file at all.
//! The file location comes from the `CONFIG_PATH` environment variable and
//! falls back to `./config.toml`.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the settings file location.
pub const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";

/// Default settings file location.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Top-level settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Command prefix (a single character in practice)
    pub prefix: String,
    /// Voice playback settings
    pub voice: VoiceSettings,
    /// Message filter and cleanup settings
    pub moderation: ModerationSettings,
    /// Source weight meter settings
    pub weight: WeightSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prefix: "?".to_string(),
            voice: VoiceSettings::default(),
            moderation: ModerationSettings::default(),
            weight: WeightSettings::default(),
        }
    }
}

/// Where clips live and how they are played.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    /// Directory holding the clip files
    pub sounds_dir: PathBuf,
    /// ffmpeg executable used to decode clips
    pub ffmpeg_path: PathBuf,
    /// How often a playing clip is checked for completion
    pub poll_interval_ms: u64,
}

impl VoiceSettings {
    /// Poll interval as a [`Duration`].
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            sounds_dir: PathBuf::from("data/sounds"),
            ffmpeg_path: default_ffmpeg_path(),
            poll_interval_ms: 1000,
        }
    }
}

fn default_ffmpeg_path() -> PathBuf {
    if cfg!(unix) {
        PathBuf::from("ffmpeg")
    } else {
        PathBuf::from(r"data\sounds\ffmpeg.exe")
    }
}

/// Identities and markers used by the message filter and `clean`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModerationSettings {
    /// Messages starting with this symbol from `scold_user_id` are removed
    pub scold_symbol: String,
    /// User whose `scold_symbol` messages are removed
    pub scold_user_id: u64,
    /// Messages by this user are swept by `clean`
    pub cleanup_user_id: u64,
    /// How many recent messages `clean` inspects
    pub cleanup_limit: u8,
}

impl Default for ModerationSettings {
    fn default() -> Self {
        Self {
            scold_symbol: "❌".to_string(),
            scold_user_id: 235_088_799_074_484_224,
            cleanup_user_id: 767_524_102_537_216_001,
            cleanup_limit: 100,
        }
    }
}

/// Inputs of the `kgb` source weight meter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeightSettings {
    /// Root of the source tree to weigh
    pub source_dir: PathBuf,
    /// File extensions counted as source
    pub extensions: Vec<String>,
}

impl Default for WeightSettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            extensions: vec!["rs".to_string()],
        }
    }
}

/// Parses settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<Settings> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse settings: {e}"),
    })
}

/// Loads settings from `path`; a missing file yields the defaults.
pub fn load_settings_from<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    tracing::debug!("Attempting to load settings from: {:?}", path);

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings file at {:?}, using defaults", path);
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(Error::Config {
                message: format!("Failed to read settings file {path:?}: {e}"),
            });
        }
    };

    let settings = parse_settings(&contents)?;
    if settings.prefix.is_empty() {
        return Err(Error::Config {
            message: "prefix cannot be empty".to_string(),
        });
    }
    Ok(settings)
}

/// Loads settings from `CONFIG_PATH` or `./config.toml`.
pub fn load_settings() -> Result<Settings> {
    let path =
        std::env::var(CONFIG_PATH_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_settings_from(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.prefix, "?");
        assert_eq!(settings.voice.sounds_dir, PathBuf::from("data/sounds"));
        assert_eq!(settings.voice.poll_interval(), Duration::from_secs(1));
        assert_eq!(settings.moderation.scold_symbol, "❌");
        assert_eq!(settings.moderation.scold_user_id, 235_088_799_074_484_224);
        assert_eq!(settings.moderation.cleanup_user_id, 767_524_102_537_216_001);
        assert_eq!(settings.moderation.cleanup_limit, 100);
        assert_eq!(settings.weight.extensions, vec!["rs".to_string()]);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let toml_str = r#"
            prefix = "!"

            [voice]
            poll_interval_ms = 250
        "#;

        let settings = parse_settings(toml_str).unwrap();
        assert_eq!(settings.prefix, "!");
        assert_eq!(settings.voice.poll_interval_ms, 250);
        assert_eq!(settings.voice.sounds_dir, PathBuf::from("data/sounds"));
        assert_eq!(settings.moderation.cleanup_limit, 100);
    }

    #[test]
    fn test_full_file() {
        let toml_str = r#"
            prefix = "$"

            [voice]
            sounds_dir = "/srv/sounds"
            ffmpeg_path = "/usr/local/bin/ffmpeg"
            poll_interval_ms = 500

            [moderation]
            scold_symbol = "!"
            scold_user_id = 1
            cleanup_user_id = 2
            cleanup_limit = 50

            [weight]
            source_dir = "crates"
            extensions = ["rs", "toml"]
        "#;

        let settings = parse_settings(toml_str).unwrap();
        assert_eq!(settings.voice.ffmpeg_path, PathBuf::from("/usr/local/bin/ffmpeg"));
        assert_eq!(settings.moderation.scold_user_id, 1);
        assert_eq!(settings.moderation.cleanup_user_id, 2);
        assert_eq!(settings.moderation.cleanup_limit, 50);
        assert_eq!(settings.weight.source_dir, PathBuf::from("crates"));
        assert_eq!(settings.weight.extensions.len(), 2);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = parse_settings("prefix = ");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new("settings-missing");
        let settings = load_settings_from(dir.path().join("config.toml")).unwrap();
        assert_eq!(settings.prefix, "?");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let dir = TempDir::new("settings-prefix");
        let file = dir.write("config.toml", "prefix = \"\"\n");
        let result = load_settings_from(&file);
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
