//! Core bot logic - framework-agnostic pieces behind every command.
//!
//! Nothing in here talks to Discord. Randomness is injected through [`rand::Rng`]
//! and voice access through [`playback::VoiceBackend`], so each piece is tested
//! on its own.

/// Shared game code slot
pub mod code;
/// Coin flips
pub mod coin;
/// Dice expressions and rolls
pub mod dice;
/// Jester game mode
pub mod jester;
/// Message filters for scolding and cleanup
pub mod moderation;
/// Voice playback flow
pub mod playback;
/// Clip table and track resolution
pub mod sound;
/// Source weight meter
pub mod weight;
