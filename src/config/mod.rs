/// Optional TOML settings (prefix, voice, moderation, weight meter)
pub mod settings;

/// Bot token resolution from the environment or `config/token.conf`
pub mod token;
