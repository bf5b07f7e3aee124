use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No bot token found: set {env_var} or write it on the first line of {path}")]
    MissingToken { env_var: &'static str, path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("You are not in a voice channel")]
    NotInVoiceChannel,

    #[error("Voice error: {message}")]
    Voice { message: String },

    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Error::FrameworkError(Box::new(value))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
