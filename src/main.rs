use ciccione_bot::{
    bot,
    config::{settings, token},
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the optional settings file
    let settings = settings::load_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    info!("Using command prefix {:?}", settings.prefix);

    // 4. Resolve the bot token (BOT_TOKEN, then config/token.conf)
    let token = token::load_token().inspect_err(|e| error!("{}", e))?;

    // 5. Run the bot
    bot::run_bot(token, settings).await?;

    Ok(())
}
