use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::prelude::TypeMapKey;

use crate::server::bot::handler::Handler;
use crate::server::config::Config;
use crate::server::error::AppError;
use crate::server::service::temp_voice::{SerenityVoicePlatform, TempVoiceManager, TokioScheduler};

/// Type map key under which the client stores its temporary voice manager.
pub struct TempVoiceManagerKey;

impl TypeMapKey for TempVoiceManagerKey {
    type Value = TempVoiceManager;
}

/// Builds the Discord client and the temporary voice manager it drives.
///
/// The manager talks to Discord through the client's own HTTP client and cache, and is
/// registered in the client's type map for the event handlers.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for loading guild settings
///
/// # Returns
/// - `Ok((Client, TempVoiceManager))` - Client ready to start and a handle to its manager
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, TempVoiceManager), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(db);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let platform = SerenityVoicePlatform::new(client.http.clone(), client.cache.clone());
    let manager = TempVoiceManager::new(Arc::new(platform), Arc::new(TokioScheduler));

    client
        .data
        .write()
        .await
        .insert::<TempVoiceManagerKey>(manager.clone());

    Ok((client, manager))
}

/// Starts the Discord bot and runs until its shards shut down.
///
/// Should be called from within a spawned task.
///
/// # Arguments
/// - `client` - Client returned by `init_bot`
///
/// # Returns
/// - `Ok(())` - The bot stopped cleanly
/// - `Err(AppError)` - Connecting to the gateway failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
