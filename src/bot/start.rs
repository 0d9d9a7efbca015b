use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, GuildId, Http};

use crate::{
    bot::{
        context::{BotContext, BotSettings},
        directory::GuildChannelDirectory,
        handler::{ready::load_summary, EventRouter, Handler, RawHandler},
    },
    config::Config,
    error::AppError,
    hook::ChannelDirectory,
    module::load_modules,
    service::bot_log::BotLog,
};

/// Initializes the Discord bot client without starting it.
///
/// Resolves the configured guild and its channels, loads every module into the hook
/// dispatcher and builds the client around the resulting event handlers. Channel names
/// are resolved once here; the bot must be restarted to pick up renamed channels.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection shared by hooks and commands
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - The guild could not be fetched or the client failed to build
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    let http = Arc::new(Http::new(&config.discord_bot_token));
    let guild_id = GuildId::new(config.discord_guild_id);

    let guild = guild_id.to_partial_guild(&http).await?;
    let channels = guild_id.channels(&http).await?;
    let directory = GuildChannelDirectory::from_guild_channels(channels.values());

    tracing::info!(
        "Serving guild {} ({}) with {} named channels",
        guild.name,
        guild_id,
        directory.channel_count()
    );

    let log_channel = directory.resolve_channel_id(&config.log_channel);
    if log_channel.is_none() {
        tracing::warn!(
            "Log channel \"{}\" not found, bot log messages will only be traced",
            config.log_channel
        );
    }

    let ctx = BotContext {
        db,
        http: http.clone(),
        guild_id,
        log: Arc::new(BotLog::new(
            http,
            log_channel,
            config.error_report_interval,
        )),
        settings: Arc::new(BotSettings::from_config(config)),
    };

    let loaded = load_modules(&ctx, &directory, config.command_channels.as_slice());
    let summary = load_summary(ctx.settings.version, &guild.name, &loaded);

    let router = Arc::new(EventRouter::new(loaded.dispatcher, ctx));

    // GUILD_MEMBERS, GUILD_PRESENCES and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_TYPING
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_PRESENCES
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MODERATION;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(router.clone(), summary))
        .raw_event_handler(RawHandler::new(router))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until the gateway connection shuts down.
///
/// # Arguments
/// - `client` - Client built by [`init_bot`]
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
