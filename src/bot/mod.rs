//! Discord gateway integration.
//!
//! Startup resolves the configured guild and its channels, loads every module into a
//! frozen hook dispatcher, then hands the dispatcher to the Serenity event handlers. Each
//! gateway callback wraps its payload into a [`GatewayEvent`](event::GatewayEvent) and
//! dispatches it; Serenity runs callbacks concurrently, so several events can be in flight
//! at once.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel updates
//! - `GUILD_MESSAGES` / `MESSAGE_CONTENT` - Messages, edits, deletes and their content
//! - `GUILD_MEMBERS` - Member joins, leaves and updates (privileged intent)
//! - `GUILD_PRESENCES` - Presence updates (privileged intent)
//! - `GUILD_MESSAGE_TYPING`, `GUILD_VOICE_STATES`, `GUILD_MODERATION` - Typing, voice, bans
//!
//! Privileged intents must be enabled in the Discord Developer Portal for the bot
//! application.

pub mod context;
pub mod directory;
pub mod event;
pub mod handler;
pub mod start;
