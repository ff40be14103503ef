//! Discord bot integration for bot uptime monitoring.
//!
//! The bot receives gateway events through Serenity and forwards them to the
//! `MonitorRegistry`. It owns no state of its own besides the registry, which
//! is created lazily from the first event's HTTP client.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild, role and channel data for the cache
//! - `GUILD_MEMBERS` - Know which members are bots (privileged intent)
//! - `GUILD_PRESENCES` - Receive presence updates (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `GUILD_PRESENCES` are privileged intents and must
//! be explicitly enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
