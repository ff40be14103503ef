//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Role, Channel, Member, Presence) for testing purposes. These
//! factories create valid Serenity objects by deserializing JSON, simulating
//! what Discord's gateway would send.
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` / `guild::create_test_guild_with` - Create Serenity Guild objects
//! - `role::create_test_role` - Create Serenity Role objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `presence::create_test_presence` - Create Serenity Presence objects

pub mod channel;
pub mod guild;
pub mod member;
pub mod presence;
pub mod role;

// Re-export commonly used functions for convenience
pub use channel::create_test_channel;
pub use guild::{create_test_guild, create_test_guild_with};
pub use member::create_test_member;
pub use presence::create_test_presence;
pub use role::create_test_role;
