//! Botwatch Test Utils
//!
//! Provides shared testing utilities for the botwatch bot. The crate offers
//! factories for Serenity model objects so tests can build guilds, members and
//! presences the way Discord's gateway would deliver them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild_with, create_test_member, create_test_presence};
//!
//! #[test]
//! fn test_snapshot() {
//!     let guild = create_test_guild_with(
//!         123456789,
//!         "Test Guild",
//!         vec![],
//!         vec![],
//!         vec![create_test_member(123456789, 42, "uptime-bot", true)],
//!         vec![create_test_presence(123456789, 42, Some(true), "offline")],
//!     );
//!
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
