//! Access layer for the Discord side effects the monitors perform.
//!
//! The monitors only ever create a role, create a text channel and send a
//! message. Those calls sit behind the `DiscordApi` trait so the service layer
//! can be driven by a recording fake in tests.

pub mod discord;

#[cfg(test)]
pub mod fake;

pub use discord::{DiscordApi, SerenityDiscordApi};
