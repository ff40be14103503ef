//! Bot presence domain models.
//!
//! Collapses Discord's presence statuses into the two states the monitor cares
//! about and defines the transition rule that decides when a status change is
//! worth announcing.

use serenity::all::{OnlineStatus, Presence, UserId};
use std::fmt;

/// Connectivity of a bot member as far as notifications are concerned.
///
/// Idle and do-not-disturb bots are still connected, so they count as online.
/// Invisible is reported to other users as offline and is treated the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotStatus {
    Online,
    Offline,
}

impl BotStatus {
    pub fn is_offline(self) -> bool {
        self == BotStatus::Offline
    }
}

impl From<OnlineStatus> for BotStatus {
    fn from(status: OnlineStatus) -> Self {
        match status {
            OnlineStatus::Offline | OnlineStatus::Invisible => BotStatus::Offline,
            _ => BotStatus::Online,
        }
    }
}

impl fmt::Display for BotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStatus::Online => f.write_str("online"),
            BotStatus::Offline => f.write_str("offline"),
        }
    }
}

/// A single member's presence reduced to what the monitor needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberPresence {
    /// Discord user ID of the member.
    pub user_id: UserId,
    /// Whether the member is an automated (bot) account.
    pub is_bot: bool,
    /// Current connectivity of the member.
    pub status: BotStatus,
}

impl MemberPresence {
    /// Converts a gateway presence update at the handler boundary.
    ///
    /// Presence updates carry a partial user object, so the `bot` flag is often
    /// missing. In that case the flag of the cached member is used, and a member
    /// that is in neither is assumed to be human.
    ///
    /// # Arguments
    /// - `presence` - Presence payload from the gateway
    /// - `cached_is_bot` - `bot` flag of the cached member, if the member is cached
    pub fn from_presence(presence: &Presence, cached_is_bot: Option<bool>) -> Self {
        Self {
            user_id: presence.user.id,
            is_bot: presence.user.bot.or(cached_is_bot).unwrap_or(false),
            status: BotStatus::from(presence.status),
        }
    }
}

/// Decides whether a status change should be announced.
///
/// Offline is always announced, including repeats, so the startup sweep reports
/// bots that were already offline when the monitor was created. Online is only
/// announced when the member was last recorded as offline; this suppresses both
/// duplicate online events and the first event for a member never seen before.
///
/// # Arguments
/// - `was_offline` - Last recorded flag for the member, `None` if never recorded
/// - `status` - Newly reported status
///
/// # Returns
/// - `Some(status)` - A notification for `status` is due
/// - `None` - Nothing to announce
pub fn next_transition(was_offline: Option<bool>, status: BotStatus) -> Option<BotStatus> {
    match (was_offline, status) {
        (_, BotStatus::Offline) => Some(BotStatus::Offline),
        (Some(true), BotStatus::Online) => Some(BotStatus::Online),
        (_, BotStatus::Online) => None,
    }
}
