//! Process-wide registry of guild monitors.
//!
//! The registry maps guild IDs to their `GuildMonitor`. It is populated once on
//! the first cache-ready signal, extended when the bot joins a guild later, and
//! consulted on every presence update. Cloning the registry is cheap; clones
//! share the same monitors.

use serenity::all::GuildId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::data::DiscordApi;
use crate::error::AppError;
use crate::model::guild::{GuildSnapshot, NotificationNames};
use crate::model::presence::MemberPresence;
use crate::service::GuildMonitor;

#[derive(Clone)]
pub struct MonitorRegistry {
    monitors: Arc<RwLock<HashMap<GuildId, Arc<GuildMonitor>>>>,
    /// Set once the startup build has run.
    started: Arc<AtomicBool>,
    /// Set by a new gateway session until its cache-ready sweep has run.
    sweep_pending: Arc<AtomicBool>,
    api: Arc<dyn DiscordApi>,
    names: NotificationNames,
}

impl MonitorRegistry {
    pub fn new(api: Arc<dyn DiscordApi>, names: NotificationNames) -> Self {
        Self {
            monitors: Arc::new(RwLock::new(HashMap::new())),
            started: Arc::new(AtomicBool::new(false)),
            sweep_pending: Arc::new(AtomicBool::new(false)),
            api,
            names,
        }
    }

    /// Whether the startup build has already run.
    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::Acquire)
    }

    /// Marks the start of a gateway session.
    ///
    /// The next `on_cache_ready` call sweeps every monitored guild. Serenity
    /// empties its guild cache on a new session, so the sweep has to wait until
    /// the guilds have been received again.
    pub fn begin_session(&self) {
        self.sweep_pending.store(true, Ordering::Release);
    }

    /// Handles a cache-ready signal.
    ///
    /// The first signal builds the monitors and announces every offline bot.
    /// Later signals sweep again only when a new session has begun since the
    /// last sweep; signals caused by joining a guild are ignored since the join
    /// itself sweeps that guild.
    ///
    /// # Arguments
    /// - `guilds` - Snapshots of every cached guild
    ///
    /// # Returns
    /// - `usize` - Number of notifications sent
    pub async fn on_cache_ready(&self, guilds: Vec<GuildSnapshot>) -> usize {
        if self.build_all(guilds.clone()).await {
            self.sweep_pending.store(false, Ordering::Release);
            return self.sweep_all(&guilds).await;
        }

        if !self.sweep_pending.swap(false, Ordering::AcqRel) {
            tracing::debug!("Cache ready without a new session; skipping sweep");
            return 0;
        }

        self.sweep_all(&guilds).await
    }

    /// Creates and initializes one monitor per guild, on the first call only.
    ///
    /// Monitors are registered before any of them is initialized, so presence
    /// updates that arrive meanwhile find their monitor and wait on its gate.
    /// Guilds that already have a monitor (joined before the build ran) keep it.
    /// A failed initialization is logged and leaves that monitor unavailable;
    /// the remaining guilds are still initialized.
    ///
    /// # Arguments
    /// - `guilds` - Snapshots of every guild known at startup
    ///
    /// # Returns
    /// - `true` - Monitors were built by this call
    /// - `false` - The startup build had already run; nothing was done
    pub async fn build_all(&self, guilds: Vec<GuildSnapshot>) -> bool {
        if self.started.swap(true, Ordering::AcqRel) {
            return false;
        }

        let mut created = Vec::with_capacity(guilds.len());
        {
            let mut monitors = self.monitors.write().await;
            for guild in guilds {
                if monitors.contains_key(&guild.guild_id) {
                    continue;
                }

                let monitor = Arc::new(GuildMonitor::new(
                    guild,
                    self.names.clone(),
                    self.api.clone(),
                ));
                monitors.insert(monitor.guild_id(), monitor.clone());
                created.push(monitor);
            }
        }

        tracing::info!("Created {} guild monitors", created.len());

        for monitor in created {
            // Failures are logged by the monitor itself
            let _ = monitor.initialize().await;
        }

        true
    }

    /// Registers a monitor for a guild joined after startup.
    ///
    /// Existing monitors are never replaced.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the newly joined guild
    ///
    /// # Returns
    /// - `true` - A new monitor was created and initialized
    /// - `false` - The guild already had a monitor
    pub async fn add_guild(&self, guild: GuildSnapshot) -> bool {
        let guild_id = guild.guild_id;
        let monitor = {
            let mut monitors = self.monitors.write().await;
            if monitors.contains_key(&guild_id) {
                return false;
            }

            let monitor = Arc::new(GuildMonitor::new(
                guild,
                self.names.clone(),
                self.api.clone(),
            ));
            monitors.insert(guild_id, monitor.clone());
            monitor
        };

        tracing::info!("Created monitor for newly joined guild {}", guild_id);
        let _ = monitor.initialize().await;

        true
    }

    pub async fn get(&self, guild_id: GuildId) -> Option<Arc<GuildMonitor>> {
        self.monitors.read().await.get(&guild_id).cloned()
    }

    pub async fn guild_ids(&self) -> Vec<GuildId> {
        self.monitors.read().await.keys().copied().collect()
    }

    /// Routes a presence change to the monitor of its guild.
    ///
    /// # Returns
    /// - `Ok(true)` - A notification was sent
    /// - `Ok(false)` - The change was suppressed
    /// - `Err(AppError::NotFound)` - No monitor exists for the guild
    /// - `Err(AppError)` - The monitor failed (see `GuildMonitor::handle_presence_change`)
    pub async fn handle_presence(
        &self,
        guild_id: GuildId,
        member: MemberPresence,
    ) -> Result<bool, AppError> {
        let monitor = self
            .get(guild_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("No monitor for guild {}", guild_id)))?;

        monitor.handle_presence_change(member).await
    }

    /// Runs the offline sweep for every guild in `guilds` that has a monitor.
    ///
    /// A failure in one guild is logged and does not stop the others.
    ///
    /// # Arguments
    /// - `guilds` - Fresh snapshots of the guilds to sweep
    ///
    /// # Returns
    /// - `usize` - Total notifications sent across all guilds
    pub async fn sweep_all(&self, guilds: &[GuildSnapshot]) -> usize {
        let mut total = 0;

        for guild in guilds {
            let Some(monitor) = self.get(guild.guild_id).await else {
                tracing::debug!("Skipping sweep for unmonitored guild {}", guild.guild_id);
                continue;
            };

            match monitor.notify_all_currently_offline(guild).await {
                Ok(sent) => total += sent,
                Err(e) => {
                    tracing::error!(
                        "Failed to announce offline bots in guild {} ({}): {:?}",
                        guild.name,
                        guild.guild_id,
                        e
                    );
                }
            }
        }

        tracing::debug!("Offline sweep sent {} notifications", total);

        total
    }
}
