//! Recording `DiscordApi` implementation for tests.

use serenity::all::{ChannelId, GuildId, RoleId};
use serenity::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::data::DiscordApi;
use crate::error::AppError;

/// First ID handed out for created roles and channels.
const FIRST_CREATED_ID: u64 = 900_000;

/// Records every call and hands out fresh IDs for created objects.
///
/// Role and channel creation can be delayed to exercise the initialization
/// gate, and each kind of call can be made to fail.
#[derive(Default)]
pub struct FakeDiscordApi {
    next_id: AtomicU64,
    created_roles: Mutex<Vec<(GuildId, String)>>,
    created_channels: Mutex<Vec<(GuildId, String)>>,
    messages: Mutex<Vec<(ChannelId, String)>>,
    fail_role_creation: AtomicBool,
    fail_channel_creation: AtomicBool,
    fail_sends: AtomicBool,
    creation_delay: Option<Duration>,
}

impl FakeDiscordApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creation_delay(delay: Duration) -> Self {
        Self {
            creation_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn fail_role_creation(&self, fail: bool) {
        self.fail_role_creation.store(fail, Ordering::SeqCst);
    }

    pub fn fail_channel_creation(&self, fail: bool) {
        self.fail_channel_creation.store(fail, Ordering::SeqCst);
    }

    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn created_roles(&self) -> Vec<(GuildId, String)> {
        self.created_roles.lock().unwrap().clone()
    }

    pub fn created_channels(&self) -> Vec<(GuildId, String)> {
        self.created_channels.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<(ChannelId, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Message contents in the order they were sent.
    pub fn contents(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .map(|(_, content)| content)
            .collect()
    }

    fn next_id(&self) -> u64 {
        FIRST_CREATED_ID + self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn delay(&self) {
        if let Some(delay) = self.creation_delay {
            tokio::time::sleep(delay).await;
        }
    }
}

fn fake_failure(message: &'static str) -> AppError {
    AppError::from(serenity::Error::Other(message))
}

#[async_trait]
impl DiscordApi for FakeDiscordApi {
    async fn create_role(&self, guild_id: GuildId, name: &str) -> Result<RoleId, AppError> {
        self.delay().await;
        if self.fail_role_creation.load(Ordering::SeqCst) {
            return Err(fake_failure("role creation failed"));
        }

        self.created_roles
            .lock()
            .unwrap()
            .push((guild_id, name.to_string()));
        Ok(RoleId::new(self.next_id()))
    }

    async fn create_text_channel(
        &self,
        guild_id: GuildId,
        name: &str,
    ) -> Result<ChannelId, AppError> {
        self.delay().await;
        if self.fail_channel_creation.load(Ordering::SeqCst) {
            return Err(fake_failure("channel creation failed"));
        }

        self.created_channels
            .lock()
            .unwrap()
            .push((guild_id, name.to_string()));
        Ok(ChannelId::new(self.next_id()))
    }

    async fn send_message(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(fake_failure("send failed"));
        }

        self.messages
            .lock()
            .unwrap()
            .push((channel_id, content.to_string()));
        Ok(())
    }
}
