use super::*;
use std::time::Duration;

/// Tests initializing a monitor for a guild that already has both objects.
///
/// Verifies that the existing role and channel are reused and nothing is
/// created through the API.
///
/// Expected: Ok with the existing IDs and no creation calls
#[tokio::test]
async fn reuses_existing_role_and_channel() -> Result<(), AppError> {
    let api = Arc::new(FakeDiscordApi::new());
    let monitor = create_monitor(&api, ready_guild(GUILD_ID, ROLE_ID, CHANNEL_ID, &[]));

    let targets = monitor.initialize().await?;

    assert_eq!(targets.role_id, RoleId::new(ROLE_ID));
    assert_eq!(targets.channel_id, ChannelId::new(CHANNEL_ID));
    assert!(api.created_roles().is_empty());
    assert!(api.created_channels().is_empty());

    Ok(())
}

/// Tests initializing a monitor for a guild missing both objects.
///
/// Verifies that exactly one role and one channel are created with the
/// configured names, and that repeated initialization creates nothing more.
///
/// Expected: Ok with one role and one channel created
#[tokio::test]
async fn creates_missing_role_and_channel_once() -> Result<(), AppError> {
    let api = Arc::new(FakeDiscordApi::new());
    let monitor = create_monitor(&api, bare_guild(GUILD_ID, &[]));

    let first = monitor.initialize().await?;
    let second = monitor.initialize().await?;

    assert_eq!(first, second);
    assert_eq!(
        api.created_roles(),
        vec![(GuildId::new(GUILD_ID), "notifications".to_string())]
    );
    assert_eq!(
        api.created_channels(),
        vec![(GuildId::new(GUILD_ID), "bot-status-updates".to_string())]
    );

    Ok(())
}

/// Tests that role names are matched case-sensitively.
///
/// Expected: Ok with a new role created despite "Notifications" existing
#[tokio::test]
async fn role_match_is_case_sensitive() -> Result<(), AppError> {
    let api = Arc::new(FakeDiscordApi::new());
    let mut guild = ready_guild(GUILD_ID, ROLE_ID, CHANNEL_ID, &[]);
    guild.roles.retain(|role| role.name != "notifications");
    guild.roles.push(NamedRole {
        id: RoleId::new(ROLE_ID),
        name: "Notifications".to_string(),
    });
    let monitor = create_monitor(&api, guild);

    let targets = monitor.initialize().await?;

    assert_ne!(targets.role_id, RoleId::new(ROLE_ID));
    assert_eq!(targets.channel_id, ChannelId::new(CHANNEL_ID));
    assert_eq!(api.created_roles().len(), 1);

    Ok(())
}

/// Tests that a failed resolution is never retried.
///
/// Verifies that after role creation fails, the monitor stays unavailable even
/// once the API would succeed again, and that presence changes fail too.
///
/// Expected: Err(MonitorUnavailable) on every call and no role created
#[tokio::test]
async fn failed_resolution_is_not_retried() {
    let api = Arc::new(FakeDiscordApi::new());
    api.fail_role_creation(true);
    let monitor = create_monitor(&api, bare_guild(GUILD_ID, &[]));

    let first = monitor.initialize().await;
    assert!(matches!(first, Err(AppError::MonitorUnavailable { .. })));

    api.fail_role_creation(false);

    let second = monitor.initialize().await;
    assert!(matches!(second, Err(AppError::MonitorUnavailable { .. })));

    let presence = monitor
        .handle_presence_change(bot(31, BotStatus::Offline))
        .await;
    assert!(matches!(presence, Err(AppError::MonitorUnavailable { .. })));

    assert!(api.created_roles().is_empty());
    assert!(api.messages().is_empty());
}

/// Tests a failing channel creation.
///
/// Expected: Err(MonitorUnavailable) naming the monitor's guild
#[tokio::test]
async fn channel_failure_makes_monitor_unavailable() {
    let api = Arc::new(FakeDiscordApi::new());
    api.fail_channel_creation(true);
    let monitor = create_monitor(&api, bare_guild(GUILD_ID, &[]));

    let result = monitor.initialize().await;

    match result {
        Err(AppError::MonitorUnavailable { guild_id }) => {
            assert_eq!(guild_id, GuildId::new(GUILD_ID))
        }
        other => panic!("expected MonitorUnavailable, got {:?}", other),
    }
}

/// Tests that presence changes wait for a slow initialization.
///
/// Runs initialization and a presence change concurrently while role and
/// channel creation are delayed. Verifies that resolution happens only once
/// and the notification goes to the created channel.
///
/// Expected: one role, one channel, one message in the created channel
#[tokio::test]
async fn presence_change_waits_for_initialization() -> Result<(), AppError> {
    let api = Arc::new(FakeDiscordApi::with_creation_delay(Duration::from_millis(50)));
    let monitor = create_monitor(&api, bare_guild(GUILD_ID, &[(31, BotStatus::Online)]));

    let (targets, sent) = tokio::join!(
        monitor.initialize(),
        monitor.handle_presence_change(bot(31, BotStatus::Offline))
    );
    let targets = targets?;

    assert!(sent?);
    assert_eq!(api.created_roles().len(), 1);
    assert_eq!(api.created_channels().len(), 1);
    assert_eq!(
        api.messages(),
        vec![(
            targets.channel_id,
            format!("<@&{}> <@31> is offline", targets.role_id)
        )]
    );

    Ok(())
}
