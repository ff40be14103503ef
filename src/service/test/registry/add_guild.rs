use super::*;

/// Tests adding a guild joined after startup.
///
/// Expected: true, monitor registered and its objects created
#[tokio::test]
async fn adds_new_guild() {
    let api = Arc::new(FakeDiscordApi::new());
    let registry = create_registry(&api);

    assert!(registry.add_guild(bare_guild(GUILD_ID, &[])).await);

    assert!(registry.get(GuildId::new(GUILD_ID)).await.is_some());
    assert_eq!(api.created_roles().len(), 1);
    assert_eq!(api.created_channels().len(), 1);
}

/// Tests adding a guild that already has a monitor.
///
/// Expected: false and nothing created a second time
#[tokio::test]
async fn does_not_replace_existing_monitor() {
    let api = Arc::new(FakeDiscordApi::new());
    let registry = create_registry(&api);

    registry.add_guild(bare_guild(GUILD_ID, &[])).await;
    let before = registry.get(GuildId::new(GUILD_ID)).await.unwrap();

    assert!(!registry.add_guild(bare_guild(GUILD_ID, &[])).await);

    let after = registry.get(GuildId::new(GUILD_ID)).await.unwrap();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(api.created_roles().len(), 1);
}

/// Tests that adding a guild does not count as the startup build.
///
/// Expected: registry not started, later build still runs
#[tokio::test]
async fn does_not_mark_registry_started() {
    let api = Arc::new(FakeDiscordApi::new());
    let registry = create_registry(&api);

    registry.add_guild(bare_guild(GUILD_ID, &[])).await;

    assert!(!registry.is_started());
    assert!(registry.build_all(vec![bare_guild(2000, &[])]).await);
}
