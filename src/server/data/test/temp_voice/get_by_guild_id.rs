use super::*;

/// Tests retrieving settings for a configured guild.
///
/// Verifies that stored string IDs are parsed back into their numeric form.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn returns_settings_for_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TempVoiceSettingsFactory::new(db)
        .guild_id("123456789")
        .creator_channel_id(Some("555"))
        .delete_after_seconds(45)
        .build()
        .await?;

    let repo = TempVoiceSettingsRepository::new(db);
    let settings = repo.get_by_guild_id(123456789).await?.unwrap();

    assert_eq!(settings.guild_id, 123456789);
    assert!(settings.enabled);
    assert_eq!(settings.creator_channel_id, Some(555));
    assert_eq!(settings.delete_after_seconds, 45);

    Ok(())
}

/// Tests retrieving settings for a guild that was never configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TempVoiceSettingsFactory::new(db).build().await?;

    let repo = TempVoiceSettingsRepository::new(db);
    let settings = repo.get_by_guild_id(42).await?;

    assert!(settings.is_none());

    Ok(())
}

/// Tests retrieving a row whose creator channel ID is not a valid snowflake.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_malformed_channel_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TempVoiceSettingsFactory::new(db)
        .guild_id("123456789")
        .creator_channel_id(Some("not-a-number"))
        .build()
        .await?;

    let repo = TempVoiceSettingsRepository::new(db);
    let result = repo.get_by_guild_id(123456789).await;

    assert!(matches!(result, Err(sea_orm::DbErr::Custom(_))));

    Ok(())
}
