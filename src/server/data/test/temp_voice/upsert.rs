use super::*;

/// Tests storing settings for a guild without a row.
///
/// Verifies that an unset template and grace period fall back to their defaults.
///
/// Expected: Ok with new row created
#[tokio::test]
async fn creates_settings_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TempVoiceSettingsRepository::new(db);
    let settings = repo
        .upsert(UpsertTempVoiceSettingsParams::enabled(123456789, 555))
        .await?;

    assert_eq!(settings.guild_id, 123456789);
    assert!(settings.enabled);
    assert_eq!(settings.creator_channel_id, Some(555));
    assert_eq!(settings.name_template, DEFAULT_NAME_TEMPLATE);
    assert_eq!(settings.delete_after_seconds, 30);

    let stored = entity::prelude::TempVoiceSettings::find()
        .filter(entity::temp_voice_settings::Column::GuildId.eq("123456789"))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.creator_channel_id.as_deref(), Some("555"));

    Ok(())
}

/// Tests storing settings for a guild that already has a row.
///
/// Verifies that every field is replaced and no second row is created.
///
/// Expected: Ok with the single row updated
#[tokio::test]
async fn replaces_existing_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TempVoiceSettingsRepository::new(db);
    repo.upsert(UpsertTempVoiceSettingsParams::enabled(123456789, 555))
        .await?;

    let updated = repo
        .upsert(UpsertTempVoiceSettingsParams {
            guild_id: 123456789,
            enabled: false,
            creator_channel_id: Some(777),
            category_id: Some(888),
            name_template: Some("{user}'s room".to_string()),
            user_limit: Some(5),
            bitrate: Some(64000),
            delete_after_seconds: Some(0),
        })
        .await?;

    assert!(!updated.enabled);
    assert_eq!(updated.creator_channel_id, Some(777));
    assert_eq!(updated.category_id, Some(888));
    assert_eq!(updated.name_template, "{user}'s room");
    assert_eq!(updated.user_limit, Some(5));
    assert_eq!(updated.bitrate, Some(64000));
    assert_eq!(updated.delete_after_seconds, 0);

    let count = entity::prelude::TempVoiceSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests storing a user limit above Discord's maximum.
///
/// Expected: Err(DbErr::Custom) and no row written
#[tokio::test]
async fn rejects_user_limit_above_maximum() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TempVoiceSettingsRepository::new(db);
    let result = repo
        .upsert(UpsertTempVoiceSettingsParams {
            user_limit: Some(100),
            ..UpsertTempVoiceSettingsParams::enabled(123456789, 555)
        })
        .await;

    assert!(matches!(result, Err(sea_orm::DbErr::Custom(_))));
    let count = entity::prelude::TempVoiceSettings::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests storing a bitrate that does not fit the integer column.
///
/// Verifies that the value is rejected rather than wrapped into a negative number and
/// read back as unset.
///
/// Expected: Err(DbErr::Custom) and no row written
#[tokio::test]
async fn rejects_bitrate_overflowing_column() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TempVoiceSettingsRepository::new(db);
    let result = repo
        .upsert(UpsertTempVoiceSettingsParams {
            bitrate: Some(u32::MAX),
            ..UpsertTempVoiceSettingsParams::enabled(123456789, 555)
        })
        .await;

    assert!(matches!(result, Err(sea_orm::DbErr::Custom(_))));
    let count = entity::prelude::TempVoiceSettings::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests storing the largest accepted user limit.
///
/// Expected: Ok with the limit stored
#[tokio::test]
async fn accepts_maximum_user_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TempVoiceSettingsRepository::new(db);
    let settings = repo
        .upsert(UpsertTempVoiceSettingsParams {
            user_limit: Some(99),
            ..UpsertTempVoiceSettingsParams::enabled(123456789, 555)
        })
        .await?;

    assert_eq!(settings.user_limit, Some(99));

    Ok(())
}
