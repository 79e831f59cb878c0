use super::*;

/// Tests deleting a guild's settings.
///
/// Verifies that only the targeted guild's row is removed.
///
/// Expected: Ok with one row remaining
#[tokio::test]
async fn deletes_only_target_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TempVoiceSettingsFactory::new(db)
        .guild_id("111")
        .build()
        .await?;
    TempVoiceSettingsFactory::new(db)
        .guild_id("222")
        .build()
        .await?;

    let repo = TempVoiceSettingsRepository::new(db);
    repo.delete(111).await?;

    assert!(repo.get_by_guild_id(111).await?.is_none());
    assert!(repo.get_by_guild_id(222).await?.is_some());

    let count = entity::prelude::TempVoiceSettings::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting settings of a guild that has none.
///
/// Expected: Ok
#[tokio::test]
async fn delete_missing_guild_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_temp_voice_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TempVoiceSettingsRepository::new(db);
    let result = repo.delete(999).await;

    assert!(result.is_ok());

    Ok(())
}
