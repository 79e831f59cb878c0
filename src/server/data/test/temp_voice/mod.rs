use crate::server::{
    data::temp_voice::TempVoiceSettingsRepository,
    error::AppError,
    model::temp_voice::{UpsertTempVoiceSettingsParams, DEFAULT_NAME_TEMPLATE},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory::temp_voice_settings::TempVoiceSettingsFactory};

mod delete;
mod get_by_guild_id;
mod upsert;
