pub use super::temp_voice_settings::Entity as TempVoiceSettings;
