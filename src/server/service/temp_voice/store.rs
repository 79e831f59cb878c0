use std::collections::HashMap;

use serenity::all::{ChannelId, GuildId};

use super::record::TempChannelRecord;

/// Table of live temporary channels keyed by channel ID.
///
/// The store is the only source of truth for whether a channel is managed. It performs
/// no locking of its own; the manager mutates it while holding its state lock.
#[derive(Default)]
pub struct ChannelStateStore {
    records: HashMap<ChannelId, TempChannelRecord>,
}

impl ChannelStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, channel_id: ChannelId) -> Option<&TempChannelRecord> {
        self.records.get(&channel_id)
    }

    pub fn get_mut(&mut self, channel_id: ChannelId) -> Option<&mut TempChannelRecord> {
        self.records.get_mut(&channel_id)
    }

    /// Inserts a record, returning any record previously stored for the same channel.
    pub fn put(&mut self, record: TempChannelRecord) -> Option<TempChannelRecord> {
        self.records.insert(record.channel_id, record)
    }

    pub fn remove(&mut self, channel_id: ChannelId) -> Option<TempChannelRecord> {
        self.records.remove(&channel_id)
    }

    pub fn has(&self, channel_id: ChannelId) -> bool {
        self.records.contains_key(&channel_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records currently pending deletion.
    pub fn armed_count(&self) -> usize {
        self.records
            .values()
            .filter(|record| record.armed_token().is_some())
            .count()
    }

    /// Removes every record belonging to `guild_id`.
    pub fn remove_guild(&mut self, guild_id: GuildId) -> Vec<TempChannelRecord> {
        let channel_ids: Vec<ChannelId> = self
            .records
            .values()
            .filter(|record| record.guild_id == guild_id)
            .map(|record| record.channel_id)
            .collect();

        channel_ids
            .into_iter()
            .filter_map(|channel_id| self.records.remove(&channel_id))
            .collect()
    }

    /// Removes and returns every record.
    pub fn drain(&mut self) -> Vec<TempChannelRecord> {
        self.records.drain().map(|(_, record)| record).collect()
    }
}
