use std::collections::HashMap;

use serenity::all::GuildId;

/// Per-guild sequence used to number channel names.
///
/// Only affects naming; gaps or resets after a restart are harmless.
#[derive(Default)]
pub struct GuildCounter {
    counts: HashMap<GuildId, u64>,
}

impl GuildCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next number for `guild_id`, starting at 1.
    pub fn next(&mut self, guild_id: GuildId) -> u64 {
        let count = self.counts.entry(guild_id).or_insert(0);
        *count += 1;
        *count
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
