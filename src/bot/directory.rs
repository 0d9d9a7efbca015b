//! Channel name lookup for the guild the bot serves.
//!
//! Built once at startup from the guild's channel list. Channel renames, creations and
//! deletions after startup are not reflected until the bot restarts.

use std::collections::HashMap;

use serenity::all::{ChannelId, GuildChannel};

use crate::hook::ChannelDirectory;

#[derive(Debug, Default)]
pub struct GuildChannelDirectory {
    by_name: HashMap<String, (ChannelId, u16)>,
}

impl GuildChannelDirectory {
    /// Builds a directory from `(name, id, position)` triples.
    ///
    /// When several channels share a name, the one listed highest in the guild (lowest
    /// position) wins.
    pub fn from_entries<I>(channels: I) -> Self
    where
        I: IntoIterator<Item = (String, ChannelId, u16)>,
    {
        let mut by_name: HashMap<String, (ChannelId, u16)> = HashMap::new();

        for (name, id, position) in channels {
            by_name
                .entry(name)
                .and_modify(|current| {
                    if position < current.1 {
                        *current = (id, position);
                    }
                })
                .or_insert((id, position));
        }

        Self { by_name }
    }

    pub fn from_guild_channels<'a, I>(channels: I) -> Self
    where
        I: IntoIterator<Item = &'a GuildChannel>,
    {
        Self::from_entries(
            channels
                .into_iter()
                .map(|channel| (channel.name.clone(), channel.id, channel.position)),
        )
    }

    /// Number of distinct channel names.
    pub fn channel_count(&self) -> usize {
        self.by_name.len()
    }
}

impl ChannelDirectory for GuildChannelDirectory {
    fn resolve_channel_id(&self, name: &str) -> Option<ChannelId> {
        self.by_name.get(name).map(|(id, _)| *id)
    }
}
