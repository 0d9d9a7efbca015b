//! Channel allow-sets for scoped hooks.
//!
//! Hooks name the channels they are interested in by their human-readable name. Names are
//! resolved to channel IDs exactly once, when the hook is registered; renames after startup
//! are not picked up without a restart. Names that do not resolve are dropped rather than
//! rejected because channel layouts differ between deployments.

use serenity::all::ChannelId;
use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

/// Lookup from channel name to channel ID.
pub trait ChannelDirectory {
    /// Resolves a channel name.
    ///
    /// # Returns
    /// - `Some(ChannelId)` - A channel with this name exists
    /// - `None` - No channel with this name is known
    fn resolve_channel_id(&self, name: &str) -> Option<ChannelId>;
}

impl<S: BuildHasher> ChannelDirectory for HashMap<String, ChannelId, S> {
    fn resolve_channel_id(&self, name: &str) -> Option<ChannelId> {
        self.get(name).copied()
    }
}

/// Set of channels a hook is restricted to.
///
/// An empty scope is global: it admits every channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelScope {
    channels: HashSet<ChannelId>,
}

impl ChannelScope {
    /// Scope admitting every channel.
    pub fn global() -> Self {
        Self::default()
    }

    pub fn is_global(&self) -> bool {
        self.channels.is_empty()
    }

    /// Whether an event in `channel` should reach a hook with this scope.
    pub fn admits(&self, channel: ChannelId) -> bool {
        self.channels.is_empty() || self.channels.contains(&channel)
    }
}

impl FromIterator<ChannelId> for ChannelScope {
    fn from_iter<I: IntoIterator<Item = ChannelId>>(iter: I) -> Self {
        Self {
            channels: iter.into_iter().collect(),
        }
    }
}

/// Outcome of resolving a list of channel names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeResolution {
    /// Channels that resolved.
    pub scope: ChannelScope,
    /// Names that did not resolve, in the order they were given.
    pub unresolved: Vec<String>,
}

/// Resolves channel names into a [`ChannelScope`].
///
/// Unresolvable names are skipped and reported back in `unresolved` so the caller can log
/// them. An empty name list yields a global scope.
///
/// # Arguments
/// - `directory` - Name to ID lookup populated from guild metadata
/// - `names` - Channel names the hook asked for
///
/// # Returns
/// - `ScopeResolution` - The resolved scope plus any names that were dropped
pub fn resolve_scope<D, S>(directory: &D, names: &[S]) -> ScopeResolution
where
    D: ChannelDirectory + ?Sized,
    S: AsRef<str>,
{
    let mut resolution = ScopeResolution::default();

    for name in names {
        let name = name.as_ref();
        match directory.resolve_channel_id(name) {
            Some(id) => {
                resolution.scope.channels.insert(id);
            }
            None => resolution.unresolved.push(name.to_string()),
        }
    }

    resolution
}
