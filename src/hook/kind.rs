use std::fmt;

/// Gateway event categories that hooks can subscribe to.
///
/// The set is fixed at compile time. Each variant maps to a dense index so the registry can
/// store its handler lists in a plain array and look them up without hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Any gateway dispatch, delivered before it is decoded into a typed event.
    Raw,
    TypingStart,
    MessageCreate,
    MessageUpdate,
    MessageDelete,
    UserUpdate,
    PresenceUpdate,
    VoiceStateUpdate,
    GuildUpdate,
    GuildMemberAdd,
    GuildMemberRemove,
    GuildMemberUpdate,
    GuildBanAdd,
    GuildBanRemove,
}

impl EventKind {
    /// Number of event kinds.
    pub const COUNT: usize = 14;

    /// Every event kind in index order.
    pub const ALL: [EventKind; Self::COUNT] = [
        EventKind::Raw,
        EventKind::TypingStart,
        EventKind::MessageCreate,
        EventKind::MessageUpdate,
        EventKind::MessageDelete,
        EventKind::UserUpdate,
        EventKind::PresenceUpdate,
        EventKind::VoiceStateUpdate,
        EventKind::GuildUpdate,
        EventKind::GuildMemberAdd,
        EventKind::GuildMemberRemove,
        EventKind::GuildMemberUpdate,
        EventKind::GuildBanAdd,
        EventKind::GuildBanRemove,
    ];

    /// Dense index of this kind, in `0..COUNT`.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Raw => "raw",
            EventKind::TypingStart => "typing_start",
            EventKind::MessageCreate => "message_create",
            EventKind::MessageUpdate => "message_update",
            EventKind::MessageDelete => "message_delete",
            EventKind::UserUpdate => "user_update",
            EventKind::PresenceUpdate => "presence_update",
            EventKind::VoiceStateUpdate => "voice_state_update",
            EventKind::GuildUpdate => "guild_update",
            EventKind::GuildMemberAdd => "guild_member_add",
            EventKind::GuildMemberRemove => "guild_member_remove",
            EventKind::GuildMemberUpdate => "guild_member_update",
            EventKind::GuildBanAdd => "guild_ban_add",
            EventKind::GuildBanRemove => "guild_ban_remove",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
