//! Gateway payload routed through the hook dispatcher.
//!
//! Serenity delivers each gateway event to its own callback with its own argument list.
//! [`GatewayEvent`] folds them into one type so a single [`Dispatcher`] can route every
//! kind, and so hooks receive the same payload shape regardless of which callback fired.
//!
//! [`Dispatcher`]: crate::hook::Dispatcher

use std::fmt;

use serenity::all::{
    ChannelId, CurrentUser, Event, GuildId, GuildMemberUpdateEvent, Member, Message,
    MessageId, MessageUpdateEvent, PartialGuild, Presence, TypingStartEvent, User, VoiceState,
};

use crate::hook::{EventKind, Routable};

/// One gateway event, carrying the payload Serenity delivered.
#[derive(Debug, Clone)]
pub enum GatewayEvent {
    Raw(Box<Event>),
    TypingStart(TypingStartEvent),
    MessageCreate(Message),
    MessageUpdate(MessageUpdateEvent),
    MessageDelete {
        channel_id: ChannelId,
        message_id: MessageId,
        guild_id: Option<GuildId>,
    },
    UserUpdate(CurrentUser),
    PresenceUpdate(Presence),
    VoiceStateUpdate(VoiceState),
    GuildUpdate(PartialGuild),
    GuildMemberAdd(Member),
    GuildMemberRemove {
        guild_id: GuildId,
        user: User,
    },
    GuildMemberUpdate(GuildMemberUpdateEvent),
    GuildBanAdd {
        guild_id: GuildId,
        user: User,
    },
    GuildBanRemove {
        guild_id: GuildId,
        user: User,
    },
}

impl GatewayEvent {
    /// Guild the event belongs to.
    ///
    /// Raw events, changes to the bot's own user and direct messages have none.
    pub fn guild_id(&self) -> Option<GuildId> {
        match self {
            GatewayEvent::Raw(_) | GatewayEvent::UserUpdate(_) => None,
            GatewayEvent::TypingStart(event) => event.guild_id,
            GatewayEvent::MessageCreate(message) => message.guild_id,
            GatewayEvent::MessageUpdate(event) => event.guild_id,
            GatewayEvent::MessageDelete { guild_id, .. } => *guild_id,
            GatewayEvent::PresenceUpdate(presence) => presence.guild_id,
            GatewayEvent::VoiceStateUpdate(state) => state.guild_id,
            GatewayEvent::GuildUpdate(guild) => Some(guild.id),
            GatewayEvent::GuildMemberAdd(member) => Some(member.guild_id),
            GatewayEvent::GuildMemberUpdate(event) => Some(event.guild_id),
            GatewayEvent::GuildMemberRemove { guild_id, .. }
            | GatewayEvent::GuildBanAdd { guild_id, .. }
            | GatewayEvent::GuildBanRemove { guild_id, .. } => Some(*guild_id),
        }
    }

    /// Whether the event happened in `guild`.
    pub fn is_from(&self, guild: GuildId) -> bool {
        self.guild_id() == Some(guild)
    }
}

/// Kind of the event and what it is about, used in error reports.
impl fmt::Display for GatewayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();

        match self {
            GatewayEvent::Raw(event) => match event.name() {
                Some(name) => write!(f, "{} {}", kind, name),
                None => write!(f, "{}", kind),
            },
            GatewayEvent::TypingStart(event) => write!(f, "{} from {}", kind, event.user_id),
            GatewayEvent::MessageCreate(message) => write!(f, "{} {}", kind, message.id),
            GatewayEvent::MessageUpdate(event) => write!(f, "{} {}", kind, event.id),
            GatewayEvent::MessageDelete { message_id, .. } => write!(f, "{} {}", kind, message_id),
            GatewayEvent::UserUpdate(user) => write!(f, "{} for {}", kind, user.name),
            GatewayEvent::PresenceUpdate(presence) => {
                write!(f, "{} for {}", kind, presence.user.id)
            }
            GatewayEvent::VoiceStateUpdate(state) => write!(f, "{} for {}", kind, state.user_id),
            GatewayEvent::GuildUpdate(guild) => write!(f, "{} for {}", kind, guild.name),
            GatewayEvent::GuildMemberAdd(member) => write!(f, "{} for {}", kind, member.user.name),
            GatewayEvent::GuildMemberUpdate(event) => {
                write!(f, "{} for {}", kind, event.user.name)
            }
            GatewayEvent::GuildMemberRemove { user, .. }
            | GatewayEvent::GuildBanAdd { user, .. }
            | GatewayEvent::GuildBanRemove { user, .. } => write!(f, "{} for {}", kind, user.name),
        }
    }
}

impl Routable for GatewayEvent {
    fn kind(&self) -> EventKind {
        match self {
            GatewayEvent::Raw(_) => EventKind::Raw,
            GatewayEvent::TypingStart(_) => EventKind::TypingStart,
            GatewayEvent::MessageCreate(_) => EventKind::MessageCreate,
            GatewayEvent::MessageUpdate(_) => EventKind::MessageUpdate,
            GatewayEvent::MessageDelete { .. } => EventKind::MessageDelete,
            GatewayEvent::UserUpdate(_) => EventKind::UserUpdate,
            GatewayEvent::PresenceUpdate(_) => EventKind::PresenceUpdate,
            GatewayEvent::VoiceStateUpdate(_) => EventKind::VoiceStateUpdate,
            GatewayEvent::GuildUpdate(_) => EventKind::GuildUpdate,
            GatewayEvent::GuildMemberAdd(_) => EventKind::GuildMemberAdd,
            GatewayEvent::GuildMemberRemove { .. } => EventKind::GuildMemberRemove,
            GatewayEvent::GuildMemberUpdate(_) => EventKind::GuildMemberUpdate,
            GatewayEvent::GuildBanAdd { .. } => EventKind::GuildBanAdd,
            GatewayEvent::GuildBanRemove { .. } => EventKind::GuildBanRemove,
        }
    }

    /// Channel the event happened in.
    ///
    /// Only message, typing and voice events are tied to a channel. A voice state for a
    /// user leaving voice has no channel. Events without a channel reach every hook of
    /// their kind regardless of scope.
    fn channel_id(&self) -> Option<ChannelId> {
        match self {
            GatewayEvent::MessageCreate(message) => Some(message.channel_id),
            GatewayEvent::MessageUpdate(event) => Some(event.channel_id),
            GatewayEvent::MessageDelete { channel_id, .. } => Some(*channel_id),
            GatewayEvent::TypingStart(event) => Some(event.channel_id),
            GatewayEvent::VoiceStateUpdate(state) => state.channel_id,
            _ => None,
        }
    }
}
