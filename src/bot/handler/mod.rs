//! Serenity event handlers feeding the hook dispatcher.
//!
//! Every callback folds its arguments into a [`GatewayEvent`] and dispatches it. Hook
//! failures end up here: they are traced and reported to the bot log, which rate-limits
//! what reaches the channel.

pub mod ready;

use std::sync::Arc;

use serenity::all::{
    ChannelId, Context, CurrentUser, Event, EventHandler, Guild, GuildId,
    GuildMemberUpdateEvent, Member, Message, MessageId, MessageUpdateEvent, PartialGuild,
    Presence, RawEventHandler, Ready, TypingStartEvent, User, VoiceState,
};
use serenity::async_trait;

use crate::{
    bot::{context::BotContext, event::GatewayEvent},
    hook::Dispatcher,
};

/// Dispatcher shared by the typed and raw handlers.
pub struct EventRouter {
    dispatcher: Dispatcher<GatewayEvent>,
    ctx: BotContext,
}

impl EventRouter {
    pub fn new(dispatcher: Dispatcher<GatewayEvent>, ctx: BotContext) -> Self {
        Self { dispatcher, ctx }
    }

    /// Dispatches `event`, reporting a hook failure to the bot log.
    pub async fn dispatch(&self, event: GatewayEvent) {
        if let Err(err) = self.dispatcher.dispatch(&event).await {
            self.ctx
                .log
                .log_error(&format!("handling {}", event), &err)
                .await;
        }
    }
}

/// Discord bot event handler
pub struct Handler {
    router: Arc<EventRouter>,
    summary: String,
}

impl Handler {
    /// Creates the handler. `summary` is posted to the bot log on every ready event.
    pub fn new(router: Arc<EventRouter>, summary: String) -> Self {
        Self { router, summary }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        ready::handle_ready(&self.router.ctx, ready, &self.summary).await;
    }

    async fn typing_start(&self, _ctx: Context, event: TypingStartEvent) {
        self.router.dispatch(GatewayEvent::TypingStart(event)).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, _ctx: Context, message: Message) {
        self.router.dispatch(GatewayEvent::MessageCreate(message)).await;
    }

    async fn message_update(
        &self,
        _ctx: Context,
        _old_if_available: Option<Message>,
        _new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        self.router.dispatch(GatewayEvent::MessageUpdate(event)).await;
    }

    async fn message_delete(
        &self,
        _ctx: Context,
        channel_id: ChannelId,
        message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        self.router
            .dispatch(GatewayEvent::MessageDelete {
                channel_id,
                message_id,
                guild_id,
            })
            .await;
    }

    async fn user_update(&self, _ctx: Context, _old_data: Option<CurrentUser>, new: CurrentUser) {
        self.router.dispatch(GatewayEvent::UserUpdate(new)).await;
    }

    async fn presence_update(&self, _ctx: Context, new_data: Presence) {
        self.router
            .dispatch(GatewayEvent::PresenceUpdate(new_data))
            .await;
    }

    async fn voice_state_update(&self, _ctx: Context, _old: Option<VoiceState>, new: VoiceState) {
        self.router.dispatch(GatewayEvent::VoiceStateUpdate(new)).await;
    }

    /// Called when the guild's settings change
    async fn guild_update(
        &self,
        _ctx: Context,
        _old_data_if_available: Option<Guild>,
        new_data: PartialGuild,
    ) {
        self.router.dispatch(GatewayEvent::GuildUpdate(new_data)).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, _ctx: Context, new_member: Member) {
        self.router
            .dispatch(GatewayEvent::GuildMemberAdd(new_member))
            .await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        self.router
            .dispatch(GatewayEvent::GuildMemberRemove { guild_id, user })
            .await;
    }

    /// Called when a member is updated in a guild (roles, nickname, etc.)
    async fn guild_member_update(
        &self,
        _ctx: Context,
        _old_if_available: Option<Member>,
        _new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        self.router
            .dispatch(GatewayEvent::GuildMemberUpdate(event))
            .await;
    }

    async fn guild_ban_addition(&self, _ctx: Context, guild_id: GuildId, banned_user: User) {
        self.router
            .dispatch(GatewayEvent::GuildBanAdd {
                guild_id,
                user: banned_user,
            })
            .await;
    }

    async fn guild_ban_removal(&self, _ctx: Context, guild_id: GuildId, unbanned_user: User) {
        self.router
            .dispatch(GatewayEvent::GuildBanRemove {
                guild_id,
                user: unbanned_user,
            })
            .await;
    }
}

/// Hands every gateway dispatch to raw hooks before it is decoded.
pub struct RawHandler {
    router: Arc<EventRouter>,
}

impl RawHandler {
    pub fn new(router: Arc<EventRouter>) -> Self {
        Self { router }
    }
}

#[async_trait]
impl RawEventHandler for RawHandler {
    async fn raw_event(&self, _ctx: Context, event: Event) {
        self.router.dispatch(GatewayEvent::Raw(Box::new(event))).await;
    }
}
