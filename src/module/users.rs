//! Tracks guild members as they join or change their profile.
//!
//! The member list is also synced in full on every ready event, so members who joined
//! while the bot was offline are recorded without waiting for their next update.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, Member, User};
use serenity::async_trait;

use crate::{
    bot::{context::BotContext, event::GatewayEvent},
    data::user::UserRepository,
    error::AppError,
    hook::{EventKind, Hook},
    model::user::UpsertUserParam,
};

use super::{HookRegistrar, Module};

pub struct UsersModule {
    hook: Arc<UsersHook>,
}

/// Largest page the guild member list endpoint returns.
const MEMBER_PAGE_SIZE: u64 = 1000;

impl UsersModule {
    pub fn new(db: DatabaseConnection, guild_id: GuildId) -> Self {
        Self {
            hook: Arc::new(UsersHook { db, guild_id }),
        }
    }
}

impl Module for UsersModule {
    fn name(&self) -> &'static str {
        "Users"
    }

    fn description(&self) -> &'static str {
        "Tracks when members were first and last seen."
    }

    fn register(&self, registrar: &mut HookRegistrar<'_>) {
        registrar.register_global(EventKind::GuildMemberAdd, self.hook.clone());
        registrar.register_global(EventKind::GuildMemberUpdate, self.hook.clone());
    }
}

pub struct UsersHook {
    db: DatabaseConnection,
    guild_id: GuildId,
}

fn upsert_param(user: &User, joined_at: Option<chrono::DateTime<Utc>>) -> UpsertUserParam {
    UpsertUserParam {
        discord_id: user.id.get(),
        username: user.name.clone(),
        avatar: user.avatar.as_ref().map(ToString::to_string),
        joined_at,
        seen_at: Utc::now(),
    }
}

/// Records a page of guild members.
///
/// # Arguments
/// - `db` - Database connection
/// - `members` - Members as returned by the member list endpoint
///
/// # Returns
/// - `Ok(usize)` - Number of members recorded
/// - `Err(AppError)` - The first failed upsert; later members are not recorded
pub async fn record_members(
    db: &DatabaseConnection,
    members: &[Member],
) -> Result<usize, AppError> {
    let repo = UserRepository::new(db);

    for member in members {
        repo.upsert(upsert_param(&member.user, member.joined_at.map(|t| t.to_utc())))
            .await?;
    }

    Ok(members.len())
}

/// Records every member of the served guild, one page at a time.
///
/// # Returns
/// - `Ok(usize)` - Number of members recorded
/// - `Err(AppError)` - Fetching or recording a page failed
pub async fn sync_members(ctx: &BotContext) -> Result<usize, AppError> {
    let mut after = None;
    let mut total = 0;

    loop {
        let page = ctx
            .guild_id
            .members(&ctx.http, Some(MEMBER_PAGE_SIZE), after)
            .await?;
        total += record_members(&ctx.db, &page).await?;

        match page.last() {
            Some(last) if page.len() as u64 == MEMBER_PAGE_SIZE => after = Some(last.user.id),
            _ => break,
        }
    }

    Ok(total)
}

#[async_trait]
impl Hook<GatewayEvent> for UsersHook {
    async fn handle(&self, payload: &GatewayEvent) -> Result<(), AppError> {
        if !payload.is_from(self.guild_id) {
            return Ok(());
        }

        let param = match payload {
            GatewayEvent::GuildMemberAdd(member) => {
                upsert_param(&member.user, member.joined_at.map(|t| t.to_utc()))
            }
            GatewayEvent::GuildMemberUpdate(event) => upsert_param(&event.user, None),
            _ => return Ok(()),
        };

        let user = UserRepository::new(&self.db).upsert(param).await?;

        tracing::debug!("Recorded member {} ({})", user.username, user.discord_id);

        Ok(())
    }
}
