//! Reporter for the bot-log channel.
//!
//! Every line is traced locally and mirrored into the configured Discord channel when
//! one was resolved at startup. Error reports go through a [`RateLimiter`] so a burst of
//! failing events posts at most one report per interval, while every error still reaches
//! the tracing output.

use std::sync::Arc;

use serenity::all::{ChannelId, CreateMessage, Http};

use crate::{error::AppError, hook::RateLimiter};

/// Longest message Discord accepts.
const MAX_MESSAGE_CHARS: usize = 2000;

pub struct BotLog {
    http: Arc<Http>,
    channel: Option<ChannelId>,
    error_limiter: RateLimiter,
    error_interval_secs: u64,
}

impl BotLog {
    /// Creates a reporter posting to `channel`.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client used to post
    /// - `channel` - Resolved bot-log channel, or `None` to only trace
    /// - `error_interval_secs` - Minimum seconds between two posted error reports
    pub fn new(http: Arc<Http>, channel: Option<ChannelId>, error_interval_secs: u64) -> Self {
        Self {
            http,
            channel,
            error_limiter: RateLimiter::new(),
            error_interval_secs,
        }
    }

    pub fn channel(&self) -> Option<ChannelId> {
        self.channel
    }

    /// Traces `message` and posts it to the bot-log channel.
    ///
    /// Failing to post is traced and otherwise ignored; there is nowhere left to report it.
    pub async fn log(&self, message: &str) {
        tracing::info!("{}", message);
        self.post(message).await;
    }

    /// Reports a failure.
    ///
    /// Always traces at error level. Posts to the bot-log channel only when the error
    /// rate limiter grants, so concurrent failures produce at most one post per interval.
    ///
    /// # Arguments
    /// - `context` - What was being done when the error occurred
    /// - `err` - The error to report
    pub async fn log_error(&self, context: &str, err: &AppError) {
        tracing::error!("{}: {}", context, err);

        if self.error_limiter.try_fire(self.error_interval_secs) {
            self.post(&format!("Error {}: {}", context, err)).await;
        }
    }

    async fn post(&self, message: &str) {
        let Some(channel) = self.channel else {
            return;
        };

        let content = truncate(message, MAX_MESSAGE_CHARS);

        if let Err(e) = channel
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
        {
            tracing::warn!("Failed to post to bot-log channel {}: {}", channel, e);
        }
    }
}

/// Cuts `text` to at most `max` characters on a character boundary.
fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
