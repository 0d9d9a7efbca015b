//! Dice rolling with individual results.
//!
//! An expression has the form `[N]dX[tT][fF]`: roll `N` dice (default 1) with `X` sides,
//! counting dice of at least `T` as successes and dice of at most `F` as failures.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serenity::async_trait;
use thiserror::Error;

use crate::{
    bot::context::BotContext,
    error::AppError,
    module::command::{Command, CommandInfo, CommandOutput, Invocation},
};

static DICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]*d[0-9]+").expect("valid regex"));

const MAX_DICE: i64 = 9999;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
enum DiceError {
    #[error("Can't roll that! Check dice expression.")]
    Invalid,
    #[error("I don't have that many dice...")]
    TooMany,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DiceRoll {
    count: i64,
    sides: i64,
    success: Option<i64>,
    failure: Option<i64>,
}

/// Unparseable numbers count as zero and are then rejected by the range checks.
fn number(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

impl DiceRoll {
    /// Parses a token already known to contain a `dX` part.
    fn parse(token: &str) -> Result<Self, DiceError> {
        let (count, mut sides) = token.split_once('d').unwrap_or(("", token));
        let count = if count.is_empty() { 1 } else { number(count) };

        let mut success = None;
        let mut failure = None;

        if let Some((before, threshold)) = sides.split_once('t') {
            sides = before;
            match threshold.split_once('f') {
                Some((threshold, fail)) => {
                    success = Some(number(threshold));
                    failure = Some(number(fail));
                }
                None => success = Some(number(threshold)),
            }
            if success == Some(0) {
                return Err(DiceError::Invalid);
            }
        }

        if let Some((before, fail)) = sides.split_once('f') {
            sides = before;
            failure = Some(number(fail));
            if failure == Some(0) {
                return Err(DiceError::Invalid);
            }
        }

        let sides = number(sides);

        if count < 1 || sides < 1 {
            return Err(DiceError::Invalid);
        }
        if count > MAX_DICE {
            return Err(DiceError::TooMany);
        }

        Ok(Self {
            count,
            sides,
            success: success.filter(|t| *t > 0),
            failure: failure.filter(|f| *f > 0),
        })
    }

    fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect()
    }

    /// Formats the rolled values followed by the success and failure tallies.
    fn describe(&self, rolls: &[i64]) -> String {
        let mut text = rolls
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" + ");

        if let Some(threshold) = self.success {
            let successes = rolls.iter().filter(|n| **n >= threshold).count();
            if successes > 0 {
                text.push_str(&format!("\n{} successes!", successes));
            }
        }
        if let Some(threshold) = self.failure {
            let failures = rolls.iter().filter(|n| **n <= threshold).count();
            if failures > 0 {
                text.push_str(&format!("\n{} failures!", failures));
            }
        }

        text
    }
}

/// Evaluates one token of the command line.
fn evaluate<R: Rng + ?Sized>(token: &str, prefix: &str, rng: &mut R) -> String {
    if !DICE.is_match(token) {
        return format!(
            "Could not parse dice expression. Try {}calculate for advanced expressions.",
            prefix
        );
    }

    let rolled = DiceRoll::parse(token)
        .map(|dice| dice.describe(&dice.roll(rng)))
        .unwrap_or_else(|e| e.to_string());

    format!("Rolling {}: {}", token, rolled)
}

pub struct ShowrollCommand;

#[async_trait]
impl Command for ShowrollCommand {
    fn info(&self) -> CommandInfo {
        CommandInfo {
            name: "Showroll",
            usage: "Evaluates a dice expression.",
            sensitive: false,
        }
    }

    async fn process(
        &self,
        ctx: &BotContext,
        invocation: &Invocation,
    ) -> Result<CommandOutput, AppError> {
        if invocation.is_empty() {
            return Ok(CommandOutput::public("```\nNothing to roll!```"));
        }

        let mut rng = rand::rng();
        let text: String = invocation
            .args
            .iter()
            .map(|arg| evaluate(&arg.text, &ctx.settings.prefix, &mut rng) + "\n")
            .collect();

        Ok(CommandOutput::public(format!("```\n{}```", text)))
    }
}
