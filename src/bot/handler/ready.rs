//! Ready event handler.
//!
//! Fired after every successful gateway handshake, including reconnects. Posts the
//! startup summary listing the loaded modules and commands to the bot log, then records
//! every current guild member.

use serenity::all::Ready;

use crate::{
    bot::context::BotContext,
    module::{command::CommandInfo, users::sync_members, LoadedModules},
};

/// Builds the startup summary posted once the bot is connected.
///
/// # Arguments
/// - `version` - Bot version
/// - `guild` - Name of the guild the bot serves
/// - `loaded` - Loaded modules, their commands and any hooks whose channels were all missing
pub fn load_summary(version: &str, guild: &str, loaded: &LoadedModules) -> String {
    let mut summary = format!(
        "Sweetiebot version {} successfully loaded on {}. \nActive Modules:",
        version, guild
    );

    for module in &loaded.modules {
        summary.push_str(&format!("\n  {}", module.name));
    }

    summary.push_str("\n\nActive Commands:");

    for command in &loaded.commands {
        summary.push_str(&format!("\n  {}", command.name));
    }

    if !loaded.unscoped.is_empty() {
        summary.push_str("\n\nWarnings:");

        for warning in &loaded.unscoped {
            summary.push_str(&format!("\n  {}", warning));
        }
    }

    summary
}

/// Handles the ready event when the bot connects to Discord.
///
/// A failed member sync is reported to the bot log; members recorded before the failure
/// are kept.
pub async fn handle_ready(ctx: &BotContext, ready: Ready, summary: &str) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.log.log(summary).await;

    match sync_members(ctx).await {
        Ok(count) => tracing::info!("Synced {} guild members", count),
        Err(err) => ctx.log.log_error("syncing guild members", &err).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        hook::{Dispatcher, HookRegistry},
        module::ModuleInfo,
    };

    fn loaded(unscoped: Vec<String>) -> LoadedModules {
        LoadedModules {
            dispatcher: Dispatcher::new(HookRegistry::new()),
            modules: vec![
                ModuleInfo {
                    name: "Polls",
                    description: "Manages the polling system.",
                },
                ModuleInfo {
                    name: "Misc",
                    description: "Miscellaneous commands.",
                },
            ],
            commands: vec![CommandInfo {
                name: "Showroll",
                usage: "Evaluates a dice expression.",
                sensitive: false,
            }],
            unscoped,
        }
    }

    #[test]
    fn lists_modules_then_commands() {
        let summary = load_summary("0.1.1", "Crusaders", &loaded(Vec::new()));

        assert_eq!(
            summary,
            "Sweetiebot version 0.1.1 successfully loaded on Crusaders. \nActive Modules:\
             \n  Polls\n  Misc\n\nActive Commands:\n  Showroll"
        );
    }

    /// Tests that hooks left without their channels are called out.
    ///
    /// Expected: warnings listed after the commands
    #[test]
    fn lists_unscoped_hooks_as_warnings() {
        let warning = "Commands message_create hook: none of bot-commands found, active in every channel";

        let summary = load_summary("0.1.1", "Crusaders", &loaded(vec![warning.to_string()]));

        assert!(summary.ends_with(&format!("Showroll\n\nWarnings:\n  {}", warning)));
    }
}
