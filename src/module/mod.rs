//! Feature modules and the registry that wires them into the hook dispatcher.
//!
//! A [`Module`] declares, once at startup, which events it hooks (optionally limited to
//! named channels) and which commands it provides. [`ModuleRegistry`] resolves channel
//! names against the guild's channel directory, collects every hook in module order,
//! and finally freezes them into a [`Dispatcher`].

pub mod chat_log;
pub mod collections;
pub mod command;
pub mod guild;
pub mod misc;
pub mod polls;
pub mod users;

#[cfg(test)]
pub(crate) mod test;

use std::sync::Arc;

use crate::{
    bot::{context::BotContext, event::GatewayEvent},
    hook::{
        resolve_scope, ChannelDirectory, ChannelScope, Dispatcher, EventKind, Hook, HookRegistry,
    },
};

use self::command::{Command, CommandHook, CommandInfo};

/// A feature of the bot.
pub trait Module: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Registers the module's hooks. Called exactly once, before any event is dispatched.
    fn register(&self, _registrar: &mut HookRegistrar<'_>) {}

    /// Commands the module provides.
    fn commands(&self) -> Vec<Arc<dyn Command>> {
        Vec::new()
    }
}

/// Registration handle passed to [`Module::register`].
pub struct HookRegistrar<'a> {
    hooks: &'a mut HookRegistry<GatewayEvent>,
    directory: &'a dyn ChannelDirectory,
    module: &'static str,
    /// Hooks that asked for channels and ended up global, described for the startup summary.
    unscoped: &'a mut Vec<String>,
}

impl<'a> HookRegistrar<'a> {
    /// Registers `hook` for `kind`, limited to the named channels.
    ///
    /// Names that do not match a guild channel are logged and dropped. An empty list, or
    /// one where no name resolved, registers the hook for every channel. The latter is
    /// logged at error level and listed in the startup summary.
    pub fn register<S: AsRef<str>>(
        &mut self,
        kind: EventKind,
        channels: &[S],
        hook: Arc<dyn Hook<GatewayEvent>>,
    ) {
        let resolution = resolve_scope(self.directory, channels);

        for name in &resolution.unresolved {
            tracing::warn!(
                "{} module: channel \"{}\" not found for {} hook, ignoring it",
                self.module,
                name,
                kind
            );
        }

        if !channels.is_empty() && resolution.scope.is_global() {
            let warning = format!(
                "{} {} hook: none of {} found, active in every channel",
                self.module,
                kind,
                resolution.unresolved.join(", ")
            );
            tracing::error!("{}", warning);
            self.unscoped.push(warning);
        }

        self.hooks.register(kind, resolution.scope, hook);
    }

    /// Registers `hook` for `kind` in every channel.
    pub fn register_global(&mut self, kind: EventKind, hook: Arc<dyn Hook<GatewayEvent>>) {
        self.hooks.register(kind, ChannelScope::global(), hook);
    }
}

/// Name and description of a loaded module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Collects modules in registration order.
pub struct ModuleRegistry<'a> {
    directory: &'a dyn ChannelDirectory,
    hooks: HookRegistry<GatewayEvent>,
    modules: Vec<ModuleInfo>,
    commands: Vec<Arc<dyn Command>>,
    unscoped: Vec<String>,
}

impl<'a> ModuleRegistry<'a> {
    pub fn new(directory: &'a dyn ChannelDirectory) -> Self {
        Self {
            directory,
            hooks: HookRegistry::new(),
            modules: Vec::new(),
            commands: Vec::new(),
            unscoped: Vec::new(),
        }
    }

    /// Registers a module's hooks and collects its commands.
    pub fn add<M: Module>(&mut self, module: M) -> &mut Self {
        let mut registrar = HookRegistrar {
            hooks: &mut self.hooks,
            directory: self.directory,
            module: module.name(),
            unscoped: &mut self.unscoped,
        };
        module.register(&mut registrar);

        self.commands.extend(module.commands());
        self.modules.push(ModuleInfo {
            name: module.name(),
            description: module.description(),
        });

        self
    }

    /// Registers the command hook and freezes the registry.
    ///
    /// The command hook is registered last so every module hook observes a message
    /// before the command it contains runs.
    ///
    /// # Arguments
    /// - `ctx` - Context handed to commands
    /// - `command_channels` - Channel names commands are accepted in; empty for all
    pub fn finish<S: AsRef<str>>(mut self, ctx: BotContext, command_channels: &[S]) -> LoadedModules {
        let commands: Vec<CommandInfo> = self.commands.iter().map(|c| c.info()).collect();

        let hook = Arc::new(CommandHook::new(ctx, &self.commands));
        let mut registrar = HookRegistrar {
            hooks: &mut self.hooks,
            directory: self.directory,
            module: "Commands",
            unscoped: &mut self.unscoped,
        };
        registrar.register(EventKind::MessageCreate, command_channels, hook);

        for module in &self.modules {
            tracing::debug!("Module {}: {}", module.name, module.description);
        }
        for command in &commands {
            tracing::debug!("Command {}: {}", command.name, command.usage);
        }

        for kind in EventKind::ALL {
            let hooks = self.hooks.entries(kind).len();
            if hooks > 0 {
                tracing::debug!("{} hooks registered for {}", hooks, kind);
            }
        }

        tracing::info!(
            "Loaded {} modules, {} commands, {} hooks",
            self.modules.len(),
            commands.len(),
            self.hooks.hook_count()
        );

        LoadedModules {
            dispatcher: Dispatcher::new(self.hooks),
            modules: self.modules,
            commands,
            unscoped: self.unscoped,
        }
    }
}

/// Result of loading every module: the frozen dispatcher and a summary for the bot log.
pub struct LoadedModules {
    pub dispatcher: Dispatcher<GatewayEvent>,
    pub modules: Vec<ModuleInfo>,
    pub commands: Vec<CommandInfo>,
    /// Channel-scoped hooks whose channels were all missing.
    pub unscoped: Vec<String>,
}

/// Loads the bot's modules in their fixed order.
///
/// The chat log is registered first so later hooks see messages already persisted.
pub fn load_modules<S: AsRef<str>>(
    ctx: &BotContext,
    directory: &dyn ChannelDirectory,
    command_channels: &[S],
) -> LoadedModules {
    let mut registry = ModuleRegistry::new(directory);

    registry
        .add(chat_log::ChatLogModule::new(
            ctx.db.clone(),
            ctx.guild_id,
            ctx.log_channel(),
        ))
        .add(users::UsersModule::new(ctx.db.clone(), ctx.guild_id))
        .add(guild::GuildModule::new(ctx.log.clone(), ctx.guild_id))
        .add(polls::PollsModule)
        .add(collections::CollectionsModule)
        .add(misc::MiscModule);

    registry.finish(ctx.clone(), command_channels)
}
