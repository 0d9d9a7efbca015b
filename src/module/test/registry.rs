use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serenity::all::{ChannelId, MessageId};
use serenity::async_trait;

use crate::{
    bot::event::GatewayEvent,
    error::AppError,
    hook::{EventKind, Hook},
    module::{HookRegistrar, Module, ModuleRegistry},
};

use super::{test_context, EchoCommand};

/// Hook recording which module saw an event.
struct Tag {
    label: &'static str,
    seen: Arc<Mutex<Vec<&'static str>>>,
}

#[async_trait]
impl Hook<GatewayEvent> for Tag {
    async fn handle(&self, _payload: &GatewayEvent) -> Result<(), AppError> {
        self.seen.lock().unwrap().push(self.label);
        Ok(())
    }
}

struct TaggingModule {
    label: &'static str,
    channels: Vec<&'static str>,
    seen: Arc<Mutex<Vec<&'static str>>>,
}

impl Module for TaggingModule {
    fn name(&self) -> &'static str {
        self.label
    }

    fn description(&self) -> &'static str {
        "Records deletes."
    }

    fn register(&self, registrar: &mut HookRegistrar<'_>) {
        registrar.register(
            EventKind::MessageDelete,
            self.channels.as_slice(),
            Arc::new(Tag {
                label: self.label,
                seen: self.seen.clone(),
            }),
        );
    }

    fn commands(&self) -> Vec<Arc<dyn crate::module::command::Command>> {
        vec![Arc::new(EchoCommand)]
    }
}

fn delete_in(channel: u64) -> GatewayEvent {
    GatewayEvent::MessageDelete {
        channel_id: ChannelId::new(channel),
        message_id: MessageId::new(1),
        guild_id: None,
    }
}

/// Tests that modules' hooks run in module order, filtered by their channel names.
///
/// Expected: the global module sees every delete, the scoped module only its channel
#[tokio::test]
async fn routes_module_hooks_by_channel_name() {
    let directory: HashMap<String, ChannelId> =
        HashMap::from([("general".to_string(), ChannelId::new(100))]);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let mut registry = ModuleRegistry::new(&directory);
    registry
        .add(TaggingModule {
            label: "scoped",
            channels: vec!["general", "missing"],
            seen: seen.clone(),
        })
        .add(TaggingModule {
            label: "global",
            channels: Vec::new(),
            seen: seen.clone(),
        });

    let loaded = registry.finish::<&str>(test_context(false).await, &[]);

    loaded.dispatcher.dispatch(&delete_in(100)).await.unwrap();
    loaded.dispatcher.dispatch(&delete_in(200)).await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["scoped", "global", "global"]);
    assert!(loaded.unscoped.is_empty());
}

/// Tests the startup summary and command hook registration.
///
/// Expected: module names in order, commands collected, one command hook on message create
#[tokio::test]
async fn summarises_modules_and_commands() {
    let directory: HashMap<String, ChannelId> = HashMap::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let mut registry = ModuleRegistry::new(&directory);
    registry.add(TaggingModule {
        label: "first",
        channels: Vec::new(),
        seen: seen.clone(),
    });

    let loaded = registry.finish::<&str>(test_context(false).await, &[]);

    let names: Vec<&str> = loaded.modules.iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["first"]);
    assert_eq!(loaded.commands.len(), 1);
    assert_eq!(loaded.commands[0].name, "Echo");
    assert_eq!(
        loaded
            .dispatcher
            .registry()
            .entries(EventKind::MessageCreate)
            .len(),
        1
    );
}

/// Tests a channel list where no name resolves.
///
/// Expected: hook still registered for every channel and reported as unscoped
#[tokio::test]
async fn fully_unresolved_channels_are_reported() {
    let directory: HashMap<String, ChannelId> =
        HashMap::from([("general".to_string(), ChannelId::new(100))]);
    let seen = Arc::new(Mutex::new(Vec::new()));

    let mut registry = ModuleRegistry::new(&directory);
    registry.add(TaggingModule {
        label: "typo",
        channels: vec!["generel"],
        seen: seen.clone(),
    });

    let loaded = registry.finish(test_context(false).await, &["bot-commands"]);

    loaded.dispatcher.dispatch(&delete_in(300)).await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["typo"]);
    assert_eq!(
        loaded.unscoped,
        vec![
            "typo message_delete hook: none of generel found, active in every channel".to_string(),
            "Commands message_create hook: none of bot-commands found, active in every channel"
                .to_string(),
        ]
    );
}
