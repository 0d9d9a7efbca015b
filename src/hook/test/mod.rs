use std::sync::{Arc, Mutex};

use serenity::all::ChannelId;
use serenity::async_trait;

use crate::error::AppError;
use crate::hook::{ChannelScope, EventKind, Hook, HookRegistry, Routable};

mod rate_limit;
mod scope;

/// Minimal routable payload for exercising the dispatcher.
#[derive(Debug, Clone)]
struct TestEvent {
    kind: EventKind,
    channel: Option<ChannelId>,
}

impl TestEvent {
    fn new(kind: EventKind, channel: Option<u64>) -> Self {
        Self {
            kind,
            channel: channel.map(ChannelId::new),
        }
    }
}

impl Routable for TestEvent {
    fn kind(&self) -> EventKind {
        self.kind
    }

    fn channel_id(&self) -> Option<ChannelId> {
        self.channel
    }
}

/// Shared invocation log; each entry is the label of the hook that ran.
#[derive(Clone, Default)]
struct InvocationLog(Arc<Mutex<Vec<&'static str>>>);

impl InvocationLog {
    fn entries(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().clone()
    }

    fn hook(&self, label: &'static str) -> Arc<dyn Hook<TestEvent>> {
        Arc::new(Recorder {
            label,
            log: self.clone(),
        })
    }
}

/// Hook appending its label to the shared log.
struct Recorder {
    label: &'static str,
    log: InvocationLog,
}

#[async_trait]
impl Hook<TestEvent> for Recorder {
    async fn handle(&self, _payload: &TestEvent) -> Result<(), AppError> {
        self.log.0.lock().unwrap().push(self.label);
        Ok(())
    }
}

/// Hook that always fails.
struct Failing;

#[async_trait]
impl Hook<TestEvent> for Failing {
    async fn handle(&self, _payload: &TestEvent) -> Result<(), AppError> {
        Err(AppError::DbErr(sea_orm::DbErr::Custom("hook failed".to_string())))
    }
}

fn scope_of(ids: &[u64]) -> ChannelScope {
    ids.iter().copied().map(ChannelId::new).collect()
}

fn registry() -> HookRegistry<TestEvent> {
    HookRegistry::new()
}
