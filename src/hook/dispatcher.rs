use serenity::all::ChannelId;

use crate::error::AppError;

use super::{kind::EventKind, registry::HookRegistry};

/// Payloads that know which hooks they should be routed to.
pub trait Routable {
    fn kind(&self) -> EventKind;

    /// Channel the event happened in, if the event is tied to one.
    ///
    /// Events without a channel reach every hook for their kind regardless of scope.
    fn channel_id(&self) -> Option<ChannelId>;
}

/// Routes events to the hooks in a frozen [`HookRegistry`].
///
/// The dispatcher owns the registry and exposes it read-only, which is what makes it safe to
/// share between concurrent event callbacks without locking.
pub struct Dispatcher<P>
where
    P: Send + Sync + 'static,
{
    registry: HookRegistry<P>,
}

impl<P> Dispatcher<P>
where
    P: Send + Sync + 'static,
{
    /// Freezes `registry` and wraps it in a dispatcher.
    pub fn new(registry: HookRegistry<P>) -> Self {
        Self { registry }
    }

    #[cfg(test)]
    pub fn registry(&self) -> &HookRegistry<P> {
        &self.registry
    }

    /// Invokes every hook registered for `kind` whose scope admits `channel`.
    ///
    /// Hooks run one after another in registration order. When `channel` is `None` every hook
    /// for the kind runs, scoped or not. A kind with no hooks costs a single array lookup.
    ///
    /// # Arguments
    /// - `kind` - Kind of the event being routed
    /// - `channel` - Channel the event happened in, if any
    /// - `payload` - The event handed to each hook
    ///
    /// # Returns
    /// - `Ok(())` - All matching hooks completed
    /// - `Err(AppError)` - The first hook error; hooks after it were not invoked
    pub async fn route(
        &self,
        kind: EventKind,
        channel: Option<ChannelId>,
        payload: &P,
    ) -> Result<(), AppError> {
        for entry in self.registry.entries(kind) {
            if let Some(channel) = channel {
                if !entry.scope.admits(channel) {
                    continue;
                }
            }

            entry.hook.handle(payload).await?;
        }

        Ok(())
    }
}

impl<P> Dispatcher<P>
where
    P: Routable + Send + Sync + 'static,
{
    /// Routes `event` using its own kind and channel.
    pub async fn dispatch(&self, event: &P) -> Result<(), AppError> {
        self.route(event.kind(), event.channel_id(), event).await
    }
}
