use std::sync::Arc;

use super::{handler::Hook, kind::EventKind, scope::ChannelScope};

/// A registered hook together with the channels it is limited to.
pub struct HandlerEntry<P>
where
    P: Send + Sync + 'static,
{
    pub scope: ChannelScope,
    pub hook: Arc<dyn Hook<P>>,
}

/// Ordered hook lists, one per [`EventKind`].
///
/// Registration appends; the order hooks are registered in is the order they are invoked
/// in. The registry is only writable through `&mut self`, so once it has been handed to a
/// [`Dispatcher`](super::Dispatcher) it is frozen for the lifetime of the process.
pub struct HookRegistry<P>
where
    P: Send + Sync + 'static,
{
    entries: [Vec<HandlerEntry<P>>; EventKind::COUNT],
}

impl<P> HookRegistry<P>
where
    P: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            entries: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Appends a hook for `kind`.
    ///
    /// Registering the same hook twice is allowed and makes it run twice per event.
    ///
    /// # Arguments
    /// - `kind` - Event kind the hook subscribes to
    /// - `scope` - Channels the hook is limited to, global if empty
    /// - `hook` - The hook to invoke
    pub fn register(&mut self, kind: EventKind, scope: ChannelScope, hook: Arc<dyn Hook<P>>) {
        self.entries[kind.index()].push(HandlerEntry { scope, hook });
    }

    /// Hooks registered for `kind`, in invocation order.
    pub fn entries(&self, kind: EventKind) -> &[HandlerEntry<P>] {
        &self.entries[kind.index()]
    }

    /// Total number of registered hooks across all kinds.
    pub fn hook_count(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }
}

impl<P> Default for HookRegistry<P>
where
    P: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
