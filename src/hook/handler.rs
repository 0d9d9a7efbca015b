use serenity::async_trait;

use crate::error::AppError;

/// A callback interested in one kind of gateway event.
///
/// Hooks receive the event payload by reference and run to completion before the next hook
/// registered for the same event starts. A hook returning `Err` stops the dispatch of that
/// event; hooks that want best-effort behaviour should log and return `Ok(())` themselves.
#[async_trait]
pub trait Hook<P>: Send + Sync
where
    P: Send + Sync + 'static,
{
    /// Handles a single event.
    ///
    /// # Arguments
    /// - `payload` - The event being dispatched
    ///
    /// # Returns
    /// - `Ok(())` - The hook finished, dispatch continues with the next hook
    /// - `Err(AppError)` - The hook failed, dispatch of this event stops
    async fn handle(&self, payload: &P) -> Result<(), AppError>;
}
