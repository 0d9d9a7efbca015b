//! Event-hook dispatch engine.
//!
//! Feature modules declare, once at startup, which gateway events they care about and
//! optionally which channels they are limited to. Those declarations are collected into a
//! [`HookRegistry`] which is then moved into a [`Dispatcher`]; from that point on the
//! registry can no longer be mutated, so concurrent event callbacks read it without locks.
//!
//! # Components
//!
//! - [`EventKind`] - Fixed set of gateway event categories a hook can subscribe to
//! - [`ChannelScope`] / [`resolve_scope`] - Channel allow-sets resolved from names once
//! - [`HookRegistry`] - Per-kind ordered list of [`HandlerEntry`](registry::HandlerEntry) values
//! - [`Dispatcher`] - Routes one event to every matching hook in registration order
//! - [`RateLimiter`] - Lock-free "at most once per interval" gate for side effects
//!
//! # Failure Policy
//!
//! The dispatcher never catches hook failures. The first hook returning an error stops the
//! walk and the error is handed back to whoever called [`Dispatcher::route`]. Deciding whether
//! to log, report or ignore it belongs to the gateway callback.

pub mod dispatcher;
pub mod handler;
pub mod kind;
pub mod rate_limit;
pub mod registry;
pub mod scope;

#[cfg(test)]
mod test;

pub use dispatcher::{Dispatcher, Routable};
pub use handler::Hook;
pub use kind::EventKind;
pub use rate_limit::RateLimiter;
pub use registry::HookRegistry;
pub use scope::{resolve_scope, ChannelDirectory, ChannelScope};
