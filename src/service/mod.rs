//! Services shared by hooks and commands.

pub mod bot_log;
