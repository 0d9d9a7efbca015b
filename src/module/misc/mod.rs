//! Small standalone commands.

mod showroll;

use std::sync::Arc;

use super::{command::Command, Module};

pub use self::showroll::ShowrollCommand;

pub struct MiscModule;

impl Module for MiscModule {
    fn name(&self) -> &'static str {
        "Misc"
    }

    fn description(&self) -> &'static str {
        "Miscellaneous commands."
    }

    fn commands(&self) -> Vec<Arc<dyn Command>> {
        vec![Arc::new(ShowrollCommand)]
    }
}
