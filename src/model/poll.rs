//! Poll domain models.
//!
//! Options are addressed by a 1-based position that is unique within a poll. Votes and
//! results refer to options by that position rather than by row ID, so the numbers a
//! user sees in `!poll` are the numbers they vote with.

/// A named poll within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    /// Database ID of the poll.
    pub id: i32,
    /// Lowercase poll name, unique per guild.
    pub name: String,
    /// Description shown above the options.
    pub description: String,
}

impl Poll {
    /// Converts an entity model to a poll domain model at the repository boundary.
    pub fn from_entity(entity: entity::poll::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

/// One selectable option of a poll.
#[derive(Debug, Clone, PartialEq)]
pub struct PollOption {
    /// 1-based position of the option within its poll.
    pub position: u64,
    pub option: String,
}

impl PollOption {
    pub fn from_entity(entity: entity::poll_option::Model) -> Self {
        Self {
            position: entity.position.max(0) as u64,
            option: entity.option,
        }
    }
}

/// Number of votes cast for the option at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollResult {
    pub position: u64,
    pub count: u64,
}
