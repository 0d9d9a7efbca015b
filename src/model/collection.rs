//! Collection domain models.

/// A named list of unique text items within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Database ID of the collection.
    pub id: i32,
    /// Lowercase collection name, unique per guild.
    pub name: String,
}

impl Collection {
    /// Converts an entity model to a collection domain model at the repository boundary.
    pub fn from_entity(entity: entity::collection::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
