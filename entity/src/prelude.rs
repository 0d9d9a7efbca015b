pub use super::chat_log::Entity as ChatLog;
pub use super::collection::Entity as Collection;
pub use super::collection_item::Entity as CollectionItem;
pub use super::poll::Entity as Poll;
pub use super::poll_option::Entity as PollOption;
pub use super::poll_vote::Entity as PollVote;
pub use super::user::Entity as User;
