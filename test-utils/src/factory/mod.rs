//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*` convenience
//! function for quick default creation. Factories insert into the database they are
//! given, so the matching tables must exist.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("Sweetie")
//!     .build()
//!     .await?;
//!
//! let (poll, options) = factory::helpers::create_poll_with_options(&db, 1, &["yes", "no"]).await?;
//! ```

pub mod collection;
pub mod helpers;
pub mod poll;
pub mod user;

pub use collection::create_collection;
pub use poll::create_poll;
pub use user::create_user;
