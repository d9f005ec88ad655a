//! Use-cases over injected user and time services.
//!
//! Services are reached through an environment implementing the access
//! traits [`UserAccess`] and [`TimeAccess`], usually an [`Application`].
//! Each use-case is an `async fn` taking that environment explicitly, so the
//! set of services a use-case needs is visible in its bounds:
//!
//! ```rust
//! use fp_training::users::{
//!     capitalized_user_name, user_name_with_current_year, Application, FixedTimeService,
//!     InMemoryUserRepository, User,
//! };
//!
//! # futures::executor::block_on(async {
//! let application = Application::new(
//!     InMemoryUserRepository::from_iter([User::new("1", "rob", "2")]),
//!     FixedTimeService::new(2024),
//! );
//!
//! assert_eq!(capitalized_user_name(&application, "1").await.unwrap(), "Rob");
//! assert_eq!(user_name_with_current_year(&application, "1").await.unwrap(), "rob2024");
//! assert!(capitalized_user_name(&application, "9").await.is_err());
//! # });
//! ```

mod application;
mod repository;
mod time;
mod usecase;

pub use application::{Application, TimeAccess, UserAccess};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use time::{FixedTimeService, SystemTimeService, TimeService};
pub use usecase::{
    best_friend_concatenation, capitalize, capitalized_user_name, concatenated_user_names,
    user_name_with_current_year,
};

use thiserror::Error;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name, as entered by the user.
    pub name: String,
    /// Identifier of the user's best friend.
    pub best_friend_id: String,
}

impl User {
    /// Creates a user.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        best_friend_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            best_friend_id: best_friend_id.into(),
        }
    }
}

/// No user has the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("User not found: {user_id}")]
pub struct UserNotFoundError {
    /// The identifier that was looked up.
    pub user_id: String,
}

impl UserNotFoundError {
    /// Creates the error for `user_id`.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

static_assertions::assert_impl_all!(User: Send, Sync, Clone);
static_assertions::assert_impl_all!(UserNotFoundError: Send, Sync, std::error::Error);
