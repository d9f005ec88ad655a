use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use futures::future;

use super::{User, UserNotFoundError};

/// Read access to stored users.
pub trait UserRepository: Send + Sync {
    /// Looks a user up by identifier.
    fn get_by_id(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<User, UserNotFoundError>> + Send;
}

/// A repository keeping its users in memory.
///
/// Clones share the same users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    /// Creates a repository holding `users`. Later users replace earlier
    /// ones with the same identifier.
    pub fn new(users: Vec<User>) -> Self {
        users.into_iter().collect()
    }

    /// The number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` if no user is stored.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<User> for InMemoryUserRepository {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let users = iter
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            users: Arc::new(users),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn get_by_id(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<User, UserNotFoundError>> + Send {
        let found = self.users.get(user_id).cloned().ok_or_else(|| {
            tracing::debug!(user_id, "user not found");
            UserNotFoundError::new(user_id)
        });
        future::ready(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repository() -> InMemoryUserRepository {
        InMemoryUserRepository::new(vec![User::new("1", "rob", "2"), User::new("2", "scott", "1")])
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_by_id_finds_stored_user(repository: InMemoryUserRepository) {
        let user = repository.get_by_id("2").await.unwrap();
        assert_eq!(user, User::new("2", "scott", "1"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_by_id_reports_missing_identifier(repository: InMemoryUserRepository) {
        let error = repository.get_by_id("3").await.unwrap_err();
        assert_eq!(error, UserNotFoundError::new("3"));
        assert_eq!(error.to_string(), "User not found: 3");
    }

    #[rstest]
    fn test_later_user_replaces_earlier() {
        let repository =
            InMemoryUserRepository::new(vec![User::new("1", "rob", ""), User::new("1", "robert", "")]);
        assert_eq!(repository.len(), 1);
        let user = futures::executor::block_on(repository.get_by_id("1")).unwrap();
        assert_eq!(user.name, "robert");
    }
}
