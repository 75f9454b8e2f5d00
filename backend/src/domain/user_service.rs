//! User management service.
//!
//! Each use-case forwards to exactly one repository call. The only work done
//! here is translating [`UserPersistenceError`] into a domain [`Error`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand};
use crate::domain::{Error, User, UserId, UserProfile};

/// Service implementing [`UsersCommand`] on top of a [`UserRepository`].
pub struct UserService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a new service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::NotFound { id } => Error::not_found(format!("user {id} not found")),
        UserPersistenceError::Connection { message } => {
            error!(%message, "user repository unavailable");
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            error!(%message, "user repository query failed");
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create(&self, profile: &UserProfile) -> Result<User, Error> {
        self.repo.create(profile).await.map_err(map_persistence_error)
    }

    async fn list(&self) -> Result<Vec<User>, Error> {
        self.repo.list_all().await.map_err(map_persistence_error)
    }

    async fn get(&self, id: UserId) -> Result<User, Error> {
        self.repo.find_by_id(id).await.map_err(map_persistence_error)
    }

    async fn update(&self, id: UserId, profile: &UserProfile) -> Result<User, Error> {
        self.repo
            .update(id, profile)
            .await
            .map_err(map_persistence_error)
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        self.repo.delete(id).await.map_err(map_persistence_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;
    use rstest::{fixture, rstest};

    #[fixture]
    fn profile() -> UserProfile {
        UserProfile::try_from_parts("Ada", "ada@example.com", 36).expect("valid profile")
    }

    fn user_id(raw: i64) -> UserId {
        UserId::new(raw).expect("valid id")
    }

    fn make_service(repo: MockUserRepository) -> UserService<MockUserRepository> {
        UserService::new(Arc::new(repo))
    }

    #[rstest]
    #[tokio::test]
    async fn create_returns_stored_user(profile: UserProfile) {
        let stored = User::new(user_id(1), profile.clone());
        let expected = stored.clone();
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf({
                let profile = profile.clone();
                move |given| *given == profile
            })
            .times(1)
            .return_once(move |_| Ok(stored));

        let created = make_service(repo)
            .create(&profile)
            .await
            .expect("create succeeds");
        assert_eq!(created, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn list_passes_through_empty_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_all().times(1).return_once(|| Ok(Vec::new()));

        let users = make_service(repo).list().await.expect("list succeeds");
        assert!(users.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn get_maps_missing_record_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(|id| Err(UserPersistenceError::not_found(id)));

        let err = make_service(repo).get(user_id(9)).await.expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "user 9 not found");
    }

    #[rstest]
    #[case(UserPersistenceError::connection("refused"))]
    #[case(UserPersistenceError::query("relation \"users\" does not exist"))]
    #[tokio::test]
    async fn storage_failures_become_internal_errors(#[case] failure: UserPersistenceError) {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Err(failure));

        let err = make_service(repo).get(user_id(3)).await.expect_err("failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn update_forwards_identifier_and_profile(profile: UserProfile) {
        let id = user_id(4);
        let stored = User::new(id, profile.clone());
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(move |given_id, _| *given_id == id)
            .times(1)
            .return_once(move |_, _| Ok(stored));

        let updated = make_service(repo)
            .update(id, &profile)
            .await
            .expect("update succeeds");
        assert_eq!(updated.id(), id);
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_user_is_not_found(profile: UserProfile) {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .times(1)
            .return_once(|id, _| Err(UserPersistenceError::not_found(id)));

        let err = make_service(repo)
            .update(user_id(77), &profile)
            .await
            .expect_err("missing");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_succeeds_for_any_identifier() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().times(1).return_once(|_| Ok(()));

        make_service(repo)
            .delete(user_id(123))
            .await
            .expect("delete succeeds");
    }
}
