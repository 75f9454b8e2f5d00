//! Integration tests for `DieselUserRepository` against a real PostgreSQL.
//!
//! Set `USERS_TEST_DATABASE_URL` to run them; otherwise each test prints a
//! `SKIP-TEST-DATABASE` marker and passes. Tests only touch rows they create,
//! so they can share one database and run in parallel.

use backend::domain::ports::{UserPersistenceError, UserRepository};
use backend::domain::{UserId, UserProfile};
use backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
use rstest::rstest;

mod support;

use support::migrated_database_url;

async fn repository() -> Option<DieselUserRepository> {
    let url = migrated_database_url()?;
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
        .await
        .expect("pool builds against test database");
    Some(DieselUserRepository::new(pool))
}

fn profile(name: &str, email: &str, age: i64) -> UserProfile {
    UserProfile::try_from_parts(name, email, age).expect("valid profile")
}

#[rstest]
#[tokio::test]
async fn create_then_find_returns_the_same_fields() {
    let Some(repo) = repository().await else {
        return;
    };
    let ada = profile("Ada", "ada@example.com", 36);

    let created = repo.create(&ada).await.expect("create succeeds");
    assert!(created.id().get() > 0);
    assert_eq!(created.profile(), &ada);

    let fetched = repo.find_by_id(created.id()).await.expect("find succeeds");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test]
async fn list_contains_created_users_in_id_order() {
    let Some(repo) = repository().await else {
        return;
    };
    let first = repo
        .create(&profile("Alan", "alan@example.com", 41))
        .await
        .expect("create succeeds");
    let second = repo
        .create(&profile("Grace", "grace@example.com", 85))
        .await
        .expect("create succeeds");

    let listed = repo.list_all().await.expect("list succeeds");
    let ids: Vec<i64> = listed.iter().map(|user| user.id().get()).collect();
    let first_pos = ids.iter().position(|id| *id == first.id().get());
    let second_pos = ids.iter().position(|id| *id == second.id().get());

    assert!(matches!((first_pos, second_pos), (Some(a), Some(b)) if a < b));
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[rstest]
#[tokio::test]
async fn update_overwrites_every_field() {
    let Some(repo) = repository().await else {
        return;
    };
    let created = repo
        .create(&profile("Ada", "ada@example.com", 30))
        .await
        .expect("create succeeds");
    let replacement = profile("Ada L.", "ada.l@example.com", 31);

    let updated = repo
        .update(created.id(), &replacement)
        .await
        .expect("update succeeds");
    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.profile(), &replacement);

    let fetched = repo.find_by_id(created.id()).await.expect("find succeeds");
    assert_eq!(fetched.profile(), &replacement);
}

#[rstest]
#[tokio::test]
async fn missing_ids_are_not_found_for_find_and_update() {
    let Some(repo) = repository().await else {
        return;
    };
    let missing = UserId::new(i64::MAX).expect("valid id");

    assert_eq!(
        repo.find_by_id(missing).await,
        Err(UserPersistenceError::not_found(missing))
    );
    assert_eq!(
        repo.update(missing, &profile("Ghost", "ghost@example.com", 1))
            .await,
        Err(UserPersistenceError::not_found(missing))
    );
}

#[rstest]
#[tokio::test]
async fn delete_is_idempotent() {
    let Some(repo) = repository().await else {
        return;
    };
    let created = repo
        .create(&profile("Temp", "temp@example.com", 20))
        .await
        .expect("create succeeds");

    repo.delete(created.id()).await.expect("first delete");
    repo.delete(created.id()).await.expect("second delete");
    assert_eq!(
        repo.find_by_id(created.id()).await,
        Err(UserPersistenceError::not_found(created.id()))
    );
}

#[rstest]
#[tokio::test]
async fn unreachable_database_is_a_connection_error() {
    // Port 1 is never a PostgreSQL listener.
    let config = PoolConfig::new("postgres://nobody@127.0.0.1:1/users")
        .with_connection_timeout(std::time::Duration::from_millis(200));
    let Ok(pool) = DbPool::new(config).await else {
        // bb8 may fail eagerly; that path is covered by the pool error tests.
        return;
    };
    let repo = DieselUserRepository::new(pool);

    let err = repo.list_all().await.expect_err("no database");
    assert!(matches!(err, UserPersistenceError::Connection { .. }));
}
