//! In-memory [`UserRepository`] backed by a mutex-guarded ordered map.
//!
//! Identifiers are assigned from a counter starting at one and are never
//! reused, mirroring a `BIGSERIAL` column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId, UserProfile};

#[derive(Debug)]
struct Store {
    next_id: i64,
    users: BTreeMap<UserId, UserProfile>,
}

/// Volatile user store for tests and local experiments.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, profile: &UserProfile) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        let id = UserId::new(store.next_id)
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        store.users.insert(id, profile.clone());
        Ok(User::new(id, profile.clone()))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store
            .users
            .iter()
            .map(|(id, profile)| User::new(*id, profile.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError> {
        let store = self.lock()?;
        store
            .users
            .get(&id)
            .map(|profile| User::new(id, profile.clone()))
            .ok_or_else(|| UserPersistenceError::not_found(id))
    }

    async fn update(&self, id: UserId, profile: &UserProfile) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        let slot = store
            .users
            .get_mut(&id)
            .ok_or_else(|| UserPersistenceError::not_found(id))?;
        *slot = profile.clone();
        Ok(User::new(id, profile.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        self.lock()?.users.remove(&id);
        Ok(())
    }
}
