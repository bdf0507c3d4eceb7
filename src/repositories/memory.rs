//! In-memory repository used by handler and service tests.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{User, UserPayload};
use crate::repositories::UserRepository;

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

/// Mirrors the PostgreSQL table: ids start at 1, are never reused, rows come
/// back ordered by id.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
    fail: AtomicBool,
    fail_on: Mutex<HashSet<&'static str>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail like a dropped connection.
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Make only the named operation (`insert`, `find_all`, `find_by_id`, `save`,
    /// `delete`) fail.
    pub fn fail_on(&self, operation: &'static str) {
        self.fail_on.lock().unwrap().insert(operation);
    }

    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.table.lock().unwrap().rows.get(&id).cloned()
    }

    fn check(&self, operation: &'static str) -> Result<(), ApiError> {
        if self.fail.load(Ordering::SeqCst) || self.fail_on.lock().unwrap().contains(operation) {
            return Err(sqlx::Error::PoolClosed.into());
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, payload: &UserPayload) -> Result<User, ApiError> {
        self.check("insert")?;
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let user = User {
            id: table.next_id,
            name: payload.name.clone(),
            email: payload.email.clone(),
            password: payload.password.clone(),
        };
        table.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        self.check("find_all")?;
        Ok(self.table.lock().unwrap().rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        self.check("find_by_id")?;
        Ok(self.table.lock().unwrap().rows.get(&id).cloned())
    }

    async fn save(&self, user: &User) -> Result<User, ApiError> {
        self.check("save")?;
        let mut table = self.table.lock().unwrap();
        match table.rows.get_mut(&user.id) {
            Some(row) => {
                *row = user.clone();
                Ok(user.clone())
            }
            None => Err(sqlx::Error::RowNotFound.into()),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        self.check("delete")?;
        Ok(self.table.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }
}
