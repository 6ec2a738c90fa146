//! Key/value state store: one JSON document per state key, last write wins.

use crate::core::state::{AppState, Load, Persist, StateContainer, StateKey};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct Store {
    pool: DbPool,
}

impl Store {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn put_raw(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Load the whole state and wrap it in a container persisting back here.
    pub fn into_container(mut self) -> AppResult<StateContainer<Store>> {
        let state = AppState::load(&mut self)?;
        Ok(StateContainer::new(state, self))
    }
}

impl Load for Store {
    fn load_value(&mut self, key: StateKey) -> AppResult<Option<serde_json::Value>> {
        match self.get_raw(key.as_str())? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

impl Persist for Store {
    fn persist(&mut self, key: StateKey, value: &serde_json::Value) -> AppResult<()> {
        self.put_raw(key.as_str(), &value.to_string())
    }
}
