//! Shared application state for all routes.

use crate::store::Collections;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub db: Collections,
}

impl AppState {
    /// Build the state once at startup from an opened pool; clones of it are
    /// handed to every router. The pool lives for the process lifetime.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            db: Collections::new(pool.clone()),
            pool,
        }
    }
}
