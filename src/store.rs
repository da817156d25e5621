//! Collection store: four document tables over SQLite, one per collection.
//!
//! Each row is `(id TEXT PRIMARY KEY, doc TEXT)` where `doc` is the record
//! serialized as JSON. All access goes through a typed [`Collection`]
//! handle sharing one pool; there is no other storage path.

use crate::error::AppError;
use crate::ident::RecordId;
use crate::model::{Class, Schedule, Student, Teacher};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::marker::PhantomData;
use std::str::FromStr;

/// A document paired with its assigned identifier, as it leaves the store.
/// Serializes with the identifier under `_id`, which is the wire shape of
/// every raw record in the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stored<T> {
    #[serde(rename = "_id")]
    pub id: RecordId,
    #[serde(flatten)]
    pub doc: T,
}

/// Typed handle to one collection table. Cheap to clone; all clones share
/// the pool.
pub struct Collection<T> {
    pool: SqlitePool,
    table: &'static str,
    _doc: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            table: self.table,
            _doc: PhantomData,
        }
    }
}

impl<T> Collection<T> {
    fn new(pool: SqlitePool, table: &'static str) -> Self {
        Self {
            pool,
            table,
            _doc: PhantomData,
        }
    }

    fn decode(&self, id: String, doc: String) -> Result<Stored<T>, AppError>
    where
        T: DeserializeOwned,
    {
        let id = RecordId::parse(&id)
            .map_err(|_| AppError::Encoding(format!("{}: bad stored id '{}'", self.table, id)))?;
        let doc = serde_json::from_str(&doc)
            .map_err(|e| AppError::Encoding(format!("{}/{}: {}", self.table, id, e)))?;
        Ok(Stored { id, doc })
    }

    /// Insert a record verbatim under a fresh identifier.
    pub async fn insert(&self, doc: &T) -> Result<RecordId, AppError>
    where
        T: Serialize,
    {
        let id = RecordId::new();
        let body = serde_json::to_string(doc)
            .map_err(|e| AppError::Encoding(format!("{}: {}", self.table, e)))?;
        let sql = format!("INSERT INTO {} (id, doc) VALUES (?1, ?2)", self.table);
        tracing::debug!(sql = %sql, id = %id, "query");
        sqlx::query(&sql)
            .bind(id.to_string())
            .bind(body)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    /// Every record, in storage's natural (insertion) order.
    pub async fn find_all(&self) -> Result<Vec<Stored<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        let sql = format!("SELECT id, doc FROM {} ORDER BY rowid", self.table);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<(String, String)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|(id, doc)| self.decode(id, doc))
            .collect()
    }

    /// One record by identifier. Absence is `None`, not an error.
    pub async fn find_by_id(&self, id: &RecordId) -> Result<Option<Stored<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        let sql = format!("SELECT id, doc FROM {} WHERE id = ?1", self.table);
        tracing::debug!(sql = %sql, id = %id, "query");
        let row: Option<(String, String)> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        row.map(|(id, doc)| self.decode(id, doc)).transpose()
    }

    /// Exact-match filter on one document field.
    pub async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<Stored<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        let sql = format!(
            "SELECT id, doc FROM {} WHERE json_extract(doc, ?1) = ?2 ORDER BY rowid",
            self.table
        );
        tracing::debug!(sql = %sql, field = field, value = value, "query");
        let rows: Vec<(String, String)> = sqlx::query_as(&sql)
            .bind(format!("$.{}", field))
            .bind(value)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter()
            .map(|(id, doc)| self.decode(id, doc))
            .collect()
    }

    /// Partially overwrite named fields of one record. `None` when no record
    /// has that identifier; otherwise the updated record.
    pub async fn update_fields(
        &self,
        id: &RecordId,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Option<Stored<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        let patch = serde_json::to_string(fields)
            .map_err(|e| AppError::Encoding(format!("{}: {}", self.table, e)))?;
        let sql = format!(
            "UPDATE {} SET doc = json_patch(doc, ?2) WHERE id = ?1 RETURNING id, doc",
            self.table
        );
        tracing::debug!(sql = %sql, id = %id, patch = %patch, "query");
        let row: Option<(String, String)> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(patch)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|(id, doc)| self.decode(id, doc)).transpose()
    }

    /// Append `value` to the JSON array at `field` only if not already
    /// present. The membership test and the append happen inside one UPDATE,
    /// so concurrent calls for the same record cannot lose each other's
    /// entries. `None` when no record has that identifier.
    pub async fn add_to_set(
        &self,
        id: &RecordId,
        field: &str,
        value: &str,
    ) -> Result<Option<Stored<T>>, AppError>
    where
        T: DeserializeOwned,
    {
        let sql = format!(
            "UPDATE {} SET doc = CASE \
               WHEN EXISTS (SELECT 1 FROM json_each(doc, ?2) WHERE json_each.value = ?3) THEN doc \
               ELSE json_set(doc, ?2 || '[#]', ?3) END \
             WHERE id = ?1 RETURNING id, doc",
            self.table
        );
        tracing::debug!(sql = %sql, id = %id, field = field, value = value, "query");
        let row: Option<(String, String)> = sqlx::query_as(&sql)
            .bind(id.to_string())
            .bind(format!("$.{}", field))
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|(id, doc)| self.decode(id, doc)).transpose()
    }
}

/// The four school collections over one shared pool. Constructed once at
/// startup and cloned into every handler; no implicit global handle.
#[derive(Clone)]
pub struct Collections {
    pub students: Collection<Student>,
    pub teachers: Collection<Teacher>,
    pub classes: Collection<Class>,
    pub schedules: Collection<Schedule>,
}

impl Collections {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            students: Collection::new(pool.clone(), "students"),
            teachers: Collection::new(pool.clone(), "teachers"),
            classes: Collection::new(pool.clone(), "classes"),
            schedules: Collection::new(pool, "schedules"),
        }
    }
}

const COLLECTION_TABLES: &[&str] = &["students", "teachers", "classes", "schedules"];

/// Open the pool for `database_url`, creating the database file if missing.
/// Call before [`ensure_collections`] and before building any router.
pub async fn open_pool(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the collection tables if they do not exist. Idempotent.
pub async fn ensure_collections(pool: &SqlitePool) -> Result<(), AppError> {
    for table in COLLECTION_TABLES {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY, doc TEXT NOT NULL)",
            table
        );
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}
