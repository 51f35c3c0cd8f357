//! Document store boundary.
//!
//! Persistence is modeled as a generic JSON document store: every record
//! is an opaque JSON object addressed by a server-assigned UUID, grouped
//! into one of three fixed collections. Handlers and services only talk
//! to the [`DocumentStore`] trait; the concrete backend (PostgreSQL in
//! production, an in-memory map in tests) is chosen at startup and shared
//! through [`SharedStore`].

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;

pub mod postgres;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

/// The fixed set of collections this backend persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Goods,
    Products,
}

impl Collection {
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Goods => "goods",
            Collection::Products => "products",
        }
    }

    /// Top-level fields with a uniqueness constraint, enforced by every
    /// backend. A violation surfaces as [`StoreError::UniqueViolation`].
    pub fn unique_fields(&self) -> &'static [&'static str] {
        match self {
            Collection::Users => &["username", "email"],
            _ => &[],
        }
    }
}

/// A stored record: the caller-supplied JSON object plus its assigned id.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub data: Value,
}

impl Document {
    /// Wire representation: the data object with an `_id` field added.
    pub fn into_json(self) -> Value {
        let mut map = match self.data {
            Value::Object(map) => map,
            other => Map::from_iter([("value".to_string(), other)]),
        };
        map.insert("_id".to_string(), Value::String(self.id.to_string()));
        Value::Object(map)
    }

    /// Borrowing accessor for a top-level string field.
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(Value::as_str)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated on {field}")]
    UniqueViolation { field: String },
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Abstract persistence contract shared by all backends.
///
/// Every operation addresses a single collection. `update_by_id` applies a
/// shallow merge: top-level keys of `changes` replace the stored keys,
/// everything else is left untouched. `update_by_id` and `delete_by_id`
/// return `None` for an unknown id rather than failing.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn create(&self, collection: Collection, data: Value) -> Result<Document, StoreError>;

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError>;

    /// Looks up at most one record whose top-level `field` equals `value`.
    /// Intended for fields carrying a uniqueness constraint.
    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError>;

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        changes: Value,
    ) -> Result<Option<Document>, StoreError>;

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError>;

    async fn list_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;
}

/// Shared handle used in the application state.
pub type SharedStore = Arc<dyn DocumentStore>;
