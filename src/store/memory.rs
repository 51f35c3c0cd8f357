//! In-memory document store used by the test suite.
//!
//! Mirrors the PostgreSQL backend's observable behavior, including the
//! uniqueness constraints on [`Collection::unique_fields`], so integration
//! tests can drive the full router without a database.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{Collection, Document, DocumentStore, StoreError};

#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<Collection, BTreeMap<Uuid, Value>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shallow merge: top-level keys of `changes` replace keys of `base`.
fn merge_shallow(base: &mut Value, changes: &Value) {
    if let (Value::Object(base), Value::Object(changes)) = (base, changes) {
        for (key, value) in changes {
            base.insert(key.clone(), value.clone());
        }
    }
}

fn check_unique(
    docs: &BTreeMap<Uuid, Value>,
    collection: Collection,
    candidate: &Value,
    exclude: Option<Uuid>,
) -> Result<(), StoreError> {
    for field in collection.unique_fields() {
        let Some(value) = candidate.get(*field).and_then(Value::as_str) else {
            continue;
        };
        let taken = docs.iter().any(|(id, data)| {
            Some(*id) != exclude && data.get(*field).and_then(Value::as_str) == Some(value)
        });
        if taken {
            return Err(StoreError::UniqueViolation {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn create(&self, collection: Collection, data: Value) -> Result<Document, StoreError> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection).or_default();
        check_unique(docs, collection, &data, None)?;

        let id = Uuid::new_v4();
        docs.insert(id, data.clone());
        Ok(Document { id, data })
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|docs| docs.get(&id))
            .map(|data| Document {
                id,
                data: data.clone(),
            }))
    }

    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).and_then(|docs| {
            docs.iter()
                .find(|(_, data)| data.get(field).and_then(Value::as_str) == Some(value))
                .map(|(id, data)| Document {
                    id: *id,
                    data: data.clone(),
                })
        }))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        changes: Value,
    ) -> Result<Option<Document>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(&collection) else {
            return Ok(None);
        };
        let Some(existing) = docs.get(&id) else {
            return Ok(None);
        };

        let mut merged = existing.clone();
        merge_shallow(&mut merged, &changes);
        check_unique(docs, collection, &merged, Some(id))?;

        docs.insert(id, merged.clone());
        Ok(Some(Document { id, data: merged }))
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(&collection)
            .and_then(|docs| docs.remove(&id))
            .map(|data| Document { id, data }))
    }

    async fn list_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, data)| Document {
                        id: *id,
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn create_then_find_roundtrip() {
        let store = InMemoryStore::new();
        let doc = store
            .create(Collection::Goods, json!({"category": "tea"}))
            .await
            .unwrap();

        let found = store
            .find_by_id(Collection::Goods, doc.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.data["category"], "tea");
    }

    #[tokio::test]
    async fn update_merges_top_level_keys() {
        let store = InMemoryStore::new();
        let doc = store
            .create(Collection::Goods, json!({"category": "tea", "kept": 1}))
            .await
            .unwrap();

        let updated = store
            .update_by_id(Collection::Goods, doc.id, json!({"category": "coffee"}))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.data["category"], "coffee");
        assert_eq!(updated.data["kept"], 1);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = InMemoryStore::new();
        let missing = store
            .update_by_id(Collection::Goods, Uuid::new_v4(), json!({"x": 1}))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn delete_returns_removed_document() {
        let store = InMemoryStore::new();
        let doc = store
            .create(Collection::Products, json!({"type": "sensor"}))
            .await
            .unwrap();

        let deleted = store
            .delete_by_id(Collection::Products, doc.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(deleted.data["type"], "sensor");
        assert!(
            store
                .find_by_id(Collection::Products, doc.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = InMemoryStore::new();
        store
            .create(Collection::Users, json!({"username": "admin"}))
            .await
            .unwrap();

        let err = store
            .create(Collection::Users, json!({"username": "admin"}))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { field } if field == "username"));
    }

    #[tokio::test]
    async fn username_uniqueness_applies_on_update() {
        let store = InMemoryStore::new();
        store
            .create(Collection::Users, json!({"username": "admin"}))
            .await
            .unwrap();
        let other = store
            .create(Collection::Users, json!({"username": "guest"}))
            .await
            .unwrap();

        let err = store
            .update_by_id(Collection::Users, other.id, json!({"username": "admin"}))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn goods_have_no_unique_fields() {
        let store = InMemoryStore::new();
        store
            .create(Collection::Goods, json!({"category": "tea"}))
            .await
            .unwrap();
        store
            .create(Collection::Goods, json!({"category": "tea"}))
            .await
            .unwrap();
        assert_eq!(store.list_all(Collection::Goods).await.unwrap().len(), 2);
    }
}
