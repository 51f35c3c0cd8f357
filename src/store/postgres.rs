//! PostgreSQL document store backend.
//!
//! Each collection maps to a table of `(id UUID PRIMARY KEY, data JSONB)`.
//! Uniqueness of the fields named by [`Collection::unique_fields`] is
//! enforced by expression indexes created in the migrations, so a racing
//! insert loses at the database rather than in application code.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{Collection, Document, DocumentStore, StoreError};

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    data: Value,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document {
            id: row.id,
            data: row.data,
        }
    }
}

/// Maps a constraint name like `users_username_key` back to the field name.
fn constraint_field(table: &str, constraint: &str) -> String {
    constraint
        .strip_prefix(table)
        .and_then(|s| s.strip_prefix('_'))
        .and_then(|s| s.strip_suffix("_key"))
        .unwrap_or(constraint)
        .to_string()
}

fn map_sqlx_error(table: &str, err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        let field = db_err
            .constraint()
            .map(|c| constraint_field(table, c))
            .unwrap_or_else(|| "unknown".to_string());
        return StoreError::UniqueViolation { field };
    }
    StoreError::Backend(err.into())
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create(&self, collection: Collection, data: Value) -> Result<Document, StoreError> {
        let table = collection.table();
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "INSERT INTO {table} (id, data) VALUES ($1, $2) RETURNING id, data"
        ))
        .bind(Uuid::new_v4())
        .bind(&data)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(table, e))?;

        Ok(row.into())
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        let table = collection.table();
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT id, data FROM {table} WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(table, e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>, StoreError> {
        let table = collection.table();
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT id, data FROM {table} WHERE data->>$1 = $2 LIMIT 1"
        ))
        .bind(field)
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(table, e))?;

        Ok(row.map(Into::into))
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: Uuid,
        changes: Value,
    ) -> Result<Option<Document>, StoreError> {
        let table = collection.table();
        // JSONB `||` is exactly the shallow merge the contract asks for.
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "UPDATE {table} SET data = data || $2 WHERE id = $1 RETURNING id, data"
        ))
        .bind(id)
        .bind(&changes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(table, e))?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        let table = collection.table();
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "DELETE FROM {table} WHERE id = $1 RETURNING id, data"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(table, e))?;

        Ok(row.map(Into::into))
    }

    async fn list_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let table = collection.table();
        let rows =
            sqlx::query_as::<_, DocumentRow>(&format!("SELECT id, data FROM {table} ORDER BY id"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_sqlx_error(table, e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::constraint_field;

    #[test]
    fn constraint_name_maps_back_to_field() {
        assert_eq!(constraint_field("users", "users_username_key"), "username");
        assert_eq!(constraint_field("users", "users_email_key"), "email");
    }

    #[test]
    fn unrecognized_constraint_passes_through() {
        assert_eq!(constraint_field("users", "users_pkey"), "users_pkey");
    }
}
