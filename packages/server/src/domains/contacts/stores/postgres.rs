use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::ContactId;
use crate::domains::contacts::models::without_reserved_keys;
use crate::domains::contacts::{Contact, ContactFields, ContactRecord, StoreError, StoreResult};
use crate::kernel::ContactStore;

/// Row shape of the `contacts` table. Fields live in a JSONB column.
#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    id: ContactId,
    data: Json<ContactFields>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            fields: row.data.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Contact store backed by PostgreSQL.
pub struct PostgresContactStore {
    pool: PgPool,
}

impl PostgresContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn parse_id(id: &str) -> StoreResult<ContactId> {
    ContactId::parse(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[async_trait]
impl ContactStore for PostgresContactStore {
    async fn create(&self, fields: ContactFields) -> StoreResult<ContactRecord> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            INSERT INTO contacts (id, data)
            VALUES ($1, $2)
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(ContactId::new())
        .bind(Json(without_reserved_keys(fields)))
        .fetch_one(&self.pool)
        .await?;
        Ok(Contact::from(row).into_record())
    }

    async fn read_all(&self) -> StoreResult<Vec<ContactRecord>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, data, created_at, updated_at
            FROM contacts
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|row| Contact::from(row).into_record())
            .collect())
    }

    async fn update(&self, id: &str, fields: ContactFields) -> StoreResult<ContactRecord> {
        let contact_id = parse_id(id)?;
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contacts
            SET data = data || $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(contact_id)
        .bind(Json(without_reserved_keys(fields)))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(Contact::from(row).into_record())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let contact_id = parse_id(id)?;
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(contact_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
