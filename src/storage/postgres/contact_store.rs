//! PostgreSQL implementation of ContactStore.

use async_trait::async_trait;
use sea_query::{Expr, Order, PostgresQueryBuilder, Query};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::contacts::schema::Contacts;
use crate::contacts::store::{Contact, ContactDraft, ContactError, ContactStore, Result};

/// PostgreSQL-backed contact store.
pub struct PostgresContactStore {
    pool: PgPool,
}

impl PostgresContactStore {
    /// Create a new PostgreSQL contact store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn contact_from_row(row: &PgRow) -> Contact {
    Contact {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        phone_number: row.get("phone_number"),
        address: row.get("address"),
    }
}

#[async_trait]
impl ContactStore for PostgresContactStore {
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS contacts (
                id BIGSERIAL PRIMARY KEY,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                phone_number TEXT NOT NULL,
                address TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        // Lookup key for search/edit/delete; non-unique on purpose.
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_contacts_phone_number ON contacts(phone_number)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Contact>> {
        let query = Query::select()
            .columns([
                Contacts::Id,
                Contacts::FirstName,
                Contacts::LastName,
                Contacts::PhoneNumber,
                Contacts::Address,
            ])
            .from(Contacts::Table)
            .order_by(Contacts::Id, Order::Asc)
            .limit(limit)
            .offset(offset)
            .to_string(PostgresQueryBuilder);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(contact_from_row).collect())
    }

    async fn insert(&self, draft: &ContactDraft) -> Result<i64> {
        draft.validate()?;

        let query = Query::insert()
            .into_table(Contacts::Table)
            .columns([
                Contacts::FirstName,
                Contacts::LastName,
                Contacts::PhoneNumber,
                Contacts::Address,
            ])
            .values_panic([
                draft.first_name.as_str().into(),
                draft.last_name.as_str().into(),
                draft.phone_number.as_str().into(),
                draft.address.as_str().into(),
            ])
            .returning(Query::returning().column(Contacts::Id))
            .to_string(PostgresQueryBuilder);

        let row = sqlx::query(&query).fetch_one(&self.pool).await?;
        Ok(row.get("id"))
    }

    async fn search(&self, phone_number: &str) -> Result<Vec<Contact>> {
        let query = Query::select()
            .columns([
                Contacts::Id,
                Contacts::FirstName,
                Contacts::LastName,
                Contacts::PhoneNumber,
                Contacts::Address,
            ])
            .from(Contacts::Table)
            .and_where(Expr::col(Contacts::PhoneNumber).eq(phone_number))
            .order_by(Contacts::Id, Order::Asc)
            .to_string(PostgresQueryBuilder);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        if rows.is_empty() {
            return Err(ContactError::NoResults);
        }
        Ok(rows.iter().map(contact_from_row).collect())
    }

    async fn update(&self, phone_number: &str, draft: &ContactDraft) -> Result<u64> {
        draft.validate()?;

        let query = Query::update()
            .table(Contacts::Table)
            .values([
                (Contacts::FirstName, draft.first_name.as_str().into()),
                (Contacts::LastName, draft.last_name.as_str().into()),
                (Contacts::PhoneNumber, draft.phone_number.as_str().into()),
                (Contacts::Address, draft.address.as_str().into()),
            ])
            .and_where(Expr::col(Contacts::PhoneNumber).eq(phone_number))
            .to_string(PostgresQueryBuilder);

        let result = sqlx::query(&query).execute(&self.pool).await?;
        match result.rows_affected() {
            0 => Err(ContactError::NotFound),
            n => Ok(n),
        }
    }

    async fn delete(&self, phone_number: &str) -> Result<u64> {
        let query = Query::delete()
            .from_table(Contacts::Table)
            .and_where(Expr::col(Contacts::PhoneNumber).eq(phone_number))
            .to_string(PostgresQueryBuilder);

        let result = sqlx::query(&query).execute(&self.pool).await?;
        match result.rows_affected() {
            0 => Err(ContactError::NotFound),
            n => Ok(n),
        }
    }
}
