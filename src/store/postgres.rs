use crate::domain::NewWaitlistEntry;
use crate::models::WaitlistEntry;
use crate::store::{InsertOutcome, WaitlistStore};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresWaitlistStore {
    pool: PgPool,
}

impl PostgresWaitlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[tracing::instrument(name = "Running database migrations", skip(self))]
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to migrate the database.")
    }
}

#[async_trait]
impl WaitlistStore for PostgresWaitlistStore {
    #[tracing::instrument(
        name = "Saving new waitlist entry in the database",
        skip_all,
        fields(email=%new_entry.email)
    )]
    async fn insert(&self, new_entry: &NewWaitlistEntry) -> Result<InsertOutcome, anyhow::Error> {
        let entry = WaitlistEntry::from(new_entry);
        // The unique constraint on `email` decides who wins a concurrent signup.
        let inserted = sqlx::query_as::<_, WaitlistEntry>(
            r#"
              INSERT INTO waitlist_entries (id, email, name, created_at)
              VALUES ($1, $2, $3, $4)
              ON CONFLICT (email) DO NOTHING
              RETURNING id, email, name, created_at
            "#,
        )
        .bind(entry.id)
        .bind(&entry.email)
        .bind(&entry.name)
        .bind(entry.created_at)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to insert waitlist entry.")?;

        Ok(match inserted {
            Some(entry) => InsertOutcome::Inserted(entry),
            None => InsertOutcome::AlreadyExists,
        })
    }

    #[tracing::instrument(name = "Looking up waitlist entry by email", skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<WaitlistEntry>, anyhow::Error> {
        sqlx::query_as::<_, WaitlistEntry>(
            r#"
              SELECT id, email, name, created_at
              FROM waitlist_entries
              WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to query waitlist entry.")
    }

    #[tracing::instrument(name = "Counting waitlist entries", skip(self))]
    async fn count(&self) -> Result<i64, anyhow::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waitlist_entries")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count waitlist entries.")
    }
}
