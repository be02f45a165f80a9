mod in_memory;
mod postgres;

pub use in_memory::InMemoryWaitlistStore;
pub use postgres::PostgresWaitlistStore;

use crate::domain::NewWaitlistEntry;
use crate::models::WaitlistEntry;
use async_trait::async_trait;

/// Result of asking a store to record a signup.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertOutcome {
    Inserted(WaitlistEntry),
    AlreadyExists,
}

/// Persistent home of waitlist entries.
///
/// Implementations must make `insert` atomic with respect to the email:
/// concurrent inserts of the same address leave exactly one entry and
/// every other caller observes `InsertOutcome::AlreadyExists`.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn insert(&self, new_entry: &NewWaitlistEntry) -> Result<InsertOutcome, anyhow::Error>;

    async fn find_by_email(&self, email: &str) -> Result<Option<WaitlistEntry>, anyhow::Error>;

    async fn count(&self) -> Result<i64, anyhow::Error>;
}
