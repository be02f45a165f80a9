use crate::domain::NewWaitlistEntry;
use crate::models::WaitlistEntry;
use crate::store::{InsertOutcome, WaitlistStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Mutex;

/// Store keeping entries in process memory, keyed by email.
#[derive(Default)]
pub struct InMemoryWaitlistStore {
    entries: Mutex<HashMap<String, WaitlistEntry>>,
}

impl InMemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, WaitlistEntry>>, anyhow::Error> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("The in-memory waitlist store lock is poisoned."))
    }
}

#[async_trait]
impl WaitlistStore for InMemoryWaitlistStore {
    #[tracing::instrument(
        name = "Saving new waitlist entry in memory",
        skip_all,
        fields(email=%new_entry.email)
    )]
    async fn insert(&self, new_entry: &NewWaitlistEntry) -> Result<InsertOutcome, anyhow::Error> {
        let mut entries = self.lock()?;
        match entries.entry(new_entry.email.as_ref().to_string()) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                let entry = slot.insert(WaitlistEntry::from(new_entry));
                Ok(InsertOutcome::Inserted(entry.clone()))
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<WaitlistEntry>, anyhow::Error> {
        Ok(self.lock()?.get(email).cloned())
    }

    async fn count(&self) -> Result<i64, anyhow::Error> {
        Ok(self.lock()?.len() as i64)
    }
}
