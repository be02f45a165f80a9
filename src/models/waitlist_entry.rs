use crate::domain::NewWaitlistEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&NewWaitlistEntry> for WaitlistEntry {
    fn from(new_entry: &NewWaitlistEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: new_entry.email.as_ref().to_string(),
            name: new_entry.name.as_ref().map(|n| n.as_ref().to_string()),
            created_at: Utc::now(),
        }
    }
}
