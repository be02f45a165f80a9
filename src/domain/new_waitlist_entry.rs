use crate::domain::{WaitlistEmail, WaitlistName};
use crate::utils::is_empty_or_whitespace;
use serde::Deserialize;

/// A signup that passed validation and is ready to be handed to a store.
#[derive(Debug, Clone)]
pub struct NewWaitlistEntry {
    pub email: WaitlistEmail,
    pub name: Option<WaitlistName>,
}

/// Raw body of a signup submission, as sent by the landing page form.
#[derive(Deserialize, Debug)]
pub struct NewWaitlistEntryData {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl TryFrom<NewWaitlistEntryData> for NewWaitlistEntry {
    type Error = String;

    fn try_from(data: NewWaitlistEntryData) -> Result<Self, Self::Error> {
        let email = WaitlistEmail::parse(data.email)?;
        // The form always sends a name, blank when the visitor skipped it.
        let name = match data.name {
            Some(name) if !is_empty_or_whitespace(&name) => Some(WaitlistName::parse(name)?),
            _ => None,
        };

        Ok(Self { email, name })
    }
}
