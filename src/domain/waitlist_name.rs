use crate::utils::{contains_forbidden_characters, is_empty_or_whitespace, is_too_long};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistName(String);

impl AsRef<str> for WaitlistName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl WaitlistName {
    pub fn parse(s: String) -> Result<WaitlistName, String> {
        let s = s.trim().to_string();

        if is_empty_or_whitespace(&s) {
            Err(String::from("Name cannot be blank."))
        } else if is_too_long(&s, 256) {
            Err(String::from("Name exceeds character limit."))
        } else if contains_forbidden_characters(&s) {
            Err(format!("{} is not a valid name.", s))
        } else {
            Ok(Self(s))
        }
    }
}
