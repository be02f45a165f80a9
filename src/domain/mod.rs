mod new_waitlist_entry;
mod waitlist_email;
mod waitlist_name;

pub use new_waitlist_entry::{NewWaitlistEntry, NewWaitlistEntryData};
pub use waitlist_email::WaitlistEmail;
pub use waitlist_name::WaitlistName;
