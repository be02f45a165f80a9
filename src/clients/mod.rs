mod waitlist_client;

pub use waitlist_client::{Notification, WaitlistClient, is_valid_email};
