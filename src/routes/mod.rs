pub mod health_check;
pub mod index;
pub mod join_waitlist;
