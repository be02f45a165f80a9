use crate::utils::ResponseMessage;
use regex::Regex;
use reqwest::Client;
use serde::Serialize;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub const LOADING_MESSAGE: &str = "Adding to waitlist";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const IN_FLIGHT_MESSAGE: &str = "A submission is already in progress.";
pub const FAILURE_MESSAGE: &str = "Failed to reach the waitlist, please try again later.";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email pattern.")
});

/// Loose shape check run before anything is sent: a local part, an `@`
/// and a dotted domain, none of them containing whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// What the signup form shows the visitor.
///
/// A submission starts out `Loading` and resolves exactly once to either
/// `Success` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Loading(String),
    Success(String),
    Error(String),
}

impl Notification {
    pub fn loading() -> Self {
        Self::Loading(LOADING_MESSAGE.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Loading(message)
            | Notification::Success(message)
            | Notification::Error(message) => message,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Notification::Loading(_))
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notification::Loading(message) => write!(f, "… {}", message),
            Notification::Success(message) => write!(f, "✔ {}", message),
            Notification::Error(message) => write!(f, "✘ {}", message),
        }
    }
}

#[derive(Serialize)]
struct JoinWaitlistRequest<'a> {
    email: &'a str,
    name: &'a str,
}

pub struct WaitlistClient {
    http_client: Client,
    base_url: String,
    in_flight: AtomicBool,
}

impl WaitlistClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            in_flight: AtomicBool::new(false),
        })
    }

    /// Submit a signup and resolve the notification shown to the visitor.
    ///
    /// Only one submission per client may be in flight at a time.
    #[tracing::instrument(name = "Joining the waitlist", skip(self, name))]
    pub async fn join(&self, name: &str, email: &str) -> Notification {
        if !is_valid_email(email) {
            return Notification::Error(INVALID_EMAIL_MESSAGE.to_string());
        }
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            return Notification::Error(IN_FLIGHT_MESSAGE.to_string());
        };

        match self.submit(name, email).await {
            Ok(notification) => notification,
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to submit waitlist signup.");
                Notification::Error(FAILURE_MESSAGE.to_string())
            }
        }
    }

    async fn submit(&self, name: &str, email: &str) -> Result<Notification, reqwest::Error> {
        let url = format!("{}/api/join-waitinglist", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&JoinWaitlistRequest { email, name })
            .send()
            .await?;
        let status = response.status();
        let body: ResponseMessage = response.json().await?;

        Ok(if status.is_success() {
            Notification::Success(body.message)
        } else {
            Notification::Error(body.message)
        })
    }
}

// Clears the in-flight flag even when the submission future is dropped early.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
