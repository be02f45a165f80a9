use crate::domain::{NewWaitlistEntry, NewWaitlistEntryData};
use crate::store::{InsertOutcome, WaitlistStore};
use crate::utils::{ResponseMessage, error_chain_fmt};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, post, web};
use anyhow::Context;

pub const SUCCESS_MESSAGE: &str = "Successfully added to waitlist";
pub const ALREADY_SIGNED_UP_MESSAGE: &str = "You have already signed up with this email";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

#[post("/api/join-waitinglist")]
#[tracing::instrument(
    name = "Adding a new waitlist entry",
    skip_all,
    fields(email=tracing::field::Empty, entry_id=tracing::field::Empty)
)]
pub async fn post(
    params: web::Json<NewWaitlistEntryData>,
    store: web::Data<dyn WaitlistStore>,
) -> Result<HttpResponse, JoinWaitlistError> {
    let new_entry: NewWaitlistEntry = params
        .0
        .try_into()
        .map_err(JoinWaitlistError::ValidationError)?;
    tracing::Span::current().record("email", tracing::field::display(&new_entry.email));

    match store
        .insert(&new_entry)
        .await
        .context("Failed to store the new waitlist entry.")?
    {
        InsertOutcome::Inserted(entry) => {
            tracing::Span::current().record("entry_id", tracing::field::display(&entry.id));
            Ok(HttpResponse::Ok()
                .content_type(ContentType::json())
                .json(ResponseMessage::from(SUCCESS_MESSAGE)))
        }
        InsertOutcome::AlreadyExists => Err(JoinWaitlistError::AlreadySignedUp),
    }
}

#[derive(thiserror::Error)]
pub enum JoinWaitlistError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{}", ALREADY_SIGNED_UP_MESSAGE)]
    AlreadySignedUp,
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for JoinWaitlistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for JoinWaitlistError {
    fn status_code(&self) -> StatusCode {
        match self {
            JoinWaitlistError::ValidationError(_) => StatusCode::BAD_REQUEST,
            JoinWaitlistError::AlreadySignedUp => StatusCode::CONFLICT,
            JoinWaitlistError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(ResponseMessage::from(self.to_string()))
    }
}
