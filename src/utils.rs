use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// JSON body shared by every response of the waitlist API.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ResponseMessage {
    pub message: String,
}

impl From<&str> for ResponseMessage {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl From<String> for ResponseMessage {
    fn from(message: String) -> Self {
        Self { message }
    }
}

// Undeserializable bodies become a 400 carrying a JSON message.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    let response = HttpResponse::BadRequest()
        .content_type(ContentType::json())
        .json(ResponseMessage::from(message));
    InternalError::from_response(err, response).into()
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;

    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }

    Ok(())
}

pub fn is_empty_or_whitespace(s: &str) -> bool {
    s.trim().is_empty()
}

// A grapheme is defined by the Unicode standard as a "user-perceived"
// character: `å` is a single grapheme, but it is composed of two characters.
pub fn is_too_long(s: &str, max_graphemes: usize) -> bool {
    s.graphemes(true).count() > max_graphemes
}

pub fn contains_forbidden_characters(s: &str) -> bool {
    let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
    s.chars().any(|g| forbidden_characters.contains(&g))
}
