use crate::helpers::{BrokenWaitlistStore, spawn_app, spawn_app_with_store};
use claims::{assert_none, assert_ok, assert_some};
use meraxes_waitlist::utils::ResponseMessage;
use std::sync::Arc;

#[tokio::test]
async fn join_waitlist_returns_a_200_for_a_new_email() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .post_join_waitlist(&serde_json::json!({"email": "a@b.com"}))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let response_body: ResponseMessage = response.json().await.unwrap();
    assert_eq!("Successfully added to waitlist", response_body.message);
}

#[tokio::test]
async fn join_waitlist_persists_the_new_entry() {
    // Arrange
    let app = spawn_app().await;

    // Act
    app.post_join_waitlist(&serde_json::json!({"name": "le guin", "email": "ursula_le_guin@gmail.com"}))
        .await;

    // Assert
    let saved = app
        .store
        .find_by_email("ursula_le_guin@gmail.com")
        .await
        .expect("Failed to fetch saved waitlist entry.");
    let saved = assert_some!(saved);

    assert_eq!(saved.email, "ursula_le_guin@gmail.com");
    assert_eq!(saved.name.as_deref(), Some("le guin"));
    assert_eq!(app.saved_entry_count().await, 1);
}

#[tokio::test]
async fn join_waitlist_does_not_require_a_name() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app
        .post_join_waitlist(&serde_json::json!({"name": "", "email": "a@b.com"}))
        .await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let saved = assert_some!(app.store.find_by_email("a@b.com").await.unwrap());
    assert_none!(saved.name);
}

#[tokio::test]
async fn join_waitlist_returns_a_409_for_an_email_already_signed_up() {
    // Arrange
    let app = spawn_app().await;
    let body = serde_json::json!({"email": "a@b.com"});
    app.post_join_waitlist(&body).await.error_for_status().unwrap();

    // Act
    let response = app.post_join_waitlist(&body).await;

    // Assert
    assert_eq!(409, response.status().as_u16());

    let response_body: ResponseMessage = response.json().await.unwrap();
    assert_eq!(
        "You have already signed up with this email",
        response_body.message
    );
    assert_eq!(app.saved_entry_count().await, 1);
}

#[tokio::test]
async fn join_waitlist_returns_a_400_when_data_is_missing_or_malformed() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (r#"{"name": "le guin"}"#, "missing the email"),
        (r#"{}"#, "an empty object"),
        (r#"{"email": 42}"#, "a non-string email"),
        (r#"{"email": "a@b.com""#, "truncated json"),
        ("", "an empty body"),
    ];

    for (invalid_body, description) in test_cases {
        // Act
        let response = app.post_join_waitlist_raw(invalid_body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );

        let response_body: Result<ResponseMessage, reqwest::Error> = response.json().await;
        assert_ok!(response_body);
    }
    assert_eq!(app.saved_entry_count().await, 0);
}

#[tokio::test]
async fn join_waitlist_returns_a_400_with_json_message_when_fields_are_present_but_invalid() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        (serde_json::json!({"email": ""}), "empty email"),
        (serde_json::json!({"email": "   "}), "whitespace email"),
        (
            serde_json::json!({"email": "definitely-not-an-email"}),
            "invalid email",
        ),
        (
            serde_json::json!({"name": "<script>", "email": "a@b.com"}),
            "invalid name",
        ),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.post_join_waitlist(&body).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );

        let response_body: Result<ResponseMessage, reqwest::Error> = response.json().await;
        assert_ok!(response_body);
    }
    assert_eq!(app.saved_entry_count().await, 0);
}

#[tokio::test]
async fn join_waitlist_fails_if_there_is_a_fatal_database_error() {
    // Arrange
    let app = spawn_app_with_store(Arc::new(BrokenWaitlistStore)).await;

    // Act
    let response = app
        .post_join_waitlist(&serde_json::json!({"email": "a@b.com"}))
        .await;

    // Assert
    assert_eq!(response.status().as_u16(), 500);

    let response_body: ResponseMessage = response.json().await.unwrap();
    assert_eq!("Internal Server Error", response_body.message);
}

#[tokio::test]
async fn concurrent_signups_with_the_same_email_store_a_single_entry() {
    // Arrange
    let app = spawn_app().await;
    let url = format!("{}/api/join-waitinglist", &app.address);

    // Act
    let handles: Vec<_> = (0..10)
        .map(|_| {
            let client = app.api_client.clone();
            let url = url.clone();
            tokio::spawn(async move {
                client
                    .post(&url)
                    .json(&serde_json::json!({"email": "a@b.com"}))
                    .send()
                    .await
                    .expect("Failed to execute request.")
                    .status()
                    .as_u16()
            })
        })
        .collect();
    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    // Assert
    assert_eq!(statuses.iter().filter(|s| **s == 200).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == 409).count(), 9);
    assert_eq!(app.saved_entry_count().await, 1);
}
