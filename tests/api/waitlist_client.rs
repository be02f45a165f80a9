use crate::helpers::spawn_app;
use meraxes_waitlist::clients::{Notification, WaitlistClient};
use std::time::Duration;

#[tokio::test]
async fn the_form_client_can_join_the_waitlist_once() {
    // Arrange
    let app = spawn_app().await;
    let client = WaitlistClient::new(app.address.clone(), Duration::from_secs(5)).unwrap();

    // Act
    let first = client.join("Ursula", "ursula_le_guin@gmail.com").await;
    let second = client.join("Ursula", "ursula_le_guin@gmail.com").await;

    // Assert
    assert_eq!(
        first,
        Notification::Success("Successfully added to waitlist".to_string())
    );
    assert_eq!(
        second,
        Notification::Error("You have already signed up with this email".to_string())
    );
    assert_eq!(app.saved_entry_count().await, 1);
}
