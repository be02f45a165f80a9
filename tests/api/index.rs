use crate::helpers::spawn_app;
use meraxes_waitlist::utils::ResponseMessage;

#[tokio::test]
async fn index_returns_a_welcome_message() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_index().await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let response_body: ResponseMessage = response.json().await.unwrap();
    assert_eq!("Welcome to the Meraxes waitlist!", response_body.message);
}
