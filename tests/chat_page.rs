use axum_test::TestServer;
use nurse_assistant::server::config::{configure_app, AppConfig};

#[tokio::test]
async fn chat_page_serves_ui_surface() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        log_path: dir.path().join("logs").join("queries.log"),
        ..AppConfig::default()
    };
    let server = TestServer::new(configure_app(&config)).unwrap();

    // Act
    let response = server.get("/").await;

    // Assert
    assert_eq!(response.status_code(), 200);

    let page = response.text();
    assert!(page.contains("<title>Nurse Assistant</title>"));
    assert!(page.contains("🩺 Triage Assistant (With Memory)"));
    assert!(page.contains("🚀 Send"));
    assert!(page.contains("footer { visibility: hidden; }"));

    // Quick-fill buttons carry their fixed literals and only set the
    // pending input text.
    assert!(page.contains(r#"input.value = "Patient has fever and cough";"#));
    assert!(page.contains(r#"input.value = "Patient has chest pain";"#));
}
