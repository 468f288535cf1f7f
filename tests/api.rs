use serde_json::{json, Value};
use std::net::TcpListener;

use epilogue_api::app::Application;
use epilogue_api::config::Config;

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        use_mock_data: true,
        openai_api_key: String::new(),
        openai_base_url: "https://api.openai.com".to_string(),
        generation_model: "gpt-4o-mini".to_string(),
        generation_timeout_secs: 30,
        connect_timeout_secs: 15,
    }
}

/// Spawns the app on a random port with the mock backend and returns its
/// base address.
async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let application = Application::new(&test_config());

    tokio::spawn(async move {
        application
            .run_with_listener(listener)
            .await
            .expect("Server failed to run");
    });

    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn health_check_works() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/health", address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn featured_books_returns_the_bundled_catalog() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/books/featured", address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();

    let books = body["books"].as_array().unwrap();
    assert_eq!(books.len(), 6);
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 6);

    // Catalog entries carry no per-request reason
    assert!(books[0]["title"].as_str().is_some());
    assert!(books[0].get("reason").is_none());
}

#[tokio::test]
async fn recommendations_happy_path_returns_six_cards() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/recommendations", address))
        .json(&json!({ "book": "Dune" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["source_book"], "Dune");

    let cards = body["recommendations"].as_array().unwrap();
    assert_eq!(cards.len(), 6);

    for card in cards {
        assert!(card["title"].as_str().is_some());
        assert!(card["author"].as_str().is_some());
        assert!(card["year"].as_i64().is_some());
        assert!(!card["tags"].as_array().unwrap().is_empty());
        assert!(card["description"].as_str().is_some());
        assert!(card["reason"].as_str().is_some());
        assert!(card["byline"].as_str().unwrap().contains('·'));
    }
}

#[tokio::test]
async fn recommendations_accept_full_preferences() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/recommendations", address))
        .json(&json!({
            "book": "1984",
            "era": "classic",
            "genre": "fiction",
            "similarity": 5
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn source_title_is_trimmed_in_the_response() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/recommendations", address))
        .json(&json!({ "book": "  Dune  " }))
        .send()
        .await
        .unwrap();

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["source_book"], "Dune");
}

#[tokio::test]
async fn empty_book_title_is_rejected() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for book in ["", "   "] {
        let response = client
            .post(format!("{}/api/recommendations", address))
            .json(&json!({ "book": book }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].as_str().unwrap().contains("empty"));
    }
}

#[tokio::test]
async fn out_of_range_similarity_is_rejected() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    for similarity in [0, 6] {
        let response = client
            .post(format!("{}/api/recommendations", address))
            .json(&json!({ "book": "Dune", "similarity": similarity }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
    }
}

#[tokio::test]
async fn legacy_era_spelling_is_accepted() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/recommendations", address))
        .json(&json!({ "book": "Dune", "era": "new" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn unknown_era_values_are_rejected() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/recommendations", address))
        .json(&json!({ "book": "Dune", "era": "medieval" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}
