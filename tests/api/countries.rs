use crate::helpers::spawn_app;
use std::collections::HashSet;

#[tokio::test]
async fn countries_returns_the_twenty_two_configured_entries() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_countries().await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON.");
    let countries = body["countries"].as_array().expect("countries is not a list");
    assert_eq!(countries.len(), 22);

    let mut codes = HashSet::new();
    for country in countries {
        let name = country["name"].as_str().unwrap();
        let code = country["code"].as_str().unwrap();
        assert!(!name.is_empty());
        assert_eq!(code.len(), 2);
        assert!(codes.insert(code.to_string()), "duplicate code {}", code);
    }
}

#[tokio::test]
async fn countries_are_listed_in_table_order() {
    let app = spawn_app().await;

    let body: serde_json::Value = app
        .get_countries()
        .await
        .json()
        .await
        .expect("Failed to parse JSON.");

    assert_eq!(body["countries"][0]["name"], "United States");
    assert_eq!(body["countries"][0]["code"], "US");
    assert_eq!(body["countries"][21]["code"], "TR");
}
