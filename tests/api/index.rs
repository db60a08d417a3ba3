use crate::helpers::spawn_app;

#[tokio::test]
async fn index_lists_the_available_endpoints() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON.");
    assert_eq!(body["message"], "Random Address Generator API");
    for endpoint in ["/address", "/addresses", "/countries"] {
        assert!(body["endpoints"][endpoint].is_string(), "{} is missing", endpoint);
    }
}
