use crate::helpers::{TestApp, assert_is_valid_address, spawn_app, spawn_app_with};

#[tokio::test]
async fn address_returns_a_single_valid_address() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_address().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON.");
    assert_is_valid_address(&body["address"]);
}

#[tokio::test]
async fn addresses_returns_the_requested_count() {
    let app = spawn_app().await;

    let response = app.get_addresses("?count=3").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON.");
    let addresses = body["addresses"].as_array().expect("addresses is not a list");
    assert_eq!(addresses.len(), 3);
    for address in addresses {
        assert_is_valid_address(address);
    }
}

#[tokio::test]
async fn addresses_defaults_to_a_single_address() {
    let app = spawn_app().await;

    let response = app.get_addresses("").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON.");
    assert_eq!(body["addresses"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn addresses_accepts_the_configured_maximum() {
    let app = spawn_app().await;
    let max = app.configuration.generator.max_batch_size;

    let response = app.get_addresses(&format!("?count={}", max)).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON.");
    assert_eq!(body["addresses"].as_array().map(Vec::len), Some(max));
}

#[tokio::test]
async fn addresses_returns_400_for_invalid_counts() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("?count=0", "zero"),
        ("?count=101", "above the maximum"),
        ("?count=-5", "negative"),
        ("?count=many", "not a number"),
    ];

    for (query, description) in test_cases {
        // Act
        let response = app.get_addresses(query).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the count was {}.",
            description
        );
    }
}

#[tokio::test]
async fn seeded_application_replays_the_same_addresses() {
    let first = spawn_app_with(|c| c.generator.seed = Some(2024)).await;
    let second = spawn_app_with(|c| c.generator.seed = Some(2024)).await;

    let a: serde_json::Value = first.get_addresses("?count=5").await.json().await.unwrap();
    let b: serde_json::Value = second.get_addresses("?count=5").await.json().await.unwrap();

    assert_eq!(a, b);
}

#[tokio::test]
async fn concurrent_requests_all_succeed() {
    let app = spawn_app().await;

    let responses = send_concurrent_batches(&app, 20).await;

    for body in responses {
        let addresses = body["addresses"].as_array().expect("addresses is not a list");
        assert_eq!(addresses.len(), 10);
        for address in addresses {
            assert_is_valid_address(address);
        }
    }
}

async fn send_concurrent_batches(app: &TestApp, requests: usize) -> Vec<serde_json::Value> {
    let mut handles = Vec::with_capacity(requests);
    for _ in 0..requests {
        let client = app.api_client.clone();
        let url = format!("{}/addresses?count=10", app.address);
        handles.push(tokio::spawn(async move {
            client
                .get(url)
                .send()
                .await
                .expect("Failed to execute request.")
                .json::<serde_json::Value>()
                .await
                .expect("Failed to parse JSON.")
        }));
    }

    let mut bodies = Vec::with_capacity(requests);
    for handle in handles {
        bodies.push(handle.await.expect("Request task panicked"));
    }
    bodies
}
