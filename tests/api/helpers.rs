use address_generator::{
    configuration::{Settings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`, so the two
    // branches cannot share a variable.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub configuration: Settings,
    pub api_client: reqwest::Client,
}
impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_address(&self) -> reqwest::Response {
        self.get("/address").await
    }

    pub async fn get_addresses(&self, query: &str) -> reqwest::Response {
        self.get(&format!("/addresses{}", query)).await
    }

    pub async fn get_countries(&self) -> reqwest::Response {
        self.get("/countries").await
    }
}

// Launch the application in the background
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Launch the application after letting the caller tweak its configuration.
pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.host = "127.0.0.1".to_string();
        // Random available port
        c.application.port = 0;
        customise(&mut c);

        c
    };

    let application = Application::build(configuration.clone())
        .await
        .expect("Failed to build application.");
    let application_port = application.port();

    // Launch the server as a background task
    let _ = tokio::spawn(application.run_until_stopped());

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        configuration,
        api_client,
    }
}

/// Check one serialized address against the invariants every record must hold.
pub fn assert_is_valid_address(address: &serde_json::Value) {
    for field in [
        "name",
        "surname",
        "street",
        "city",
        "state",
        "country",
        "country_code",
        "postal_code",
        "phone",
    ] {
        let value = address[field].as_str().unwrap_or_else(|| {
            panic!("field {} is missing or not a string in {}", field, address)
        });
        assert!(!value.is_empty(), "field {} is empty", field);
    }

    let house_no = address["house_no"].as_u64().expect("house_no is not a number");
    assert!((1..=9999).contains(&house_no));

    let latitude = address["latitude"].as_f64().expect("latitude is not a number");
    let longitude = address["longitude"].as_f64().expect("longitude is not a number");
    assert!((-90.0..=90.0).contains(&latitude));
    assert!((-180.0..=180.0).contains(&longitude));
}
