use crate::configuration::Settings;
use crate::generator::{AddressGenerator, RandomnessSource, ReferenceData};
use crate::routes::{addresses, health_check, index, list_countries};
use actix_web::{App, HttpServer, dev::Server, web, web::Data};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}
impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let reference = ReferenceData::builtin().context("Built-in reference data is invalid")?;
        let generator = AddressGenerator::new(reference);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();

        let server = run(listener, configuration, generator).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn run(
    listener: TcpListener,
    configuration: Settings,
    generator: AddressGenerator,
) -> Result<Server, anyhow::Error> {
    let randomness = RandomnessSource::from_seed(configuration.generator.seed);
    if randomness.is_seeded() {
        tracing::warn!("Generator seed is set, responses are reproducible");
    }

    // Wrap the shared state in smart pointers
    let generator = Data::new(generator);
    let randomness = Data::new(randomness);
    let configuration = Data::new(configuration);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(index))
            .route("/health_check", web::get().to(health_check))
            .route("/address", web::get().to(addresses::get_one))
            .route("/addresses", web::get().to(addresses::get_many))
            .route("/countries", web::get().to(list_countries))
            // Get pointer copy and attach it to the application state
            .app_data(generator.clone())
            .app_data(randomness.clone())
            .app_data(configuration.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
