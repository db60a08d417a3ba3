pub mod configuration;
pub mod domain;
pub mod errors;
pub mod generator;
pub mod routes;
pub mod startup;
pub mod telemetry;
