use crate::{
    configuration::Settings,
    domain::{Address, BatchSize},
    generator::{AddressGenerator, RandomnessSource},
    routes::addresses::AddressesError,
};
use actix_web::{HttpResponse, web};

#[derive(serde::Deserialize, Debug)]
pub struct BatchQuery {
    count: Option<i64>,
}

#[derive(serde::Serialize)]
struct AddressResponse {
    address: Address,
}

#[derive(serde::Serialize)]
struct AddressesResponse {
    addresses: Vec<Address>,
}

#[tracing::instrument(name = "Generating an address", skip(generator, randomness))]
pub async fn get_one(
    generator: web::Data<AddressGenerator>,
    randomness: web::Data<RandomnessSource>,
) -> HttpResponse {
    let mut rng = randomness.handle();
    let address = generator.generate_address(&mut rng);
    tracing::debug!(country_code = address.country_code, "Address generated");

    HttpResponse::Ok().json(AddressResponse { address })
}

#[tracing::instrument(
    name = "Generating a batch of addresses",
    skip(query, generator, randomness, configuration),
    fields(count = tracing::field::Empty)
)]
pub async fn get_many(
    query: web::Query<BatchQuery>,
    generator: web::Data<AddressGenerator>,
    randomness: web::Data<RandomnessSource>,
    configuration: web::Data<Settings>,
) -> Result<HttpResponse, AddressesError> {
    let size = match query.count {
        Some(count) => BatchSize::parse(count, configuration.generator.max_batch_size)
            .map_err(|e| AddressesError::ValidationError(e.to_string()))?,
        None => BatchSize::default(),
    };
    tracing::Span::current().record("count", size.get());

    let mut rng = randomness.handle();
    let addresses = generator.generate_batch(&mut rng, size);

    Ok(HttpResponse::Ok().json(AddressesResponse { addresses }))
}
